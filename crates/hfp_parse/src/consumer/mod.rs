//! Consumers and the producer-consumer clause.
//!
//! A consumer decides where a produced value goes. It never fails and never
//! touches the cursor; binding one to a producer with
//! [`Producer::consume`] gives a [`ConsumeClause`].

use std::fmt;
use std::marker::PhantomData;

use hfp_core::Cursor;

use crate::container::{ContainerAdaptor, DefaultContainerAdaptor};
use crate::entity::{impl_then, Clause, Consumer, Producer};

/// Discards the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Skip;

impl<T, V> Consumer<T, V> for Skip {
    #[inline]
    fn consume(&self, _target: &mut T, _value: V) {}
}

/// Replaces the whole target with the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsResult;

impl<T, V: Into<T>> Consumer<T, V> for AsResult {
    #[inline]
    fn consume(&self, target: &mut T, value: V) {
        *target = value.into();
    }
}

/// Writes the value into the field picked by a selector.
pub struct FieldSetter<S, F> {
    selector: S,
    _field: PhantomData<fn() -> F>,
}

impl<T, F, V, S> Consumer<T, V> for FieldSetter<S, F>
where
    S: Fn(&mut T) -> &mut F,
    V: Into<F>,
{
    #[inline]
    fn consume(&self, target: &mut T, value: V) {
        *(self.selector)(target) = value.into();
    }
}

impl<S: Clone, F> Clone for FieldSetter<S, F> {
    fn clone(&self) -> Self {
        FieldSetter {
            selector: self.selector.clone(),
            _field: PhantomData,
        }
    }
}

impl<S, F> fmt::Debug for FieldSetter<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldSetter")
    }
}

/// Hands the value to a user callback.
#[derive(Clone, Copy)]
pub struct Custom<F>(F);

impl<T, V, F> Consumer<T, V> for Custom<F>
where
    F: Fn(&mut T, V),
{
    #[inline]
    fn consume(&self, target: &mut T, value: V) {
        (self.0)(target, value);
    }
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Custom")
    }
}

/// Stores the value into the target container through adaptor `A`.
pub struct ToContainer<A = DefaultContainerAdaptor>(PhantomData<fn() -> A>);

impl<A> ToContainer<A> {
    pub(crate) fn new() -> Self {
        ToContainer(PhantomData)
    }
}

impl<A> Clone for ToContainer<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for ToContainer<A> {}

impl<A> fmt::Debug for ToContainer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToContainer")
    }
}

impl<C, V, A> Consumer<C, V> for ToContainer<A>
where
    A: ContainerAdaptor<C, V>,
{
    #[inline]
    fn consume(&self, target: &mut C, value: V) {
        A::store(target, value);
    }
}

/// Discard the produced value.
pub fn skip() -> Skip {
    Skip
}

/// Replace the target with the produced value, converting via `Into`.
pub fn as_result() -> AsResult {
    AsResult
}

/// Store the produced value into the field `selector` picks.
///
/// The selector's parameter type names the target, so it usually needs an
/// annotation: `assign_to_field(|m: &mut MediaType| &mut m.subtype)`.
pub fn assign_to_field<T, F, S>(selector: S) -> FieldSetter<S, F>
where
    S: Fn(&mut T) -> &mut F,
{
    FieldSetter {
        selector,
        _field: PhantomData,
    }
}

/// Pass the produced value to `callback` along with the target.
pub fn custom<T, V, F>(callback: F) -> Custom<F>
where
    F: Fn(&mut T, V),
{
    Custom(callback)
}

/// Store the produced value into the target container.
pub fn to_container() -> ToContainer {
    ToContainer::new()
}

/// Like [`to_container`], through a custom [`ContainerAdaptor`].
pub fn to_container_with<A>() -> ToContainer<A> {
    ToContainer::new()
}

/// A producer bound to a consumer.
///
/// Fails exactly when the producer fails; the consumer only runs on success.
#[derive(Clone, Copy, Debug)]
pub struct ConsumeClause<P, C> {
    producer: P,
    consumer: C,
}

impl<P, C> ConsumeClause<P, C> {
    pub(crate) fn new(producer: P, consumer: C) -> Self {
        ConsumeClause { producer, consumer }
    }
}

impl_then!(ConsumeClause<P, C>);

impl<T, P, C> Clause<T> for ConsumeClause<P, C>
where
    P: Producer,
    C: Consumer<T, P::Output>,
{
    #[inline]
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut T) -> bool {
        match self.producer.try_parse(from) {
            Some(value) => {
                self.consumer.consume(target, value);
                true
            }
            None => false,
        }
    }
}
