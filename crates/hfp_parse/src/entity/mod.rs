//! The four grammar roles and the contracts between them.
//!
//! | Role | Trait | Touches cursor | Can fail |
//! |------|-------|----------------|----------|
//! | Producer | [`Producer`] | yes | yes |
//! | Transformer | [`Transformer`] | no | no |
//! | Consumer | [`Consumer`] | no | no |
//! | Clause | [`Clause`] | yes | yes |
//!
//! Roles are distinguished by trait, not by a common base type. The
//! composition rules are enforced by trait bounds, so misuse is a compile
//! error:
//!
//! - A producer followed by a transformer is a producer
//!   ([`Producer::transform`]).
//! - A producer followed by a consumer is a clause ([`Producer::consume`]).
//! - Combinators accept only a [`ClauseList`], which is implemented for
//!   tuples whose every element is a [`Clause`] over the same target.
//! - A clause list becomes a producer again only through
//!   [`produce`](crate::produce).
//!
//! # Failure contract
//!
//! A producer that returns `None`, and a clause that returns `false`, must
//! leave the cursor where it was. A failing clause must also leave its
//! target untouched. Every type in this crate upholds both; hand-written
//! implementations must too.

use hfp_core::Cursor;
use tracing::trace;

use crate::consumer::{
    as_result, assign_to_field, custom, skip, AsResult, ConsumeClause, Custom, FieldSetter, Skip,
    ToContainer,
};
use crate::container::DefaultContainerAdaptor;
use crate::transformer::TransformedProducer;

/// Consumes input and yields a value.
pub trait Producer {
    /// Value produced on success.
    type Output;

    /// Try to produce a value at the current position.
    ///
    /// On `None` the cursor is where it was before the call.
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<Self::Output>;

    /// Post-process every produced value with `transformer`.
    fn transform<T>(self, transformer: T) -> TransformedProducer<Self, T>
    where
        Self: Sized,
        T: Transformer<Input = Self::Output>,
    {
        TransformedProducer::new(self, transformer)
    }

    /// Bind this producer to a consumer, forming a clause.
    fn consume<C>(self, consumer: C) -> ConsumeClause<Self, C>
    where
        Self: Sized,
    {
        ConsumeClause::new(self, consumer)
    }

    /// Clause that matches this producer and discards the value.
    fn skip(self) -> ConsumeClause<Self, Skip>
    where
        Self: Sized,
    {
        self.consume(skip())
    }

    /// Clause that replaces the whole target with the produced value.
    fn as_result(self) -> ConsumeClause<Self, AsResult>
    where
        Self: Sized,
    {
        self.consume(as_result())
    }

    /// Clause that stores the produced value into one field of the target.
    ///
    /// ```
    /// use hfp_parse::prelude::*;
    ///
    /// #[derive(Clone, Default)]
    /// struct Pair {
    ///     name: String,
    /// }
    ///
    /// let clause = token().to_field(|p: &mut Pair| &mut p.name);
    /// # let _ = clause;
    /// ```
    fn to_field<T, F, S>(self, selector: S) -> ConsumeClause<Self, FieldSetter<S, F>>
    where
        Self: Sized,
        S: Fn(&mut T) -> &mut F,
        Self::Output: Into<F>,
    {
        self.consume(assign_to_field(selector))
    }

    /// Clause that hands the produced value to `callback`.
    fn custom<T, F>(self, callback: F) -> ConsumeClause<Self, Custom<F>>
    where
        Self: Sized,
        F: Fn(&mut T, Self::Output),
    {
        self.consume(custom(callback))
    }

    /// Clause that stores the produced value into the target container.
    fn to_container(self) -> ConsumeClause<Self, ToContainer<DefaultContainerAdaptor>>
    where
        Self: Sized,
    {
        self.consume(ToContainer::new())
    }
}

impl<P: Producer + ?Sized> Producer for &P {
    type Output = P::Output;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<Self::Output> {
        (**self).try_parse(from)
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Output = P::Output;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<Self::Output> {
        (**self).try_parse(from)
    }
}

/// Pure value-to-value mapping. Never touches input, never fails.
pub trait Transformer {
    /// Accepted value.
    type Input;
    /// Returned value.
    type Output;

    /// Map one value.
    fn transform(&self, input: Self::Input) -> Self::Output;
}

/// Disposes of a produced value into a target.
pub trait Consumer<Target, Value> {
    /// Store, route or drop `value`. Never fails.
    fn consume(&self, target: &mut Target, value: Value);
}

/// The composable unit: parses input and updates a target.
pub trait Clause<Target> {
    /// Try to match at the current position, updating `target` on success.
    ///
    /// On `false` both the cursor and `target` are as they were.
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool;
}

impl<Target, C: Clause<Target> + ?Sized> Clause<Target> for &C {
    #[inline]
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool {
        (**self).try_process(from, target)
    }
}

/// An ordered, fixed-size list of clauses over one target type.
///
/// Implemented for tuples of 1 to 12 clauses. A single clause is written
/// as a one-element tuple: `(clause,)`.
pub trait ClauseList<Target> {
    /// Number of clauses in the list.
    const LEN: usize;

    /// Run every clause in order against `target`, stopping at the first
    /// failure. Does not roll anything back by itself.
    fn process_all(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool;

    /// Try each clause in order, each against a fresh copy of `target`
    /// with the cursor reset between attempts. Commits the first success.
    fn process_first(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool
    where
        Target: Clone;
}

/// One alternative: run `clause` against a copy, commit only on success.
fn attempt<Target, C>(clause: &C, from: &mut Cursor<'_>, target: &mut Target) -> bool
where
    Target: Clone,
    C: Clause<Target>,
{
    let mut tx = from.begin();
    let mut candidate = target.clone();
    if clause.try_process(&mut tx, &mut candidate) {
        *target = candidate;
        tx.commit();
        true
    } else {
        false
    }
}

macro_rules! impl_clause_list {
    ($len:literal => $($name:ident . $idx:tt),+) => {
        impl<Target, $($name),+> ClauseList<Target> for ($($name,)+)
        where
            $($name: Clause<Target>),+
        {
            const LEN: usize = $len;

            #[inline]
            fn process_all(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool {
                $(self.$idx.try_process(from, target))&&+
            }

            fn process_first(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool
            where
                Target: Clone,
            {
                $(
                    if attempt(&self.$idx, from, target) {
                        trace!(branch = $idx, "alternative matched");
                        return true;
                    }
                )+
                false
            }
        }
    };
}

impl_clause_list!(1 => A.0);
impl_clause_list!(2 => A.0, B.1);
impl_clause_list!(3 => A.0, B.1, C.2);
impl_clause_list!(4 => A.0, B.1, C.2, D.3);
impl_clause_list!(5 => A.0, B.1, C.2, D.3, E.4);
impl_clause_list!(6 => A.0, B.1, C.2, D.3, E.4, F.5);
impl_clause_list!(7 => A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_clause_list!(8 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_clause_list!(9 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_clause_list!(10 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_clause_list!(11 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_clause_list!(12 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

/// Adds `then`, chaining two clauses into a [`Sequence`](crate::combinator::Sequence).
macro_rules! impl_then {
    ($ty:ident < $($param:ident),* >) => {
        impl<$($param),*> $ty<$($param),*> {
            /// Chain `next` after this clause; both must succeed, in order.
            pub fn then<B>(self, next: B) -> $crate::combinator::Sequence<(Self, B)> {
                $crate::combinator::sequence((self, next))
            }
        }
    };
}

pub(crate) use impl_then;
