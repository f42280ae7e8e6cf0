//! Value transformers and the producer they build.

use std::fmt;
use std::marker::PhantomData;

use hfp_core::{case_fold, Cursor};

use crate::entity::{Producer, Transformer};

/// ASCII lower-casing of a produced string.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToLower;

impl Transformer for ToLower {
    type Input = String;
    type Output = String;

    #[inline]
    fn transform(&self, input: String) -> String {
        case_fold::fold(input)
    }
}

/// Arbitrary pure conversion.
pub struct Convert<F, I, O> {
    f: F,
    _sig: PhantomData<fn(I) -> O>,
}

impl<F, I, O> Transformer for Convert<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    #[inline]
    fn transform(&self, input: I) -> O {
        (self.f)(input)
    }
}

impl<F: Clone, I, O> Clone for Convert<F, I, O> {
    fn clone(&self) -> Self {
        Convert {
            f: self.f.clone(),
            _sig: PhantomData,
        }
    }
}

impl<F, I, O> fmt::Debug for Convert<F, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Convert")
    }
}

/// Lower-case every ASCII letter of the produced string.
pub fn to_lower() -> ToLower {
    ToLower
}

/// Apply `f` to every produced value.
pub fn convert<I, O, F>(f: F) -> Convert<F, I, O>
where
    F: Fn(I) -> O,
{
    Convert {
        f,
        _sig: PhantomData,
    }
}

/// A producer followed by a transformer.
///
/// Created by [`Producer::transform`]. Fails exactly when the inner
/// producer fails.
#[derive(Clone, Copy, Debug)]
pub struct TransformedProducer<P, T> {
    producer: P,
    transformer: T,
}

impl<P, T> TransformedProducer<P, T> {
    pub(crate) fn new(producer: P, transformer: T) -> Self {
        TransformedProducer {
            producer,
            transformer,
        }
    }
}

impl<P, T> Producer for TransformedProducer<P, T>
where
    P: Producer,
    T: Transformer<Input = P::Output>,
{
    type Output = T::Output;

    #[inline]
    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<T::Output> {
        self.producer
            .try_parse(from)
            .map(|value| self.transformer.transform(value))
    }
}
