//! Clause combinators.
//!
//! Each combinator takes a [`ClauseList`] (a tuple of clauses) and is itself
//! a [`Clause`], except [`produce`] and [`separated_list`], which are
//! producers.
//!
//! All combinators are transactional: a combinator that fails restores both
//! the cursor and its target. Intermediate state lives in a copy of the
//! target, which is why the target must be `Clone`.
//!
//! | Combinator | Succeeds when | Consumes |
//! |------------|---------------|----------|
//! | [`sequence`] | every clause succeeds, in order | all of them |
//! | [`alternatives`] | the first clause that succeeds | that clause |
//! | [`maybe`] | always | the clauses, if they all match |
//! | [`not_clause`] | the clauses do not all match | nothing |
//! | [`and_clause`] | the clauses all match | nothing |
//! | [`repeat`] | at least `min` iterations match | up to `max` iterations |

use std::fmt;
use std::marker::PhantomData;

use hfp_core::char_class::is_space;
use hfp_core::Cursor;
use tracing::trace;

use crate::container::Accumulator;
use crate::entity::{impl_then, Clause, ClauseList, Producer};

/// Unbounded upper limit for [`repeat`].
pub const N: usize = usize::MAX;

/// Alias of [`N`].
pub const UNBOUNDED: usize = N;

/// All clauses, in order.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<L>(L);

impl<Target: Clone, L: ClauseList<Target>> Clause<Target> for Sequence<L> {
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool {
        let mut tx = from.begin();
        let mut scratch = target.clone();
        if self.0.process_all(&mut tx, &mut scratch) {
            *target = scratch;
            tx.commit();
            true
        } else {
            false
        }
    }
}

/// The first clause that matches.
#[derive(Clone, Copy, Debug)]
pub struct Alternatives<L>(L);

impl<Target: Clone, L: ClauseList<Target>> Clause<Target> for Alternatives<L> {
    #[inline]
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool {
        self.0.process_first(from, target)
    }
}

/// The clauses as an optional group.
#[derive(Clone, Copy, Debug)]
pub struct Maybe<L>(Sequence<L>);

impl<Target: Clone, L: ClauseList<Target>> Clause<Target> for Maybe<L> {
    #[inline]
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool {
        let _ = self.0.try_process(from, target);
        true
    }
}

/// Negative lookahead.
#[derive(Clone, Copy, Debug)]
pub struct NotClause<L>(L);

impl<Target: Default, L: ClauseList<Target>> Clause<Target> for NotClause<L> {
    fn try_process(&self, from: &mut Cursor<'_>, _target: &mut Target) -> bool {
        let mut tx = from.begin();
        let mut throwaway = Target::default();
        !self.0.process_all(&mut tx, &mut throwaway)
    }
}

/// Positive lookahead.
#[derive(Clone, Copy, Debug)]
pub struct AndClause<L>(L);

impl<Target: Default, L: ClauseList<Target>> Clause<Target> for AndClause<L> {
    fn try_process(&self, from: &mut Cursor<'_>, _target: &mut Target) -> bool {
        let mut tx = from.begin();
        let mut throwaway = Target::default();
        self.0.process_all(&mut tx, &mut throwaway)
    }
}

/// Bounded repetition of the clauses as a group.
#[derive(Clone, Copy, Debug)]
pub struct Repeat<L> {
    min: usize,
    max: usize,
    clauses: L,
}

impl<Target: Clone, L: ClauseList<Target>> Clause<Target> for Repeat<L> {
    fn try_process(&self, from: &mut Cursor<'_>, target: &mut Target) -> bool {
        let mut tx = from.begin();
        let mut acc = target.clone();
        let mut count = 0;

        while count < self.max {
            let mut iteration = tx.begin();
            // A single clause already leaves acc untouched when it fails.
            let matched = if L::LEN == 1 {
                self.clauses.process_all(&mut iteration, &mut acc)
            } else {
                let mut scratch = acc.clone();
                let matched = self.clauses.process_all(&mut iteration, &mut scratch);
                if matched {
                    acc = scratch;
                }
                matched
            };
            if !matched {
                break;
            }
            let zero_width = iteration.consumed() == 0;
            iteration.commit();
            count += 1;
            // Under an unbounded limit a match that consumed nothing would
            // repeat forever. A finite limit still runs every iteration.
            if zero_width && self.max == N {
                count = self.max;
                break;
            }
        }

        if count < self.min {
            trace!(count, min = self.min, "repeat fell short");
            return false;
        }
        *target = acc;
        tx.commit();
        true
    }
}

/// Runs clauses against a fresh `T` and yields it.
pub struct Produce<T, L> {
    clauses: L,
    _target: PhantomData<fn() -> T>,
}

impl<T, L: Clone> Clone for Produce<T, L> {
    fn clone(&self) -> Self {
        Produce {
            clauses: self.clauses.clone(),
            _target: PhantomData,
        }
    }
}

impl<T, L: fmt::Debug> fmt::Debug for Produce<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Produce")
            .field("clauses", &self.clauses)
            .finish()
    }
}

impl<T: Default, L: ClauseList<T>> Producer for Produce<T, L> {
    type Output = T;

    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<T> {
        let mut tx = from.begin();
        let mut value = T::default();
        if self.clauses.process_all(&mut tx, &mut value) {
            tx.commit();
            Some(value)
        } else {
            None
        }
    }
}

/// `element *( separator OWS element )`, collected into `C`.
pub struct SeparatedList<C, S, E> {
    separator: S,
    element: E,
    _container: PhantomData<fn() -> C>,
}

impl<C, S: Clone, E: Clone> Clone for SeparatedList<C, S, E> {
    fn clone(&self) -> Self {
        SeparatedList {
            separator: self.separator.clone(),
            element: self.element.clone(),
            _container: PhantomData,
        }
    }
}

impl<C, S: fmt::Debug, E: fmt::Debug> fmt::Debug for SeparatedList<C, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeparatedList")
            .field("separator", &self.separator)
            .field("element", &self.element)
            .finish()
    }
}

impl<C, S, E> Producer for SeparatedList<C, S, E>
where
    C: Default + Accumulator<E::Output>,
    S: Producer,
    E: Producer,
{
    type Output = C;

    fn try_parse(&self, from: &mut Cursor<'_>) -> Option<C> {
        let mut tx = from.begin();
        let mut out = C::default();
        out.store(self.element.try_parse(&mut tx)?);

        loop {
            let mut item = tx.begin();
            if self.separator.try_parse(&mut item).is_none() {
                break;
            }
            item.skip_while(is_space);
            let Some(value) = self.element.try_parse(&mut item) else {
                break;
            };
            // An iteration that consumed nothing would repeat forever.
            if item.consumed() == 0 {
                break;
            }
            item.commit();
            out.store(value);
        }

        tx.commit();
        Some(out)
    }
}

impl_then!(Sequence<L>);
impl_then!(Alternatives<L>);
impl_then!(Maybe<L>);
impl_then!(NotClause<L>);
impl_then!(AndClause<L>);
impl_then!(Repeat<L>);

/// Every clause, in order. Fails as a whole, with no partial effects.
pub fn sequence<L>(clauses: L) -> Sequence<L> {
    Sequence(clauses)
}

/// The first clause that succeeds. Each attempt starts from the original
/// position and target.
pub fn alternatives<L>(clauses: L) -> Alternatives<L> {
    Alternatives(clauses)
}

/// The clauses, if they all match; otherwise nothing. Always succeeds.
pub fn maybe<L>(clauses: L) -> Maybe<L> {
    Maybe(Sequence(clauses))
}

pub use self::maybe as optional;

/// Succeeds without consuming input iff the clauses do not all match.
pub fn not_clause<L>(clauses: L) -> NotClause<L> {
    NotClause(clauses)
}

/// Succeeds without consuming input iff the clauses all match.
pub fn and_clause<L>(clauses: L) -> AndClause<L> {
    AndClause(clauses)
}

/// Match the clauses as a group at least `min` and at most `max` times.
///
/// Repetition is greedy. Pass [`N`] as `max` for no upper limit. An
/// iteration either matches completely or leaves no trace. With a finite
/// `max`, iterations that consume no input still run and store up to `max`
/// times. With `max == N`, the first such iteration ends the repetition and
/// counts as reaching the limit.
pub fn repeat<L>(min: usize, max: usize, clauses: L) -> Repeat<L> {
    Repeat { min, max, clauses }
}

/// Turn a clause list into a producer of `T`.
///
/// The clauses run against `T::default()`; the result is yielded only if
/// they all succeed.
pub fn produce<T, L>(clauses: L) -> Produce<T, L> {
    Produce {
        clauses,
        _target: PhantomData,
    }
}

/// One or more `element`s divided by `separator`, optionally followed by
/// whitespace, collected into `C`.
///
/// A trailing separator is not consumed.
pub fn separated_list<C, S, E>(separator: S, element: E) -> SeparatedList<C, S, E> {
    SeparatedList {
        separator,
        element,
        _container: PhantomData,
    }
}
