//! Containers that can accumulate produced values.
//!
//! [`to_container`](crate::to_container) stores through a
//! [`ContainerAdaptor`]; the default adaptor forwards to [`Accumulator`],
//! which knows the common standard collections. Supply a custom adaptor with
//! [`to_container_with`](crate::to_container_with) to store into anything
//! else, or to change how an existing collection stores.
//!
//! | Container | Element | Behavior |
//! |-----------|---------|----------|
//! | `Vec<T>`, `SmallVec<[T; N]>` | `T` | append |
//! | `String` | `char`, `String`, `&str` | append |
//! | `BTreeMap<K, V>`, `HashMap<K, V>` | `(K, V)` | insert; first write wins |
//! | [`Nothing`] | anything | discard |

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use smallvec::{Array, SmallVec};

/// A collection that accepts items one at a time.
pub trait Accumulator<T> {
    /// Add one item.
    fn store(&mut self, item: T);
}

impl<T> Accumulator<T> for Vec<T> {
    #[inline]
    fn store(&mut self, item: T) {
        self.push(item);
    }
}

impl<A: Array> Accumulator<A::Item> for SmallVec<A> {
    #[inline]
    fn store(&mut self, item: A::Item) {
        self.push(item);
    }
}

impl Accumulator<char> for String {
    #[inline]
    fn store(&mut self, item: char) {
        self.push(item);
    }
}

impl Accumulator<String> for String {
    #[inline]
    fn store(&mut self, item: String) {
        self.push_str(&item);
    }
}

impl Accumulator<&str> for String {
    #[inline]
    fn store(&mut self, item: &str) {
        self.push_str(item);
    }
}

// Maps keep the first value stored under a key; later duplicates are dropped.

impl<K: Ord, V> Accumulator<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn store(&mut self, (key, value): (K, V)) {
        self.entry(key).or_insert(value);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Accumulator<(K, V)> for HashMap<K, V, S> {
    #[inline]
    fn store(&mut self, (key, value): (K, V)) {
        self.entry(key).or_insert(value);
    }
}

/// A container that accepts and discards anything.
///
/// Useful as the target of a list whose elements only need to match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nothing;

impl<T> Accumulator<T> for Nothing {
    #[inline]
    fn store(&mut self, _item: T) {}
}

/// Strategy for storing a value of type `V` into a container `C`.
pub trait ContainerAdaptor<C, V> {
    /// Store `value` into `to`.
    fn store(to: &mut C, value: V);
}

/// Adaptor used when none is named: defers to [`Accumulator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultContainerAdaptor;

impl<C, V> ContainerAdaptor<C, V> for DefaultContainerAdaptor
where
    C: Accumulator<V>,
{
    #[inline]
    fn store(to: &mut C, value: V) {
        to.store(value);
    }
}

#[cfg(test)]
mod tests;
