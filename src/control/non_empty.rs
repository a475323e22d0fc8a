//! Non-empty sequences.
//!
//! [`NonEmptyVec`] stores its first element separately, so "at least one
//! element" is a property of the type rather than a runtime check. Traversals
//! over a `NonEmptyVec` only need `Apply`, because there is always a first
//! effect to start from.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a `NonEmptyVec` is built from an empty `Vec`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot build a non-empty sequence from an empty vector")]
pub struct EmptySequenceError;

/// A vector with at least one element.
///
/// # Examples
///
/// ```rust
/// use kindred::control::NonEmptyVec;
///
/// let values = NonEmptyVec::new(1, vec![2, 3]);
/// assert_eq!(values.head(), &1);
/// assert_eq!(values.len(), 3);
/// assert_eq!(Vec::from(values), vec![1, 2, 3]);
///
/// assert!(NonEmptyVec::<i32>::try_from(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Builds a sequence from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// A sequence with exactly one element.
    #[inline]
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element.
    #[inline]
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`; present for API symmetry with `Vec`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element at the end.
    #[inline]
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Splits into the first element and the rest.
    #[inline]
    pub fn into_parts(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }

    /// Applies `function` to every element, keeping the shape.
    pub fn map<B, F>(self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        let head = function(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }
}

impl<A> TryFrom<Vec<A>> for NonEmptyVec<A> {
    type Error = EmptySequenceError;

    fn try_from(values: Vec<A>) -> Result<Self, Self::Error> {
        let mut values = values.into_iter();
        let head = values.next().ok_or(EmptySequenceError)?;
        Ok(Self::new(head, values.collect()))
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(values: NonEmptyVec<A>) -> Self {
        let mut result = Vec::with_capacity(values.len());
        result.push(values.head);
        result.extend(values.tail);
        result
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::iter::Chain<std::iter::Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<A: fmt::Display> fmt::Display for NonEmptyVec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}", self.head)?;
        for value in &self.tail {
            write!(formatter, ", {value}")?;
        }
        write!(formatter, "]")
    }
}

/// Left scan that keeps the seed: the result starts with `initial` and has
/// one more element than `items`.
///
/// The result is never empty, even for empty input.
///
/// # Examples
///
/// ```rust
/// use kindred::control::scan_left;
///
/// let sums = scan_left(vec![1, 2, 3], 0, |total, value| total + value);
/// assert_eq!(Vec::from(sums), vec![0, 1, 3, 6]);
///
/// let seed_only = scan_left(Vec::<i32>::new(), 10, |total, value| total + value);
/// assert_eq!(Vec::from(seed_only), vec![10]);
/// ```
pub fn scan_left<I, B, F>(items: I, initial: B, mut function: F) -> NonEmptyVec<B>
where
    I: IntoIterator,
    F: FnMut(&B, I::Item) -> B,
{
    let mut result = NonEmptyVec::singleton(initial);
    for item in items {
        let next = function(result.last(), item);
        result.push(next);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_from_empty_vec_fails() {
        let result = NonEmptyVec::<u8>::try_from(Vec::new());
        assert_eq!(result, Err(EmptySequenceError));
        assert_eq!(
            EmptySequenceError.to_string(),
            "cannot build a non-empty sequence from an empty vector"
        );
    }

    #[rstest]
    #[case(vec![1], 1, 1)]
    #[case(vec![1, 2, 3], 1, 3)]
    fn try_from_keeps_order(#[case] input: Vec<i32>, #[case] head: i32, #[case] last: i32) {
        let values = NonEmptyVec::try_from(input.clone()).unwrap();
        assert_eq!(*values.head(), head);
        assert_eq!(*values.last(), last);
        assert_eq!(Vec::from(values), input);
    }

    #[rstest]
    fn map_preserves_length() {
        let values = NonEmptyVec::new("a", vec!["bb", "ccc"]).map(str::len);
        assert_eq!(values.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn scan_left_of_empty_input_is_seed() {
        let scanned = scan_left(Vec::<i32>::new(), 0, |total, value| total + value);
        assert_eq!(scanned, NonEmptyVec::singleton(0));
    }

    #[rstest]
    fn scan_left_accumulates_in_order() {
        let scanned = scan_left(vec!["a", "b"], String::new(), |text, next| format!("{text}{next}"));
        assert_eq!(Vec::from(scanned), vec![String::new(), "a".to_string(), "ab".to_string()]);
    }

    #[rstest]
    fn display_lists_elements() {
        assert_eq!(NonEmptyVec::new(1, vec![2]).to_string(), "[1, 2]");
    }
}
