//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Semigroup;
//! use std::cmp::Ordering;
//!
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! assert_eq!(Ordering::Equal.combine(Ordering::Less), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use super::identity::Identity;
use super::wrappers::{Max, Min, Product, Sum};
use crate::control::NonEmptyVec;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines every element of a non-empty sequence, left to right.
    #[must_use]
    fn combine_non_empty(values: NonEmptyVec<Self>) -> Self
    where
        Self: Sized,
    {
        let (head, tail) = values.into_parts();
        tail.into_iter().fold(head, Self::combine)
    }

    /// Combines every element, or `None` for an empty iterator.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        for value in other {
            self.push(value);
        }
        self
    }
}

/// `None` is neutral; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// Lexicographic tie-breaking: the first non-`Equal` result wins.
impl Semigroup for Ordering {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Max(std::cmp::max(self.0, other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Min(std::cmp::min(self.0, other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("a".to_string()), None, Some("a".to_string()))]
    #[case(None, Some("b".to_string()), Some("b".to_string()))]
    #[case(Some("a".to_string()), Some("b".to_string()), Some("ab".to_string()))]
    #[case(None, None, None)]
    fn option_combines_contents(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    #[case(Ordering::Equal, Ordering::Greater, Ordering::Greater)]
    #[case(Ordering::Less, Ordering::Greater, Ordering::Less)]
    fn ordering_breaks_ties(#[case] first: Ordering, #[case] second: Ordering, #[case] expected: Ordering) {
        assert_eq!(first.combine(second), expected);
    }

    #[rstest]
    fn non_empty_concatenates() {
        let combined = NonEmptyVec::new(1, vec![2]).combine(NonEmptyVec::singleton(3));
        assert_eq!(Vec::from(combined), vec![1, 2, 3]);
    }

    #[rstest]
    fn combine_non_empty_folds_left() {
        let values = NonEmptyVec::new(Sum(1), vec![Sum(2), Sum(3)]);
        assert_eq!(Sum::combine_non_empty(values), Sum(6));
    }

    #[rstest]
    fn reduce_all_of_nothing_is_none() {
        assert_eq!(String::reduce_all(Vec::new()), None);
    }

    proptest! {
        #[test]
        fn string_is_associative(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn max_is_associative(a: i32, b: i32, c: i32) {
            prop_assert_eq!(Max(a).combine(Max(b)).combine(Max(c)), Max(a).combine(Max(b).combine(Max(c))));
        }
    }
}
