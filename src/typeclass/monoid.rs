//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ## Left and Right Identity
//!
//! ```text
//! empty().combine(a) == a
//! a.combine(empty()) == a
//! ```

use std::cmp::Ordering;

use super::identity::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Numeric, Product, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Monoid, Product};
///
/// assert_eq!(Product::<i32>::combine_all(vec![Product(2), Product(5)]), Product(10));
/// assert_eq!(Product::<i32>::combine_all(Vec::new()), Product(1));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every element, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for Ordering {
    fn empty() -> Self {
        Self::Equal
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Identity(T::empty())
    }
}

impl<A: Numeric + std::ops::Add<Output = A>> Monoid for Sum<A> {
    fn empty() -> Self {
        Sum(A::ZERO)
    }
}

impl<A: Numeric + std::ops::Mul<Output = A>> Monoid for Product<A> {
    fn empty() -> Self {
        Product(A::ONE)
    }
}

impl<A: Bounded + Ord> Monoid for Max<A> {
    fn empty() -> Self {
        Max(A::MIN_VALUE)
    }
}

impl<A: Bounded + Ord> Monoid for Min<A> {
    fn empty() -> Self {
        Min(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
