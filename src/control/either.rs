//! Either type - a value that is a failure or a success.
//!
//! `Either<L, R>` is the representation of the error-carrying effect: `Left`
//! holds the error channel, `Right` holds the value channel. The kind token
//! that lifts it into the type-class hierarchy lives in
//! `kindred::effect::EitherLambda`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//!
//! let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
//! let described = parsed.fold(|error| format!("error: {error}"), |n| format!("number: {n}"));
//! assert_eq!(described, "number: 42");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Left` is the failure side and short-circuits every sequential combinator;
/// `Right` is the success side.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the failure, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the success, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Builds a `Right` from `Some`, or a `Left` from `on_none` otherwise.
    ///
    /// ```rust
    /// use kindred::control::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), || "none"), Either::Right(1));
    /// assert_eq!(Either::<&str, i32>::from_option(None, || "none"), Either::Left("none"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<R>, on_none: F) -> Self
    where
        F: FnOnce() -> L,
    {
        match option {
            Some(value) => Self::Right(value),
            None => Self::Left(on_none()),
        }
    }

    /// Maps the failure side.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the success side.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps both sides.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the success side.
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Collapses both sides into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Returns the success, or the value computed from the failure.
    #[inline]
    pub fn get_or_else<F>(self, on_left: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => value,
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "left({value})"),
            Self::Right(value) => write!(formatter, "right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true)]
    #[case(Either::Right("one"), false)]
    fn is_left_matches_variant(#[case] value: Either<i32, &str>, #[case] expected: bool) {
        assert_eq!(value.is_left(), expected);
        assert_eq!(value.is_right(), !expected);
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(either, Either::Right(42));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    fn flat_map_right_short_circuits_on_left() {
        let failed: Either<&str, i32> = Either::Left("boom");
        let chained = failed.flat_map_right(|value| Either::<&str, i32>::Right(value + 1));
        assert_eq!(chained, Either::Left("boom"));
    }

    #[rstest]
    fn get_or_else_recovers_from_left() {
        let failed: Either<&str, usize> = Either::Left("four");
        assert_eq!(failed.get_or_else(str::len), 4);
    }

    #[rstest]
    #[case(Either::Left(3), "left(3)")]
    #[case(Either::Right(4), "right(4)")]
    fn display_names_the_side(#[case] value: Either<i32, i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn swap_exchanges_sides() {
        assert_eq!(Either::<i32, &str>::Left(1).swap(), Either::Right(1));
    }
}
