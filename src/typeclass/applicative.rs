//! Applicative type class - `Apply` plus lifting of pure values.
//!
//! Every kind with both an [`Apply`] and a [`Pointed`] instance is an
//! `Applicative`; there is nothing left to implement.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(succeed(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(succeed(f), succeed(x)) == succeed(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! ap(u, succeed(y)) == ap(succeed(|f| f(y)), u)
//! ```

use super::apply::Apply;
use super::pointed::Pointed;

/// A type class for kinds that can lift values and apply wrapped functions.
///
/// Blanket-implemented for every `Apply + Pointed` token.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Applicative, Apply, Identity, IdentityLambda, Pointed, arrow};
///
/// fn apply_pure<F: Applicative>() {}
/// apply_pure::<IdentityLambda>();
///
/// let result = IdentityLambda::ap::<(), (), (), (), i32, i32>(
///     IdentityLambda::succeed::<(), (), (), (), _>(arrow(|x: i32| x + 1)),
///     IdentityLambda::succeed::<(), (), (), (), i32>(1),
/// );
/// assert_eq!(result, Identity(2));
/// ```
pub trait Applicative: Apply + Pointed {}

impl<F: Apply + Pointed> Applicative for F {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::kind::{Arrow, arrow};
    use crate::typeclass::{Identity, IdentityLambda};
    use rstest::rstest;

    type Id = IdentityLambda;

    #[rstest]
    #[case(0)]
    #[case(17)]
    fn identity_law(#[case] value: i32) {
        let identity = Id::succeed::<(), (), (), (), Arrow<i32, i32>>(arrow(|x| x));
        assert_eq!(Id::ap::<(), (), (), (), i32, i32>(identity, Identity(value)), Identity(value));
    }

    #[rstest]
    #[case(3)]
    #[case(-3)]
    fn homomorphism_law(#[case] value: i32) {
        let function = |x: i32| x * 10;
        let left = Id::ap::<(), (), (), (), i32, i32>(
            Id::succeed::<(), (), (), (), Arrow<i32, i32>>(arrow(function)),
            Id::succeed::<(), (), (), (), i32>(value),
        );
        assert_eq!(left, Id::succeed::<(), (), (), (), i32>(function(value)));
    }

    #[test]
    fn interchange_law() {
        let u = Identity(arrow(|x: i32| x - 1));
        let left = Id::ap::<(), (), (), (), i32, i32>(u.clone(), Identity(5));
        let right = Id::ap::<(), (), (), (), Arrow<i32, i32>, i32>(
            Identity(arrow(|function: Arrow<i32, i32>| function(5))),
            u,
        );
        assert_eq!(left, right);
    }
}
