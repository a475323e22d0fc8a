//! Bifunctor type class - mapping the error and value slots together.
//!
//! A `Bifunctor` maps both covariant outputs of an effect at once: the error
//! slot `E` and the value slot `A`. `map_left` and `map` are derived from
//! `map_both`, so an instance only implements one method.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map_both(fea, |e| e, |a| a) == fea
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map_both(map_both(fea, f1, g1), f2, g2) == map_both(fea, |e| f2(f1(e)), |a| g2(g1(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Bifunctor;
//! use kindred::control::Either;
//! use kindred::effect::EitherLambda;
//!
//! let failed: Either<i32, String> = Either::Left(21);
//! let mapped = EitherLambda::map_both::<(), (), (), i32, String, i32, usize, _, _>(
//!     failed,
//!     |error| error * 2,
//!     |text| text.len(),
//! );
//! assert_eq!(mapped, Either::Left(42));
//! ```

use super::kind::{Kind, Slot, TypeLambda};
use crate::compose::identity;

/// A type class for kinds whose error and value slots can both be mapped.
pub trait Bifunctor: TypeLambda {
    /// Maps the error side with `on_error` and the value side with `on_value`.
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(
        fea: Kind<Self, S, R, W, E, A>,
        on_error: FE,
        on_value: FA,
    ) -> Kind<Self, S, R, W, E2, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        E2: Slot,
        B: Slot,
        FE: Fn(E) -> E2 + 'static,
        FA: Fn(A) -> B + 'static;
}

/// Maps only the error slot, derived from `map_both`.
pub fn default_map_left<F, S, R, W, E, A, E2, Func>(
    fea: Kind<F, S, R, W, E, A>,
    function: Func,
) -> Kind<F, S, R, W, E2, A>
where
    F: Bifunctor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    E2: Slot,
    Func: Fn(E) -> E2 + 'static,
{
    F::map_both::<S, R, W, E, A, E2, A, _, _>(fea, function, identity)
}

/// Maps only the value slot, derived from `map_both`.
pub fn default_map<F, S, R, W, E, A, B, Func>(
    fea: Kind<F, S, R, W, E, A>,
    function: Func,
) -> Kind<F, S, R, W, E, B>
where
    F: Bifunctor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> B + 'static,
{
    F::map_both::<S, R, W, E, A, E, B, _, _>(fea, identity, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct TaggedLambda;

    impl TypeLambda for TaggedLambda {
        type Kind<S, R, W, E, A> = (E, A);
    }

    impl Bifunctor for TaggedLambda {
        fn map_both<S, R, W, E, A, E2, B, FE, FA>(fea: (E, A), on_error: FE, on_value: FA) -> (E2, B)
        where
            S: Slot,
            R: Slot,
            W: Slot,
            E: Slot,
            A: Slot,
            E2: Slot,
            B: Slot,
            FE: Fn(E) -> E2 + 'static,
            FA: Fn(A) -> B + 'static,
        {
            (on_error(fea.0), on_value(fea.1))
        }
    }

    type Tagged = TaggedLambda;

    #[rstest]
    #[case("tag", 1)]
    #[case("", -1)]
    fn identity_law(#[case] tag: &'static str, #[case] value: i32) {
        let mapped = Tagged::map_both::<(), (), (), &str, i32, &str, i32, _, _>((tag, value), |e| e, |a| a);
        assert_eq!(mapped, (tag, value));
    }

    #[test]
    fn composition_law() {
        let left = Tagged::map_both::<(), (), (), usize, i32, usize, i32, _, _>(
            Tagged::map_both::<(), (), (), usize, i32, usize, i32, _, _>((1, 2), |e| e + 1, |a| a * 2),
            |e| e * 10,
            |a| a - 1,
        );
        let right = Tagged::map_both::<(), (), (), usize, i32, usize, i32, _, _>(
            (1, 2),
            |e| (e + 1) * 10,
            |a| a * 2 - 1,
        );
        assert_eq!(left, right);
    }

    #[test]
    fn default_map_left_touches_only_error() {
        let mapped = default_map_left::<Tagged, (), (), (), i32, &str, String, _>((4, "v"), |e| e.to_string());
        assert_eq!(mapped, ("4".to_string(), "v"));
    }

    #[test]
    fn default_map_touches_only_value() {
        let mapped = default_map::<Tagged, (), (), (), i32, &str, usize, _>((4, "value"), str::len);
        assert_eq!(mapped, (4, 5));
    }
}
