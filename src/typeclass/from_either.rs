//! FromEither capability - lifting `Either` values into an effect.
//!
//! Any effect with an error slot can embed an [`Either`]: `Left` becomes a
//! failure in `E`, `Right` a success in `A`. On top of that single primitive
//! this module derives option lifting, predicate and refinement lifting, and
//! their `flat_map` forms.
//!
//! A *refinement* is a function `Fn(C) -> Result<B, C>`: it either narrows
//! the input to `B` or hands the untouched input back, which is then passed to
//! `on_false` to build the error.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::EitherLambda;
//! use kindred::typeclass::from_predicate;
//!
//! let positive = from_predicate::<EitherLambda, (), (), (), String, i32, _, _>(
//!     -3,
//!     |n| *n > 0,
//!     |n| format!("{n} is not positive"),
//! );
//! assert_eq!(positive, Either::Left("-3 is not positive".to_string()));
//! ```

use super::kind::{Kind, Slot, TypeLambda};
use super::monad::Flattenable;
use crate::control::Either;

/// A capability for kinds that can embed an [`Either`].
pub trait FromEither: TypeLambda {
    /// `Left` becomes a failure, `Right` a success.
    fn from_either<S, R, W, E, A>(either: Either<E, A>) -> Kind<Self, S, R, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot;
}

/// Lifts an `Option`, failing with `on_none()` when it is empty.
pub fn from_option<F, S, R, W, E, A, OnNone>(
    option: Option<A>,
    on_none: OnNone,
) -> Kind<F, S, R, W, E, A>
where
    F: FromEither,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    OnNone: FnOnce() -> E,
{
    F::from_either::<S, R, W, E, A>(Either::from_option(option, on_none))
}

/// Succeeds with `value` if `predicate` holds, otherwise fails with
/// `on_false(value)`.
pub fn from_predicate<F, S, R, W, E, A, Predicate, OnFalse>(
    value: A,
    predicate: Predicate,
    on_false: OnFalse,
) -> Kind<F, S, R, W, E, A>
where
    F: FromEither,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Predicate: FnOnce(&A) -> bool,
    OnFalse: FnOnce(A) -> E,
{
    let either = if predicate(&value) {
        Either::Right(value)
    } else {
        Either::Left(on_false(value))
    };
    F::from_either::<S, R, W, E, A>(either)
}

/// Succeeds with the narrowed value if `refinement` accepts `value`,
/// otherwise fails with `on_false` applied to the rejected input.
pub fn from_refinement<F, S, R, W, E, C, B, Refinement, OnFalse>(
    value: C,
    refinement: Refinement,
    on_false: OnFalse,
) -> Kind<F, S, R, W, E, B>
where
    F: FromEither,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Refinement: FnOnce(C) -> Result<B, C>,
    OnFalse: FnOnce(C) -> E,
{
    F::from_either::<S, R, W, E, B>(Either::from(refinement(value).map_err(on_false)))
}

/// Turns an option-returning function into an effect-returning one.
pub fn from_option_k<F, S, R, W, E, A, B, Func, OnNone>(
    function: Func,
    on_none: OnNone,
) -> impl Fn(A) -> Kind<F, S, R, W, E, B>
where
    F: FromEither,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: Fn(A) -> Option<B>,
    OnNone: Fn() -> E,
{
    move |value| from_option::<F, S, R, W, E, B, _>(function(value), &on_none)
}

/// Turns an either-returning function into an effect-returning one.
pub fn from_either_k<F, S, R, W, E, A, B, Func>(
    function: Func,
) -> impl Fn(A) -> Kind<F, S, R, W, E, B>
where
    F: FromEither,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: Fn(A) -> Either<E, B>,
{
    move |value| F::from_either::<S, R, W, E, B>(function(value))
}

/// Chains an option-returning function, failing with `on_none()` on `None`.
pub fn flat_map_option_k<F, S, R, W, E, A, B, Func, OnNone>(
    fa: Kind<F, S, R, W, E, A>,
    function: Func,
    on_none: OnNone,
) -> Kind<F, S, R, W, E, B>
where
    F: FromEither + Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Option<B> + 'static,
    OnNone: Fn() -> E + 'static,
{
    F::flat_map::<S, R, W, E, A, B, _>(fa, move |value| {
        from_option::<F, S, R, W, E, B, _>(function(value), &on_none)
    })
}

/// Chains an either-returning function.
pub fn flat_map_either_k<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, A>,
    function: Func,
) -> Kind<F, S, R, W, E, B>
where
    F: FromEither + Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Either<E, B> + 'static,
{
    F::flat_map::<S, R, W, E, A, B, _>(fa, move |value| F::from_either::<S, R, W, E, B>(function(value)))
}

/// Keeps a success only if `predicate` holds, otherwise fails with
/// `on_false(value)`.
pub fn filter<F, S, R, W, E, A, Predicate, OnFalse>(
    fa: Kind<F, S, R, W, E, A>,
    predicate: Predicate,
    on_false: OnFalse,
) -> Kind<F, S, R, W, E, A>
where
    F: FromEither + Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Predicate: Fn(&A) -> bool + 'static,
    OnFalse: Fn(A) -> E + 'static,
{
    F::flat_map::<S, R, W, E, A, A, _>(fa, move |value| {
        from_predicate::<F, S, R, W, E, A, _, _>(value, &predicate, &on_false)
    })
}

/// Narrows a success through `refinement`, failing with `on_false` applied to
/// the rejected value.
pub fn refine<F, S, R, W, E, C, B, Refinement, OnFalse>(
    fc: Kind<F, S, R, W, E, C>,
    refinement: Refinement,
    on_false: OnFalse,
) -> Kind<F, S, R, W, E, B>
where
    F: FromEither + Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    C: Slot,
    B: Slot,
    Refinement: Fn(C) -> Result<B, C> + 'static,
    OnFalse: Fn(C) -> E + 'static,
{
    F::flat_map::<S, R, W, E, C, B, _>(fc, move |value| {
        from_refinement::<F, S, R, W, E, C, B, _, _>(value, &refinement, &on_false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::functor::Functor;
    use rstest::rstest;

    struct CheckedLambda;

    impl TypeLambda for CheckedLambda {
        type Kind<S, R, W, E, A> = Result<A, E>;
    }

    impl FromEither for CheckedLambda {
        fn from_either<S, R, W, E, A>(either: Either<E, A>) -> Result<A, E>
        where
            S: Slot,
            R: Slot,
            W: Slot,
            E: Slot,
            A: Slot,
        {
            either.into()
        }
    }

    impl Functor for CheckedLambda {
        fn map<S, R, W, E, A, B, Func>(fa: Result<A, E>, function: Func) -> Result<B, E>
        where
            S: Slot,
            R: Slot,
            W: Slot,
            E: Slot,
            A: Slot,
            B: Slot,
            Func: Fn(A) -> B + 'static,
        {
            fa.map(function)
        }
    }

    impl Flattenable for CheckedLambda {
        fn flat_map<S, R, W, E, A, B, Func>(fa: Result<A, E>, function: Func) -> Result<B, E>
        where
            S: Slot,
            R: Slot,
            W: Slot,
            E: Slot,
            A: Slot,
            B: Slot,
            Func: Fn(A) -> Result<B, E> + 'static,
        {
            fa.and_then(function)
        }
    }

    type Checked = CheckedLambda;

    #[rstest]
    #[case(Some(1), Ok(1))]
    #[case(None, Err("missing"))]
    fn from_option_maps_none_to_error(#[case] input: Option<i32>, #[case] expected: Result<i32, &str>) {
        let lifted = from_option::<Checked, (), (), (), &str, i32, _>(input, || "missing");
        assert_eq!(lifted, expected);
    }

    #[rstest]
    #[case(4, Ok(4))]
    #[case(-4, Err(-4))]
    fn from_predicate_passes_rejected_value(#[case] input: i32, #[case] expected: Result<i32, i32>) {
        let lifted = from_predicate::<Checked, (), (), (), i32, i32, _, _>(input, |n| *n >= 0, |n| n);
        assert_eq!(lifted, expected);
    }

    #[test]
    fn from_refinement_narrows_type() {
        let refinement = |n: i64| u8::try_from(n).map_err(|_| n);
        assert_eq!(
            from_refinement::<Checked, (), (), (), String, i64, u8, _, _>(200, refinement, |n| n.to_string()),
            Ok(200u8)
        );
        assert_eq!(
            from_refinement::<Checked, (), (), (), String, i64, u8, _, _>(300, refinement, |n| n.to_string()),
            Err("300".to_string())
        );
    }

    #[test]
    fn option_and_either_kleisli_lift_functions() {
        let first_char = from_option_k::<Checked, (), (), (), &str, String, char, _, _>(
            |text| text.chars().next(),
            || "empty",
        );
        assert_eq!(first_char("abc".to_string()), Ok('a'));
        assert_eq!(first_char(String::new()), Err("empty"));

        let halve = from_either_k::<Checked, (), (), (), &str, i32, i32, _>(|n| {
            if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left("odd") }
        });
        assert_eq!(halve(8), Ok(4));
        assert_eq!(halve(7), Err("odd"));
    }

    #[test]
    fn flat_map_variants_chain_and_short_circuit() {
        let chained = flat_map_option_k::<Checked, (), (), (), &str, i32, i32, _, _>(
            Ok(10),
            |n| n.checked_sub(20).filter(|m| *m >= 0),
            || "negative",
        );
        assert_eq!(chained, Err("negative"));

        let already_failed = flat_map_either_k::<Checked, (), (), (), &str, i32, i32, _>(Err("first"), |n| {
            Either::Right(n + 1)
        });
        assert_eq!(already_failed, Err("first"));
    }

    #[test]
    fn filter_and_refine_check_successes() {
        let kept = filter::<Checked, (), (), (), String, i32, _, _>(Ok(3), |n| *n > 0, |n| format!("{n}"));
        assert_eq!(kept, Ok(3));

        let rejected = filter::<Checked, (), (), (), String, i32, _, _>(Ok(-3), |n| *n > 0, |n| format!("{n}"));
        assert_eq!(rejected, Err("-3".to_string()));

        let refined = refine::<Checked, (), (), (), i64, i64, u8, _, _>(Ok(999), |n| u8::try_from(n).map_err(|_| n), |n| n);
        assert_eq!(refined, Err(999));
    }

    #[test]
    fn from_option_k_is_reusable() {
        let lookup = from_option_k::<Checked, (), (), (), (), usize, i32, _, _>(
            |index| [10, 20].get(index).copied(),
            || (),
        );
        let results: Vec<_> = (0..3).map(&lookup).collect();
        assert_eq!(results, vec![Ok(10), Ok(20), Err(())]);
    }
}
