//! `OptionT` - adds an optional value to any kind.
//!
//! The token [`OptionTLambda<F>`] keeps every slot of the inner kind and
//! wraps the value in `Option`:
//!
//! ```text
//! Kind<OptionTLambda<F>, S, R, W, E, A> = Kind<F, S, R, W, E, Option<A>>
//! ```
//!
//! `flat_map`, `alt` and the eliminators run through the inner `flat_map`,
//! so a `None` skips every later continuation.

use std::marker::PhantomData;

use super::from_reader::FromReader;
use super::from_sync::FromSync;
use super::reader::Reader;
use super::sync::Sync;
use crate::control::Either;
use crate::typeclass::{
    Alt, Apply, Arrow, Bifunctor, Contravariant, Flattenable, FromEither, Functor, Kind, Plus,
    Pointed, Slot, TypeLambda, arrow,
};

/// Kind token for `Option` inside the inner kind `F`.
pub struct OptionTLambda<F>(PhantomData<F>);

impl<F: TypeLambda> TypeLambda for OptionTLambda<F> {
    type Kind<S, R, W, E, A> = Kind<F, S, R, W, E, Option<A>>;
}

impl<F: Functor> Functor for OptionTLambda<F> {
    fn map<S, R, W, E, A, B, Func>(
        fa: Kind<F, S, R, W, E, Option<A>>,
        function: Func,
    ) -> Kind<F, S, R, W, E, Option<B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> B + 'static,
    {
        F::map::<S, R, W, E, Option<A>, Option<B>, _>(fa, move |option| option.map(&function))
    }
}

impl<F: Pointed> Pointed for OptionTLambda<F> {
    fn succeed<S, R, W, E, A>(value: A) -> Kind<F, S, R, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::succeed::<S, R, W, E, Option<A>>(Some(value))
    }
}

/// Both inner effects run; the result is `Some` only when both are.
impl<F: Apply> Apply for OptionTLambda<F> {
    fn ap<S, R, W, E, A, B>(
        fab: Kind<F, S, R, W, E, Option<Arrow<A, B>>>,
        fa: Kind<F, S, R, W, E, Option<A>>,
    ) -> Kind<F, S, R, W, E, Option<B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        let lifted = F::map::<S, R, W, E, Option<Arrow<A, B>>, Arrow<Option<A>, Option<B>>, _>(
            fab,
            |function| {
                arrow(move |option: Option<A>| {
                    let function = function.clone()?;
                    Some(function(option?))
                })
            },
        );
        F::ap::<S, R, W, E, Option<A>, Option<B>>(lifted, fa)
    }
}

impl<F: Flattenable + Pointed> Flattenable for OptionTLambda<F> {
    fn flat_map<S, R, W, E, A, B, Func>(
        fa: Kind<F, S, R, W, E, Option<A>>,
        function: Func,
    ) -> Kind<F, S, R, W, E, Option<B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Kind<F, S, R, W, E, Option<B>> + 'static,
    {
        F::flat_map::<S, R, W, E, Option<A>, Option<B>, _>(fa, move |option| match option {
            Some(value) => function(value),
            None => F::succeed::<S, R, W, E, Option<B>>(None),
        })
    }
}

impl<F: Flattenable + Pointed> Alt for OptionTLambda<F> {
    fn alt<S, R, W, E, A, Second>(
        first: Kind<F, S, R, W, E, Option<A>>,
        second: Second,
    ) -> Kind<F, S, R, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        Second: Fn() -> Kind<F, S, R, W, E, Option<A>> + 'static,
    {
        F::flat_map::<S, R, W, E, Option<A>, Option<A>, _>(first, move |option| match option {
            Some(value) => F::succeed::<S, R, W, E, Option<A>>(Some(value)),
            None => second(),
        })
    }
}

impl<F: Flattenable + Pointed> Plus for OptionTLambda<F> {
    fn zero<S, R, W, E, A>() -> Kind<F, S, R, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::succeed::<S, R, W, E, Option<A>>(None)
    }
}

impl<F: Contravariant> Contravariant for OptionTLambda<F> {
    fn contramap<S, R, W, E, A, R2, Func>(
        fa: Kind<F, S, R, W, E, Option<A>>,
        function: Func,
    ) -> Kind<F, S, R2, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        R2: Slot,
        Func: Fn(R2) -> R + 'static,
    {
        F::contramap::<S, R, W, E, Option<A>, R2, Func>(fa, function)
    }
}

impl<F: Bifunctor> Bifunctor for OptionTLambda<F> {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(
        fea: Kind<F, S, R, W, E, Option<A>>,
        on_error: FE,
        on_value: FA,
    ) -> Kind<F, S, R, W, E2, Option<B>>
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
        F::map_both::<S, R, W, E, Option<A>, E2, Option<B>, _, _>(fea, on_error, move |option| {
            option.map(&on_value)
        })
    }
}

/// A `Left` becomes `None`.
impl<F: Pointed> FromEither for OptionTLambda<F> {
    fn from_either<S, R, W, E, A>(either: Either<E, A>) -> Kind<F, S, R, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::succeed::<S, R, W, E, Option<A>>(either.right())
    }
}

impl<F: FromSync + Functor> FromSync for OptionTLambda<F> {
    fn from_sync<S, R, W, E, A>(sync: Sync<A>) -> Kind<F, S, R, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::map::<S, R, W, E, A, Option<A>, _>(F::from_sync::<S, R, W, E, A>(sync), Some)
    }
}

impl<F: FromReader + Functor> FromReader for OptionTLambda<F> {
    fn from_reader<S, R, W, E, A>(reader: Reader<R, A>) -> Kind<F, S, R, W, E, Option<A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::map::<S, R, W, E, A, Option<A>, _>(F::from_reader::<S, R, W, E, A>(reader), Some)
    }
}

/// An inner success holding `Some(value)`.
pub fn some<F, S, R, W, E, A>(value: A) -> Kind<F, S, R, W, E, Option<A>>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    OptionTLambda::<F>::succeed::<S, R, W, E, A>(value)
}

/// Wraps the value of an inner effect in `Some`.
pub fn from_f<F, S, R, W, E, A>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R, W, E, Option<A>>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    F::map::<S, R, W, E, A, Option<A>, _>(fa, Some)
}

/// `Right` becomes `Some`, `Left` becomes `None`.
pub fn from_either<F, S, R, W, E, A>(either: Either<E, A>) -> Kind<F, S, R, W, E, Option<A>>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    OptionTLambda::<F>::from_either::<S, R, W, E, A>(either)
}

/// Folds the option inside the inner effect.
pub fn match_<F, S, R, W, E, A, B, OnNone, OnSome>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    on_none: OnNone,
    on_some: OnSome,
) -> Kind<F, S, R, W, E, B>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    OnNone: Fn() -> B + 'static,
    OnSome: Fn(A) -> B + 'static,
{
    F::map::<S, R, W, E, Option<A>, B, _>(fa, move |option| match option {
        Some(value) => on_some(value),
        None => on_none(),
    })
}

/// Folds the option into a further inner effect.
pub fn match_with_effect<F, S, R, W, E, A, B, OnNone, OnSome>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    on_none: OnNone,
    on_some: OnSome,
) -> Kind<F, S, R, W, E, B>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    OnNone: Fn() -> Kind<F, S, R, W, E, B> + 'static,
    OnSome: Fn(A) -> Kind<F, S, R, W, E, B> + 'static,
{
    F::flat_map::<S, R, W, E, Option<A>, B, _>(fa, move |option| match option {
        Some(value) => on_some(value),
        None => on_none(),
    })
}

/// The value, or `on_none()` when empty.
pub fn get_or_else<F, S, R, W, E, A, OnNone>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    on_none: OnNone,
) -> Kind<F, S, R, W, E, A>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    OnNone: Fn() -> A + 'static,
{
    F::map::<S, R, W, E, Option<A>, A, _>(fa, move |option| option.unwrap_or_else(&on_none))
}

/// The value, or the result of the effect `on_none()` when empty.
pub fn get_or_else_effect<F, S, R, W, E, A, OnNone>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    on_none: OnNone,
) -> Kind<F, S, R, W, E, A>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    OnNone: Fn() -> Kind<F, S, R, W, E, A> + 'static,
{
    F::flat_map::<S, R, W, E, Option<A>, A, _>(fa, move |option| match option {
        Some(value) => F::succeed::<S, R, W, E, A>(value),
        None => on_none(),
    })
}

/// Runs `on_none()` for its effect when empty; the result stays `None`.
pub fn tap_none<F, S, R, W, E, A, B, OnNone>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    on_none: OnNone,
) -> Kind<F, S, R, W, E, Option<A>>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    OnNone: Fn() -> Kind<F, S, R, W, E, B> + 'static,
{
    F::flat_map::<S, R, W, E, Option<A>, Option<A>, _>(fa, move |option| match option {
        Some(value) => F::succeed::<S, R, W, E, Option<A>>(Some(value)),
        None => F::map::<S, R, W, E, B, Option<A>, _>(on_none(), |_| None),
    })
}

/// Maps the value when present.
pub fn map<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    function: Func,
) -> Kind<F, S, R, W, E, Option<B>>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> B + 'static,
{
    OptionTLambda::<F>::map::<S, R, W, E, A, B, Func>(fa, function)
}

/// Applies an optional function to an optional value.
pub fn ap<F, S, R, W, E, A, B>(
    fab: Kind<F, S, R, W, E, Option<Arrow<A, B>>>,
    fa: Kind<F, S, R, W, E, Option<A>>,
) -> Kind<F, S, R, W, E, Option<B>>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    OptionTLambda::<F>::ap::<S, R, W, E, A, B>(fab, fa)
}

/// Chains a continuation that only runs for `Some`.
pub fn flat_map<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, Option<A>>,
    function: Func,
) -> Kind<F, S, R, W, E, Option<B>>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Kind<F, S, R, W, E, Option<B>> + 'static,
{
    OptionTLambda::<F>::flat_map::<S, R, W, E, A, B, Func>(fa, function)
}

/// The first `Some`; `second` only runs after a `None`.
pub fn combine_k<F, S, R, W, E, A, Second>(
    first: Kind<F, S, R, W, E, Option<A>>,
    second: Second,
) -> Kind<F, S, R, W, E, Option<A>>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Second: Fn() -> Kind<F, S, R, W, E, Option<A>> + 'static,
{
    OptionTLambda::<F>::alt::<S, R, W, E, A, Second>(first, second)
}

/// An inner success holding `None`.
pub fn empty_k<F, S, R, W, E, A>() -> Kind<F, S, R, W, E, Option<A>>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    OptionTLambda::<F>::zero::<S, R, W, E, A>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Sync, SyncLambda};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    type SyncOption = OptionTLambda<SyncLambda>;

    #[rstest]
    fn flat_map_skips_continuation_after_none() {
        let calls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&calls);
        let program = flat_map::<SyncLambda, (), (), (), (), i32, i32, _>(Sync::succeed(None), move |n| {
            counted.set(counted.get() + 1);
            some::<SyncLambda, (), (), (), (), i32>(n)
        });
        assert_eq!(program.run(), None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(2), "some 2")]
    #[case(None, "none")]
    fn match_folds_both_cases(#[case] input: Option<i32>, #[case] expected: &str) {
        let folded = match_::<SyncLambda, (), (), (), (), i32, String, _, _>(
            Sync::succeed(input),
            || "none".to_string(),
            |n| format!("some {n}"),
        );
        assert_eq!(folded.run(), expected);
    }

    #[rstest]
    fn tap_none_runs_side_effect_only_when_empty() {
        let taps = Rc::new(Cell::new(0));
        let tap_counter = {
            let taps = Rc::clone(&taps);
            move || {
                let taps = Rc::clone(&taps);
                Sync::new(move || taps.set(taps.get() + 1))
            }
        };
        let empty = tap_none::<SyncLambda, (), (), (), (), i32, (), _>(Sync::succeed(None), tap_counter.clone());
        let full = tap_none::<SyncLambda, (), (), (), (), i32, (), _>(Sync::succeed(Some(1)), tap_counter);
        assert_eq!(empty.run(), None);
        assert_eq!(full.run(), Some(1));
        assert_eq!(taps.get(), 1);
    }

    #[rstest]
    fn combine_k_falls_back_and_empty_k_is_identity() {
        let fallback = combine_k::<SyncLambda, (), (), (), (), i32, _>(empty_k::<SyncLambda, (), (), (), (), i32>(), || {
            some::<SyncLambda, (), (), (), (), i32>(9)
        });
        assert_eq!(fallback.run(), Some(9));
        let kept = SyncOption::alt::<(), (), (), (), i32, _>(some::<SyncLambda, (), (), (), (), i32>(1), || {
            empty_k::<SyncLambda, (), (), (), (), i32>()
        });
        assert_eq!(kept.run(), Some(1));
    }

    #[rstest]
    fn get_or_else_effect_runs_default_only_when_empty() {
        let value = get_or_else_effect::<SyncLambda, (), (), (), (), i32, _>(Sync::succeed(None), || Sync::succeed(5));
        assert_eq!(value.run(), 5);
        assert_eq!(get_or_else::<SyncLambda, (), (), (), (), i32, _>(Sync::succeed(Some(1)), || 5).run(), 1);
    }

    #[rstest]
    fn ap_requires_both_values() {
        let function = some::<SyncLambda, (), (), (), (), Arrow<i32, i32>>(arrow(|n| n * 3));
        assert_eq!(ap::<SyncLambda, (), (), (), (), i32, i32>(function.clone(), Sync::succeed(Some(2))).run(), Some(6));
        assert_eq!(ap::<SyncLambda, (), (), (), (), i32, i32>(function, Sync::succeed(None)).run(), None);
    }

    #[rstest]
    fn from_f_and_from_either() {
        assert_eq!(from_f::<SyncLambda, (), (), (), (), i32>(Sync::succeed(3)).run(), Some(3));
        let left = from_either::<SyncLambda, (), (), (), &str, i32>(Either::Left("gone"));
        assert_eq!(left.run(), None);
    }
}
