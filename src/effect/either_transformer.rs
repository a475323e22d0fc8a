//! `EitherT` - adds a typed failure to any kind.
//!
//! The token [`EitherTLambda<F>`] keeps every slot of the inner kind and
//! wraps the value in an [`Either`] whose `Left` is the error slot:
//!
//! ```text
//! Kind<EitherTLambda<F>, S, R, W, E, A> = Kind<F, S, R, W, E, Either<E, A>>
//! ```
//!
//! Because the error slot appears both in the inner kind and in the
//! `Either`, `map_both` needs the inner kind to be a `Bifunctor` too; kinds
//! without an error channel provide one that maps the value only.

use std::marker::PhantomData;
use std::rc::Rc;

use super::from_reader::FromReader;
use super::from_sync::FromSync;
use super::reader::Reader;
use super::sync::Sync;
use crate::control::Either;
use crate::typeclass::{
    Alt, Apply, Arrow, Bifunctor, Contravariant, Flattenable, FromEither, Functor, Kind, Pointed,
    Slot, TypeLambda, arrow,
};

/// Kind token for [`Either`] inside the inner kind `F`.
pub struct EitherTLambda<F>(PhantomData<F>);

impl<F: TypeLambda> TypeLambda for EitherTLambda<F> {
    type Kind<S, R, W, E, A> = Kind<F, S, R, W, E, Either<E, A>>;
}

impl<F: Functor> Functor for EitherTLambda<F> {
    fn map<S, R, W, E, A, B, Func>(
        fa: Kind<F, S, R, W, E, Either<E, A>>,
        function: Func,
    ) -> Kind<F, S, R, W, E, Either<E, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> B + 'static,
    {
        F::map::<S, R, W, E, Either<E, A>, Either<E, B>, _>(fa, move |either| either.map_right(&function))
    }
}

impl<F: Pointed> Pointed for EitherTLambda<F> {
    fn succeed<S, R, W, E, A>(value: A) -> Kind<F, S, R, W, E, Either<E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::succeed::<S, R, W, E, Either<E, A>>(Either::Right(value))
    }
}

/// Both inner effects run; the function side's `Left` wins.
impl<F: Apply> Apply for EitherTLambda<F> {
    fn ap<S, R, W, E, A, B>(
        fab: Kind<F, S, R, W, E, Either<E, Arrow<A, B>>>,
        fa: Kind<F, S, R, W, E, Either<E, A>>,
    ) -> Kind<F, S, R, W, E, Either<E, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        let lifted = F::map::<S, R, W, E, Either<E, Arrow<A, B>>, Arrow<Either<E, A>, Either<E, B>>, _>(
            fab,
            |function| {
                arrow(move |either: Either<E, A>| {
                    function
                        .clone()
                        .flat_map_right(|function| either.map_right(|value| function(value)))
                })
            },
        );
        F::ap::<S, R, W, E, Either<E, A>, Either<E, B>>(lifted, fa)
    }
}

impl<F: Flattenable + Pointed> Flattenable for EitherTLambda<F> {
    fn flat_map<S, R, W, E, A, B, Func>(
        fa: Kind<F, S, R, W, E, Either<E, A>>,
        function: Func,
    ) -> Kind<F, S, R, W, E, Either<E, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Kind<F, S, R, W, E, Either<E, B>> + 'static,
    {
        F::flat_map::<S, R, W, E, Either<E, A>, Either<E, B>, _>(fa, move |either| match either {
            Either::Right(value) => function(value),
            Either::Left(error) => F::succeed::<S, R, W, E, Either<E, B>>(Either::Left(error)),
        })
    }
}

impl<F: Bifunctor> Bifunctor for EitherTLambda<F> {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(
        fea: Kind<F, S, R, W, E, Either<E, A>>,
        on_error: FE,
        on_value: FA,
    ) -> Kind<F, S, R, W, E2, Either<E2, B>>
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
        let on_error = Rc::new(on_error);
        let inner_on_error = Rc::clone(&on_error);
        F::map_both::<S, R, W, E, Either<E, A>, E2, Either<E2, B>, _, _>(
            fea,
            move |error| inner_on_error(error),
            move |either| either.bimap(|error| on_error(error), &on_value),
        )
    }
}

/// A `Left` falls through to `second`.
impl<F: Flattenable + Pointed> Alt for EitherTLambda<F> {
    fn alt<S, R, W, E, A, Second>(
        first: Kind<F, S, R, W, E, Either<E, A>>,
        second: Second,
    ) -> Kind<F, S, R, W, E, Either<E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        Second: Fn() -> Kind<F, S, R, W, E, Either<E, A>> + 'static,
    {
        F::flat_map::<S, R, W, E, Either<E, A>, Either<E, A>, _>(first, move |either| match either {
            Either::Right(value) => F::succeed::<S, R, W, E, Either<E, A>>(Either::Right(value)),
            Either::Left(_) => second(),
        })
    }
}

impl<F: Contravariant> Contravariant for EitherTLambda<F> {
    fn contramap<S, R, W, E, A, R2, Func>(
        fa: Kind<F, S, R, W, E, Either<E, A>>,
        function: Func,
    ) -> Kind<F, S, R2, W, E, Either<E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        R2: Slot,
        Func: Fn(R2) -> R + 'static,
    {
        F::contramap::<S, R, W, E, Either<E, A>, R2, Func>(fa, function)
    }
}

impl<F: Pointed> FromEither for EitherTLambda<F> {
    fn from_either<S, R, W, E, A>(either: Either<E, A>) -> Kind<F, S, R, W, E, Either<E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::succeed::<S, R, W, E, Either<E, A>>(either)
    }
}

impl<F: FromSync + Functor> FromSync for EitherTLambda<F> {
    fn from_sync<S, R, W, E, A>(sync: Sync<A>) -> Kind<F, S, R, W, E, Either<E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::map::<S, R, W, E, A, Either<E, A>, _>(F::from_sync::<S, R, W, E, A>(sync), Either::Right)
    }
}

impl<F: FromReader + Functor> FromReader for EitherTLambda<F> {
    fn from_reader<S, R, W, E, A>(reader: Reader<R, A>) -> Kind<F, S, R, W, E, Either<E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        F::map::<S, R, W, E, A, Either<E, A>, _>(F::from_reader::<S, R, W, E, A>(reader), Either::Right)
    }
}

/// An inner success holding `Right(value)`.
pub fn right<F, S, R, W, E, A>(value: A) -> Kind<F, S, R, W, E, Either<E, A>>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    F::succeed::<S, R, W, E, Either<E, A>>(Either::Right(value))
}

/// An inner success holding `Left(error)`.
pub fn left<F, S, R, W, E, A>(error: E) -> Kind<F, S, R, W, E, Either<E, A>>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    F::succeed::<S, R, W, E, Either<E, A>>(Either::Left(error))
}

/// Wraps the value of an inner effect in `Right`.
pub fn right_f<F, S, R, W, E, A>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R, W, E, Either<E, A>>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    F::map::<S, R, W, E, A, Either<E, A>, _>(fa, Either::Right)
}

/// Wraps the value of an inner effect in `Left`.
pub fn left_f<F, S, R, W, E, A>(fe: Kind<F, S, R, W, E, E>) -> Kind<F, S, R, W, E, Either<E, A>>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    F::map::<S, R, W, E, E, Either<E, A>, _>(fe, Either::Left)
}

/// Folds the `Either` inside the inner effect.
pub fn match_<F, S, R, W, E, A, B, OnLeft, OnRight>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    on_left: OnLeft,
    on_right: OnRight,
) -> Kind<F, S, R, W, E, B>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    OnLeft: Fn(E) -> B + 'static,
    OnRight: Fn(A) -> B + 'static,
{
    F::map::<S, R, W, E, Either<E, A>, B, _>(fa, move |either| either.fold(&on_left, &on_right))
}

/// Folds the `Either` into a further inner effect.
pub fn match_with_effect<F, S, R, W, E, A, B, OnLeft, OnRight>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    on_left: OnLeft,
    on_right: OnRight,
) -> Kind<F, S, R, W, E, B>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    OnLeft: Fn(E) -> Kind<F, S, R, W, E, B> + 'static,
    OnRight: Fn(A) -> Kind<F, S, R, W, E, B> + 'static,
{
    F::flat_map::<S, R, W, E, Either<E, A>, B, _>(fa, move |either| either.fold(&on_left, &on_right))
}

/// The value, or `on_left(error)` after a failure.
pub fn get_or_else<F, S, R, W, E, A, OnLeft>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    on_left: OnLeft,
) -> Kind<F, S, R, W, E, A>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    OnLeft: Fn(E) -> A + 'static,
{
    F::map::<S, R, W, E, Either<E, A>, A, _>(fa, move |either| either.get_or_else(&on_left))
}

/// The value, or the result of the effect `on_left(error)` after a failure.
pub fn get_or_else_effect<F, S, R, W, E, A, OnLeft>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    on_left: OnLeft,
) -> Kind<F, S, R, W, E, A>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    OnLeft: Fn(E) -> Kind<F, S, R, W, E, A> + 'static,
{
    F::flat_map::<S, R, W, E, Either<E, A>, A, _>(fa, move |either| match either {
        Either::Right(value) => F::succeed::<S, R, W, E, A>(value),
        Either::Left(error) => on_left(error),
    })
}

/// Maps the success value.
pub fn map<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    function: Func,
) -> Kind<F, S, R, W, E, Either<E, B>>
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
    EitherTLambda::<F>::map::<S, R, W, E, A, B, Func>(fa, function)
}

/// Maps the error and the success value.
pub fn map_both<F, S, R, W, E, A, E2, B, FE, FA>(
    fea: Kind<F, S, R, W, E, Either<E, A>>,
    on_error: FE,
    on_value: FA,
) -> Kind<F, S, R, W, E2, Either<E2, B>>
where
    F: Bifunctor,
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
    EitherTLambda::<F>::map_both::<S, R, W, E, A, E2, B, FE, FA>(fea, on_error, on_value)
}

/// Applies a wrapped function to a wrapped value.
pub fn ap<F, S, R, W, E, A, B>(
    fab: Kind<F, S, R, W, E, Either<E, Arrow<A, B>>>,
    fa: Kind<F, S, R, W, E, Either<E, A>>,
) -> Kind<F, S, R, W, E, Either<E, B>>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    EitherTLambda::<F>::ap::<S, R, W, E, A, B>(fab, fa)
}

/// Chains a continuation that only runs after a success.
pub fn flat_map<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    function: Func,
) -> Kind<F, S, R, W, E, Either<E, B>>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Kind<F, S, R, W, E, Either<E, B>> + 'static,
{
    EitherTLambda::<F>::flat_map::<S, R, W, E, A, B, Func>(fa, function)
}

/// Recovers from a failure with an effect built from the error.
pub fn or_else<F, S, R, W, E, A, OnLeft>(
    fa: Kind<F, S, R, W, E, Either<E, A>>,
    on_left: OnLeft,
) -> Kind<F, S, R, W, E, Either<E, A>>
where
    F: Flattenable + Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    OnLeft: Fn(E) -> Kind<F, S, R, W, E, Either<E, A>> + 'static,
{
    F::flat_map::<S, R, W, E, Either<E, A>, Either<E, A>, _>(fa, move |either| match either {
        Either::Right(value) => F::succeed::<S, R, W, E, Either<E, A>>(Either::Right(value)),
        Either::Left(error) => on_left(error),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Sync, SyncLambda};
    use rstest::rstest;
    use std::cell::Cell;

    type Checked<A> = Sync<Either<String, A>>;

    fn fail<A: Slot>(message: &str) -> Checked<A> {
        left::<SyncLambda, (), (), (), String, A>(message.to_string())
    }

    #[rstest]
    fn flat_map_skips_continuation_after_left() {
        let calls = Rc::new(Cell::new(0));
        let counted = Rc::clone(&calls);
        let program = flat_map::<SyncLambda, (), (), (), String, i32, i32, _>(fail("boom"), move |n| {
            counted.set(counted.get() + 1);
            right::<SyncLambda, (), (), (), String, i32>(n)
        });
        assert_eq!(program.run(), Either::Left("boom".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn ap_reports_function_failure_first() {
        let function: Checked<Arrow<i32, i32>> = fail("function");
        let value: Checked<i32> = fail("value");
        assert_eq!(
            ap::<SyncLambda, (), (), (), String, i32, i32>(function, value).run(),
            Either::Left("function".to_string())
        );
    }

    #[rstest]
    #[case(Either::Right(2), 2)]
    #[case(Either::Left("ab".to_string()), -2)]
    fn match_folds_both_sides(#[case] input: Either<String, i32>, #[case] expected: i32) {
        let folded = match_::<SyncLambda, (), (), (), String, i32, i32, _, _>(
            Sync::succeed(input),
            |error| -(error.len() as i32),
            |value| value,
        );
        assert_eq!(folded.run(), expected);
    }

    #[rstest]
    fn or_else_recovers_and_keeps_success() {
        let recovered = or_else::<SyncLambda, (), (), (), String, usize, _>(fail("four"), |error| {
            right::<SyncLambda, (), (), (), String, usize>(error.len())
        });
        assert_eq!(recovered.run(), Either::Right(4));

        let kept = or_else::<SyncLambda, (), (), (), String, usize, _>(
            right::<SyncLambda, (), (), (), String, usize>(1),
            |_| unreachable!("recovery evaluated"),
        );
        assert_eq!(kept.run(), Either::Right(1));
    }

    #[rstest]
    fn map_both_changes_error_type() {
        let widened = map_both::<SyncLambda, (), (), (), String, i32, usize, i32, _, _>(
            fail("three"),
            |error| error.len(),
            |value| value + 1,
        );
        assert_eq!(widened.run(), Either::Left(5));
    }

    #[rstest]
    fn get_or_else_variants() {
        assert_eq!(get_or_else::<SyncLambda, (), (), (), String, usize, _>(fail("xyz"), |e| e.len()).run(), 3);
        let effectful = get_or_else_effect::<SyncLambda, (), (), (), String, usize, _>(fail("xy"), |e| {
            Sync::succeed(e.len() * 10)
        });
        assert_eq!(effectful.run(), 20);
    }

    #[rstest]
    fn right_f_and_left_f_wrap_inner_values() {
        let ok = right_f::<SyncLambda, (), (), (), String, i32>(Sync::succeed(1));
        let failed = left_f::<SyncLambda, (), (), (), String, i32>(Sync::succeed("no".to_string()));
        assert_eq!(ok.run(), Either::Right(1));
        assert_eq!(failed.run(), Either::Left("no".to_string()));
    }
}
