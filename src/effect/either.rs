//! Either instances - `Left` is the failure that short-circuits.
//!
//! `Kind<EitherLambda, S, R, W, E, A> = Either<E, A>`: the error slot is the
//! `Left` side, so `Bifunctor` maps both and the first `Left` of a sequence
//! wins.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::either;
//!
//! let positive = |n: i32| either::from_predicate(n, |n| *n > 0, |n| format!("{n} is not positive"));
//! assert_eq!(either::traverse_vec(vec![1, 2], positive), Either::Right(vec![1, 2]));
//! assert_eq!(
//!     either::traverse_vec(vec![1, -2, -3], positive),
//!     Either::Left("-2 is not positive".to_string())
//! );
//! ```

use super::combinators::{
    apply_combinators, from_either_combinators, functor_combinators, monad_combinators,
    pointed_combinators, traversal_combinators,
};
use crate::control::Either;
use crate::typeclass::{
    Alt, Apply, Arrow, Bifunctor, Contravariant, Flattenable, FromEither, Functor, Pointed, Slot,
    TypeLambda,
};

/// Kind token for [`Either`] with the error in the `Left`.
pub struct EitherLambda;

impl TypeLambda for EitherLambda {
    type Kind<S, R, W, E, A> = Either<E, A>;
}

impl Functor for EitherLambda {
    fn map<S, R, W, E, A, B, Func>(fa: Either<E, A>, function: Func) -> Either<E, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> B + 'static,
    {
        fa.map_right(function)
    }
}

impl Pointed for EitherLambda {
    fn succeed<S, R, W, E, A>(value: A) -> Either<E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        Either::Right(value)
    }
}

impl Apply for EitherLambda {
    fn ap<S, R, W, E, A, B>(fab: Either<E, Arrow<A, B>>, fa: Either<E, A>) -> Either<E, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        fab.flat_map_right(|function| fa.map_right(|value| function(value)))
    }
}

impl Flattenable for EitherLambda {
    fn flat_map<S, R, W, E, A, B, Func>(fa: Either<E, A>, function: Func) -> Either<E, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Either<E, B> + 'static,
    {
        fa.flat_map_right(function)
    }
}

impl Bifunctor for EitherLambda {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(fea: Either<E, A>, on_error: FE, on_value: FA) -> Either<E2, B>
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
        fea.bimap(on_error, on_value)
    }
}

/// A `Left` falls through to `second`, whose error replaces the first.
impl Alt for EitherLambda {
    fn alt<S, R, W, E, A, Second>(first: Either<E, A>, second: Second) -> Either<E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        Second: Fn() -> Either<E, A> + 'static,
    {
        match first {
            Either::Right(value) => Either::Right(value),
            Either::Left(_) => second(),
        }
    }
}

impl FromEither for EitherLambda {
    fn from_either<S, R, W, E, A>(either: Either<E, A>) -> Either<E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        either
    }
}

impl Contravariant for EitherLambda {
    fn contramap<S, R, W, E, A, R2, Func>(fa: Either<E, A>, _function: Func) -> Either<E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        R2: Slot,
        Func: Fn(R2) -> R + 'static,
    {
        fa
    }
}

functor_combinators!(EitherLambda, [(), (), (), E], [E]);
pointed_combinators!(EitherLambda, [(), (), (), E], [E]);
apply_combinators!(EitherLambda, [(), (), (), E], [E]);
monad_combinators!(EitherLambda, [(), (), (), E], [E]);
traversal_combinators!(EitherLambda, [(), (), (), E], [E]);
from_either_combinators!(EitherLambda, [(), (), (), E], [E]);

/// Maps both sides.
pub fn map_both<E, A, E2, B, FE, FA>(fea: Either<E, A>, on_error: FE, on_value: FA) -> Either<E2, B>
where
    E: Slot,
    A: Slot,
    E2: Slot,
    B: Slot,
    FE: Fn(E) -> E2 + 'static,
    FA: Fn(A) -> B + 'static,
{
    EitherLambda::map_both::<(), (), (), E, A, E2, B, FE, FA>(fea, on_error, on_value)
}

/// Maps the error side only.
pub fn map_left<E, A, E2, Func>(fea: Either<E, A>, function: Func) -> Either<E2, A>
where
    E: Slot,
    A: Slot,
    E2: Slot,
    Func: Fn(E) -> E2 + 'static,
{
    crate::typeclass::default_map_left::<EitherLambda, (), (), (), E, A, E2, Func>(fea, function)
}

/// The first `Right`, trying `second` only after a `Left`.
pub fn alt<E, A, Second>(first: Either<E, A>, second: Second) -> Either<E, A>
where
    E: Slot,
    A: Slot,
    Second: Fn() -> Either<E, A> + 'static,
{
    EitherLambda::alt::<(), (), (), E, A, Second>(first, second)
}
