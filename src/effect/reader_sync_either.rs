//! ReaderSyncEither - a deferred, fallible computation that reads an
//! environment.
//!
//! `ReaderSyncEither<R, E, A>` is `ReaderT<R, Sync<Either<E, A>>>`, the
//! stack `ReaderT(EitherT(Sync))`. In a `flat_map` chain the first `Left`
//! stops the sequence and later steps are never built. Applicative
//! combinators (`ap`, `zip_with`, the traversals) run every step and report
//! the first `Left`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::reader_sync_either;
//!
//! let limit = reader_sync_either::asks::<u32, String, u32, _>(|limit: u32| limit);
//! let checked = reader_sync_either::flat_map(limit, |limit| {
//!     reader_sync_either::from_predicate(limit, |limit| *limit <= 10, |limit| format!("{limit} too large"))
//! });
//!
//! assert_eq!(checked.run(3).run(), Either::Right(3));
//! assert_eq!(checked.run(30).run(), Either::Left("30 too large".to_string()));
//! ```

use super::combinators::{
    apply_combinators, from_either_combinators, from_reader_combinators, from_sync_combinators,
    functor_combinators, monad_combinators, pointed_combinators,
};
use super::either_transformer::EitherTLambda;
use super::reader_sync;
use super::reader_transformer::ReaderT;
use super::reader_transformer::ReaderTLambda;
use super::sync::{Sync, SyncLambda};
use crate::control::{Either, NonEmptyVec};
use crate::typeclass::{Alt, Contravariant, Slot, default_map_left};

/// A reader over `R` producing a deferred `Either<E, A>`.
pub type ReaderSyncEither<R, E, A> = ReaderT<R, Sync<Either<E, A>>>;

/// Kind token for [`ReaderSyncEither`].
pub type ReaderSyncEitherLambda = ReaderTLambda<EitherTLambda<SyncLambda>>;

functor_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);
pointed_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);
apply_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);
monad_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);
from_sync_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);
from_reader_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);
from_either_combinators!(ReaderSyncEitherLambda, [(), R, (), E], [R, E]);

fn collect_rights<E, A>(results: Vec<Either<E, A>>) -> Either<E, Vec<A>> {
    results
        .into_iter()
        .map(Result::<A, E>::from)
        .collect::<Result<Vec<A>, E>>()
        .into()
}

fn collect_non_empty_rights<E, A>(results: NonEmptyVec<Either<E, A>>) -> Either<E, NonEmptyVec<A>> {
    let (head, tail) = results.into_parts();
    match (head, collect_rights(tail)) {
        (Either::Right(first), Either::Right(rest)) => Either::Right(NonEmptyVec::new(first, rest)),
        (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => Either::Left(error),
    }
}

/// Runs every step and reports the first `Left`.
pub fn sequence_vec<R: Slot, E: Slot, A: Slot>(items: Vec<ReaderSyncEither<R, E, A>>) -> ReaderSyncEither<R, E, Vec<A>> {
    reader_sync::map(reader_sync::sequence_vec(items), collect_rights::<E, A>)
}

/// Traverses a vector with indices, running every step and reporting the
/// first `Left`. Empty input succeeds with `vec![]`.
pub fn traverse_vec_with_index<R, E, A, B, Func>(items: Vec<A>, function: Func) -> ReaderSyncEither<R, E, Vec<B>>
where
    R: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> ReaderSyncEither<R, E, B>,
{
    reader_sync::map(reader_sync::traverse_vec_with_index(items, function), collect_rights::<E, B>)
}

/// Traverses a vector, running every step and reporting the first `Left`.
pub fn traverse_vec<R, E, A, B, Func>(items: Vec<A>, mut function: Func) -> ReaderSyncEither<R, E, Vec<B>>
where
    R: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(A) -> ReaderSyncEither<R, E, B>,
{
    traverse_vec_with_index(items, |_, value| function(value))
}

/// Traverses a non-empty sequence with indices.
pub fn traverse_non_empty_with_index<R, E, A, B, Func>(
    items: NonEmptyVec<A>,
    function: Func,
) -> ReaderSyncEither<R, E, NonEmptyVec<B>>
where
    R: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> ReaderSyncEither<R, E, B>,
{
    reader_sync::map(
        reader_sync::traverse_non_empty_with_index(items, function),
        collect_non_empty_rights::<E, B>,
    )
}

/// Traverses a non-empty sequence.
pub fn traverse_non_empty<R, E, A, B, Func>(
    items: NonEmptyVec<A>,
    mut function: Func,
) -> ReaderSyncEither<R, E, NonEmptyVec<B>>
where
    R: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(A) -> ReaderSyncEither<R, E, B>,
{
    traverse_non_empty_with_index(items, |_, value| function(value))
}

/// A success.
pub fn right<R: Slot, E: Slot, A: Slot>(value: A) -> ReaderSyncEither<R, E, A> {
    succeed(value)
}

/// A failure.
pub fn left<R: Slot, E: Slot, A: Slot>(error: E) -> ReaderSyncEither<R, E, A> {
    from_either(Either::Left(error))
}

/// Maps the error.
pub fn map_left<R, E, A, E2, Func>(fa: ReaderSyncEither<R, E, A>, function: Func) -> ReaderSyncEither<R, E2, A>
where
    R: Slot,
    E: Slot,
    A: Slot,
    E2: Slot,
    Func: Fn(E) -> E2 + 'static,
{
    default_map_left::<ReaderSyncEitherLambda, (), R, (), E, A, E2, Func>(fa, function)
}

/// Runs `second` only if `first` fails.
pub fn alt<R, E, A, Second>(first: ReaderSyncEither<R, E, A>, second: Second) -> ReaderSyncEither<R, E, A>
where
    R: Slot,
    E: Slot,
    A: Slot,
    Second: Fn() -> ReaderSyncEither<R, E, A> + 'static,
{
    ReaderSyncEitherLambda::alt::<(), R, (), E, A, Second>(first, second)
}

/// Runs `fa` in an environment derived from a wider one.
pub fn local<R, R2, E, A, Func>(fa: ReaderSyncEither<R, E, A>, function: Func) -> ReaderSyncEither<R2, E, A>
where
    R: Slot,
    R2: Slot,
    E: Slot,
    A: Slot,
    Func: Fn(R2) -> R + 'static,
{
    ReaderSyncEitherLambda::contramap::<(), R, (), E, A, R2, Func>(fa, function)
}
