//! ReaderSync - a deferred computation that reads an environment.
//!
//! `ReaderSync<R, A>` is `ReaderT<R, Sync<A>>`: running it with an
//! environment yields a [`Sync`] that still has to be run. Every instance
//! comes from [`ReaderTLambda`] applied to [`SyncLambda`]; this module only
//! fixes the slots so the combinators infer.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::reader_sync;
//!
//! #[derive(Clone)]
//! struct Config { greeting: String, retries: u32 }
//!
//! let greeting = reader_sync::asks(|config: Config| config.greeting);
//! let retries = reader_sync::asks(|config: Config| config.retries);
//! let program = reader_sync::tap(
//!     reader_sync::zip_with(greeting, retries, |greeting, retries| format!("{greeting} x{retries}")),
//!     |message| reader_sync::log(message),
//! );
//!
//! let config = Config { greeting: "hello".to_string(), retries: 3 };
//! assert_eq!(program.run(config).run(), "hello x3");
//! ```

use super::combinators::{
    apply_combinators, from_reader_combinators, from_sync_combinators, functor_combinators,
    monad_combinators, pointed_combinators,
};
use super::reader_transformer::{ReaderT, ReaderTLambda};
use super::sync::{self, Sync, SyncLambda};
use crate::control::NonEmptyVec;
use crate::typeclass::{Contravariant, Slot};

/// A reader over an environment `R` producing a deferred `A`.
pub type ReaderSync<R, A> = ReaderT<R, Sync<A>>;

/// Kind token for [`ReaderSync`].
pub type ReaderSyncLambda = ReaderTLambda<SyncLambda>;

functor_combinators!(ReaderSyncLambda, [(), R, (), ()], [R]);
pointed_combinators!(ReaderSyncLambda, [(), R, (), ()], [R]);
apply_combinators!(ReaderSyncLambda, [(), R, (), ()], [R]);
monad_combinators!(ReaderSyncLambda, [(), R, (), ()], [R]);
from_sync_combinators!(ReaderSyncLambda, [(), R, (), ()], [R]);
from_reader_combinators!(ReaderSyncLambda, [(), R, (), ()], [R]);

/// Runs every reader against the environment, then their computations in
/// one loop.
pub fn sequence_vec<R: Slot, A: Slot>(items: Vec<ReaderSync<R, A>>) -> ReaderSync<R, Vec<A>> {
    ReaderT::new(move |environment: R| {
        let effects = items.iter().map(|reader| reader.run(environment.clone())).collect();
        sync::sequence_vec(effects)
    })
}

/// Runs every reader of a non-empty sequence, then their computations in one
/// loop.
pub fn sequence_non_empty<R: Slot, A: Slot>(items: NonEmptyVec<ReaderSync<R, A>>) -> ReaderSync<R, NonEmptyVec<A>> {
    let (head, tail) = items.into_parts();
    ReaderT::new(move |environment: R| {
        let first = head.run(environment.clone());
        let rest = tail.iter().map(|reader| reader.run(environment.clone())).collect();
        sync::sequence_non_empty(NonEmptyVec::new(first, rest))
    })
}

/// Traverses a vector with indices; empty input succeeds with `vec![]`.
pub fn traverse_vec_with_index<R, A, B, Func>(items: Vec<A>, mut function: Func) -> ReaderSync<R, Vec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> ReaderSync<R, B>,
{
    let readers = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect();
    sequence_vec(readers)
}

/// Traverses a vector; empty input succeeds with `vec![]`.
pub fn traverse_vec<R, A, B, Func>(items: Vec<A>, mut function: Func) -> ReaderSync<R, Vec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(A) -> ReaderSync<R, B>,
{
    traverse_vec_with_index(items, |_, value| function(value))
}

/// Traverses a non-empty sequence with indices.
pub fn traverse_non_empty_with_index<R, A, B, Func>(
    items: NonEmptyVec<A>,
    mut function: Func,
) -> ReaderSync<R, NonEmptyVec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> ReaderSync<R, B>,
{
    let mut index = 0;
    sequence_non_empty(items.map(|value| {
        let reader = function(index, value);
        index += 1;
        reader
    }))
}

/// Traverses a non-empty sequence.
pub fn traverse_non_empty<R, A, B, Func>(items: NonEmptyVec<A>, mut function: Func) -> ReaderSync<R, NonEmptyVec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(A) -> ReaderSync<R, B>,
{
    traverse_non_empty_with_index(items, |_, value| function(value))
}

/// Runs `fa` in an environment derived from a wider one.
pub fn local<R, R2, A, Func>(fa: ReaderSync<R, A>, function: Func) -> ReaderSync<R2, A>
where
    R: Slot,
    R2: Slot,
    A: Slot,
    Func: Fn(R2) -> R + 'static,
{
    ReaderSyncLambda::contramap::<(), R, (), (), A, R2, Func>(fa, function)
}

/// Builds the computation from the environment.
pub fn asks_reader_sync<R, A, Func>(function: Func) -> ReaderSync<R, A>
where
    R: Slot,
    A: Slot,
    Func: Fn(R) -> ReaderSync<R, A> + 'static,
{
    ReaderT::new(move |environment: R| function(environment.clone()).run(environment))
}
