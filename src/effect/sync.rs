//! Sync - a deferred, re-runnable synchronous computation.
//!
//! A `Sync<A>` wraps a thunk `() -> A`. Nothing happens when it is built or
//! composed; the thunk runs each time [`Sync::run`] is called. This is the
//! effect the crate uses for the descriptive `log` operations and the inner
//! effect of [`ReaderSync`](super::ReaderSync).
//!
//! # Laws
//!
//! `Sync` satisfies the Functor, Applicative and Monad laws when both sides
//! are compared by their `run` results.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kindred::effect::{Sync, sync};
//!
//! let counter = Rc::new(Cell::new(0));
//! let tick = {
//!     let counter = Rc::clone(&counter);
//!     Sync::new(move || {
//!         counter.set(counter.get() + 1);
//!         counter.get()
//!     })
//! };
//! let doubled = sync::map(tick, |count| count * 2);
//! assert_eq!(counter.get(), 0);
//! assert_eq!(doubled.run(), 2);
//! assert_eq!(doubled.run(), 4);
//! ```

use std::fmt;
use std::rc::Rc;

use super::combinators::{
    apply_combinators, from_sync_combinators, functor_combinators, monad_combinators,
    pointed_combinators,
};
use super::from_sync::FromSync;
use crate::control::NonEmptyVec;
use crate::typeclass::{
    Apply, Bifunctor, Contravariant, Flattenable, Functor, Pointed, Slot, TypeLambda,
};

/// A deferred computation producing `A` each time it is run.
pub struct Sync<A> {
    run_function: Rc<dyn Fn() -> A>,
}

impl<A> Clone for Sync<A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<A> fmt::Debug for Sync<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Sync(<deferred>)")
    }
}

impl<A: 'static> Sync<A> {
    /// Defers `action` until the computation is run.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_function: Rc::new(action),
        }
    }

    /// Runs the computation.
    ///
    /// A `Sync` can be run any number of times; each run executes the whole
    /// chain again.
    #[inline]
    pub fn run(&self) -> A {
        (self.run_function)()
    }

    /// A computation that returns a clone of `value`.
    pub fn succeed(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Sync<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Sync::new(move || function(self.run()))
    }

    /// Runs this computation, then the one `function` builds from its result.
    pub fn flat_map<B, F>(self, function: F) -> Sync<B>
    where
        B: 'static,
        F: Fn(A) -> Sync<B> + 'static,
    {
        Sync::new(move || function(self.run()).run())
    }
}

/// Kind token for [`Sync`]: `Kind<SyncLambda, S, R, W, E, A> = Sync<A>`.
pub struct SyncLambda;

impl TypeLambda for SyncLambda {
    type Kind<S, R, W, E, A> = Sync<A>;
}

impl Functor for SyncLambda {
    fn map<S, R, W, E, A, B, Func>(fa: Sync<A>, function: Func) -> Sync<B>
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

impl Pointed for SyncLambda {
    fn succeed<S, R, W, E, A>(value: A) -> Sync<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        Sync::succeed(value)
    }
}

impl Apply for SyncLambda {
    fn ap<S, R, W, E, A, B>(fab: Sync<crate::typeclass::Arrow<A, B>>, fa: Sync<A>) -> Sync<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        Sync::new(move || {
            let function = fab.run();
            function(fa.run())
        })
    }
}

impl Flattenable for SyncLambda {
    fn flat_map<S, R, W, E, A, B, Func>(fa: Sync<A>, function: Func) -> Sync<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Sync<B> + 'static,
    {
        fa.flat_map(function)
    }
}

/// `Sync` reads no environment, so any requirement is satisfied.
impl Contravariant for SyncLambda {
    fn contramap<S, R, W, E, A, R2, Func>(fa: Sync<A>, _function: Func) -> Sync<A>
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

/// `Sync` cannot fail, so only the value side is mapped.
impl Bifunctor for SyncLambda {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(fea: Sync<A>, _on_error: FE, on_value: FA) -> Sync<B>
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
        fea.map(on_value)
    }
}

impl FromSync for SyncLambda {
    fn from_sync<S, R, W, E, A>(sync: Sync<A>) -> Sync<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        sync
    }
}

functor_combinators!(SyncLambda, [(), (), (), ()], []);
pointed_combinators!(SyncLambda, [(), (), (), ()], []);
apply_combinators!(SyncLambda, [(), (), (), ()], []);
monad_combinators!(SyncLambda, [(), (), (), ()], []);
from_sync_combinators!(SyncLambda, [(), (), (), ()], []);

// Traversals over `Sync` run every element in one loop. Folding through
// `Apply::ap` would nest one thunk per element and recurse that deep on `run`.

/// Runs the computations in order and collects their results.
pub fn sequence_vec<A: Slot>(items: Vec<Sync<A>>) -> Sync<Vec<A>> {
    Sync::new(move || items.iter().map(Sync::run).collect())
}

/// Runs a non-empty sequence of computations in order.
pub fn sequence_non_empty<A: Slot>(items: NonEmptyVec<Sync<A>>) -> Sync<NonEmptyVec<A>> {
    let (head, tail) = items.into_parts();
    Sync::new(move || {
        let first = head.run();
        NonEmptyVec::new(first, tail.iter().map(Sync::run).collect())
    })
}

/// Traverses a vector with indices; empty input succeeds with `vec![]`.
///
/// `function` is called once per element while the traversal is built.
pub fn traverse_vec_with_index<A, B, Func>(items: Vec<A>, mut function: Func) -> Sync<Vec<B>>
where
    B: Slot,
    Func: FnMut(usize, A) -> Sync<B>,
{
    let effects = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect();
    sequence_vec(effects)
}

/// Traverses a vector; empty input succeeds with `vec![]`.
pub fn traverse_vec<A, B, Func>(items: Vec<A>, mut function: Func) -> Sync<Vec<B>>
where
    B: Slot,
    Func: FnMut(A) -> Sync<B>,
{
    traverse_vec_with_index(items, |_, value| function(value))
}

/// Traverses a non-empty sequence with indices.
pub fn traverse_non_empty_with_index<A, B, Func>(
    items: NonEmptyVec<A>,
    mut function: Func,
) -> Sync<NonEmptyVec<B>>
where
    B: Slot,
    Func: FnMut(usize, A) -> Sync<B>,
{
    let mut index = 0;
    sequence_non_empty(items.map(|value| {
        let effect = function(index, value);
        index += 1;
        effect
    }))
}

/// Traverses a non-empty sequence.
pub fn traverse_non_empty<A, B, Func>(items: NonEmptyVec<A>, mut function: Func) -> Sync<NonEmptyVec<B>>
where
    B: Slot,
    Func: FnMut(A) -> Sync<B>,
{
    traverse_non_empty_with_index(items, |_, value| function(value))
}
