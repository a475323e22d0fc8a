//! Reader - computations that depend on an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step; nothing runs until [`Reader::run`].
//!
//! # Laws
//!
//! Besides the Functor, Applicative and Monad laws:
//!
//! - Ask retrieval: `Reader::ask().run(r) == r`
//! - Local identity: `local(m, |r| r) == m`
//! - Local composition: `local(local(m, g), f) == local(m, |r| g(f(r)))`
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Reader, reader};
//!
//! #[derive(Clone)]
//! struct Config { port: u16, host: String }
//!
//! let host = reader::asks(|config: Config| config.host);
//! let port = reader::asks(|config: Config| config.port);
//! let address = reader::zip_with(host, port, |host, port| format!("{host}:{port}"));
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::fmt;
use std::rc::Rc;

use super::combinators::{
    apply_combinators, from_reader_combinators, functor_combinators, monad_combinators,
    pointed_combinators,
};
use super::from_reader::FromReader;
use crate::control::NonEmptyVec;
use crate::typeclass::{
    Apply, Arrow, Bifunctor, Contravariant, Flattenable, Functor, Pointed, Slot, TypeLambda,
};

/// A computation that reads an environment `R` and produces `A`.
pub struct Reader<R, A> {
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Wraps a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation in `environment`.
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// assert_eq!(reader.run(0), 1);
    /// ```
    #[inline]
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores the environment.
    pub fn succeed(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Runs this reader, then the reader `function` builds from its result,
    /// both in the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        Reader::new(move |environment: R| {
            let value = self.run(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs this reader in an environment derived from a wider one.
    pub fn local<R2, F>(self, function: F) -> Reader<R2, A>
    where
        R2: 'static,
        F: Fn(R2) -> R + 'static,
    {
        Reader::new(move |environment| self.run(function(environment)))
    }
}

impl<R: 'static> Reader<R, R> {
    /// A reader that returns the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

/// Kind token for [`Reader`]: `Kind<ReaderLambda, S, R, W, E, A> = Reader<R, A>`.
pub struct ReaderLambda;

impl TypeLambda for ReaderLambda {
    type Kind<S, R, W, E, A> = Reader<R, A>;
}

impl Functor for ReaderLambda {
    fn map<S, R, W, E, A, B, Func>(fa: Reader<R, A>, function: Func) -> Reader<R, B>
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

impl Pointed for ReaderLambda {
    fn succeed<S, R, W, E, A>(value: A) -> Reader<R, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        Reader::succeed(value)
    }
}

impl Apply for ReaderLambda {
    fn ap<S, R, W, E, A, B>(fab: Reader<R, Arrow<A, B>>, fa: Reader<R, A>) -> Reader<R, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        Reader::new(move |environment: R| {
            let function = fab.run(environment.clone());
            function(fa.run(environment))
        })
    }
}

impl Flattenable for ReaderLambda {
    fn flat_map<S, R, W, E, A, B, Func>(fa: Reader<R, A>, function: Func) -> Reader<R, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Reader<R, B> + 'static,
    {
        fa.flat_map(function)
    }
}

impl Contravariant for ReaderLambda {
    fn contramap<S, R, W, E, A, R2, Func>(fa: Reader<R, A>, function: Func) -> Reader<R2, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        R2: Slot,
        Func: Fn(R2) -> R + 'static,
    {
        fa.local(function)
    }
}

/// `Reader` cannot fail, so only the value side is mapped.
impl Bifunctor for ReaderLambda {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(fea: Reader<R, A>, _on_error: FE, on_value: FA) -> Reader<R, B>
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

impl FromReader for ReaderLambda {
    fn from_reader<S, R, W, E, A>(reader: Reader<R, A>) -> Reader<R, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        reader
    }
}

functor_combinators!(ReaderLambda, [(), R, (), ()], [R]);
pointed_combinators!(ReaderLambda, [(), R, (), ()], [R]);
apply_combinators!(ReaderLambda, [(), R, (), ()], [R]);
monad_combinators!(ReaderLambda, [(), R, (), ()], [R]);
from_reader_combinators!(ReaderLambda, [(), R, (), ()], [R]);

/// Runs every reader against the environment, in order.
pub fn sequence_vec<R: Slot, A: Slot>(items: Vec<Reader<R, A>>) -> Reader<R, Vec<A>> {
    Reader::new(move |environment: R| items.iter().map(|reader| reader.run(environment.clone())).collect())
}

/// Traverses a vector with indices; empty input succeeds with `vec![]`.
pub fn traverse_vec_with_index<R, A, B, Func>(items: Vec<A>, mut function: Func) -> Reader<R, Vec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> Reader<R, B>,
{
    let readers = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect();
    sequence_vec(readers)
}

/// Traverses a vector; empty input succeeds with `vec![]`.
pub fn traverse_vec<R, A, B, Func>(items: Vec<A>, mut function: Func) -> Reader<R, Vec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(A) -> Reader<R, B>,
{
    traverse_vec_with_index(items, |_, value| function(value))
}

/// Traverses a non-empty sequence with indices.
pub fn traverse_non_empty_with_index<R, A, B, Func>(
    items: NonEmptyVec<A>,
    mut function: Func,
) -> Reader<R, NonEmptyVec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> Reader<R, B>,
{
    let mut index = 0;
    let (head, tail) = items
        .map(|value| {
            let reader = function(index, value);
            index += 1;
            reader
        })
        .into_parts();
    Reader::new(move |environment: R| {
        let first = head.run(environment.clone());
        NonEmptyVec::new(first, tail.iter().map(|reader| reader.run(environment.clone())).collect())
    })
}

/// Traverses a non-empty sequence.
pub fn traverse_non_empty<R, A, B, Func>(items: NonEmptyVec<A>, mut function: Func) -> Reader<R, NonEmptyVec<B>>
where
    R: Slot,
    B: Slot,
    Func: FnMut(A) -> Reader<R, B>,
{
    traverse_non_empty_with_index(items, |_, value| function(value))
}

/// Runs `fa` in an environment derived from a wider one.
pub fn local<R, R2, A, Func>(fa: Reader<R, A>, function: Func) -> Reader<R2, A>
where
    R: Slot,
    R2: Slot,
    A: Slot,
    Func: Fn(R2) -> R + 'static,
{
    fa.local(function)
}
