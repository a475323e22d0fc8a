//! FromReader - kinds that can read an environment.

use super::reader::Reader;
use crate::typeclass::{Flattenable, Kind, Slot, TypeLambda};

/// A type class for kinds that can embed a [`Reader`] over their requirement.
pub trait FromReader: TypeLambda {
    /// Runs `reader` against the effect's environment.
    fn from_reader<S, R, W, E, A>(reader: Reader<R, A>) -> Kind<Self, S, R, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot;
}

/// Reads the whole environment.
pub fn ask<F, S, R, W, E>() -> Kind<F, S, R, W, E, R>
where
    F: FromReader,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
{
    F::from_reader::<S, R, W, E, R>(Reader::ask())
}

/// Reads a value computed from the environment.
pub fn asks<F, S, R, W, E, A, Func>(function: Func) -> Kind<F, S, R, W, E, A>
where
    F: FromReader,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Func: Fn(R) -> A + 'static,
{
    F::from_reader::<S, R, W, E, A>(Reader::new(function))
}

/// Turns a `Reader`-returning function into one returning the kind.
pub fn lift_reader<F, S, R, W, E, A, B, Func>(function: Func) -> impl Fn(A) -> Kind<F, S, R, W, E, B>
where
    F: FromReader,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: Fn(A) -> Reader<R, B>,
{
    move |value| F::from_reader::<S, R, W, E, B>(function(value))
}

/// Chains a `Reader`-returning function after `fa`.
pub fn flat_map_reader<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, A>,
    function: Func,
) -> Kind<F, S, R, W, E, B>
where
    F: FromReader + Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Reader<R, B> + 'static,
{
    F::flat_map::<S, R, W, E, A, B, _>(fa, move |value| F::from_reader::<S, R, W, E, B>(function(value)))
}
