//! FromSync - kinds that can embed a deferred [`Sync`] computation.
//!
//! The derived `log` and `log_error` build a `Sync` that emits a `tracing`
//! event with target `kindred` each time the surrounding effect runs.
//! Building the effect logs nothing.

use super::sync::Sync;
use crate::typeclass::{Flattenable, Kind, Slot, TypeLambda};

/// A type class for kinds that can embed a [`Sync`].
pub trait FromSync: TypeLambda {
    /// Runs `sync` as part of the effect, keeping its result as the value.
    fn from_sync<S, R, W, E, A>(sync: Sync<A>) -> Kind<Self, S, R, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot;
}

/// An effect that emits an info-level event when run.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::{SyncLambda, log};
///
/// let announce = log::<SyncLambda, (), (), (), ()>("starting");
/// announce.run();
/// ```
pub fn log<F, S, R, W, E>(message: impl Into<String>) -> Kind<F, S, R, W, E, ()>
where
    F: FromSync,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
{
    let message = message.into();
    F::from_sync::<S, R, W, E, ()>(Sync::new(move || {
        tracing::info!(target: "kindred", "{message}");
    }))
}

/// An effect that emits an error-level event when run.
pub fn log_error<F, S, R, W, E>(message: impl Into<String>) -> Kind<F, S, R, W, E, ()>
where
    F: FromSync,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
{
    let message = message.into();
    F::from_sync::<S, R, W, E, ()>(Sync::new(move || {
        tracing::error!(target: "kindred", "{message}");
    }))
}

/// Turns a `Sync`-returning function into one returning the kind.
pub fn lift_sync<F, S, R, W, E, A, B, Func>(function: Func) -> impl Fn(A) -> Kind<F, S, R, W, E, B>
where
    F: FromSync,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: Fn(A) -> Sync<B>,
{
    move |value| F::from_sync::<S, R, W, E, B>(function(value))
}

/// Chains a `Sync`-returning function after `fa`.
pub fn flat_map_sync<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, A>,
    function: Func,
) -> Kind<F, S, R, W, E, B>
where
    F: FromSync + Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Sync<B> + 'static,
{
    F::flat_map::<S, R, W, E, A, B, _>(fa, move |value| F::from_sync::<S, R, W, E, B>(function(value)))
}
