//! Pointed type class - lifting a plain value into a kind.

use super::kind::{Kind, Slot, TypeLambda};

/// A type class for kinds that can lift a plain value.
///
/// `Pointed` has no laws of its own; it takes part in the laws of
/// `Applicative` and `Monad`.
pub trait Pointed: TypeLambda {
    /// Lifts `value` into the kind without any effect.
    fn succeed<S, R, W, E, A>(value: A) -> Kind<Self, S, R, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot;
}

/// The identity Kleisli arrow, `|a| succeed(a)`.
pub fn id_kleisli<F, S, R, W, E, A>() -> impl Fn(A) -> Kind<F, S, R, W, E, A>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    |value| F::succeed::<S, R, W, E, A>(value)
}

/// The empty do-notation scope.
pub fn do_<F, S, R, W, E>() -> Kind<F, S, R, W, E, ()>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
{
    F::succeed::<S, R, W, E, ()>(())
}

/// The seed of tuple sequencing; the same value as [`do_`].
pub fn zip<F, S, R, W, E>() -> Kind<F, S, R, W, E, ()>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
{
    do_::<F, S, R, W, E>()
}
