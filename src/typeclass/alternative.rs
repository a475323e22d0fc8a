//! Alt, Plus and Alternative type classes - choice between computations.
//!
//! `Alt` picks the first successful computation, evaluating the fallback
//! only when needed. `Plus` adds `zero`, the computation that always fails,
//! and `Alternative` joins `Plus` with `Applicative`.
//!
//! # Laws
//!
//! ## Associativity (Alt)
//!
//! ```text
//! alt(alt(a, || b), || c) == alt(a, || alt(b, || c))
//! ```
//!
//! ## Distributivity over map (Alt)
//!
//! ```text
//! map(alt(a, || b), f) == alt(map(a, f), || map(b, f))
//! ```
//!
//! ## Identity (Plus)
//!
//! ```text
//! alt(zero(), || a) == a
//! alt(a, || zero()) == a
//! ```
//!
//! ## Distributivity (Alternative)
//!
//! ```text
//! ap(alt(fab, || gab), fa) == alt(ap(fab, fa), || ap(gab, fa))
//! ```
//!
//! ## Annihilation (Alternative)
//!
//! ```text
//! ap(zero(), fa) == zero()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Alt, Plus};
//! use kindred::effect::OptionLambda;
//!
//! let first: Option<i32> = OptionLambda::zero::<(), (), (), (), i32>();
//! let chosen = OptionLambda::alt::<(), (), (), (), i32, _>(first, || Some(7));
//! assert_eq!(chosen, Some(7));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::kind::{Kind, Slot};

/// A type class for kinds with a left-biased choice.
pub trait Alt: Functor {
    /// Returns `first` if it succeeded, otherwise the computation built by
    /// `second`. `second` is not invoked when `first` succeeds.
    fn alt<S, R, W, E, A, Second>(
        first: Kind<Self, S, R, W, E, A>,
        second: Second,
    ) -> Kind<Self, S, R, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        Second: Fn() -> Kind<Self, S, R, W, E, A> + 'static;
}

/// An `Alt` with an identity element.
pub trait Plus: Alt {
    /// The computation that always fails.
    fn zero<S, R, W, E, A>() -> Kind<Self, S, R, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot;
}

/// A kind that is both `Applicative` and `Plus`.
pub trait Alternative: Applicative + Plus {}

impl<F: Applicative + Plus> Alternative for F {}

/// Succeeds with `()` when `condition` holds, otherwise `zero`.
pub fn guard<F, S, R, W, E>(condition: bool) -> Kind<F, S, R, W, E, ()>
where
    F: Alternative,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
{
    if condition {
        F::succeed::<S, R, W, E, ()>(())
    } else {
        F::zero::<S, R, W, E, ()>()
    }
}

/// Folds a list of alternatives with `alt`, starting from `zero`.
pub fn alt_all<F, S, R, W, E, A, I>(alternatives: I) -> Kind<F, S, R, W, E, A>
where
    F: Plus,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Kind<F, S, R, W, E, A>: Slot,
    I: IntoIterator<Item = Kind<F, S, R, W, E, A>>,
{
    alternatives
        .into_iter()
        .fold(F::zero::<S, R, W, E, A>(), |accumulated, next| {
            F::alt::<S, R, W, E, A, _>(accumulated, move || next.clone())
        })
}
