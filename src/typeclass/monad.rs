//! Flattenable and Monad type classes - sequencing dependent computations.
//!
//! `Flattenable` adds `flat_map` to `Functor`: the continuation sees the
//! value of the first effect and chooses the second. `Monad` is
//! `Flattenable + Pointed` and is blanket-implemented.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(succeed(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(m, succeed) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Flattenable, Identity, IdentityLambda};
//!
//! let result = IdentityLambda::flat_map::<(), (), (), (), i32, i32, _>(Identity(20), |x| {
//!     Identity(x + 22)
//! });
//! assert_eq!(result, Identity(42));
//! ```

use std::rc::Rc;

use super::functor::Functor;
use super::kind::{Arrow, Kind, Slot};
use super::pointed::Pointed;
use super::scope::Append;

/// A type class for kinds whose values can feed a dependent continuation.
pub trait Flattenable: Functor {
    /// Runs `fa`, then the effect that `function` builds from its value.
    fn flat_map<S, R, W, E, A, B, Func>(
        fa: Kind<Self, S, R, W, E, A>,
        function: Func,
    ) -> Kind<Self, S, R, W, E, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Kind<Self, S, R, W, E, B> + 'static;
}

/// A flattenable kind that can also lift plain values.
pub trait Monad: Flattenable + Pointed {}

impl<F: Flattenable + Pointed> Monad for F {}

/// Extends a do-notation scope with the value of a dependent effect.
pub fn bind<F, S, R, W, E, T, B, Func>(
    fa: Kind<F, S, R, W, E, T>,
    function: Func,
) -> Kind<F, S, R, W, E, <T as Append<B>>::Output>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    T: Slot + Append<B>,
    B: Slot,
    <T as Append<B>>::Output: Slot,
    Func: Fn(&T) -> Kind<F, S, R, W, E, B> + 'static,
{
    let function = Rc::new(function);
    F::flat_map::<S, R, W, E, T, <T as Append<B>>::Output, _>(fa, move |scope| {
        let next = function(&scope);
        F::map::<S, R, W, E, B, <T as Append<B>>::Output, _>(next, move |value| {
            scope.clone().append(value)
        })
    })
}

/// Runs a dependent effect for its structure and keeps the original value.
pub fn tap<F, S, R, W, E, A, B, Func>(
    fa: Kind<F, S, R, W, E, A>,
    function: Func,
) -> Kind<F, S, R, W, E, A>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Kind<F, S, R, W, E, B> + 'static,
{
    let function = Rc::new(function);
    F::flat_map::<S, R, W, E, A, A, _>(fa, move |value| {
        let next = function(value.clone());
        F::map::<S, R, W, E, B, A, _>(next, move |_| value.clone())
    })
}

/// Sequences two effects and keeps the value of the first.
pub fn zip_left<F, S, R, W, E, A, B>(
    first: Kind<F, S, R, W, E, A>,
    second: Kind<F, S, R, W, E, B>,
) -> Kind<F, S, R, W, E, A>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Kind<F, S, R, W, E, B>: Slot,
{
    F::flat_map::<S, R, W, E, A, A, _>(first, move |value| {
        F::map::<S, R, W, E, B, A, _>(second.clone(), move |_| value.clone())
    })
}

/// Sequences two effects and keeps the value of the second.
pub fn zip_right<F, S, R, W, E, A, B>(
    first: Kind<F, S, R, W, E, A>,
    second: Kind<F, S, R, W, E, B>,
) -> Kind<F, S, R, W, E, B>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Kind<F, S, R, W, E, B>: Slot,
{
    F::flat_map::<S, R, W, E, A, B, _>(first, move |_| second.clone())
}

/// Removes one level of nesting.
pub fn flatten<F, S, R, W, E, A>(
    ffa: Kind<F, S, R, W, E, Kind<F, S, R, W, E, A>>,
) -> Kind<F, S, R, W, E, A>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Kind<F, S, R, W, E, A>: Slot,
{
    F::flat_map::<S, R, W, E, Kind<F, S, R, W, E, A>, A, _>(ffa, |fa| fa)
}

/// Composes two Kleisli arrows left to right.
pub fn compose_kleisli<F, S, R, W, E, A, B, C, First, Second>(
    first: First,
    second: Second,
) -> impl Fn(A) -> Kind<F, S, R, W, E, C>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    C: Slot,
    First: Fn(A) -> Kind<F, S, R, W, E, B> + 'static,
    Second: Fn(B) -> Kind<F, S, R, W, E, C> + 'static,
{
    let second = Rc::new(second);
    move |value| {
        let second = Rc::clone(&second);
        F::flat_map::<S, R, W, E, B, C, _>(first(value), move |b| second(b))
    }
}

/// `ap` written in terms of `flat_map`.
///
/// Sequential: `fab` runs to completion before `fa` starts, which is exactly
/// the order of `Apply::ap` for every instance in this crate.
pub fn ap<F, S, R, W, E, A, B>(
    fab: Kind<F, S, R, W, E, Arrow<A, B>>,
    fa: Kind<F, S, R, W, E, A>,
) -> Kind<F, S, R, W, E, B>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Kind<F, S, R, W, E, A>: Slot,
{
    F::flat_map::<S, R, W, E, Arrow<A, B>, B, _>(fab, move |function| {
        F::map::<S, R, W, E, A, B, _>(fa.clone(), move |value| function(value))
    })
}
