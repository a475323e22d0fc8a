//! Functor type class - mapping over the value slot of a kind.
//!
//! A `Functor` transforms the value carried by an effect without touching its
//! structure: a failed `Either` stays failed, a `Reader` still reads the same
//! environment.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Derived combinators
//!
//! Every function in this module is written once against the token and works
//! for every effect with a `Functor` instance: [`flap`], [`as_`], [`unit`],
//! [`bind_to`], [`tupled`], [`let_`] and [`map_composition`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, Identity, IdentityLambda};
//!
//! let doubled = IdentityLambda::map::<(), (), (), (), i32, i32, _>(Identity(21), |x| x * 2);
//! assert_eq!(doubled, Identity(42));
//! ```

use std::rc::Rc;

use super::kind::{Arrow, Kind, Slot, TypeLambda};
use super::scope::Append;

/// A type class for kinds whose value slot can be mapped.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// map(map(fa, f), g) == map(fa, |x| g(f(x)))
/// ```
pub trait Functor: TypeLambda {
    /// Applies `function` to the value inside `fa`.
    fn map<S, R, W, E, A, B, Func>(
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
        Func: Fn(A) -> B + 'static;
}

/// Applies an already-known argument to an effect-wrapped function.
///
/// ```text
/// flap(a, fab) == map(fab, |f| f(a))
/// ```
pub fn flap<F, S, R, W, E, A, B>(
    value: A,
    fab: Kind<F, S, R, W, E, Arrow<A, B>>,
) -> Kind<F, S, R, W, E, B>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    F::map::<S, R, W, E, Arrow<A, B>, B, _>(fab, move |function| function(value.clone()))
}

/// Replaces the value with a constant.
pub fn as_<F, S, R, W, E, A, B>(fa: Kind<F, S, R, W, E, A>, value: B) -> Kind<F, S, R, W, E, B>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    F::map::<S, R, W, E, A, B, _>(fa, move |_| value.clone())
}

/// Discards the value, keeping the structure.
pub fn unit<F, S, R, W, E, A>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R, W, E, ()>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    as_::<F, S, R, W, E, A, ()>(fa, ())
}

/// Seeds a do-notation scope with a single binding.
pub fn bind_to<F, S, R, W, E, A>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R, W, E, (A,)>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    F::map::<S, R, W, E, A, (A,), _>(fa, |value| (value,))
}

/// Wraps the value in a one-element tuple, the seed of tuple sequencing.
///
/// Same shape as [`bind_to`]; kept under its tuple-sequencing name.
pub fn tupled<F, S, R, W, E, A>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R, W, E, (A,)>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    bind_to::<F, S, R, W, E, A>(fa)
}

/// Appends a pure value computed from the scope so far.
pub fn let_<F, S, R, W, E, T, B, Func>(
    fa: Kind<F, S, R, W, E, T>,
    function: Func,
) -> Kind<F, S, R, W, E, <T as Append<B>>::Output>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    T: Slot + Append<B>,
    B: Slot,
    <T as Append<B>>::Output: Slot,
    Func: Fn(&T) -> B + 'static,
{
    F::map::<S, R, W, E, T, <T as Append<B>>::Output, _>(fa, move |scope| {
        let value = function(&scope);
        scope.append(value)
    })
}

/// Maps through two nested functors `F<G<A>>`.
///
/// `OptionT` and `EitherT` are built from this with `G` fixed to `Option` and
/// `Either`.
pub fn map_composition<F, G, S, R, W, E, GS, GR, GW, GE, A, B, Func>(
    fga: Kind<F, S, R, W, E, Kind<G, GS, GR, GW, GE, A>>,
    function: Func,
) -> Kind<F, S, R, W, E, Kind<G, GS, GR, GW, GE, B>>
where
    F: Functor,
    G: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    GS: Slot,
    GR: Slot,
    GW: Slot,
    GE: Slot,
    A: Slot,
    B: Slot,
    Kind<G, GS, GR, GW, GE, A>: Slot,
    Kind<G, GS, GR, GW, GE, B>: Slot,
    Func: Fn(A) -> B + 'static,
{
    let function = Rc::new(function);
    F::map::<S, R, W, E, Kind<G, GS, GR, GW, GE, A>, Kind<G, GS, GR, GW, GE, B>, _>(
        fga,
        move |ga| {
            let function = Rc::clone(&function);
            G::map::<GS, GR, GW, GE, A, B, _>(ga, move |value| function(value))
        },
    )
}
