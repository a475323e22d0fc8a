//! Apply type class - applying an effect-wrapped function to an effect-wrapped value.
//!
//! `Apply` is `Functor` plus `ap`. It combines two *independent* effects: the
//! function side is evaluated first, then the argument side, and their
//! structures are merged by the instance (first failure wins for `Either`,
//! absence wins for `Option`, both read the same environment for `Reader`).
//!
//! # Laws
//!
//! ## Composition Law
//!
//! ```text
//! ap(ap(map(fbc, |bc| |ab| bc ∘ ab), fab), fa) == ap(fbc, ap(fab, fa))
//! ```
//!
//! # Derived combinators
//!
//! [`zip_with`], [`lift2`], [`lift3`], [`zip_left_par`], [`zip_right_par`],
//! [`bind_right`], [`zip_flatten`] and [`ap_composition`] are written once here
//! and reused by every instance.

use std::rc::Rc;

use super::functor::Functor;
use super::kind::{Arrow, Kind, Slot, arrow};
use super::scope::Append;

/// A type class for kinds supporting application of a wrapped function.
pub trait Apply: Functor {
    /// Applies the function inside `fab` to the value inside `fa`.
    ///
    /// `fab` is sequenced before `fa`.
    fn ap<S, R, W, E, A, B>(
        fab: Kind<Self, S, R, W, E, Arrow<A, B>>,
        fa: Kind<Self, S, R, W, E, A>,
    ) -> Kind<Self, S, R, W, E, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot;
}

/// Applies through two nested applies `F<G<_>>`.
pub fn ap_composition<F, G, S, R, W, E, GS, GR, GW, GE, A, B>(
    fgab: Kind<F, S, R, W, E, Kind<G, GS, GR, GW, GE, Arrow<A, B>>>,
    fga: Kind<F, S, R, W, E, Kind<G, GS, GR, GW, GE, A>>,
) -> Kind<F, S, R, W, E, Kind<G, GS, GR, GW, GE, B>>
where
    F: Apply,
    G: Apply,
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
    Kind<G, GS, GR, GW, GE, Arrow<A, B>>: Slot,
    Kind<G, GS, GR, GW, GE, A>: Slot,
    Kind<G, GS, GR, GW, GE, B>: Slot,
{
    let lifted = F::map::<
        S,
        R,
        W,
        E,
        Kind<G, GS, GR, GW, GE, Arrow<A, B>>,
        Arrow<Kind<G, GS, GR, GW, GE, A>, Kind<G, GS, GR, GW, GE, B>>,
        _,
    >(fgab, |gab| {
        arrow(move |ga: Kind<G, GS, GR, GW, GE, A>| {
            G::ap::<GS, GR, GW, GE, A, B>(gab.clone(), ga)
        })
    });
    F::ap::<S, R, W, E, Kind<G, GS, GR, GW, GE, A>, Kind<G, GS, GR, GW, GE, B>>(lifted, fga)
}

/// Combines two effects with a binary function, `fa` first.
pub fn zip_with<F, S, R, W, E, A, B, C, Func>(
    fa: Kind<F, S, R, W, E, A>,
    fb: Kind<F, S, R, W, E, B>,
    function: Func,
) -> Kind<F, S, R, W, E, C>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    C: Slot,
    Func: Fn(A, B) -> C + 'static,
{
    let function = Rc::new(function);
    let partial = F::map::<S, R, W, E, A, Arrow<B, C>, _>(fa, move |a| {
        let function = Rc::clone(&function);
        arrow(move |b: B| function(a.clone(), b))
    });
    F::ap::<S, R, W, E, B, C>(partial, fb)
}

/// Lifts a binary function into the kind.
pub fn lift2<F, S, R, W, E, A, B, C, Func>(
    function: Func,
) -> impl Fn(Kind<F, S, R, W, E, A>, Kind<F, S, R, W, E, B>) -> Kind<F, S, R, W, E, C>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    C: Slot,
    Func: Fn(A, B) -> C + 'static,
{
    let function = Rc::new(function);
    move |fa, fb| {
        let function = Rc::clone(&function);
        zip_with::<F, S, R, W, E, A, B, C, _>(fa, fb, move |a, b| function(a, b))
    }
}

/// Lifts a ternary function into the kind.
pub fn lift3<F, S, R, W, E, A, B, C, D, Func>(
    function: Func,
) -> impl Fn(
    Kind<F, S, R, W, E, A>,
    Kind<F, S, R, W, E, B>,
    Kind<F, S, R, W, E, C>,
) -> Kind<F, S, R, W, E, D>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    C: Slot,
    D: Slot,
    Func: Fn(A, B, C) -> D + 'static,
{
    let function = Rc::new(function);
    move |fa, fb, fc| {
        let function = Rc::clone(&function);
        let curried = F::map::<S, R, W, E, A, Arrow<B, Arrow<C, D>>, _>(fa, move |a| {
            let function = Rc::clone(&function);
            arrow(move |b: B| {
                let function = Rc::clone(&function);
                let a = a.clone();
                arrow(move |c: C| function(a.clone(), b.clone(), c))
            })
        });
        let applied = F::ap::<S, R, W, E, B, Arrow<C, D>>(curried, fb);
        F::ap::<S, R, W, E, C, D>(applied, fc)
    }
}

/// Runs both effects and keeps the value of the first.
pub fn zip_left_par<F, S, R, W, E, A, B>(
    fa: Kind<F, S, R, W, E, A>,
    fb: Kind<F, S, R, W, E, B>,
) -> Kind<F, S, R, W, E, A>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    zip_with::<F, S, R, W, E, A, B, A, _>(fa, fb, |a, _| a)
}

/// Runs both effects and keeps the value of the second.
pub fn zip_right_par<F, S, R, W, E, A, B>(
    fa: Kind<F, S, R, W, E, A>,
    fb: Kind<F, S, R, W, E, B>,
) -> Kind<F, S, R, W, E, B>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    zip_with::<F, S, R, W, E, A, B, B, _>(fa, fb, |_, b| b)
}

/// Appends the value of an independent effect to a do-notation scope.
pub fn bind_right<F, S, R, W, E, T, B>(
    fa: Kind<F, S, R, W, E, T>,
    fb: Kind<F, S, R, W, E, B>,
) -> Kind<F, S, R, W, E, <T as Append<B>>::Output>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    T: Slot + Append<B>,
    B: Slot,
    <T as Append<B>>::Output: Slot,
{
    zip_with::<F, S, R, W, E, T, B, <T as Append<B>>::Output, _>(fa, fb, |scope, value| {
        scope.append(value)
    })
}

/// Appends the value of `fb` to the tuple produced by `fa`.
pub fn zip_flatten<F, S, R, W, E, T, B>(
    fa: Kind<F, S, R, W, E, T>,
    fb: Kind<F, S, R, W, E, B>,
) -> Kind<F, S, R, W, E, <T as Append<B>>::Output>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    T: Slot + Append<B>,
    B: Slot,
    <T as Append<B>>::Output: Slot,
{
    bind_right::<F, S, R, W, E, T, B>(fa, fb)
}
