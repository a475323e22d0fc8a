//! Const - a value of `W` that ignores its value slot.
//!
//! `Const<W, A>` stores only a `W`; `A` is phantom. Mapping the value side
//! changes the type and nothing else, which makes `Const` the functor behind
//! getters and folds: traversing with a [`FixedConstLambda`] over a monoid
//! combines what each element contributes.
//!
//! Two tokens are provided:
//!
//! - [`ConstLambda`] places `W` in the error slot, so `Bifunctor` maps it.
//! - [`FixedConstLambda<M>`] fixes `W = M`, and is an `Applicative` when `M`
//!   is a `Monoid`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Const, FixedConstLambda};
//! use kindred::typeclass::{Sum, traverse_vec};
//!
//! let total = traverse_vec::<FixedConstLambda<Sum<i32>>, (), (), (), (), i32, (), _>(
//!     vec![1, 2, 3, 4],
//!     |value| Const::make(Sum(value)),
//! );
//! assert_eq!(total.into_inner(), Sum(10));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::typeclass::{
    Apply, Arrow, Bifunctor, Contravariant, Functor, Monoid, Pointed, Semigroup, Slot, TypeLambda,
};

/// A stored `W` tagged with a phantom value type `A`.
pub struct Const<W, A> {
    value: W,
    phantom: PhantomData<fn() -> A>,
}

impl<W, A> Const<W, A> {
    /// Wraps `value`.
    #[inline]
    pub const fn make(value: W) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// The stored value.
    #[inline]
    pub const fn get(&self) -> &W {
        &self.value
    }

    /// Unwraps the stored value.
    #[inline]
    pub fn into_inner(self) -> W {
        self.value
    }

    fn retag<B>(self) -> Const<W, B> {
        Const::make(self.value)
    }

    /// Changes the phantom type; nothing is stored to map.
    pub fn map<B, F>(self, _function: F) -> Const<W, B>
    where
        F: FnOnce(A) -> B,
    {
        self.retag()
    }

    /// Changes the phantom type in the opposite direction.
    pub fn contramap<B, F>(self, _function: F) -> Const<W, B>
    where
        F: FnOnce(B) -> A,
    {
        self.retag()
    }

    /// Maps the stored value and retags the phantom side.
    pub fn map_both<W2, B, FW, FA>(self, on_stored: FW, _on_value: FA) -> Const<W2, B>
    where
        FW: FnOnce(W) -> W2,
        FA: FnOnce(A) -> B,
    {
        Const::make(on_stored(self.value))
    }

    /// Maps the stored value.
    pub fn map_left<W2, F>(self, function: F) -> Const<W2, A>
    where
        F: FnOnce(W) -> W2,
    {
        Const::make(function(self.value))
    }
}

impl<W: Clone, A> Clone for Const<W, A> {
    fn clone(&self) -> Self {
        Self::make(self.value.clone())
    }
}

impl<W: Copy, A> Copy for Const<W, A> {}

impl<W: fmt::Debug, A> fmt::Debug for Const<W, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

impl<W: fmt::Display, A> fmt::Display for Const<W, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "make({})", self.value)
    }
}

impl<W: PartialEq, A> PartialEq for Const<W, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<W: Eq, A> Eq for Const<W, A> {}

impl<W: PartialOrd, A> PartialOrd for Const<W, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<W: Ord, A> Ord for Const<W, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<W: Hash, A> Hash for Const<W, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<W: Semigroup, A> Semigroup for Const<W, A> {
    fn combine(self, other: Self) -> Self {
        Self::make(self.value.combine(other.value))
    }
}

impl<W: Monoid, A> Monoid for Const<W, A> {
    fn empty() -> Self {
        Self::make(W::empty())
    }
}

/// Kind token with the stored value in the error slot:
/// `Kind<ConstLambda, S, R, W, E, A> = Const<E, A>`.
pub struct ConstLambda;

impl TypeLambda for ConstLambda {
    type Kind<S, R, W, E, A> = Const<E, A>;
}

impl Functor for ConstLambda {
    fn map<S, R, W, E, A, B, Func>(fa: Const<E, A>, function: Func) -> Const<E, B>
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

impl Bifunctor for ConstLambda {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(fea: Const<E, A>, on_error: FE, on_value: FA) -> Const<E2, B>
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
        fea.map_both(on_error, on_value)
    }
}

impl Contravariant for ConstLambda {
    fn contramap<S, R, W, E, A, R2, Func>(fa: Const<E, A>, _function: Func) -> Const<E, A>
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

/// Kind token with the stored type fixed to `M`:
/// `Kind<FixedConstLambda<M>, S, R, W, E, A> = Const<M, A>`.
pub struct FixedConstLambda<M>(PhantomData<M>);

impl<M: 'static> TypeLambda for FixedConstLambda<M> {
    type Kind<S, R, W, E, A> = Const<M, A>;
}

impl<M: 'static> Functor for FixedConstLambda<M> {
    fn map<S, R, W, E, A, B, Func>(fa: Const<M, A>, function: Func) -> Const<M, B>
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

/// Combines the stored values, function side first.
impl<M: Semigroup + 'static> Apply for FixedConstLambda<M> {
    fn ap<S, R, W, E, A, B>(fab: Const<M, Arrow<A, B>>, fa: Const<M, A>) -> Const<M, B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        Const::make(fab.into_inner().combine(fa.into_inner()))
    }
}

impl<M: Monoid + 'static> Pointed for FixedConstLambda<M> {
    fn succeed<S, R, W, E, A>(_value: A) -> Const<M, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        Const::make(M::empty())
    }
}

/// Wraps a value.
pub fn make<W, A>(value: W) -> Const<W, A> {
    Const::make(value)
}

/// Changes the phantom value type.
pub fn map<W, A, B, Func>(fa: Const<W, A>, function: Func) -> Const<W, B>
where
    W: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> B + 'static,
{
    ConstLambda::map::<(), (), (), W, A, B, Func>(fa, function)
}

/// `flap` for `Const`: the argument is dropped with the phantom function.
pub fn flap<W, A, B>(value: A, fab: Const<W, Arrow<A, B>>) -> Const<W, B>
where
    W: Slot,
    A: Slot,
    B: Slot,
{
    crate::typeclass::flap::<ConstLambda, (), (), (), W, A, B>(value, fab)
}

/// Maps the stored value and retags the phantom side.
pub fn map_both<W, A, W2, B, FW, FA>(fa: Const<W, A>, on_stored: FW, on_value: FA) -> Const<W2, B>
where
    W: Slot,
    A: Slot,
    W2: Slot,
    B: Slot,
    FW: Fn(W) -> W2 + 'static,
    FA: Fn(A) -> B + 'static,
{
    ConstLambda::map_both::<(), (), (), W, A, W2, B, FW, FA>(fa, on_stored, on_value)
}

/// Maps the stored value.
pub fn map_left<W, A, W2, Func>(fa: Const<W, A>, function: Func) -> Const<W2, A>
where
    W: Slot,
    A: Slot,
    W2: Slot,
    Func: Fn(W) -> W2 + 'static,
{
    crate::typeclass::default_map_left::<ConstLambda, (), (), (), W, A, W2, Func>(fa, function)
}

/// Retags the phantom value type through a function into it.
pub fn contramap<W, A, B, Func>(fa: Const<W, A>, function: Func) -> Const<W, B>
where
    Func: FnOnce(B) -> A,
{
    fa.contramap(function)
}
