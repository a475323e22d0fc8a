//! Option instances - `None` is the failure that short-circuits.
//!
//! [`OptionLambda`] makes the standard `Option` a kind:
//! `Kind<OptionLambda, S, R, W, E, A> = Option<A>`. It is an `Alternative`
//! (`zero` is `None`, `alt` keeps the first `Some`) and a `FromEither` that
//! drops the error of a `Left`.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::option;
//!
//! let parsed = option::traverse_vec(vec!["1", "2", "3"], |text| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let rejected = option::traverse_vec(vec!["1", "x"], |text| text.parse::<i32>().ok());
//! assert_eq!(rejected, None);
//! ```

use super::combinators::{
    apply_combinators, functor_combinators, monad_combinators, pointed_combinators,
    traversal_combinators,
};
use crate::control::Either;
use crate::typeclass::{
    Alt, Apply, Arrow, Bifunctor, Contravariant, Flattenable, FromEither, Functor, Plus, Pointed,
    Slot, TypeLambda,
};

/// Kind token for `Option`.
pub struct OptionLambda;

impl TypeLambda for OptionLambda {
    type Kind<S, R, W, E, A> = Option<A>;
}

impl Functor for OptionLambda {
    fn map<S, R, W, E, A, B, Func>(fa: Option<A>, function: Func) -> Option<B>
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

impl Pointed for OptionLambda {
    fn succeed<S, R, W, E, A>(value: A) -> Option<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        Some(value)
    }
}

impl Apply for OptionLambda {
    fn ap<S, R, W, E, A, B>(fab: Option<Arrow<A, B>>, fa: Option<A>) -> Option<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        let function = fab?;
        fa.map(|value| function(value))
    }
}

impl Flattenable for OptionLambda {
    fn flat_map<S, R, W, E, A, B, Func>(fa: Option<A>, function: Func) -> Option<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

impl Alt for OptionLambda {
    fn alt<S, R, W, E, A, Second>(first: Option<A>, second: Second) -> Option<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        Second: Fn() -> Option<A> + 'static,
    {
        first.or_else(second)
    }
}

impl Plus for OptionLambda {
    fn zero<S, R, W, E, A>() -> Option<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        None
    }
}

/// A `Left` becomes `None`; its error is discarded.
impl FromEither for OptionLambda {
    fn from_either<S, R, W, E, A>(either: Either<E, A>) -> Option<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        either.right()
    }
}

impl Contravariant for OptionLambda {
    fn contramap<S, R, W, E, A, R2, Func>(fa: Option<A>, _function: Func) -> Option<A>
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

/// `None` carries no error, so only the value side is mapped.
impl Bifunctor for OptionLambda {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(fea: Option<A>, _on_error: FE, on_value: FA) -> Option<B>
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

functor_combinators!(OptionLambda, [(), (), (), ()], []);
pointed_combinators!(OptionLambda, [(), (), (), ()], []);
apply_combinators!(OptionLambda, [(), (), (), ()], []);
monad_combinators!(OptionLambda, [(), (), (), ()], []);
traversal_combinators!(OptionLambda, [(), (), (), ()], []);

/// `Some(value)` if `predicate` holds, otherwise `None`.
pub fn from_predicate<A, Predicate>(value: A, predicate: Predicate) -> Option<A>
where
    A: Slot,
    Predicate: FnOnce(&A) -> bool,
{
    crate::typeclass::from_predicate::<OptionLambda, (), (), (), (), A, _, _>(value, predicate, |_| ())
}

/// The narrowed value, or `None` if `refinement` rejects the input.
pub fn from_refinement<C, B, Refinement>(value: C, refinement: Refinement) -> Option<B>
where
    B: Slot,
    Refinement: FnOnce(C) -> Result<B, C>,
{
    crate::typeclass::from_refinement::<OptionLambda, (), (), (), (), C, B, _, _>(value, refinement, |_| ())
}

/// The first `Some`, trying `second` only when `first` is `None`.
pub fn alt<A, Second>(first: Option<A>, second: Second) -> Option<A>
where
    A: Slot,
    Second: Fn() -> Option<A> + 'static,
{
    OptionLambda::alt::<(), (), (), (), A, Second>(first, second)
}

/// `None`.
pub fn zero<A: Slot>() -> Option<A> {
    OptionLambda::zero::<(), (), (), (), A>()
}

/// `Some(())` when `condition` holds.
pub fn guard(condition: bool) -> Option<()> {
    crate::typeclass::guard::<OptionLambda, (), (), (), ()>(condition)
}

/// Keeps a `Some` only if `predicate` holds.
pub fn filter<A, Predicate>(fa: Option<A>, predicate: Predicate) -> Option<A>
where
    A: Slot,
    Predicate: Fn(&A) -> bool + 'static,
{
    crate::typeclass::filter::<OptionLambda, (), (), (), (), A, _, _>(fa, predicate, |_| ())
}
