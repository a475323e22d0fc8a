//! Kind encoding - unapplied type constructors through Generic Associated Types.
//!
//! Rust cannot abstract over an unapplied type constructor such as `Option<_>`
//! or "a function from an environment to a deferred value". This module
//! defunctionalizes such constructors: a zero-sized *kind token* stands in for
//! the constructor, and its generic associated type [`TypeLambda::Kind`] is the
//! lookup from a full slot assignment to the concrete type.
//!
//! Every token has five slots:
//!
//! | Slot | Name          | Variance      | Mapped with               |
//! |------|---------------|---------------|---------------------------|
//! | `S`  | Static        | invariant     | nothing                   |
//! | `R`  | Requirement   | contravariant | `Contravariant::contramap` |
//! | `W`  | Write         | covariant     | instance specific         |
//! | `E`  | Error         | covariant     | `Bifunctor::map_both`      |
//! | `A`  | Value         | covariant     | `Functor::map`             |
//!
//! A token is free to ignore slots: the `Option` token ignores everything but
//! `A`, the `Reader` token reads `R` and `A`.
//!
//! # Inference
//!
//! A projection `<F as TypeLambda>::Kind<S, R, W, E, A>` is not injective, so
//! Rust cannot recover the slots from a value's type. Generic code therefore
//! names the slots explicitly (`F::map::<S, R, W, E, A, B, _>`), and every
//! concrete effect module exports monomorphic wrappers whose signatures infer
//! normally.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Kind, TypeLambda};
//!
//! struct VecLambda;
//!
//! impl TypeLambda for VecLambda {
//!     type Kind<S, R, W, E, A> = Vec<A>;
//! }
//!
//! let values: Kind<VecLambda, (), (), (), (), i32> = vec![1, 2, 3];
//! assert_eq!(values.len(), 3);
//! ```

use std::rc::Rc;

/// A token describing an unapplied five-slot type constructor.
///
/// Implementors are zero-sized marker types. Applying the token to the same
/// slot assignment always yields the same concrete type, because an
/// associated type projection is a function of its inputs.
///
/// # Laws
///
/// ## Determinism
///
/// ```text
/// Kind<F, S, R, W, E, A> == Kind<F, S, R, W, E, A>
/// ```
///
/// This holds by construction and is checked by the compile-time signature
/// tests.
pub trait TypeLambda: 'static {
    /// The concrete type for a full slot assignment.
    type Kind<S, R, W, E, A>;
}

/// Applies a kind token to a full slot assignment.
pub type Kind<F, S, R, W, E, A> = <F as TypeLambda>::Kind<S, R, W, E, A>;

/// Bound shared by every slot type.
///
/// Effect values are re-runnable closures stored behind `Rc`, so every type
/// flowing through a slot must be cloneable and own its data.
pub trait Slot: Clone + 'static {}

impl<T: Clone + 'static> Slot for T {}

/// A function stored inside an effect, such as the argument of `ap`.
pub type Arrow<A, B> = Rc<dyn Fn(A) -> B>;

/// Wraps a closure into an [`Arrow`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::arrow;
///
/// let increment = arrow(|value: i32| value + 1);
/// assert_eq!(increment(41), 42);
/// ```
#[inline]
pub fn arrow<A, B, Func>(function: Func) -> Arrow<A, B>
where
    Func: Fn(A) -> B + 'static,
{
    Rc::new(function)
}
