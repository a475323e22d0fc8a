//! # kindred
//!
//! Kind-encoded type classes, derived combinators and monad transformers for
//! composing effects.
//!
//! ## Overview
//!
//! Rust has no higher-kinded types, so this crate encodes an unapplied type
//! constructor as a zero-sized *kind token* whose generic associated type
//! maps a slot assignment to a concrete type. On top of that encoding:
//!
//! - **Type classes**: Functor, Pointed, Apply, Applicative, Flattenable
//!   (Monad), Bifunctor, Contravariant, Alt, Plus, Alternative, FromEither,
//!   each implemented by tokens
//! - **Derived combinators**: `flap`, `zip_with`, `bind`, `tap`,
//!   `traverse_vec`, `filter` and the rest, written once as free functions
//!   over the token
//! - **Effects**: `Sync`, `Reader`, `Option`, `Either`, `Const`
//! - **Transformers**: `ReaderT`, `OptionT`, `EitherT`, and the composites
//!   `ReaderSync` and `ReaderSyncEither` built from them
//! - **Utilities**: `Either`, `NonEmptyVec`, `Order`, `Semigroup`,
//!   `Monoid`, and the `pipe!`, `flow!` and `eff!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: kind encoding, type classes and derived combinators
//! - `control`: `Either` and `NonEmptyVec`
//! - `compose`: `pipe!`, `flow!` and function helpers
//! - `effect`: concrete effects and `eff!`
//! - `transformer`: `ReaderT`, `OptionT`, `EitherT` and the composites
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! #[derive(Clone)]
//! struct Config { limit: u32 }
//!
//! let within_limit = |value: u32| {
//!     reader_sync_either::flat_map(
//!         reader_sync_either::asks::<Config, String, u32, _>(|config: Config| config.limit),
//!         move |limit| {
//!             reader_sync_either::from_predicate(value, move |value| *value <= limit, |value| {
//!                 format!("{value} exceeds the limit")
//!             })
//!         },
//!     )
//! };
//!
//! let checked = reader_sync_either::traverse_vec(vec![1, 5, 9], within_limit);
//! assert_eq!(checked.run(Config { limit: 10 }).run(), Either::Right(vec![1, 5, 9]));
//! assert_eq!(
//!     checked.run(Config { limit: 4 }).run(),
//!     Either::Left("5 exceeds the limit".to_string())
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::needless_pass_by_value)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
///
/// assert_eq!(option::zip_with(Some(1), Some(2), |a, b| a + b), Some(3));
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
