//! Type classes over kind tokens.
//!
//! Rust cannot abstract over an unapplied type constructor, so every type
//! class here is implemented by a zero-sized *kind token* (see [`TypeLambda`])
//! and every method names the five slots of the kind it works on.
//!
//! ## Primitive type classes
//!
//! - [`Functor`] (`map`), [`Pointed`] (`succeed`)
//! - [`Apply`] (`ap`), [`Applicative`] (`Apply + Pointed`)
//! - [`Flattenable`] (`flat_map`), [`Monad`] (`Flattenable + Pointed`)
//! - [`Bifunctor`] (`map_both`), [`Contravariant`] (`contramap`)
//! - [`Alt`] (`alt`), [`Plus`] (`zero`), [`Alternative`]
//! - [`FromEither`] (`from_either`)
//!
//! ## Derived combinators
//!
//! Everything else is a free function written once against the token and
//! shared by every instance: `flap`, `bind`, `zip_with`, `tap`,
//! `traverse_vec`, `filter` and so on. The merged-channel forms in
//! [`zip_with_merged`] and friends combine effects whose requirement or error
//! types differ.
//!
//! ## Algebraic structures
//!
//! - [`Semigroup`], [`Monoid`], and the wrappers [`Sum`], [`Product`],
//!   [`Max`], [`Min`]
//! - [`Order`], a first-class total ordering used by [`sort`]
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Functor, Identity, IdentityLambda, bind, bind_to};
//!
//! let scope = bind_to::<IdentityLambda, (), (), (), (), i32>(Identity(1));
//! let scope = bind::<IdentityLambda, (), (), (), (), (i32,), i32, _>(scope, |(a,)| Identity(a + 1));
//! let total = IdentityLambda::map::<(), (), (), (), (i32, i32), i32, _>(scope, |(a, b)| a + b);
//! assert_eq!(total, Identity(3));
//! ```

mod alternative;
mod applicative;
mod apply;
mod bifunctor;
mod channel;
mod contravariant;
mod from_either;
mod functor;
mod identity;
mod kind;
mod monad;
mod monoid;
mod order;
mod pointed;
mod scope;
mod semigroup;
mod traversable;
mod wrappers;

pub use alternative::{Alt, Alternative, Plus, alt_all, guard};
pub use applicative::Applicative;
pub use apply::{
    Apply, ap_composition, bind_right, lift2, lift3, zip_flatten, zip_left_par, zip_right_par,
    zip_with,
};
pub use bifunctor::{Bifunctor, default_map, default_map_left};
pub use channel::{ap_merged, flat_map_merged, widen_error, widen_requirement, zip_with_merged};
pub use contravariant::Contravariant;
pub use from_either::{
    FromEither, filter, flat_map_either_k, flat_map_option_k, from_either_k, from_option,
    from_option_k, from_predicate, from_refinement, refine,
};
pub use functor::{Functor, as_, bind_to, flap, let_, map_composition, tupled, unit};
pub use identity::{Identity, IdentityLambda};
pub use kind::{Arrow, Kind, Slot, TypeLambda, arrow};
pub use monad::{Flattenable, Monad, ap, bind, compose_kleisli, flatten, tap, zip_left, zip_right};
pub use monoid::Monoid;
pub use order::{Order, sort, sort_by};
pub use pointed::{Pointed, do_, id_kleisli, zip};
pub use scope::Append;
pub use semigroup::Semigroup;
pub use traversable::{
    sequence_non_empty, sequence_vec, traverse_non_empty, traverse_non_empty_with_index,
    traverse_vec, traverse_vec_with_index,
};
pub use wrappers::{Bounded, Max, Min, Numeric, Product, Sum};
