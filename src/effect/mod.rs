//! Concrete effects, their kind tokens, and the transformers that stack them.
//!
//! # Base effects
//!
//! | Effect              | Token                 | Kind                          |
//! |---------------------|-----------------------|-------------------------------|
//! | [`Sync<A>`]         | [`SyncLambda`]        | deferred `() -> A`            |
//! | [`Reader<R, A>`]    | [`ReaderLambda`]      | `R -> A`                      |
//! | `Option<A>`         | [`OptionLambda`]      | value or nothing              |
//! | `Either<E, A>`      | [`EitherLambda`]      | value or error                |
//! | [`Const<W, A>`]     | [`ConstLambda`]       | stored `W`, phantom `A`       |
//!
//! # Transformers
//!
//! [`ReaderTLambda<F>`], [`OptionTLambda<F>`] and [`EitherTLambda<F>`] wrap
//! any inner token and derive their instances from it. The composites
//! [`ReaderSync`] (`ReaderT(Sync)`) and [`ReaderSyncEither`]
//! (`ReaderT(EitherT(Sync))`) are built this way and nothing else.
//!
//! # Monomorphic modules
//!
//! Each concrete effect has a module ([`sync`], [`reader`], [`option`],
//! [`either`], [`reader_sync`], [`reader_sync_either`]) restating the
//! generic combinators with the unused slots fixed, so calls infer without
//! turbofish:
//!
//! ```rust
//! use kindred::effect::reader_sync;
//!
//! let program = reader_sync::flat_map(reader_sync::ask::<i32>(), |n| reader_sync::succeed(n + 1));
//! assert_eq!(program.run(41).run(), 42);
//! ```
//!
//! # Do-notation
//!
//! The [`eff!`](crate::eff) macro names bindings for any `Flattenable`
//! token:
//!
//! ```rust
//! use kindred::eff;
//! use kindred::effect::{Sync, SyncLambda};
//!
//! let program = eff! { SyncLambda[(), (), (), ()];
//!     x <= Sync::succeed(20);
//!     let y = x + 1;
//!     Sync::succeed(x + y)
//! };
//! assert_eq!(program.run(), 41);
//! ```

mod combinators;
mod eff_macro;
mod from_reader;
mod from_sync;

pub mod constant;
pub mod either;
pub mod option;
pub mod reader;
pub mod sync;

#[cfg(feature = "transformer")]
pub mod either_transformer;
#[cfg(feature = "transformer")]
pub mod option_transformer;
#[cfg(feature = "transformer")]
pub mod reader_sync;
#[cfg(feature = "transformer")]
pub mod reader_sync_either;
#[cfg(feature = "transformer")]
pub mod reader_transformer;

pub use constant::{Const, ConstLambda, FixedConstLambda};
pub use either::EitherLambda;
pub use from_reader::{FromReader, ask, asks, flat_map_reader, lift_reader};
pub use from_sync::{FromSync, flat_map_sync, lift_sync, log, log_error};
pub use option::OptionLambda;
pub use reader::{Reader, ReaderLambda};
pub use sync::{Sync, SyncLambda};

#[cfg(feature = "transformer")]
pub use either_transformer::EitherTLambda;
#[cfg(feature = "transformer")]
pub use option_transformer::OptionTLambda;
#[cfg(feature = "transformer")]
pub use reader_sync::{ReaderSync, ReaderSyncLambda};
#[cfg(feature = "transformer")]
pub use reader_sync_either::{ReaderSyncEither, ReaderSyncEitherLambda};
#[cfg(feature = "transformer")]
pub use reader_transformer::{ReaderT, ReaderTLambda};
