//! Channel merging - combining effects whose requirement or error differ.
//!
//! The plain combinators require both operands to agree on every slot. When
//! two effects need different environments or fail with different errors,
//! the merged forms below combine them into one effect whose channels are:
//!
//! - requirement: an environment `R` that can provide both, `R: AsRef<R1> + AsRef<R2>`
//! - error: an error `E` that both convert into, `E1: Into<E>` and `E2: Into<E>`
//!
//! Widening happens before the operands are combined, so sequencing and
//! short-circuiting are those of the underlying instance.
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::Either;
//! use kindred::effect::reader_sync_either::{self, ReaderSyncEitherLambda};
//! use kindred::typeclass::zip_with_merged;
//!
//! #[derive(Clone)]
//! struct Config { name: String, retries: u32 }
//! impl AsRef<String> for Config { fn as_ref(&self) -> &String { &self.name } }
//! impl AsRef<u32> for Config { fn as_ref(&self) -> &u32 { &self.retries } }
//!
//! let name = reader_sync_either::asks::<String, (), String, _>(|name: String| name);
//! let retries = reader_sync_either::asks::<u32, (), u32, _>(|retries: u32| retries);
//! let both = zip_with_merged::<ReaderSyncEitherLambda, (), (), String, u32, Config, (), (), (), String, u32, String, _>(
//!     name,
//!     retries,
//!     |name, retries| format!("{name}:{retries}"),
//! );
//! let config = Config { name: "svc".to_string(), retries: 3 };
//! assert_eq!(both.run(config).run(), Either::Right("svc:3".to_string()));
//! ```

use super::apply::Apply;
use super::bifunctor::Bifunctor;
use super::contravariant::Contravariant;
use super::kind::{Arrow, Kind, Slot};
use super::monad::Flattenable;
use crate::compose::identity;

/// Runs an effect needing `R` in any environment that provides an `R`.
pub fn widen_requirement<F, S, R, W, E, A, R2>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R2, W, E, A>
where
    F: Contravariant,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    R2: Slot + AsRef<R>,
{
    F::contramap::<S, R, W, E, A, R2, _>(fa, |environment: R2| {
        <R2 as AsRef<R>>::as_ref(&environment).clone()
    })
}

/// Converts the error channel into a wider error type.
pub fn widen_error<F, S, R, W, E, A, E2>(fa: Kind<F, S, R, W, E, A>) -> Kind<F, S, R, W, E2, A>
where
    F: Bifunctor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot + Into<E2>,
    A: Slot,
    E2: Slot,
{
    F::map_both::<S, R, W, E, A, E2, A, _, _>(fa, Into::into, identity)
}

fn widen<F, S, R1, R, W, E1, E, A>(fa: Kind<F, S, R1, W, E1, A>) -> Kind<F, S, R, W, E, A>
where
    F: Contravariant + Bifunctor,
    S: Slot,
    R1: Slot,
    R: Slot + AsRef<R1>,
    W: Slot,
    E1: Slot + Into<E>,
    E: Slot,
    A: Slot,
{
    let widened = widen_error::<F, S, R1, W, E1, A, E>(fa);
    widen_requirement::<F, S, R1, W, E, A, R>(widened)
}

/// [`zip_with`](super::apply::zip_with) over operands with different
/// requirement and error channels.
pub fn zip_with_merged<F, S, W, R1, R2, R, E1, E2, E, A, B, C, Func>(
    fa: Kind<F, S, R1, W, E1, A>,
    fb: Kind<F, S, R2, W, E2, B>,
    function: Func,
) -> Kind<F, S, R, W, E, C>
where
    F: Apply + Contravariant + Bifunctor,
    S: Slot,
    W: Slot,
    R1: Slot,
    R2: Slot,
    R: Slot + AsRef<R1> + AsRef<R2>,
    E1: Slot + Into<E>,
    E2: Slot + Into<E>,
    E: Slot,
    A: Slot,
    B: Slot,
    C: Slot,
    Func: Fn(A, B) -> C + 'static,
{
    let left = widen::<F, S, R1, R, W, E1, E, A>(fa);
    let right = widen::<F, S, R2, R, W, E2, E, B>(fb);
    super::apply::zip_with::<F, S, R, W, E, A, B, C, _>(left, right, function)
}

/// [`Apply::ap`] over operands with different requirement and error channels.
pub fn ap_merged<F, S, W, R1, R2, R, E1, E2, E, A, B>(
    fab: Kind<F, S, R1, W, E1, Arrow<A, B>>,
    fa: Kind<F, S, R2, W, E2, A>,
) -> Kind<F, S, R, W, E, B>
where
    F: Apply + Contravariant + Bifunctor,
    S: Slot,
    W: Slot,
    R1: Slot,
    R2: Slot,
    R: Slot + AsRef<R1> + AsRef<R2>,
    E1: Slot + Into<E>,
    E2: Slot + Into<E>,
    E: Slot,
    A: Slot,
    B: Slot,
{
    let function = widen::<F, S, R1, R, W, E1, E, Arrow<A, B>>(fab);
    let argument = widen::<F, S, R2, R, W, E2, E, A>(fa);
    F::ap::<S, R, W, E, A, B>(function, argument)
}

/// [`Flattenable::flat_map`] whose continuation needs a different
/// environment or fails with a different error.
pub fn flat_map_merged<F, S, W, R1, R2, R, E1, E2, E, A, B, Func>(
    fa: Kind<F, S, R1, W, E1, A>,
    function: Func,
) -> Kind<F, S, R, W, E, B>
where
    F: Flattenable + Contravariant + Bifunctor,
    S: Slot,
    W: Slot,
    R1: Slot,
    R2: Slot,
    R: Slot + AsRef<R1> + AsRef<R2>,
    E1: Slot + Into<E>,
    E2: Slot + Into<E>,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> Kind<F, S, R2, W, E2, B> + 'static,
{
    let first = widen::<F, S, R1, R, W, E1, E, A>(fa);
    F::flat_map::<S, R, W, E, A, B, _>(first, move |value| {
        widen::<F, S, R2, R, W, E2, E, B>(function(value))
    })
}
