//! Identity wrapper type - the effect that adds nothing.
//!
//! `Identity` is the simplest kind: it carries one value and ignores every
//! other slot. The derived combinators are unit-tested against it, and it is
//! the base case of transformer stacks.

use super::apply::Apply;
use super::functor::Functor;
use super::kind::{Arrow, Slot, TypeLambda};
use super::monad::Flattenable;
use super::pointed::Pointed;

/// The identity effect - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(42).0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

/// Kind token for [`Identity`]. Only the value slot is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityLambda;

impl TypeLambda for IdentityLambda {
    type Kind<S, R, W, E, A> = Identity<A>;
}

impl Functor for IdentityLambda {
    #[inline]
    fn map<S, R, W, E, A, B, Func>(fa: Identity<A>, function: Func) -> Identity<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Pointed for IdentityLambda {
    #[inline]
    fn succeed<S, R, W, E, A>(value: A) -> Identity<A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        Identity(value)
    }
}

impl Apply for IdentityLambda {
    #[inline]
    fn ap<S, R, W, E, A, B>(fab: Identity<Arrow<A, B>>, fa: Identity<A>) -> Identity<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        Identity((fab.0)(fa.0))
    }
}

impl Flattenable for IdentityLambda {
    #[inline]
    fn flat_map<S, R, W, E, A, B, Func>(fa: Identity<A>, function: Func) -> Identity<B>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::kind::arrow;

    #[test]
    fn accessors_return_inner_value() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[test]
    fn from_wraps_value() {
        let wrapped: Identity<i32> = 5.into();
        assert_eq!(wrapped, Identity(5));
    }

    #[test]
    fn ap_applies_wrapped_function() {
        let result =
            IdentityLambda::ap::<(), (), (), (), i32, i32>(Identity(arrow(|x: i32| x * 2)), Identity(21));
        assert_eq!(result, Identity(42));
    }

    #[test]
    fn flat_map_feeds_value_to_continuation() {
        let result = IdentityLambda::flat_map::<(), (), (), (), i32, String, _>(Identity(3), |x| {
            Identity(x.to_string())
        });
        assert_eq!(result, Identity("3".to_string()));
    }
}
