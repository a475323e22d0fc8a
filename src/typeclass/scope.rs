//! Do-notation scopes - positional records that grow one binding at a time.
//!
//! Rust has no anonymous records, so the accumulation record of do-notation is
//! a tuple. The empty scope is `()`; `bind_to` seeds a one-element scope and
//! every `bind`, `let_` or `bind_right` appends through [`Append`].
//!
//! ```rust
//! use kindred::typeclass::Append;
//!
//! let scope = ().append(1).append("two").append(3.0);
//! assert_eq!(scope, (1, "two", 3.0));
//! ```

/// Appends a value to the end of a tuple scope.
pub trait Append<B> {
    /// The scope with `B` appended.
    type Output;

    /// Returns the scope extended with `value`.
    fn append(self, value: B) -> Self::Output;
}

impl<B> Append<B> for () {
    type Output = (B,);

    #[inline]
    fn append(self, value: B) -> Self::Output {
        (value,)
    }
}

macro_rules! impl_append {
    ($($name:ident),+) => {
        impl<$($name,)+ B> Append<B> for ($($name,)+) {
            type Output = ($($name,)+ B);

            #[inline]
            #[allow(non_snake_case)]
            fn append(self, value: B) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ value)
            }
        }
    };
}

impl_append!(T1);
impl_append!(T1, T2);
impl_append!(T1, T2, T3);
impl_append!(T1, T2, T3, T4);
impl_append!(T1, T2, T3, T4, T5);
impl_append!(T1, T2, T3, T4, T5, T6);
impl_append!(T1, T2, T3, T4, T5, T6, T7);
