//! Newtype wrappers selecting a combining operation.
//!
//! The same number can be combined by addition or multiplication, or by
//! keeping the larger or smaller value. Each wrapper picks one of those as
//! its `Semigroup`; the `Monoid` identities are `0`, `1`, the type's minimum
//! and the type's maximum respectively.
//!
//! ```rust
//! use kindred::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Max::<u8>::combine_all(vec![Max(3), Max(9), Max(1)]), Max(9));
//! assert_eq!(Max::<u8>::empty(), Max(0));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Returns the wrapped value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }
        }

        impl<A> From<A> for $name<A> {
            #[inline]
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

wrapper!(
    /// Combines by addition.
    Sum
);
wrapper!(
    /// Combines by multiplication.
    Product
);
wrapper!(
    /// Combines by keeping the larger value.
    Max
);
wrapper!(
    /// Combines by keeping the smaller value.
    Min
);

/// Types with a smallest and a largest value.
pub trait Bounded {
    /// The smallest value.
    const MIN_VALUE: Self;
    /// The largest value.
    const MAX_VALUE: Self;
}

/// Numeric types with additive and multiplicative identities.
pub trait Numeric {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! bounded_integer {
    ($($type:ty),+) => {
        $(
            impl Bounded for $type {
                const MIN_VALUE: Self = <$type>::MIN;
                const MAX_VALUE: Self = <$type>::MAX;
            }

            impl Numeric for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )+
    };
}

bounded_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = char::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Numeric for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}
