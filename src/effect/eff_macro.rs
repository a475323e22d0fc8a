//! The `eff!` macro - named do-notation for any `Flattenable` kind token.
//!
//! The first line names the token and its four fixed slots; every following
//! statement is one of:
//!
//! - `pattern <= effect;` binds the value of `effect`
//! - `let pattern = expression;` binds a pure value
//!
//! and the last expression is the result effect. Each bind expands to
//! `Flattenable::flat_map` on the token.
//!
//! ```rust
//! use kindred::eff;
//! use kindred::effect::{OptionLambda, option};
//!
//! let result = eff! { OptionLambda[(), (), (), ()];
//!     x <= Some(5);
//!     let doubled = x * 2;
//!     y <= option::from_predicate(doubled, |n| *n > 3);
//!     Some(x + y)
//! };
//! assert_eq!(result, Some(15));
//! ```
//!
//! Continuations are re-runnable closures, so a binding that is used after a
//! later bind must be `Copy` or rebound with `let name = name.clone();`.
//!
//! Inference of the value types needs a concrete token; inside code that is
//! generic over the token use `flat_map` or `bind` with explicit slots.

/// Named do-notation over a kind token.
#[macro_export]
macro_rules! eff {
    ($token:ty [$s:ty, $r:ty, $w:ty, $e:ty]; $pattern:ident <= $effect:expr ; $($rest:tt)+) => {
        <$token as $crate::typeclass::Flattenable>::flat_map::<$s, $r, $w, $e, _, _, _>(
            $effect,
            move |$pattern| $crate::eff!($token [$s, $r, $w, $e]; $($rest)+),
        )
    };

    ($token:ty [$s:ty, $r:ty, $w:ty, $e:ty]; ($($pattern:tt)*) <= $effect:expr ; $($rest:tt)+) => {
        <$token as $crate::typeclass::Flattenable>::flat_map::<$s, $r, $w, $e, _, _, _>(
            $effect,
            move |($($pattern)*)| $crate::eff!($token [$s, $r, $w, $e]; $($rest)+),
        )
    };

    ($token:ty [$s:ty, $r:ty, $w:ty, $e:ty]; _ <= $effect:expr ; $($rest:tt)+) => {
        <$token as $crate::typeclass::Flattenable>::flat_map::<$s, $r, $w, $e, _, _, _>(
            $effect,
            move |_| $crate::eff!($token [$s, $r, $w, $e]; $($rest)+),
        )
    };

    ($token:ty [$s:ty, $r:ty, $w:ty, $e:ty]; let $pattern:ident = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::eff!($token [$s, $r, $w, $e]; $($rest)+)
    }};

    ($token:ty [$s:ty, $r:ty, $w:ty, $e:ty]; let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $value;
        $crate::eff!($token [$s, $r, $w, $e]; $($rest)+)
    }};

    ($token:ty [$s:ty, $r:ty, $w:ty, $e:ty]; $result:expr $(;)?) => {
        $result
    };
}
