//! The `pipe!` and `flow!` macros - left-to-right application and composition.

/// Threads a value through a sequence of functions, left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`.
///
/// # Examples
///
/// ```rust
/// use kindred::pipe;
///
/// let result = pipe!(5, |x| x * 2, |x: i32| x.to_string());
/// assert_eq!(result, "10");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

/// Composes functions left to right into a new closure.
///
/// `flow!(f, g, h)` is `|x| h(g(f(x)))`.
///
/// # Examples
///
/// ```rust
/// use kindred::flow;
///
/// let describe = flow!(|x: i32| x + 1, |x: i32| format!("<{x}>"));
/// assert_eq!(describe(1), "<2>");
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($remaining_functions:expr),+ $(,)?) => {
        move |value| $crate::pipe!($first(value), $($remaining_functions),+)
    };
}
