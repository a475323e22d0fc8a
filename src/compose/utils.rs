//! Small function helpers shared by the combinators.

/// Returns its argument unchanged.
///
/// ```rust
/// use kindred::compose::identity;
///
/// assert_eq!(identity(5), 5);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and yields `value`.
///
/// ```rust
/// use kindred::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Turns a binary function into one taking a pair.
#[inline]
pub fn uncurry<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(first, second)| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn identity_returns_input(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn constant_ignores_argument() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
        assert_eq!(always_hello(7), "hello");
    }

    #[rstest]
    fn flip_swaps_arguments() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        assert_eq!(flip(power)(3, 2), 8);
    }

    #[rstest]
    fn uncurry_accepts_pair() {
        let subtract = uncurry(|left: i32, right: i32| left - right);
        assert_eq!(subtract((5, 3)), 2);
    }
}
