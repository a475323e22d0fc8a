//! Contravariant type class - adapting the requirement slot.
//!
//! The requirement slot `R` is an input: an effect that needs `R` can run in
//! any environment `R2` from which an `R` can be produced. `contramap` does
//! that adaptation; for `Reader` it is better known as `local`.
//!
//! Tokens that ignore `R` (such as `Option` or `Either`) implement
//! `contramap` as the identity, so the merged-channel combinators work for
//! every effect.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! contramap(fa, |r| r) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! contramap(contramap(fa, f), g) == contramap(fa, |r| f(g(r)))
//! ```

use super::kind::{Kind, Slot, TypeLambda};

/// A type class for kinds whose requirement slot can be adapted.
pub trait Contravariant: TypeLambda {
    /// Runs `fa` in an environment `R2` converted to `R` by `function`.
    fn contramap<S, R, W, E, A, R2, Func>(
        fa: Kind<Self, S, R, W, E, A>,
        function: Func,
    ) -> Kind<Self, S, R2, W, E, A>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        R2: Slot,
        Func: Fn(R2) -> R + 'static;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct NeedsLambda;

    impl TypeLambda for NeedsLambda {
        type Kind<S, R, W, E, A> = Rc<dyn Fn(R) -> A>;
    }

    impl Contravariant for NeedsLambda {
        fn contramap<S, R, W, E, A, R2, Func>(
            fa: Rc<dyn Fn(R) -> A>,
            function: Func,
        ) -> Rc<dyn Fn(R2) -> A>
        where
            S: Slot,
            R: Slot,
            W: Slot,
            E: Slot,
            A: Slot,
            R2: Slot,
            Func: Fn(R2) -> R + 'static,
        {
            Rc::new(move |environment| fa(function(environment)))
        }
    }

    #[test]
    fn identity_law() {
        let length: Rc<dyn Fn(String) -> usize> = Rc::new(|text: String| text.len());
        let adapted = NeedsLambda::contramap::<(), String, (), (), usize, String, _>(length.clone(), |r| r);
        assert_eq!(adapted("four".to_string()), length("four".to_string()));
    }

    #[test]
    fn composition_law() {
        let length: Rc<dyn Fn(String) -> usize> = Rc::new(|text: String| text.len());
        let f = |number: i32| "x".repeat(number.unsigned_abs() as usize);
        let g = |flag: bool| if flag { 3 } else { -1 };

        let left = NeedsLambda::contramap::<(), i32, (), (), usize, bool, _>(
            NeedsLambda::contramap::<(), String, (), (), usize, i32, _>(length.clone(), f),
            g,
        );
        let right = NeedsLambda::contramap::<(), String, (), (), usize, bool, _>(length, move |r| f(g(r)));
        assert_eq!(left(true), right(true));
        assert_eq!(left(false), right(false));
    }
}
