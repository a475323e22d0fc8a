//! Traversals - mapping with effects and collecting the results.
//!
//! `traverse` applies an effectful function to every element and turns the
//! collection inside out: `Vec<A>` with `A -> F<B>` becomes `F<Vec<B>>`.
//!
//! - Non-empty inputs only need [`Apply`]: the first element's effect is the
//!   seed and every later one is zipped onto it.
//! - Possibly-empty inputs need [`Applicative`] for the empty case, which is
//!   `succeed(vec![])`; a non-empty `Vec` is delegated to the non-empty
//!   traversal.
//!
//! The function is called once per element, in order, while the traversal is
//! being built. The resulting effects are combined left to right with
//! `Apply::ap`, so failures short-circuit the way the instance defines.
//!
//! Folding through `ap` nests one closure per element for deferred kinds.
//! `Sync`, `Reader`, `ReaderSync` and `ReaderSyncEither` therefore export
//! their own traversals that run every element in a single loop; use those
//! for long inputs.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::OptionLambda;
//! use kindred::typeclass::traverse_vec;
//!
//! let parsed = traverse_vec::<OptionLambda, (), (), (), (), &str, i32, _>(
//!     vec!["1", "2", "3"],
//!     |text| text.parse().ok(),
//! );
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let failed = traverse_vec::<OptionLambda, (), (), (), (), &str, i32, _>(
//!     vec!["1", "x", "3"],
//!     |text| text.parse().ok(),
//! );
//! assert_eq!(failed, None);
//! ```

use super::applicative::Applicative;
use super::apply::{Apply, zip_with};
use super::kind::{Kind, Slot};
use crate::control::NonEmptyVec;

/// Traverses a non-empty sequence, passing each element's index.
pub fn traverse_non_empty_with_index<F, S, R, W, E, A, B, Func>(
    items: NonEmptyVec<A>,
    mut function: Func,
) -> Kind<F, S, R, W, E, NonEmptyVec<B>>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> Kind<F, S, R, W, E, B>,
{
    let (head, tail) = items.into_parts();
    let seed = F::map::<S, R, W, E, B, NonEmptyVec<B>, _>(function(0, head), NonEmptyVec::singleton);
    tail.into_iter()
        .enumerate()
        .fold(seed, |accumulated, (offset, value)| {
            zip_with::<F, S, R, W, E, NonEmptyVec<B>, B, NonEmptyVec<B>, _>(
                accumulated,
                function(offset + 1, value),
                |mut values, value| {
                    values.push(value);
                    values
                },
            )
        })
}

/// Traverses a non-empty sequence.
pub fn traverse_non_empty<F, S, R, W, E, A, B, Func>(
    items: NonEmptyVec<A>,
    mut function: Func,
) -> Kind<F, S, R, W, E, NonEmptyVec<B>>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(A) -> Kind<F, S, R, W, E, B>,
{
    traverse_non_empty_with_index::<F, S, R, W, E, A, B, _>(items, |_, value| function(value))
}

/// Turns a non-empty sequence of effects into an effect of a non-empty
/// sequence.
pub fn sequence_non_empty<F, S, R, W, E, A>(
    items: NonEmptyVec<Kind<F, S, R, W, E, A>>,
) -> Kind<F, S, R, W, E, NonEmptyVec<A>>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    traverse_non_empty::<F, S, R, W, E, Kind<F, S, R, W, E, A>, A, _>(items, |effect| effect)
}

/// Traverses a possibly-empty vector, passing each element's index.
///
/// An empty input yields `succeed(vec![])` without calling `function`.
pub fn traverse_vec_with_index<F, S, R, W, E, A, B, Func>(
    items: Vec<A>,
    function: Func,
) -> Kind<F, S, R, W, E, Vec<B>>
where
    F: Applicative,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(usize, A) -> Kind<F, S, R, W, E, B>,
{
    match NonEmptyVec::try_from(items) {
        Ok(items) => {
            let traversed = traverse_non_empty_with_index::<F, S, R, W, E, A, B, _>(items, function);
            F::map::<S, R, W, E, NonEmptyVec<B>, Vec<B>, _>(traversed, Vec::from)
        }
        Err(_) => F::succeed::<S, R, W, E, Vec<B>>(Vec::new()),
    }
}

/// Traverses a possibly-empty vector.
pub fn traverse_vec<F, S, R, W, E, A, B, Func>(
    items: Vec<A>,
    mut function: Func,
) -> Kind<F, S, R, W, E, Vec<B>>
where
    F: Applicative,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    B: Slot,
    Func: FnMut(A) -> Kind<F, S, R, W, E, B>,
{
    traverse_vec_with_index::<F, S, R, W, E, A, B, _>(items, |_, value| function(value))
}

/// Turns a vector of effects into an effect of a vector.
pub fn sequence_vec<F, S, R, W, E, A>(
    items: Vec<Kind<F, S, R, W, E, A>>,
) -> Kind<F, S, R, W, E, Vec<A>>
where
    F: Applicative,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    traverse_vec::<F, S, R, W, E, Kind<F, S, R, W, E, A>, A, _>(items, |effect| effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, IdentityLambda};
    use rstest::rstest;

    type Id = IdentityLambda;

    #[rstest]
    fn traverse_vec_of_empty_input_does_not_call_function() {
        let mut calls = 0;
        let result = traverse_vec::<Id, (), (), (), (), i32, i32, _>(Vec::new(), |value| {
            calls += 1;
            Identity(value)
        });
        assert_eq!(result, Identity(Vec::new()));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn traverse_vec_with_index_passes_positions() {
        let result = traverse_vec_with_index::<Id, (), (), (), (), char, String, _>(
            vec!['a', 'b', 'c'],
            |index, value| Identity(format!("{index}{value}")),
        );
        assert_eq!(result, Identity(vec!["0a".to_string(), "1b".to_string(), "2c".to_string()]));
    }

    #[rstest]
    fn traverse_non_empty_keeps_shape() {
        let items = NonEmptyVec::new(1, vec![2, 3]);
        let result = traverse_non_empty::<Id, (), (), (), (), i32, i32, _>(items, |value| Identity(value * 10));
        assert_eq!(result, Identity(NonEmptyVec::new(10, vec![20, 30])));
    }

    #[rstest]
    fn sequence_vec_collects_values() {
        let result = sequence_vec::<Id, (), (), (), (), i32>(vec![Identity(1), Identity(2)]);
        assert_eq!(result, Identity(vec![1, 2]));
    }

    #[rstest]
    fn sequence_non_empty_collects_values() {
        let result = sequence_non_empty::<Id, (), (), (), (), i32>(NonEmptyVec::singleton(Identity(7)));
        assert_eq!(result, Identity(NonEmptyVec::singleton(7)));
    }

    #[rstest]
    fn function_is_called_in_order() {
        let mut seen = Vec::new();
        let _ = traverse_vec::<Id, (), (), (), (), i32, i32, _>(vec![3, 1, 2], |value| {
            seen.push(value);
            Identity(value)
        });
        assert_eq!(seen, vec![3, 1, 2]);
    }
}
