#![cfg(feature = "transformer")]
//! Tests for the transformer stacks.
//!
//! 1. **Left identity**: `flat_map(succeed(a), f) === f(a)`
//! 2. **Right identity**: `flat_map(m, succeed) === m`
//! 3. **Associativity**: `flat_map(flat_map(m, f), g) === flat_map(m, |x| flat_map(f(x), g))`
//!
//! `ReaderSync` is also checked against a hand-written reader of `Sync`, and
//! the `OptionT`/`EitherT` stacks against their short-circuit behaviour.

use kindred::control::Either;
use kindred::effect::{
    EitherTLambda, OptionLambda, OptionTLambda, ReaderSync, ReaderT, Sync, SyncLambda, either_transformer,
    option_transformer, reader_sync, reader_transformer,
};
use kindred::typeclass::{Flattenable, Pointed};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// ReaderT(Sync) Monad laws
// =============================================================================

fn add_environment(x: i32) -> ReaderSync<i32, i32> {
    ReaderT::new(move |environment: i32| Sync::new(move || x.wrapping_add(environment)))
}

fn scale(x: i32) -> ReaderSync<i32, i32> {
    reader_sync::succeed(x.wrapping_mul(3))
}

proptest! {
    #[test]
    fn prop_reader_sync_left_identity(value in any::<i32>(), environment in any::<i32>()) {
        let left = reader_sync::flat_map(reader_sync::succeed(value), add_environment);
        prop_assert_eq!(left.run(environment).run(), add_environment(value).run(environment).run());
    }

    #[test]
    fn prop_reader_sync_right_identity(environment in any::<i32>()) {
        let m = reader_sync::asks(|environment: i32| environment.wrapping_sub(1));
        let left = reader_sync::flat_map(m.clone(), reader_sync::succeed);
        prop_assert_eq!(left.run(environment).run(), m.run(environment).run());
    }

    #[test]
    fn prop_reader_sync_associativity(environment in any::<i32>()) {
        let m = reader_sync::ask::<i32>();
        let left = reader_sync::flat_map(reader_sync::flat_map(m.clone(), add_environment), scale);
        let right = reader_sync::flat_map(m, |x| reader_sync::flat_map(add_environment(x), scale));
        prop_assert_eq!(left.run(environment).run(), right.run(environment).run());
    }
}

// =============================================================================
// Agreement with a hand-written reader of Sync
// =============================================================================

type HandWritten<A> = Rc<dyn Fn(i32) -> Sync<A>>;

fn hand_flat_map(m: HandWritten<i32>, f: fn(i32) -> HandWritten<i32>) -> HandWritten<i32> {
    Rc::new(move |environment: i32| {
        let m = Rc::clone(&m);
        Sync::new(move || {
            let value = m(environment).run();
            f(value)(environment).run()
        })
    })
}

fn hand_add_environment(x: i32) -> HandWritten<i32> {
    Rc::new(move |environment: i32| Sync::succeed(x.wrapping_add(environment)))
}

proptest! {
    #[test]
    fn prop_reader_sync_agrees_with_hand_written(environment in any::<i32>(), offset in any::<i32>()) {
        let derived = reader_sync::flat_map(
            reader_sync::asks(move |environment: i32| environment.wrapping_mul(offset)),
            add_environment,
        );
        let hand: HandWritten<i32> = Rc::new(move |environment: i32| Sync::succeed(environment.wrapping_mul(offset)));
        let hand = hand_flat_map(hand, hand_add_environment);
        prop_assert_eq!(derived.run(environment).run(), hand(environment).run());
    }

    #[test]
    fn prop_reader_sync_zip_with_agrees_with_hand_written(environment in any::<i32>()) {
        let derived = reader_sync::zip_with(
            reader_sync::ask::<i32>(),
            reader_sync::asks(|environment: i32| environment.wrapping_neg()),
            |a, b| (a, b),
        );
        prop_assert_eq!(derived.run(environment).run(), (environment, environment.wrapping_neg()));
    }
}

// =============================================================================
// ReaderT(Option)
// =============================================================================

#[rstest]
#[case(4, Some(6))]
#[case(-4, None)]
fn reader_over_option_short_circuits(#[case] environment: i32, #[case] expected: Option<i32>) {
    let checked = reader_transformer::asks_effect::<OptionLambda, (), i32, (), (), i32, _>(|environment: i32| {
        (environment > 0).then_some(environment)
    });
    let program = reader_transformer::flat_map::<OptionLambda, (), i32, (), (), i32, i32, _>(checked, |n| {
        reader_transformer::succeed::<OptionLambda, (), i32, (), (), i32>(n + 2)
    });
    assert_eq!(program.run(environment), expected);
}

#[rstest]
fn reader_lift_ignores_the_environment() {
    let lifted = reader_transformer::lift::<OptionLambda, (), String, (), (), i32>(Some(3));
    assert_eq!(lifted.run("anything".to_string()), Some(3));
}

// =============================================================================
// OptionT(Sync)
// =============================================================================

#[rstest]
fn option_transformer_stops_after_none() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let program = option_transformer::flat_map::<SyncLambda, (), (), (), (), i32, i32, _>(
        Sync::succeed(None),
        move |n| {
            counter.set(counter.get() + 1);
            option_transformer::some::<SyncLambda, (), (), (), (), i32>(n + 1)
        },
    );
    assert_eq!(program.run(), None);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn option_transformer_left_identity() {
    let f = |n: i32| Sync::succeed((n % 2 == 0).then_some(n / 2));
    let left = option_transformer::flat_map::<SyncLambda, (), (), (), (), i32, i32, _>(
        option_transformer::some::<SyncLambda, (), (), (), (), i32>(8),
        f,
    );
    assert_eq!(left.run(), f(8).run());
}

type OptionSync = OptionTLambda<SyncLambda>;

fn halve(n: i32) -> Sync<Option<i32>> {
    Sync::succeed((n % 2 == 0).then_some(n / 2))
}

fn decrement(n: i32) -> Sync<Option<i32>> {
    Sync::succeed(n.checked_sub(1))
}

proptest! {
    #[test]
    fn prop_option_transformer_left_identity(value in any::<i32>()) {
        let left = OptionSync::flat_map::<(), (), (), (), i32, i32, _>(
            OptionSync::succeed::<(), (), (), (), i32>(value),
            halve,
        );
        prop_assert_eq!(left.run(), halve(value).run());
    }

    #[test]
    fn prop_option_transformer_right_identity(value in any::<Option<i32>>()) {
        let right = OptionSync::flat_map::<(), (), (), (), i32, i32, _>(
            Sync::succeed(value),
            OptionSync::succeed::<(), (), (), (), i32>,
        );
        prop_assert_eq!(right.run(), value);
    }

    #[test]
    fn prop_option_transformer_associativity(value in any::<Option<i32>>()) {
        let left = OptionSync::flat_map::<(), (), (), (), i32, i32, _>(
            OptionSync::flat_map::<(), (), (), (), i32, i32, _>(Sync::succeed(value), halve),
            decrement,
        );
        let right = OptionSync::flat_map::<(), (), (), (), i32, i32, _>(Sync::succeed(value), |x| {
            OptionSync::flat_map::<(), (), (), (), i32, i32, _>(halve(x), decrement)
        });
        prop_assert_eq!(left.run(), right.run());
    }
}

#[rstest]
fn option_transformer_combine_k_and_get_or_else() {
    let empty = option_transformer::empty_k::<SyncLambda, (), (), (), (), i32>();
    let recovered = option_transformer::combine_k::<SyncLambda, (), (), (), (), i32, _>(empty.clone(), || {
        Sync::succeed(Some(9))
    });
    assert_eq!(recovered.run(), Some(9));

    let defaulted = option_transformer::get_or_else::<SyncLambda, (), (), (), (), i32, _>(empty, || -1);
    assert_eq!(defaulted.run(), -1);
}

// =============================================================================
// EitherT(Sync)
// =============================================================================

#[rstest]
fn either_transformer_stops_after_left() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let program = either_transformer::flat_map::<SyncLambda, (), (), (), String, i32, i32, _>(
        either_transformer::left::<SyncLambda, (), (), (), String, i32>("boom".to_string()),
        move |n| {
            counter.set(counter.get() + 1);
            either_transformer::right::<SyncLambda, (), (), (), String, i32>(n)
        },
    );
    assert_eq!(program.run(), Either::Left("boom".to_string()));
    assert_eq!(calls.get(), 0);
}

type EitherSync = EitherTLambda<SyncLambda>;

fn check_even(n: i32) -> Sync<Either<String, i32>> {
    Sync::succeed(if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) })
}

fn check_small(n: i32) -> Sync<Either<String, i32>> {
    Sync::succeed(if n.abs() < 1_000 { Either::Right(n * 10) } else { Either::Left(format!("{n} is large")) })
}

proptest! {
    #[test]
    fn prop_either_transformer_left_identity(value in any::<i32>()) {
        let left = EitherSync::flat_map::<(), (), (), String, i32, i32, _>(
            EitherSync::succeed::<(), (), (), String, i32>(value),
            check_even,
        );
        prop_assert_eq!(left.run(), check_even(value).run());
    }

    #[test]
    fn prop_either_transformer_right_identity(value in any::<Result<i32, String>>()) {
        let value: Either<String, i32> = value.into();
        let right = EitherSync::flat_map::<(), (), (), String, i32, i32, _>(
            Sync::succeed(value.clone()),
            EitherSync::succeed::<(), (), (), String, i32>,
        );
        prop_assert_eq!(right.run(), value);
    }

    #[test]
    fn prop_either_transformer_associativity(value in any::<Result<i32, String>>()) {
        let value: Either<String, i32> = value.into();
        let left = EitherSync::flat_map::<(), (), (), String, i32, i32, _>(
            EitherSync::flat_map::<(), (), (), String, i32, i32, _>(Sync::succeed(value.clone()), check_even),
            check_small,
        );
        let right = EitherSync::flat_map::<(), (), (), String, i32, i32, _>(Sync::succeed(value), |x| {
            EitherSync::flat_map::<(), (), (), String, i32, i32, _>(check_even(x), check_small)
        });
        prop_assert_eq!(left.run(), right.run());
    }
}

#[rstest]
fn either_transformer_or_else_recovers() {
    let failed = either_transformer::left::<SyncLambda, (), (), (), String, usize>("four".to_string());
    let recovered = either_transformer::or_else::<SyncLambda, (), (), (), String, usize, _>(failed, |error| {
        either_transformer::right::<SyncLambda, (), (), (), String, usize>(error.len())
    });
    assert_eq!(recovered.run(), Either::Right(4));
}

#[rstest]
#[case(Either::Right(2), "value 2")]
#[case(Either::Left("bad".to_string()), "error bad")]
fn either_transformer_match(#[case] inner: Either<String, i32>, #[case] expected: &str) {
    let folded = either_transformer::match_::<SyncLambda, (), (), (), String, i32, String, _, _>(
        Sync::succeed(inner),
        |error| format!("error {error}"),
        |value| format!("value {value}"),
    );
    assert_eq!(folded.run(), expected);
}
