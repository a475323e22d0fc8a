#![cfg(feature = "effect")]
//! Property-based tests for the Monad laws.
//!
//! - **Left identity**: `flat_map(succeed(a), f) == f(a)`
//! - **Right identity**: `flat_map(m, succeed) == m`
//! - **Associativity**: `flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))`

use kindred::control::Either;
use kindred::effect::{Reader, Sync, either, option, reader, sync};
use kindred::typeclass::{Identity, IdentityLambda, bind, bind_to, flatten};
use proptest::prelude::*;
use rstest::rstest;

fn halve(n: i32) -> Option<i32> {
    if n % 2 == 0 { Some(n / 2) } else { None }
}

fn positive(n: i32) -> Option<i32> {
    if n > 0 { Some(n) } else { None }
}

fn checked_halve(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Right(n / 2)
    } else {
        Either::Left(format!("{n} is odd"))
    }
}

fn checked_positive(n: i32) -> Either<String, i32> {
    if n > 0 {
        Either::Right(n)
    } else {
        Either::Left(format!("{n} is not positive"))
    }
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(option::flat_map(option::succeed(value), halve), halve(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(option::flat_map(value, option::succeed), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let left = option::flat_map(option::flat_map(value, halve), positive);
        let right = option::flat_map(value, |x| option::flat_map(halve(x), positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(either::flat_map(either::succeed(value), checked_halve), checked_halve(value));
    }

    #[test]
    fn prop_either_right_identity(value in any::<Result<i32, String>>()) {
        let m: Either<String, i32> = value.into();
        prop_assert_eq!(either::flat_map(m.clone(), either::succeed), m);
    }

    #[test]
    fn prop_either_associativity(value in any::<Result<i32, String>>()) {
        let m: Either<String, i32> = value.into();
        let left = either::flat_map(either::flat_map(m.clone(), checked_halve), checked_positive);
        let right = either::flat_map(m, |x| either::flat_map(checked_halve(x), checked_positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Sync and Reader
// =============================================================================

proptest! {
    #[test]
    fn prop_sync_left_identity(value in any::<i32>()) {
        let f = |n: i32| Sync::new(move || n.wrapping_mul(3));
        prop_assert_eq!(sync::flat_map(sync::succeed(value), f).run(), f(value).run());
    }

    #[test]
    fn prop_sync_associativity(value in any::<i32>()) {
        let f = |n: i32| Sync::succeed(n.wrapping_add(1));
        let g = |n: i32| Sync::new(move || n.wrapping_mul(2));
        let m = Sync::succeed(value);
        let left = sync::flat_map(sync::flat_map(m.clone(), f), g);
        let right = sync::flat_map(m, move |x| sync::flat_map(f(x), g));
        prop_assert_eq!(left.run(), right.run());
    }

    #[test]
    fn prop_reader_right_identity(environment in any::<i32>()) {
        let m = Reader::new(|env: i32| env.wrapping_sub(4));
        prop_assert_eq!(reader::flat_map(m.clone(), reader::succeed).run(environment), m.run(environment));
    }

    #[test]
    fn prop_reader_associativity(environment in any::<i32>()) {
        let m = Reader::new(|env: i32| env);
        let f = |x: i32| Reader::new(move |env: i32| x.wrapping_add(env));
        let g = |x: i32| Reader::new(move |env: i32| x.wrapping_mul(env));
        let left = reader::flat_map(reader::flat_map(m.clone(), f), g);
        let right = reader::flat_map(m, move |x| reader::flat_map(f(x), g));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }
}

// =============================================================================
// Derived forms
// =============================================================================

#[rstest]
fn bind_to_then_bind_accumulates_a_tuple() {
    let scope = bind_to::<IdentityLambda, (), (), (), (), i32>(Identity(1));
    let scope = bind::<IdentityLambda, (), (), (), (), (i32,), i32, _>(scope, |_| Identity(2));
    assert_eq!(scope, Identity((1, 2)));
}

#[rstest]
#[case(Some(Some(3)), Some(3))]
#[case(Some(None), None)]
#[case(None, None)]
fn flatten_removes_one_layer(#[case] nested: Option<Option<i32>>, #[case] expected: Option<i32>) {
    assert_eq!(flatten::<kindred::effect::OptionLambda, (), (), (), (), i32>(nested), expected);
}

#[rstest]
fn compose_kleisli_chains_left_to_right() {
    let halve_then_check = option::compose_kleisli(halve, positive);
    assert_eq!(halve_then_check(8), Some(4));
    assert_eq!(halve_then_check(7), None);
    assert_eq!(halve_then_check(-4), None);
}

#[rstest]
fn tap_keeps_the_value_and_runs_the_effect() {
    let result = either::tap(Either::<String, i32>::Right(4), |n| {
        if n > 3 { Either::Left("too big".to_string()) } else { Either::Right(()) }
    });
    assert_eq!(result, Either::Left("too big".to_string()));

    let kept = either::tap(Either::<String, i32>::Right(2), |_| Either::Right("ignored"));
    assert_eq!(kept, Either::Right(2));
}
