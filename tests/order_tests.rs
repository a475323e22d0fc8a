#![cfg(feature = "typeclass")]
//! First-class orderings and sorting through `pipe!`.

use kindred::pipe;
use kindred::typeclass::{Monoid, Order, Semigroup, sort, sort_by};
use proptest::prelude::*;
use rstest::rstest;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    value: i32,
    label: &'static str,
}

fn entry(value: i32, label: &'static str) -> Entry {
    Entry { value, label }
}

fn by_value() -> Order<Entry> {
    Order::<i32>::from_ord().contramap(|entry: &Entry| entry.value)
}

#[rstest]
fn pipe_sort_is_stable_and_ascending() {
    let order_by_value = by_value();
    let sorted = pipe!(
        vec![entry(2, "b"), entry(1, "x"), entry(2, "a"), entry(1, "y")],
        sort(&order_by_value)
    );
    let labels: Vec<&str> = sorted.iter().map(|entry| entry.label).collect();
    assert_eq!(labels, vec!["x", "y", "b", "a"]);
}

#[rstest]
fn reverse_flips_comparisons() {
    let descending = Order::<i32>::from_ord().reverse();
    assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    assert_eq!(pipe!(vec![1, 3, 2], sort(&descending)), vec![3, 2, 1]);
}

#[rstest]
fn combined_orders_break_ties() {
    let by_label = Order::<&'static str>::from_ord().contramap(|entry: &Entry| entry.label);
    let combined = by_value().combine(by_label);
    let sorted = pipe!(vec![entry(2, "b"), entry(1, "z"), entry(2, "a")], sort(&combined));
    assert_eq!(sorted, vec![entry(1, "z"), entry(2, "a"), entry(2, "b")]);
}

#[rstest]
fn sort_by_applies_orders_in_priority() {
    let by_label = Order::<&'static str>::from_ord().contramap(|entry: &Entry| entry.label);
    let sorted = sort_by(vec![by_value(), by_label])(vec![entry(1, "b"), entry(0, "c"), entry(1, "a")]);
    assert_eq!(sorted, vec![entry(0, "c"), entry(1, "a"), entry(1, "b")]);
}

#[rstest]
fn empty_order_treats_everything_as_equal() {
    let neutral = Order::<i32>::empty();
    assert!(neutral.equals(&1, &2));
    assert_eq!(pipe!(vec![3, 1, 2], sort(&neutral)), vec![3, 1, 2]);
}

#[rstest]
#[case(1, 2, 1, 2)]
#[case(5, 5, 5, 5)]
fn min_and_max(#[case] left: i32, #[case] right: i32, #[case] min: i32, #[case] max: i32) {
    let order = Order::<i32>::from_ord();
    assert_eq!(*order.min(&left, &right), min);
    assert_eq!(*order.max(&left, &right), max);
}

proptest! {
    #[test]
    fn prop_sort_matches_std_stable_sort(values in prop::collection::vec((0..5i32, any::<u8>()), 0..40)) {
        let order = Order::<i32>::from_ord().contramap(|pair: &(i32, u8)| pair.0);
        let sorted = pipe!(values.clone(), sort(&order));
        let mut expected = values;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted, expected);
    }
}
