//! Order instances - first-class comparison functions.
//!
//! An [`Order<A>`] is a total ordering stored as a value, so orderings can be
//! built, adapted with [`Order::contramap`], reversed, and chained for
//! tie-breaking through its `Semigroup` instance.
//!
//! # Examples
//!
//! ```rust
//! use kindred::pipe;
//! use kindred::typeclass::{Order, Semigroup, sort};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Entry { key: u8, label: &'static str }
//!
//! let by_key = Order::<u8>::from_ord().contramap(|entry: &Entry| entry.key);
//! let sorted = pipe!(
//!     vec![
//!         Entry { key: 2, label: "b" },
//!         Entry { key: 1, label: "x" },
//!         Entry { key: 2, label: "a" },
//!     ],
//!     sort(&by_key),
//! );
//! let labels: Vec<_> = sorted.iter().map(|entry| entry.label).collect();
//! assert_eq!(labels, vec!["x", "b", "a"]);
//!
//! let by_key_then_label = by_key.combine(Order::<&str>::from_ord().contramap(|entry: &Entry| entry.label));
//! let sorted = sort(&by_key_then_label)(vec![
//!     Entry { key: 2, label: "b" },
//!     Entry { key: 2, label: "a" },
//! ]);
//! assert_eq!(sorted[0].label, "a");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A total ordering on `A`, stored as a value.
pub struct Order<A> {
    compare: Rc<dyn Fn(&A, &A) -> Ordering>,
}

impl<A> Clone for Order<A> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<A> fmt::Debug for Order<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Order(<function>)")
    }
}

impl<A: 'static> Order<A> {
    /// Wraps a comparison function.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&A, &A) -> Ordering + 'static,
    {
        Self {
            compare: Rc::new(compare),
        }
    }

    /// The natural ordering of an `Ord` type.
    pub fn from_ord() -> Self
    where
        A: Ord,
    {
        Self::new(Ord::cmp)
    }

    /// Compares two values.
    #[inline]
    pub fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.compare)(left, right)
    }

    /// `true` when the values compare equal.
    pub fn equals(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    /// Orders `B` by the key `function` extracts from it.
    pub fn contramap<B, F>(&self, function: F) -> Order<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        let compare = Rc::clone(&self.compare);
        Order::new(move |left: &B, right: &B| compare(&function(left), &function(right)))
    }

    /// The opposite ordering.
    pub fn reverse(&self) -> Self {
        let compare = Rc::clone(&self.compare);
        Self::new(move |left, right| compare(right, left))
    }

    /// The smaller value; `left` on ties.
    pub fn min<'a>(&self, left: &'a A, right: &'a A) -> &'a A {
        if self.compare(right, left) == Ordering::Less { right } else { left }
    }

    /// The larger value; `left` on ties.
    pub fn max<'a>(&self, left: &'a A, right: &'a A) -> &'a A {
        if self.compare(right, left) == Ordering::Greater { right } else { left }
    }
}

/// Chains orderings: `other` only decides when `self` sees a tie.
impl<A: 'static> Semigroup for Order<A> {
    fn combine(self, other: Self) -> Self {
        Self::new(move |left, right| {
            self.compare(left, right).then_with(|| other.compare(left, right))
        })
    }
}

/// The ordering that considers everything equal.
impl<A: 'static> Monoid for Order<A> {
    fn empty() -> Self {
        Self::new(|_, _| Ordering::Equal)
    }
}

/// Returns a function that stably sorts a vector by `order`.
///
/// Elements that compare equal keep their input order.
pub fn sort<A: 'static>(order: &Order<A>) -> impl Fn(Vec<A>) -> Vec<A> + use<A> {
    let order = order.clone();
    move |mut values| {
        values.sort_by(|left, right| order.compare(left, right));
        values
    }
}

/// Returns a function that stably sorts by several orderings, the first one
/// deciding first.
pub fn sort_by<A: 'static>(orders: Vec<Order<A>>) -> impl Fn(Vec<A>) -> Vec<A> + use<A> {
    let order = Order::combine_all(orders);
    sort(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn from_ord_matches_cmp(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(Order::<i32>::from_ord().compare(&left, &right), expected);
    }

    #[rstest]
    fn reverse_flips_comparison() {
        let descending = Order::<i32>::from_ord().reverse();
        assert_eq!(pipe!(vec![1, 3, 2], sort(&descending)), vec![3, 2, 1]);
    }

    #[rstest]
    fn min_and_max_prefer_left_on_ties() {
        let by_length = Order::<usize>::from_ord().contramap(|text: &&str| text.len());
        assert_eq!(*by_length.min(&"ab", &"cd"), "ab");
        assert_eq!(*by_length.max(&"ab", &"cd"), "ab");
        assert_eq!(*by_length.max(&"ab", &"cde"), "cde");
    }

    #[rstest]
    fn sort_by_uses_later_orders_for_ties() {
        let by_first = Order::<char>::from_ord().contramap(|pair: &(char, u8)| pair.0);
        let by_second = Order::<u8>::from_ord().contramap(|pair: &(char, u8)| pair.1);
        let sorted = sort_by(vec![by_first, by_second])(vec![('b', 1), ('a', 2), ('a', 1)]);
        assert_eq!(sorted, vec![('a', 1), ('a', 2), ('b', 1)]);
    }

    #[rstest]
    fn sort_outlives_the_borrowed_order() {
        let ascending = {
            let order = Order::<i32>::from_ord();
            sort(&order)
        };
        assert_eq!(ascending(vec![2, 3, 1]), vec![1, 2, 3]);
    }

    #[rstest]
    fn combine_skips_the_tie_breaker_when_decided() {
        let calls = Rc::new(std::cell::Cell::new(0));
        let counted = Rc::clone(&calls);
        let tie_breaker = Order::<i32>::new(move |left, right| {
            counted.set(counted.get() + 1);
            left.cmp(right)
        });
        let by_parity = Order::<bool>::from_ord().contramap(|n: &i32| n % 2 == 0);
        let combined = by_parity.combine(tie_breaker);

        assert_eq!(combined.compare(&1, &2), Ordering::Less);
        assert_eq!(calls.get(), 0);
        assert_eq!(combined.compare(&1, &3), Ordering::Less);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn empty_order_keeps_input_order() {
        let unchanged = pipe!(vec![3, 1, 2], sort(&Order::<i32>::empty()));
        assert_eq!(unchanged, vec![3, 1, 2]);
    }

    proptest! {
        #[test]
        fn sort_is_stable_ascending(values in proptest::collection::vec((0u8..4, any::<u16>()), 0..32)) {
            let by_key = Order::<u8>::from_ord().contramap(|pair: &(u8, u16)| pair.0);
            let sorted = pipe!(values.clone(), sort(&by_key));

            let mut expected = values;
            expected.sort_by_key(|pair| pair.0);
            prop_assert_eq!(sorted, expected);
        }
    }
}
