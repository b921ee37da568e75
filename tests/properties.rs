// SPDX-License-Identifier: MPL-2.0

//! Property tests over randomized sequences of `add`/`remove`, following the teacher's own
//! `tests/proptest.rs` + `version-ranges/src/lib.rs` pattern: a strategy that builds a value
//! of the type under test, then a battery of `proptest!` blocks checking the laws it must
//! obey no matter what the randomizer threw at it.

use proptest::prelude::*;

use tree_range_set::{BoundType, Cut, NavigableMap, Range, RangeSet, TreeRangeSet};

const DOMAIN_LOW: i32 = -8;
const DOMAIN_HIGH: i32 = 8;

fn arb_bound_type() -> impl Strategy<Value = BoundType> {
    prop_oneof![Just(BoundType::Closed), Just(BoundType::Open)]
}

/// A range whose endpoints land in a small domain, so random sequences have a realistic
/// chance of overlapping, touching, and splitting one another.
fn arb_range() -> impl Strategy<Value = Range<i32>> {
    (
        DOMAIN_LOW..=DOMAIN_HIGH,
        DOMAIN_LOW..=DOMAIN_HIGH,
        arb_bound_type(),
        arb_bound_type(),
    )
        .prop_map(|(a, b, lower_type, upper_type)| {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            Range::range(lo, lower_type, hi, upper_type)
        })
}

fn arb_ops() -> impl Strategy<Value = Vec<(bool, Range<i32>)>> {
    prop::collection::vec((any::<bool>(), arb_range()), 0..24)
}

fn build(ops: &[(bool, Range<i32>)]) -> TreeRangeSet<i32> {
    let mut set = TreeRangeSet::new();
    for (is_add, r) in ops {
        if *is_add {
            set.add(r.clone()).unwrap();
        } else {
            set.remove(r.clone());
        }
    }
    set
}

/// A brute-force reference built by scanning every integer in the domain once, independent
/// of the tree's own merge/split logic.
fn brute_force_contains(ops: &[(bool, Range<i32>)], value: i32) -> bool {
    let mut contained = false;
    for (is_add, r) in ops {
        if r.contains(&value) {
            contained = *is_add;
        }
    }
    contained
}

proptest! {
    // P1, P2: every stored range is non-empty, and no two consecutive stored ranges are
    // connected (otherwise they would have been merged).
    #[test]
    fn stored_ranges_are_non_empty_and_pairwise_disconnected(ops in arb_ops()) {
        let set = build(&ops);
        let ranges = set.ranges();
        for r in &ranges {
            prop_assert!(!r.is_empty());
        }
        for pair in ranges.windows(2) {
            prop_assert!(!pair[0].is_connected(&pair[1]));
        }
    }

    // P3: contains() agrees with a brute-force scan over every add/remove in sequence.
    #[test]
    fn contains_matches_a_brute_force_replay(ops in arb_ops()) {
        let set = build(&ops);
        for value in DOMAIN_LOW - 2..=DOMAIN_HIGH + 2 {
            prop_assert_eq!(set.contains(&value), brute_force_contains(&ops, value));
        }
    }

    // P4: from_range_set produces an equal set, and equality is exactly ranges() equality.
    #[test]
    fn from_range_set_round_trips(ops in arb_ops()) {
        let set = build(&ops);
        let copy = TreeRangeSet::from_range_set(&set);
        prop_assert_eq!(&copy, &set);
        prop_assert_eq!(copy.ranges(), set.ranges());
    }

    // P5: complementing twice returns to the original ranges.
    #[test]
    fn double_complement_is_the_identity(ops in arb_ops()) {
        let mut set = build(&ops);
        let original = set.ranges();
        let mut complement = set.complement();
        let back = complement.complement();
        prop_assert_eq!(back.ranges(), original);
    }

    // P6: complement() matches a fresh `all` set with every stored range individually removed.
    #[test]
    fn complement_matches_all_minus_each_stored_range(ops in arb_ops()) {
        let mut set = build(&ops);
        let ranges = set.ranges();

        let mut reference = TreeRangeSet::new();
        reference.add(Range::all()).unwrap();
        for r in &ranges {
            reference.remove(r.clone());
        }

        let complement = set.complement();
        prop_assert_eq!(complement.ranges(), reference.ranges());
    }

    // P7: sub_range_set clips to the window exactly as a manual intersect-and-filter would.
    #[test]
    fn sub_range_set_matches_manual_intersection(ops in arb_ops(), window in arb_range()) {
        let mut set = build(&ops);
        let expected: Vec<Range<i32>> = set
            .ranges()
            .into_iter()
            .filter(|r| r.is_connected(&window))
            .map(|r| r.intersection(&window))
            .filter(|r| !r.is_empty())
            .collect();

        let sub = set.sub_range_set(window);
        prop_assert_eq!(sub.ranges(), expected);
    }

    // P8: the complement of a sub-range view is the complement restricted to that same window.
    #[test]
    fn sub_range_set_complement_is_the_windowed_complement(ops in arb_ops(), window in arb_range()) {
        let mut set = build(&ops);
        let ranges = set.ranges();

        let mut reference = TreeRangeSet::new();
        reference.add(window.clone()).unwrap();
        for r in &ranges {
            reference.remove(r.clone());
        }

        let mut sub = set.sub_range_set(window);
        let sub_complement = sub.complement();
        prop_assert_eq!(sub_complement.ranges(), reference.ranges());
    }

    // P9: the by-lower and by-upper navigable indices agree with a brute-force scan of the
    // materialized range list for every probe.
    #[test]
    fn navigable_indices_agree_with_a_brute_force_scan(ops in arb_ops(), probe in DOMAIN_LOW..=DOMAIN_HIGH) {
        let set = build(&ops);
        let ranges = set.ranges();
        let by_lower = set.ranges_by_lower_bound();
        let by_upper = set.ranges_by_upper_bound();

        for key in [Cut::BelowValue(probe), Cut::AboveValue(probe)] {
            let expected_floor_by_lower = ranges.iter().rev().find(|r| *r.lower_bound() <= key).cloned();
            prop_assert_eq!(by_lower.floor_entry(&key), expected_floor_by_lower);

            let expected_lower_by_lower = ranges.iter().rev().find(|r| *r.lower_bound() < key).cloned();
            prop_assert_eq!(by_lower.lower_entry(&key), expected_lower_by_lower);

            let expected_ceiling_by_lower = ranges.iter().find(|r| *r.lower_bound() >= key).cloned();
            prop_assert_eq!(by_lower.ceiling_entry(&key), expected_ceiling_by_lower);

            let expected_higher_by_lower = ranges.iter().find(|r| *r.lower_bound() > key).cloned();
            prop_assert_eq!(by_lower.higher_entry(&key), expected_higher_by_lower);

            let expected_floor_by_upper = ranges.iter().rev().find(|r| *r.upper_bound() <= key).cloned();
            prop_assert_eq!(by_upper.floor_entry(&key), expected_floor_by_upper);

            let expected_lower_by_upper = ranges.iter().rev().find(|r| *r.upper_bound() < key).cloned();
            prop_assert_eq!(by_upper.lower_entry(&key), expected_lower_by_upper);

            let expected_ceiling_by_upper = ranges.iter().find(|r| *r.upper_bound() >= key).cloned();
            prop_assert_eq!(by_upper.ceiling_entry(&key), expected_ceiling_by_upper);

            let expected_higher_by_upper = ranges.iter().find(|r| *r.upper_bound() > key).cloned();
            prop_assert_eq!(by_upper.higher_entry(&key), expected_higher_by_upper);
        }

        let expected_descending: Vec<Range<i32>> = ranges.iter().rev().cloned().collect();
        prop_assert_eq!(by_lower.descending_map(), expected_descending.clone());
        prop_assert_eq!(by_upper.descending_map(), expected_descending);
    }

    // P10: encloses(q) is true iff some single stored range encloses q.
    #[test]
    fn encloses_matches_a_single_enclosing_stored_range(ops in arb_ops(), q in arb_range()) {
        let set = build(&ops);
        let expected = set.ranges().iter().any(|r| r.encloses(&q));
        prop_assert_eq!(set.encloses(&q), expected);
    }
}
