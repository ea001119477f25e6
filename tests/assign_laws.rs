//! Property-based tests for IntervalMap::assign.
//!
//! Every map is checked against a brute-force table of the function it
//! represents, using proptest to generate sequences of assignments.

use std::collections::BTreeMap;

use piecewise::IntervalMap;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_value() -> impl Strategy<Value = char> {
	prop::sample::select(vec!['a', 'b', 'c', 'd'])
}

fn arbitrary_assignment() -> impl Strategy<Value = (i8, i8, char)> {
	(any::<i8>(), any::<i8>(), arbitrary_value())
}

fn arbitrary_assignments() -> impl Strategy<Value = Vec<(i8, i8, char)>> {
	prop::collection::vec(arbitrary_assignment(), 0..40)
}

fn assigned(initial: char, assignments: &[(i8, i8, char)]) -> IntervalMap<i8, char> {
	let mut map = IntervalMap::new(initial);
	for (begin, end, value) in assignments {
		map.assign(*begin, *end, *value);
	}
	map
}

/// The value of every i8 in ascending order.
fn table(map: &IntervalMap<i8, char>) -> Vec<char> {
	(i8::MIN..=i8::MAX).map(|key| map[&key]).collect()
}

fn index(key: i8) -> usize {
	(i16::from(key) - i16::from(i8::MIN)) as usize
}

fn is_canonical(map: &IntervalMap<i8, char>) -> bool {
	let values: Vec<char> = map.breakpoints().map(|(_, value)| *value).collect();
	values.windows(2).all(|pair| pair[0] != pair[1])
}

// =============================================================================
// Canonicity: no two consecutive breakpoints hold equal values
// =============================================================================

proptest! {
	#[test]
	fn prop_assign_keeps_canonical_form(
		initial in arbitrary_value(),
		assignments in arbitrary_assignments()
	) {
		let mut map = IntervalMap::new(initial);
		for (begin, end, value) in assignments {
			map.assign(begin, end, value);

			prop_assert!(is_canonical(&map), "{:?}", map);
			prop_assert_eq!(map.breakpoints().next(), Some((&i8::MIN, map.lookup(&i8::MIN))));
		}
	}
}

// =============================================================================
// Functional correctness against a brute-force table
// =============================================================================

proptest! {
	#[test]
	fn prop_assign_matches_brute_force(
		initial in arbitrary_value(),
		assignments in arbitrary_assignments()
	) {
		let mut map = IntervalMap::new(initial);
		let mut expected = vec![initial; 256];

		for (begin, end, value) in assignments {
			map.assign(begin, end, value);
			if begin < end {
				for key in begin..end {
					expected[index(key)] = value;
				}
			}

			prop_assert_eq!(table(&map), expected.clone());
		}
	}
}

// =============================================================================
// Empty intervals change nothing
// =============================================================================

proptest! {
	#[test]
	fn prop_empty_interval_is_a_no_op(
		assignments in arbitrary_assignments(),
		begin in any::<i8>(),
		end in any::<i8>(),
		value in arbitrary_value()
	) {
		prop_assume!(!(begin < end));

		let before = assigned('a', &assignments);
		let mut after = before.clone();
		after.assign(begin, end, value);

		prop_assert_eq!(after, before);
	}
}

// =============================================================================
// Idempotence: assigning twice equals assigning once
// =============================================================================

proptest! {
	#[test]
	fn prop_assign_is_idempotent(
		assignments in arbitrary_assignments(),
		(begin, end, value) in arbitrary_assignment()
	) {
		let mut once = assigned('a', &assignments);
		once.assign(begin, end, value);

		let mut twice = once.clone();
		twice.assign(begin, end, value);

		prop_assert_eq!(twice.len(), once.len());
		prop_assert_eq!(twice, once);
	}
}

// =============================================================================
// Canonical form depends only on the function, not on the history
// =============================================================================

proptest! {
	#[test]
	fn prop_equal_functions_have_equal_breakpoints(
		left in arbitrary_assignments(),
		right in arbitrary_assignments()
	) {
		let left = assigned('a', &left);
		let right = assigned('a', &right);

		prop_assert_eq!(table(&left) == table(&right), left == right);
	}

	#[test]
	fn prop_restoring_a_range_restores_the_breakpoints(
		assignments in arbitrary_assignments(),
		(begin, end, value) in arbitrary_assignment()
	) {
		let original = assigned('a', &assignments);
		let snapshot = table(&original);

		let mut map = original.clone();
		map.assign(begin, end, value);

		// put every key of the range back one run at a time
		if begin < end {
			let mut run_start = begin;
			for key in begin..=end {
				let run_ends = key == end || snapshot[index(key)] != snapshot[index(run_start)];
				if run_ends {
					map.assign(run_start, key, snapshot[index(run_start)]);
					run_start = key;
				}
			}
		}

		prop_assert_eq!(map, original);
	}
}

// =============================================================================
// Randomized differential test over a wide key range
// =============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn prop_recorded_points_survive_later_assignments(
		assignments in prop::collection::vec(
			(
				-1000_i32..=1000,
				-1000_i32..=1000,
				prop::char::range('A', 'z'),
				prop::collection::vec(-1000_i32..=1000, 10),
			),
			1..60,
		)
	) {
		let mut map = IntervalMap::new('a');
		let mut recorded: BTreeMap<i32, char> = BTreeMap::new();

		for (begin, end, value, probes) in assignments {
			let (begin, end) = if end < begin { (end, begin) } else { (begin, end) };

			// probes not yet recorded keep whatever they held before
			for probe in probes {
				recorded.entry(probe).or_insert(map[&probe]);
			}

			map.assign(begin, end, value);

			for (_, expected) in recorded.range_mut(begin..end) {
				*expected = value;
			}

			for (key, expected) in &recorded {
				prop_assert_eq!(map[key], *expected, "key {}", key);
			}
		}
	}
}
