#![cfg(feature = "serde")]
//! Serializing an IntervalMap writes its breakpoints, deserializing checks
//! they are canonical.

use piecewise::IntervalMap;
use pretty_assertions::assert_eq;

#[test]
fn serializes_breakpoints_in_order() {
	let mut map = IntervalMap::new('a');
	map.assign(3_i8, 5, 'b');

	assert_eq!(
		serde_json::to_string(&map).unwrap(),
		r#"[[-128,"a"],[3,"b"],[5,"a"]]"#
	);
}

#[test]
fn deserializes_canonical_breakpoints() {
	let map: IntervalMap<i8, char> =
		serde_json::from_str(r#"[[-128,"a"],[3,"b"],[5,"a"]]"#).unwrap();

	assert_eq!(map[&2], 'a');
	assert_eq!(map[&3], 'b');
	assert_eq!(map[&5], 'a');
	assert_eq!(map.len(), 3);
}

#[test]
fn rejects_invalid_breakpoints() {
	for json in [
		r#"[]"#,
		r#"[[0,"a"]]"#,
		r#"[[-128,"a"],[5,"b"],[3,"c"]]"#,
		r#"[[-128,"a"],[3,"b"],[5,"b"]]"#,
	] {
		assert!(
			serde_json::from_str::<IntervalMap<i8, char>>(json).is_err(),
			"{json} should not deserialize"
		);
	}
}
