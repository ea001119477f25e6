use core::cmp::Ordering;

use itertools::Itertools;

use crate::KeyType;

/// Orders two keys using nothing but `<`, keys where neither is less than
/// the other are equivalent.
pub(crate) fn cmp_by_lt<K>(a: &K, b: &K) -> Ordering
where
	K: PartialOrd,
{
	if a < b {
		Ordering::Less
	} else if b < a {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

pub(crate) fn equivalent<K>(a: &K, b: &K) -> bool
where
	K: PartialOrd,
{
	cmp_by_lt(a, b).is_eq()
}

pub(crate) fn double_comp<K>() -> impl FnMut(&K, &K) -> Ordering
where
	K: KeyType,
{
	|inner_key: &K, new_key: &K| cmp_by_lt(new_key, inner_key)
}

pub(crate) fn key_comp<K>(key: &K) -> impl FnMut(&K) -> Ordering + '_
where
	K: KeyType,
{
	move |inner_key: &K| cmp_by_lt(key, inner_key)
}

/// No two consecutive values are equal.
pub(crate) fn is_canonical<'a, V, I>(values: I) -> bool
where
	V: PartialEq + 'a,
	I: IntoIterator<Item = &'a V>,
{
	values.into_iter().tuple_windows().all(|(a, b)| a != b)
}
