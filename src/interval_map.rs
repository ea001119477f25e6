//! A module containing [`IntervalMap`].

use core::fmt;
use core::ops::Index;

use btree_monstrousity::btree_map::SearchBoundCustom;
use btree_monstrousity::BTreeMap;

use crate::utils::{double_comp, equivalent, is_canonical, key_comp};
use crate::Bounded;

/// A canonical map from every key of `K` to a value of `V`, stored as an
/// ordered sequence of breakpoints based on [`BTreeMap`].
///
/// `K` is the generic type parameter for the ordered key domain, only `<`
/// is ever used to compare keys.
///
/// `V` is the generic type parameter for the values, only `==` is ever
/// used to compare values.
///
/// # Examples
/// ```
/// use piecewise::IntervalMap;
///
/// // Every i32 maps to 'A'
/// let mut map = IntervalMap::new('A');
///
/// // Now [3, 5) maps to 'B'
/// map.assign(3, 5, 'B');
///
/// assert_eq!(map[&2], 'A');
/// assert_eq!(map[&3], 'B');
/// assert_eq!(map[&4], 'B');
/// assert_eq!(map[&5], 'A');
///
/// // Iterate over the breakpoints in the map
/// for (key, value) in map.breakpoints() {
/// 	println!("from {key:?} onwards: {value:?}");
/// }
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
	inner: BTreeMap<K, V>,
}

/// The error returned when building an [`IntervalMap`] from a breakpoint
/// sequence that is not a valid canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointsError {
	/// The sequence was empty or its first key was not equivalent to
	/// [`Bounded::MIN`].
	MissingLowestKey,
	/// A key was not strictly greater than the key before it.
	NotAscending,
	/// Two consecutive breakpoints held equal values.
	AdjacentEqualValues,
}

impl fmt::Display for BreakpointsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BreakpointsError::MissingLowestKey => {
				f.write_str("breakpoints do not start at the lowest key")
			}
			BreakpointsError::NotAscending => {
				f.write_str("breakpoint keys are not strictly ascending")
			}
			BreakpointsError::AdjacentEqualValues => {
				f.write_str("adjacent breakpoints hold equal values")
			}
		}
	}
}

/// The marker trait for valid key types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait KeyType: PartialOrd + Bounded {}
impl<K> KeyType for K where K: PartialOrd + Bounded {}

/// The marker trait for valid value types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait ValueType: PartialEq + Clone {}
impl<V> ValueType for V where V: PartialEq + Clone {}

impl<K, V> IntervalMap<K, V>
where
	K: KeyType,
	V: ValueType,
{
	/// Makes a new [`IntervalMap`] which maps every key to `initial`.
	///
	/// The map starts out with a single breakpoint at [`Bounded::MIN`].
	///
	/// # Examples
	/// ```
	/// use piecewise::IntervalMap;
	///
	/// let map: IntervalMap<u8, bool> = IntervalMap::new(true);
	///
	/// assert_eq!(map[&u8::MIN], true);
	/// assert_eq!(map[&u8::MAX], true);
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn new(initial: V) -> Self {
		let mut inner = BTreeMap::new();
		inner.insert(K::MIN, initial, double_comp());

		IntervalMap { inner }
	}

	/// Returns a reference to the value the map holds at the given key,
	/// which is the value of the greatest breakpoint not greater than
	/// `key`.
	///
	/// # Examples
	/// ```
	/// use piecewise::IntervalMap;
	///
	/// let mut map = IntervalMap::new('a');
	/// map.assign(10, 100, 'b');
	///
	/// assert_eq!(map.lookup(&9), &'a');
	/// assert_eq!(map.lookup(&10), &'b');
	/// assert_eq!(map.lookup(&99), &'b');
	/// assert_eq!(map.lookup(&100), &'a');
	/// ```
	pub fn lookup(&self, key: &K) -> &V {
		self.inner
			.upper_bound(key_comp(key), SearchBoundCustom::Included)
			.value()
			.expect("an IntervalMap always has a breakpoint at the lowest key")
	}

	/// Sets every key in the half-open interval `[begin, end)` to `value`,
	/// leaving every other key unchanged.
	///
	/// If `!(begin < end)` the interval is empty and the map is left
	/// untouched. This is deliberately silent rather than an error, check
	/// `begin < end` beforehand if you need to detect it.
	///
	/// Since `end` is excluded, no call to `assign()` can change the value
	/// at [`Bounded::MAX`].
	///
	/// The map stays canonical afterwards: no two consecutive breakpoints
	/// hold equal values, so assigning an interval back to the value
	/// around it removes the breakpoints it previously needed.
	///
	/// # Examples
	/// ```
	/// use piecewise::IntervalMap;
	///
	/// let mut map = IntervalMap::new('a');
	///
	/// map.assign(10, 100, 'b');
	/// assert_eq!(map.len(), 3);
	///
	/// // Empty intervals do nothing
	/// map.assign(50, 0, 'c');
	/// assert_eq!(map.len(), 3);
	///
	/// // Touching the next interval exactly
	/// map.assign(-10, 10, 'c');
	/// assert_eq!(
	/// 	map.breakpoints().collect::<Vec<_>>(),
	/// 	[(&i32::MIN, &'a'), (&-10, &'c'), (&10, &'b'), (&100, &'a')]
	/// );
	///
	/// // Restoring the surrounding value
	/// map.assign(-10, 100, 'a');
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn assign(&mut self, begin: K, end: K, value: V) {
		if !(begin < end) {
			return;
		}

		let end_value = self.lookup(&end).clone();

		// a breakpoint sitting on `end` is removed too and re-created below
		// only if it is still needed
		let mut cursor = self
			.inner
			.lower_bound_mut(key_comp(&begin), SearchBoundCustom::Included);
		while cursor.key().is_some_and(|inner_key| !(end < *inner_key)) {
			cursor.remove_current();
		}

		// start boundary: only needed if the value in effect just before
		// `begin` differs, with no predecessor `begin` was the floor
		let merges_with_previous = self
			.inner
			.upper_bound(key_comp(&begin), SearchBoundCustom::Included)
			.value()
			.is_some_and(|previous_value| *previous_value == value);
		let end_needed = end_value != value;

		if !merges_with_previous {
			self.inner.insert(begin, value, double_comp());
		}

		// end boundary: only needed if the value after `end` differs from
		// the value now running up to it
		if end_needed {
			self.inner.insert(end, end_value, double_comp());
		}
	}

	/// Allocates an [`IntervalMap`] and moves the given breakpoints from
	/// the given slice into the map using
	/// [`IntervalMap::from_iter_strict()`].
	///
	/// May return an `Err` if the breakpoints are not a canonical
	/// representation. See [`IntervalMap::from_iter_strict()`] for
	/// details.
	///
	/// # Examples
	/// ```
	/// use piecewise::{BreakpointsError, IntervalMap};
	///
	/// let map =
	/// 	IntervalMap::from_slice_strict([(i8::MIN, 'a'), (3, 'b'), (5, 'a')])
	/// 		.unwrap();
	/// assert_eq!(map[&4], 'b');
	///
	/// assert_eq!(
	/// 	IntervalMap::from_slice_strict([(i8::MIN, 'a'), (3, 'a')]),
	/// 	Err(BreakpointsError::AdjacentEqualValues)
	/// );
	/// ```
	pub fn from_slice_strict<const N: usize>(
		slice: [(K, V); N],
	) -> Result<IntervalMap<K, V>, BreakpointsError> {
		IntervalMap::from_iter_strict(slice.into_iter())
	}

	/// Collects an [`IntervalMap`] from an iterator of (key, value)
	/// breakpoints.
	///
	/// The breakpoints must already be the canonical representation of the
	/// map, otherwise:
	///
	/// - [`BreakpointsError::MissingLowestKey`] if there are no breakpoints
	///   or the first key is not equivalent to [`Bounded::MIN`].
	/// - [`BreakpointsError::NotAscending`] if a key is not strictly greater
	///   than the key before it.
	/// - [`BreakpointsError::AdjacentEqualValues`] if two consecutive
	///   breakpoints hold equal values.
	///
	/// # Examples
	/// ```
	/// use piecewise::{BreakpointsError, IntervalMap};
	///
	/// let breakpoints = [(u8::MIN, 0), (10, 1), (20, 2)];
	///
	/// let map = IntervalMap::from_iter_strict(
	/// 	breakpoints.into_iter().filter(|(key, _)| *key != 10),
	/// )
	/// .unwrap();
	/// assert_eq!(map[&15], 0);
	///
	/// assert_eq!(
	/// 	IntervalMap::from_iter_strict(breakpoints.into_iter().skip(1)),
	/// 	Err(BreakpointsError::MissingLowestKey)
	/// );
	/// ```
	pub fn from_iter_strict(
		iter: impl Iterator<Item = (K, V)>,
	) -> Result<IntervalMap<K, V>, BreakpointsError> {
		let mut inner = BTreeMap::new();
		for (key, value) in iter {
			push_breakpoint_strict(&mut inner, key, value)?;
		}

		if inner.is_empty() {
			return Err(BreakpointsError::MissingLowestKey);
		}

		let map = IntervalMap { inner };
		debug_assert!(map.is_canonical());
		Ok(map)
	}

	fn is_canonical(&self) -> bool {
		is_canonical(self.inner.iter().map(|(_, value)| value))
	}
}

fn push_breakpoint_strict<K, V>(
	inner: &mut BTreeMap<K, V>,
	key: K,
	value: V,
) -> Result<(), BreakpointsError>
where
	K: KeyType,
	V: ValueType,
{
	match inner.last_key_value() {
		None => {
			if !equivalent(&key, &K::MIN) {
				return Err(BreakpointsError::MissingLowestKey);
			}
		}
		Some((last_key, last_value)) => {
			if !(*last_key < key) {
				return Err(BreakpointsError::NotAscending);
			}
			if *last_value == value {
				return Err(BreakpointsError::AdjacentEqualValues);
			}
		}
	}

	inner.insert(key, value, double_comp());

	Ok(())
}

impl<K, V> IntervalMap<K, V> {
	/// Returns the number of breakpoints in the map, this is never zero.
	///
	/// # Examples
	/// ```
	/// use piecewise::IntervalMap;
	///
	/// let mut map = IntervalMap::new(false);
	///
	/// assert_eq!(map.len(), 1);
	/// map.assign(0, 1, true);
	/// assert_eq!(map.len(), 3);
	/// ```
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns an iterator over every breakpoint in the map in ascending
	/// order of key.
	///
	/// A breakpoint `(key, value)` means the map holds `value` from `key`
	/// up to, but excluding, the next breakpoint's key.
	///
	/// # Examples
	/// ```
	/// use piecewise::IntervalMap;
	///
	/// let mut map = IntervalMap::new('A');
	/// map.assign(3, 5, 'B');
	///
	/// let mut breakpoints = map.breakpoints();
	///
	/// assert_eq!(breakpoints.next(), Some((&i32::MIN, &'A')));
	/// assert_eq!(breakpoints.next(), Some((&3, &'B')));
	/// assert_eq!(breakpoints.next(), Some((&5, &'A')));
	/// assert_eq!(breakpoints.next(), None);
	/// ```
	pub fn breakpoints(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
		self.inner.iter()
	}
}

// Trait Impls ==========================

impl<K, V> Index<&K> for IntervalMap<K, V>
where
	K: KeyType,
	V: ValueType,
{
	type Output = V;

	fn index(&self, key: &K) -> &V {
		self.lookup(key)
	}
}

impl<K, V> Default for IntervalMap<K, V>
where
	K: KeyType,
	V: ValueType + Default,
{
	fn default() -> Self {
		IntervalMap::new(V::default())
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use btree_monstrousity::BTreeMap;
	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::push_breakpoint_strict;
	use crate::{BreakpointsError, IntervalMap, KeyType, ValueType};

	impl<K, V> Serialize for IntervalMap<K, V>
	where
		K: Serialize,
		V: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for (key, value) in self.breakpoints() {
				seq.serialize_element(&(key, value))?;
			}
			seq.end()
		}
	}

	impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
	where
		K: KeyType + Deserialize<'de>,
		V: ValueType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalMapVisitor {
				k: PhantomData,
				v: PhantomData,
			})
		}
	}

	struct IntervalMapVisitor<K, V> {
		k: PhantomData<K>,
		v: PhantomData<V>,
	}

	impl<'de, K, V> Visitor<'de> for IntervalMapVisitor<K, V>
	where
		K: KeyType + Deserialize<'de>,
		V: ValueType + Deserialize<'de>,
	{
		type Value = IntervalMap<K, V>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("a canonical sequence of IntervalMap breakpoints")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut inner = BTreeMap::new();
			while let Some((key, value)) = access.next_element()? {
				push_breakpoint_strict(&mut inner, key, value)
					.map_err(<A::Error as serde::de::Error>::custom)?;
			}
			if inner.is_empty() {
				return Err(serde::de::Error::custom(
					BreakpointsError::MissingLowestKey,
				));
			}
			Ok(IntervalMap { inner })
		}
	}
}
