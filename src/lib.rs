//! This crate provides [`IntervalMap`], a Data Structure for storing
//! piecewise-constant functions over an ordered key domain based off
//! [`BTreeMap`].
//!
//! Rather than storing a value for every key, the map stores only the
//! breakpoints where the value changes and keeps them in their unique
//! minimal (canonical) form at all times.
//!
//! ## Example using `i32` keys
//!
//! ```rust
//! use piecewise::IntervalMap;
//!
//! let mut map = IntervalMap::new('a');
//!
//! map.assign(10, 100, 'b');
//! map.assign(-10, 9, 'c');
//!
//! assert_eq!(map[&-11], 'a');
//! assert_eq!(map[&-10], 'c');
//! assert_eq!(map[&9], 'a');
//! assert_eq!(map[&10], 'b');
//! assert_eq!(map[&100], 'a');
//!
//! assert_eq!(map.len(), 5);
//! ```
//!
//! ## Example using a custom key type
//!
//! ```rust
//! use piecewise::{Bounded, IntervalMap};
//!
//! // Only `<` is needed for keys, so a derived `PartialOrd` is enough
//! #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
//! struct Minute(u16);
//!
//! impl Bounded for Minute {
//! 	const MIN: Self = Minute(0);
//! 	const MAX: Self = Minute(24 * 60);
//! }
//!
//! let mut rota = IntervalMap::new("closed");
//!
//! rota.assign(Minute(9 * 60), Minute(17 * 60), "open");
//! rota.assign(Minute(12 * 60), Minute(13 * 60), "lunch");
//!
//! assert_eq!(rota[&Minute(8 * 60)], "closed");
//! assert_eq!(rota[&Minute(12 * 60 + 30)], "lunch");
//! assert_eq!(rota[&Minute(16 * 60)], "open");
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Breakpoints
//!
//! A breakpoint `(key, value)` means the map holds `value` for every key
//! from `key` up to, but excluding, the key of the next breakpoint, or for
//! every key from `key` onwards if it is the last breakpoint.
//!
//! ### The Floor Breakpoint
//!
//! Every key type must be [`Bounded`] so that the map can always hold a
//! breakpoint at [`Bounded::MIN`]. That breakpoint is the floor of the
//! entire function and is what makes [`IntervalMap::lookup()`] total: every
//! key has a greatest breakpoint at or below it.
//!
//! ### Half-Open Intervals
//!
//! [`IntervalMap::assign()`] takes half-open intervals `[begin, end)`, they
//! include `begin` and exclude `end`. An interval is empty when
//! `!(begin < end)`, this is the only test applied to the end-points, so
//! key types whose `<` is only a partial order still behave sensibly.
//!
//! A consequence of half-open intervals over a bounded domain is that the
//! value at [`Bounded::MAX`] can never be changed by an assignment.
//!
//! ### Canonical Form
//!
//! No two consecutive breakpoints ever hold equal values. Every
//! [`IntervalMap::assign()`] merges the assigned interval into its
//! neighbours whenever their values are equal, so the breakpoints of a map
//! depend only on the function it represents and never on the history of
//! assignments that built it.
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`IntervalMap`] as a
//!   sequence of `(key, value)` breakpoints. Deserializing checks the
//!   sequence is canonical and fails otherwise.
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub(crate) mod utils;

pub mod bounded;
pub mod interval_map;

pub use crate::bounded::Bounded;
pub use crate::interval_map::{
	BreakpointsError, IntervalMap, KeyType, ValueType,
};
