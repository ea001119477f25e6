//! A module containing the [`Bounded`] trait and trait impls for the
//! primitive datatypes.

/// A trait for key types which have a lowest and a highest representable
/// value. See the top-level module documentation on the [`Floor
/// Breakpoint`](crate#the-floor-breakpoint) for why the lowest value is
/// needed.
pub trait Bounded {
	/// The lowest value of the type, no value of the type compares less
	/// than it.
	const MIN: Self;
	/// The highest value of the type, no value of the type compares greater
	/// than it.
	const MAX: Self;
}

macro_rules! bounded_by_consts {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Bounded for $ident {
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;
		}

		bounded_by_consts!($($t)*);
	};
}

bounded_by_consts!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

impl Bounded for char {
	const MIN: Self = '\0';
	const MAX: Self = char::MAX;
}

impl Bounded for bool {
	const MIN: Self = false;
	const MAX: Self = true;
}

// infinities rather than MIN/MAX so that every non-NaN float sits at or
// above the floor
impl Bounded for f32 {
	const MIN: Self = f32::NEG_INFINITY;
	const MAX: Self = f32::INFINITY;
}
impl Bounded for f64 {
	const MIN: Self = f64::NEG_INFINITY;
	const MAX: Self = f64::INFINITY;
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_bounds<T>()
	where
		T: Bounded + PartialOrd + core::fmt::Debug,
	{
		assert!(T::MIN < T::MAX);
		assert!(!(T::MAX < T::MIN));
	}

	#[test]
	fn bounds_are_ordered() {
		assert_bounds::<u8>();
		assert_bounds::<i32>();
		assert_bounds::<i128>();
		assert_bounds::<usize>();
		assert_bounds::<char>();
		assert_bounds::<bool>();
		assert_bounds::<f32>();
		assert_bounds::<f64>();
	}

	#[test]
	fn float_bounds_cover_finite_values() {
		assert!(f64::MIN > <f64 as Bounded>::MIN);
		assert!(f64::MAX < <f64 as Bounded>::MAX);
		assert_eq!(<char as Bounded>::MIN, '\0');
	}
}
