//! Function form of the facade.
//!
//! Same arguments as the macros, but the operator is passed as an [`Operator`] value and the
//! location comes from `#[track_caller]`. Helper functions that should report their own
//! caller instead of themselves must be `#[track_caller]` too.

use crate::core::{Operator, SourceLocation, assert};

macro_rules! tracked {
	($(#[$doc:meta])* $name:ident, $full:ident, $ty:ty) => {
		$(#[$doc])*
		#[track_caller]
		pub fn $name(actual: $ty, operator: Operator, expected: $ty, message: &str) {
			let location = SourceLocation::caller();
			assert::$full(actual, operator, expected, location.file, location.line, message);
		}
	};
}

tracked!(
	/// Compares two `usize` values, reporting the caller's location.
	assert_size,
	assert_size_full,
	usize
);
tracked!(
	/// Compares two `u8` values.
	assert_uint8,
	assert_uint8_full,
	u8
);
tracked!(
	/// Compares two `u16` values.
	assert_uint16,
	assert_uint16_full,
	u16
);
tracked!(
	/// Compares two `u32` values.
	assert_uint32,
	assert_uint32_full,
	u32
);
tracked!(
	/// Compares two `u64` values.
	assert_uint64,
	assert_uint64_full,
	u64
);
tracked!(
	/// Compares two `i32` values.
	///
	/// ```
	/// use munit_compat::{Operator, core::{CaseAbort, catch_failure}, facade::assert_int};
	///
	/// assert!(catch_failure(|| assert_int(2 + 3, Operator::Eq, 5, "sum")).is_ok());
	///
	/// let line = line!() + 1;
	/// let result = catch_failure(|| assert_int(2 + 2, Operator::Eq, 5, "sum"));
	/// match result {
	///     Err(CaseAbort::Assertion(failure)) => assert_eq!(failure.location.line, line),
	///     other => panic!("unexpected {other:?}"),
	/// }
	/// ```
	assert_int,
	assert_int_full,
	i32
);

/// Checks two strings for equality, reporting the caller's location.
#[track_caller]
pub fn assert_string_equal(actual: &str, expected: &str, message: &str) {
	let location = SourceLocation::caller();
	assert::assert_string_equal_full(actual, expected, location.file, location.line, message);
}
