//! Full-form assertion entry points.
//!
//! Each function compares `actual` against `expected` with the given [`Operator`] and, on a
//! mismatch, aborts the running test case with an [`AssertionFailure`] pointing at
//! `file:line`. The location is never inferred here; callers pass the call site explicitly.
//! Outside a runner the resulting panic is attributed to the caller as well.

use super::{AssertKind, AssertionFailure, Operator, SourceLocation, capture::abort};
use std::fmt::Debug;

#[track_caller]
fn check<T: PartialOrd + Debug + ?Sized>(
	kind: AssertKind,
	actual: &T,
	operator: Operator,
	expected: &T,
	location: SourceLocation,
	message: &str,
) {
	if operator.compare(actual, expected) {
		return;
	}

	abort(AssertionFailure {
		kind,
		message: message.to_string(),
		location,
		actual: format!("{actual:?}"),
		operator,
		expected: format!("{expected:?}"),
	});
}

macro_rules! full_form {
	($(#[$doc:meta])* $name:ident, $kind:ident, $ty:ty) => {
		$(#[$doc])*
		#[track_caller]
		pub fn $name(actual: $ty, operator: Operator, expected: $ty, file: &'static str, line: u32, message: &str) {
			check(
				AssertKind::$kind,
				&actual,
				operator,
				&expected,
				SourceLocation::new(file, line),
				message,
			);
		}
	};
}

full_form!(
	/// Compares two `usize` values.
	assert_size_full,
	Size,
	usize
);
full_form!(assert_uint8_full, Uint8, u8);
full_form!(assert_uint16_full, Uint16, u16);
full_form!(assert_uint32_full, Uint32, u32);
full_form!(assert_uint64_full, Uint64, u64);
full_form!(
	/// Compares two `i32` values, the width of a C `int`.
	assert_int_full,
	Int,
	i32
);

/// Aborts unless both strings are byte-for-byte equal.
#[track_caller]
pub fn assert_string_equal_full(actual: &str, expected: &str, file: &'static str, line: u32, message: &str) {
	check(
		AssertKind::StringEqual,
		actual,
		Operator::Eq,
		expected,
		SourceLocation::new(file, line),
		message,
	);
}
