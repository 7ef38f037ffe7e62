//! Legacy-shaped assertion, test-case and registration macros.
//!
//! Each assertion macro expands to exactly one full-form call with `file!()` and `line!()`
//! taken from the invocation, so a failure points at the test code and not at this file.

/// Maps a bare comparison token to an [`Operator`](crate::Operator).
#[doc(hidden)]
#[macro_export]
macro_rules! __munit_operator {
	(==) => {
		$crate::core::Operator::Eq
	};
	(!=) => {
		$crate::core::Operator::Ne
	};
	(<) => {
		$crate::core::Operator::Lt
	};
	(<=) => {
		$crate::core::Operator::Le
	};
	(>) => {
		$crate::core::Operator::Gt
	};
	(>=) => {
		$crate::core::Operator::Ge
	};
	($other:tt) => {
		::core::compile_error!(::core::concat!(
			"unsupported comparison operator `",
			::core::stringify!($other),
			"`, expected one of ==, !=, <, <=, >, >="
		))
	};
}

/// Compares two `usize` values: `munit_assert_size!(actual, OP, expected, msg)`.
#[macro_export]
macro_rules! munit_assert_size {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_size_full(
			$a,
			$crate::__munit_operator!($op),
			$b,
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Compares two `u8` values.
#[macro_export]
macro_rules! munit_assert_uint8 {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_uint8_full(
			$a,
			$crate::__munit_operator!($op),
			$b,
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Compares two `u16` values.
#[macro_export]
macro_rules! munit_assert_uint16 {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_uint16_full(
			$a,
			$crate::__munit_operator!($op),
			$b,
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Compares two `u32` values.
#[macro_export]
macro_rules! munit_assert_uint32 {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_uint32_full(
			$a,
			$crate::__munit_operator!($op),
			$b,
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Compares two `u64` values.
#[macro_export]
macro_rules! munit_assert_uint64 {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_uint64_full(
			$a,
			$crate::__munit_operator!($op),
			$b,
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Compares two `i32` values.
#[macro_export]
macro_rules! munit_assert_int {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_int_full(
			$a,
			$crate::__munit_operator!($op),
			$b,
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Checks two strings for equality: `munit_assert_string_equal!(actual, expected, msg)`.
#[macro_export]
macro_rules! munit_assert_string_equal {
	($a:expr, $b:expr, $msg:expr $(,)?) => {
		$crate::core::assert::assert_string_equal_full(
			::core::convert::AsRef::<str>::as_ref(&$a),
			::core::convert::AsRef::<str>::as_ref(&$b),
			::core::file!(),
			::core::line!(),
			::core::convert::AsRef::<str>::as_ref(&$msg),
		)
	};
}

/// Short form of [`munit_assert_int!`].
#[macro_export]
macro_rules! assert_int {
	($a:expr, $op:tt, $b:expr, $msg:expr $(,)?) => {
		$crate::munit_assert_int!($a, $op, $b, $msg)
	};
}

/// Short form of [`munit_assert_string_equal!`].
#[macro_export]
macro_rules! assert_string_equal {
	($actual:expr, $expected:expr, $msg:expr $(,)?) => {
		$crate::munit_assert_string_equal!($actual, $expected, $msg)
	};
}

/// Defines a test function from a block: `munit_case!(RUN, test_name, { ... })`.
///
/// The generated function ignores the runner's parameters and user data, runs the block
/// and reports [`TestResult::Ok`](crate::TestResult::Ok). A failing assertion unwinds out
/// of the block, so the statements after it never run. The block may `return` another
/// [`TestResult`](crate::TestResult) early, e.g. to skip.
#[macro_export]
macro_rules! munit_case {
	($kind:ident, $vis:vis $name:ident, $body:block $(,)?) => {
		#[allow(unreachable_code)]
		$vis fn $name(
			params: &[$crate::core::Parameter],
			user_data: &mut dyn ::std::any::Any,
		) -> $crate::core::TestResult {
			let _ = params;
			let _ = user_data;
			$body;
			$crate::core::TestResult::Ok
		}
	};
}

/// Registers a test: `munit_test!("/path", test_fn)`.
///
/// An optional third argument, a [`RecordShape`](crate::core::RecordShape), replaces the
/// legacy defaults of the remaining fields.
#[macro_export]
macro_rules! munit_test {
	($path:expr, $test:expr $(,)?) => {
		$crate::core::TestRecord::new($path, $test)
	};
	($path:expr, $test:expr, $shape:expr $(,)?) => {
		$crate::core::TestRecord::with_shape($path, $test, &$shape)
	};
}

/// The record terminating a test list.
#[macro_export]
macro_rules! munit_null_test {
	() => {
		$crate::core::TestRecord::sentinel()
	};
}

/// Builds a suite named `/name` over a sentinel-terminated test list.
///
/// Takes the same optional [`RecordShape`](crate::core::RecordShape) as [`munit_test!`].
#[macro_export]
macro_rules! munit_suite {
	($name:expr, $tests:expr $(,)?) => {
		$crate::core::Suite::new($name, $tests)
	};
	($name:expr, $tests:expr, $shape:expr $(,)?) => {
		$crate::core::Suite::with_shape($name, $tests, &$shape)
	};
}
