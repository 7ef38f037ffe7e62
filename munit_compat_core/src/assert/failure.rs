use super::{Operator, SourceLocation};
use std::fmt::Display;

/// The typed assertion family a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertKind {
	Size,
	Uint8,
	Uint16,
	Uint32,
	Uint64,
	Int,
	StringEqual,
}

impl AssertKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			AssertKind::Size => "size",
			AssertKind::Uint8 => "uint8",
			AssertKind::Uint16 => "uint16",
			AssertKind::Uint32 => "uint32",
			AssertKind::Uint64 => "uint64",
			AssertKind::Int => "int",
			AssertKind::StringEqual => "string_equal",
		}
	}
}

impl Display for AssertKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A failed comparison, carried as the unwind payload that aborts the running test case.
///
/// `actual` and `expected` hold the `Debug` rendering of the compared values, so strings
/// show up quoted and escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
	pub kind: AssertKind,
	pub message: String,
	pub location: SourceLocation,
	pub actual: String,
	pub operator: Operator,
	pub expected: String,
}

impl Display for AssertionFailure {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}: assertion failed: {} ({} {} {})",
			self.location, self.message, self.actual, self.operator, self.expected
		)
	}
}

impl std::error::Error for AssertionFailure {}
