use std::{fmt::Display, panic::Location};

/// File and line of an assertion call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
	pub file: &'static str,
	pub line: u32,
}

impl SourceLocation {
	pub const fn new(file: &'static str, line: u32) -> Self {
		Self { file, line }
	}

	/// Location of the caller, following `#[track_caller]` frames up to the first untracked one.
	#[track_caller]
	pub fn caller() -> Self {
		Self::from(Location::caller())
	}
}

impl From<&'static Location<'static>> for SourceLocation {
	fn from(location: &'static Location<'static>) -> Self {
		Self::new(location.file(), location.line())
	}
}

impl Display for SourceLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.file, self.line)
	}
}
