use anyhow::{Result, bail};
use std::fmt::Display;

/// Comparison operator of an assertion, written as a bare token (`==`, `<=`, ...) at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
}

impl Operator {
	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Eq => "==",
			Operator::Ne => "!=",
			Operator::Lt => "<",
			Operator::Le => "<=",
			Operator::Gt => ">",
			Operator::Ge => ">=",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.trim() {
			"==" => Operator::Eq,
			"!=" => Operator::Ne,
			"<" => Operator::Lt,
			"<=" => Operator::Le,
			">" => Operator::Gt,
			">=" => Operator::Ge,
			_ => bail!("Unknown comparison operator {value:?}. Expected one of ==, !=, <, <=, >, >="),
		})
	}

	/// Returns `true` if `actual OP expected` holds.
	pub fn compare<T: PartialOrd + ?Sized>(&self, actual: &T, expected: &T) -> bool {
		match self {
			Operator::Eq => actual == expected,
			Operator::Ne => actual != expected,
			Operator::Lt => actual < expected,
			Operator::Le => actual <= expected,
			Operator::Gt => actual > expected,
			Operator::Ge => actual >= expected,
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
