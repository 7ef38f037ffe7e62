//! Runner configuration.
//!
//! Usually deserialized from a YAML file and then refined by command line flags:
//!
//! ```yaml
//! filters: ["/math"]
//! iterations: 3
//! fatal_failures: false
//! color: true
//! params:
//!   - { name: "size", value: "16" }
//! records:
//!   test_iterations: 0
//!   suite_iterations: 1
//! ```

use crate::{Parameter, RecordShape};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
	/// Only tests whose full path starts with one of these prefixes run. Empty runs everything.
	pub filters: Vec<String>,

	/// Overrides the iteration count of every test.
	pub iterations: Option<u32>,

	/// Stop the whole run after the first failed or errored test.
	pub fatal_failures: bool,

	/// Colorize the report.
	pub color: bool,

	/// Parameters passed to every test function.
	pub params: Vec<Parameter>,

	/// Iteration counts and options used wherever a record or suite still carries the legacy
	/// default. Can also be handed to the registration helpers as their shape.
	pub records: RecordShape,
}

impl Default for RunnerConfig {
	fn default() -> Self {
		Self {
			filters: Vec::new(),
			iterations: None,
			fatal_failures: false,
			color: true,
			params: Vec::new(),
			records: RecordShape::default(),
		}
	}
}

impl RunnerConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		if text.trim().is_empty() {
			return Ok(Self::default());
		}
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening runner config {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("parsing runner config {path:?}"))
	}

	/// Returns `true` if a test with this full path passes the filters.
	pub fn selects(&self, path: &str) -> bool {
		self.filters.is_empty() || self.filters.iter().any(|filter| path.starts_with(filter.as_str()))
	}
}
