use super::TestOptions;
use serde::Deserialize;

/// Default field values the registration helpers put into new records.
///
/// The defaults reproduce the legacy layout: tests carry `0` iterations (inherit from
/// the suite), suites carry `1`, and neither has options. Another layout can be loaded
/// from the `records` section of the runner configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RecordShape {
	pub test_iterations: u32,
	pub suite_iterations: u32,
	#[serde(skip)]
	pub test_options: TestOptions,
	#[serde(skip)]
	pub suite_options: TestOptions,
}

impl Default for RecordShape {
	fn default() -> Self {
		Self {
			test_iterations: 0,
			suite_iterations: 1,
			test_options: TestOptions::empty(),
			suite_options: TestOptions::empty(),
		}
	}
}
