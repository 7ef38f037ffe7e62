use super::{Parameter, RecordShape, TestOption, TestOptions, TestResult};
use std::{any::Any, fmt::Debug};

/// A test function: receives the run parameters and the user data (or the fixture built by setup).
pub type TestFn = fn(&[Parameter], &mut dyn Any) -> TestResult;

/// Builds the fixture a test receives in place of the suite's user data.
pub type SetupFn = fn(&[Parameter], &mut dyn Any) -> Box<dyn Any>;

/// Releases whatever setup built; receives the same data the test received.
pub type TeardownFn = fn(&mut dyn Any);

/// One entry of a test list.
///
/// `path` and `test` are optional only so that the list terminator can be expressed:
/// a record with neither is the sentinel, a record with just one of them is malformed.
#[derive(Clone, Copy)]
pub struct TestRecord {
	pub path: Option<&'static str>,
	pub test: Option<TestFn>,
	pub setup: Option<SetupFn>,
	pub teardown: Option<TeardownFn>,
	/// `0` inherits the suite's iteration count.
	pub iterations: u32,
	pub options: TestOptions,
}

impl TestRecord {
	pub fn new(path: &'static str, test: TestFn) -> Self {
		Self::with_shape(path, test, &RecordShape::default())
	}

	pub fn with_shape(path: &'static str, test: TestFn, shape: &RecordShape) -> Self {
		Self {
			path: Some(path),
			test: Some(test),
			setup: None,
			teardown: None,
			iterations: shape.test_iterations,
			options: shape.test_options,
		}
	}

	/// The record terminating a test list.
	pub fn sentinel() -> Self {
		Self {
			path: None,
			test: None,
			setup: None,
			teardown: None,
			iterations: 0,
			options: TestOptions::empty(),
		}
	}

	pub fn is_sentinel(&self) -> bool {
		self.path.is_none() && self.test.is_none()
	}

	pub fn with_setup(mut self, setup: SetupFn) -> Self {
		self.setup = Some(setup);
		self
	}

	pub fn with_teardown(mut self, teardown: TeardownFn) -> Self {
		self.teardown = Some(teardown);
		self
	}

	pub fn with_iterations(mut self, iterations: u32) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_option(mut self, option: TestOption) -> Self {
		self.options |= option;
		self
	}
}

impl Debug for TestRecord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TestRecord")
			.field("path", &self.path)
			.field("test", &self.test.is_some())
			.field("setup", &self.setup.is_some())
			.field("teardown", &self.teardown.is_some())
			.field("iterations", &self.iterations)
			.field("options", &self.options)
			.finish()
	}
}
