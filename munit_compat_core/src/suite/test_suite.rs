use super::{RecordShape, TestOptions, TestRecord};
use anyhow::{Context, Result, bail, ensure};

/// A named test list plus optional sub-suites, read-only once built.
#[derive(Debug, Clone)]
pub struct Suite<'a> {
	/// Path prefix of every test in the suite, e.g. `/math`.
	pub prefix: String,
	pub tests: &'a [TestRecord],
	pub suites: &'a [Suite<'a>],
	pub iterations: u32,
	pub options: TestOptions,
}

impl<'a> Suite<'a> {
	/// Creates a suite whose prefix is `name` preceded by `/`.
	pub fn new(name: &str, tests: &'a [TestRecord]) -> Self {
		Self::with_shape(name, tests, &RecordShape::default())
	}

	pub fn with_shape(name: &str, tests: &'a [TestRecord], shape: &RecordShape) -> Self {
		Self {
			prefix: format!("/{name}"),
			tests,
			suites: &[],
			iterations: shape.suite_iterations,
			options: shape.suite_options,
		}
	}

	pub fn with_suites(mut self, suites: &'a [Suite<'a>]) -> Self {
		self.suites = suites;
		self
	}

	pub fn path(&self) -> &str {
		&self.prefix
	}

	/// The records before the sentinel.
	pub fn registered(&self) -> impl Iterator<Item = &TestRecord> {
		self.tests.iter().take_while(|record| !record.is_sentinel())
	}

	/// Checks that every test list (recursively) is well formed.
	///
	/// An empty list is accepted as "no tests"; a non-empty one must end in a sentinel,
	/// and every record before it must carry both a `/`-prefixed path and a function.
	pub fn validate(&self) -> Result<()> {
		let mut terminated = false;
		for (index, record) in self.tests.iter().enumerate() {
			if record.is_sentinel() {
				terminated = true;
				break;
			}
			match (record.path, record.test) {
				(Some(path), Some(_)) => ensure!(
					path.starts_with('/'),
					"test path {path:?} in suite {:?} must start with '/'",
					self.prefix
				),
				(Some(path), None) => bail!("test {path:?} in suite {:?} has no test function", self.prefix),
				(None, _) => bail!("test #{index} in suite {:?} has a test function but no path", self.prefix),
			}
		}
		ensure!(
			terminated || self.tests.is_empty(),
			"test list of suite {:?} is not terminated by a sentinel record",
			self.prefix
		);

		for suite in self.suites {
			suite
				.validate()
				.with_context(|| format!("in suite {:?}", self.prefix))?;
		}
		Ok(())
	}
}
