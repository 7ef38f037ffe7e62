use enumset::{EnumSet, EnumSetType};

/// Per-test (or per-suite, inherited by its tests) behaviour switches.
#[derive(Debug, EnumSetType)]
pub enum TestOption {
	/// Run the test once, whatever the configured iteration count.
	SingleIteration,
	/// The test is known to fail; a failure is reported as TODO and a pass as an error.
	Todo,
}

pub type TestOptions = EnumSet<TestOption>;
