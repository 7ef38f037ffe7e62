/// What a test function reports when it runs to its end.
///
/// A failed assertion never gets here: it unwinds out of the function instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestResult {
	Ok,
	Skip,
	Fail,
	Error,
}
