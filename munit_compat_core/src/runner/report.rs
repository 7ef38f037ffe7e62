//! Results of a suite run and their textual rendering.

use crate::{AssertionFailure, CaseAbort, TestResult};
use colored::Colorize;
use std::{fmt::Write, time::Duration};

/// How a single test ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
	Passed,
	Skipped,
	/// An assertion aborted the test, or the test returned [`TestResult::Fail`] (`None`).
	Failed(Option<AssertionFailure>),
	/// The test returned [`TestResult::Error`] or panicked outside an assertion.
	Errored(String),
	/// A test marked TODO failed as expected.
	Todo(String),
}

impl CaseOutcome {
	pub(crate) fn from_result(result: TestResult) -> Self {
		match result {
			TestResult::Ok => CaseOutcome::Passed,
			TestResult::Skip => CaseOutcome::Skipped,
			TestResult::Fail => CaseOutcome::Failed(None),
			TestResult::Error => CaseOutcome::Errored(String::from("test returned an error")),
		}
	}

	pub(crate) fn from_abort(abort: CaseAbort) -> Self {
		match abort {
			CaseAbort::Assertion(failure) => CaseOutcome::Failed(Some(failure)),
			CaseAbort::Panic(message) => CaseOutcome::Errored(format!("panicked: {message}")),
		}
	}

	pub fn is_passed(&self) -> bool {
		matches!(self, CaseOutcome::Passed)
	}

	/// `true` for outcomes that make the run unsuccessful.
	pub fn is_failure(&self) -> bool {
		matches!(self, CaseOutcome::Failed(_) | CaseOutcome::Errored(_))
	}

	fn label(&self) -> &'static str {
		match self {
			CaseOutcome::Passed => "OK   ",
			CaseOutcome::Skipped => "SKIP ",
			CaseOutcome::Failed(_) => "FAIL ",
			CaseOutcome::Errored(_) => "ERROR",
			CaseOutcome::Todo(_) => "TODO ",
		}
	}

	fn detail(&self) -> Option<String> {
		match self {
			CaseOutcome::Passed | CaseOutcome::Skipped => None,
			CaseOutcome::Failed(Some(failure)) => Some(failure.to_string()),
			CaseOutcome::Failed(None) => Some(String::from("test returned a failure")),
			CaseOutcome::Errored(message) | CaseOutcome::Todo(message) => Some(message.clone()),
		}
	}

	fn colored_label(&self, color: bool) -> String {
		let label = self.label();
		if !color {
			return label.to_string();
		}
		match self {
			CaseOutcome::Passed => label.green().to_string(),
			CaseOutcome::Skipped | CaseOutcome::Todo(_) => label.yellow().to_string(),
			CaseOutcome::Failed(_) | CaseOutcome::Errored(_) => label.red().bold().to_string(),
		}
	}
}

/// One test of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
	/// Full path: suite prefixes followed by the test path.
	pub path: String,
	pub outcome: CaseOutcome,
	/// Iterations actually executed.
	pub iterations: u32,
	pub duration: Duration,
}

/// Every test of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteReport {
	pub cases: Vec<CaseReport>,
}

impl SuiteReport {
	pub fn total(&self) -> usize {
		self.cases.len()
	}

	/// Passed tests plus TODO tests that failed as expected.
	pub fn successful(&self) -> usize {
		self.count(|outcome| matches!(outcome, CaseOutcome::Passed | CaseOutcome::Todo(_)))
	}

	pub fn passed(&self) -> usize {
		self.count(CaseOutcome::is_passed)
	}

	pub fn failed(&self) -> usize {
		self.count(CaseOutcome::is_failure)
	}

	pub fn skipped(&self) -> usize {
		self.count(|outcome| matches!(outcome, CaseOutcome::Skipped))
	}

	pub fn is_success(&self) -> bool {
		self.failed() == 0
	}

	pub fn case(&self, path: &str) -> Option<&CaseReport> {
		self.cases.iter().find(|case| case.path == path)
	}

	fn count(&self, predicate: impl Fn(&CaseOutcome) -> bool) -> usize {
		self.cases.iter().filter(|case| predicate(&case.outcome)).count()
	}

	/// One line per test, diagnostics indented below failures, and a summary line.
	pub fn render(&self, color: bool) -> String {
		let width = self.cases.iter().map(|case| case.path.chars().count()).max().unwrap_or(0);
		let mut text = String::new();

		for case in &self.cases {
			let _ = writeln!(
				text,
				"{:<width$} [ {} ] [ {:.8} s ]",
				case.path,
				case.outcome.colored_label(color),
				case.duration.as_secs_f64(),
			);
			if let Some(detail) = case.outcome.detail() {
				let _ = writeln!(text, "    {detail}");
			}
		}

		text.push_str(&self.summary());
		text.push('\n');
		text
	}

	/// `"{successful} of {run} ({pct}%) tests successful, {skipped} ({pct}%) test skipped."`
	///
	/// Skipped tests are not counted as run.
	pub fn summary(&self) -> String {
		let skipped = self.skipped();
		let run = self.total() - skipped;
		let successful = self.successful();
		format!(
			"{successful} of {run} ({:.0}%) tests successful, {skipped} ({:.0}%) test skipped.",
			percent(successful, run),
			percent(skipped, self.total()),
		)
	}
}

fn percent(part: usize, whole: usize) -> f64 {
	if whole == 0 {
		0.0
	} else {
		part as f64 / whole as f64 * 100.0
	}
}
