//! Sequential suite runner.
//!
//! The runner validates a suite, then walks its test list in registration order until the
//! sentinel, followed by its sub-suites depth-first. Every iteration of a test runs inside
//! [`catch_failure`], so an assertion failure ends only that test and the run moves on.

mod report;

pub use report::{CaseOutcome, CaseReport, SuiteReport};

use crate::{
	CaseAbort, RecordShape, RunnerConfig, Suite, TestFn, TestOption, TestOptions, TestRecord, TestResult, assert::catch_failure,
};
use anyhow::Result;
use std::{any::Any, time::Instant};

#[derive(Debug, Clone, Default)]
pub struct Runner {
	config: RunnerConfig,
}

struct Planned<'r> {
	path: String,
	record: &'r TestRecord,
	test: TestFn,
	iterations: u32,
	options: TestOptions,
}

impl Runner {
	pub fn new(config: RunnerConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &RunnerConfig {
		&self.config
	}

	/// Full paths of the tests a run would execute, in execution order.
	pub fn list(&self, suite: &Suite) -> Result<Vec<String>> {
		suite.validate()?;
		Ok(self.plan(suite).into_iter().map(|planned| planned.path).collect())
	}

	/// Runs every selected test of `suite`, handing `user_data` to tests without a setup.
	///
	/// A malformed suite is rejected before any test runs.
	pub fn run(&self, suite: &Suite, user_data: &mut dyn Any) -> Result<SuiteReport> {
		suite.validate()?;

		let mut report = SuiteReport::default();
		for planned in self.plan(suite) {
			let case = self.run_case(planned, user_data);
			let stop = self.config.fatal_failures && case.outcome.is_failure();
			report.cases.push(case);
			if stop {
				log::warn!("stopping after first failure");
				break;
			}
		}

		log::info!("{}", report.summary());
		Ok(report)
	}

	fn plan<'r>(&self, suite: &'r Suite) -> Vec<Planned<'r>> {
		let mut planned = Vec::new();
		self.plan_suite(suite, "", TestOptions::empty(), &mut planned);
		planned
	}

	fn plan_suite<'r>(&self, suite: &'r Suite, parent: &str, inherited: TestOptions, planned: &mut Vec<Planned<'r>>) {
		let prefix = format!("{parent}{}", suite.prefix);
		let options = inherited | suite.options | self.config.records.suite_options;

		for record in suite.registered() {
			let (Some(path), Some(test)) = (record.path, record.test) else {
				continue;
			};
			let path = format!("{prefix}{path}");
			if !self.config.selects(&path) {
				log::debug!("filtered out {path}");
				continue;
			}
			let options = options | record.options | self.config.records.test_options;
			planned.push(Planned {
				path,
				record,
				test,
				iterations: self.iterations(suite, record, options),
				options,
			});
		}

		for child in suite.suites {
			self.plan_suite(child, &prefix, options, planned);
		}
	}

	/// Config override, then the record's own count, then the configured record default,
	/// then the suite's count.
	fn iterations(&self, suite: &Suite, record: &TestRecord, options: TestOptions) -> u32 {
		if options.contains(TestOption::SingleIteration) {
			return 1;
		}
		let records = &self.config.records;
		let iterations = self
			.config
			.iterations
			.filter(|&n| n > 0)
			.or_else(|| (record.iterations > 0).then_some(record.iterations))
			.or_else(|| (records.test_iterations > 0).then_some(records.test_iterations))
			.unwrap_or_else(|| self.suite_iterations(suite));
		iterations.max(1)
	}

	/// A suite still carrying the legacy default takes the configured suite default instead.
	fn suite_iterations(&self, suite: &Suite) -> u32 {
		if suite.iterations == RecordShape::default().suite_iterations {
			self.config.records.suite_iterations
		} else {
			suite.iterations
		}
	}

	fn run_case(&self, planned: Planned, user_data: &mut dyn Any) -> CaseReport {
		log::debug!("running {} ({} iterations)", planned.path, planned.iterations);

		let start = Instant::now();
		let mut outcome = CaseOutcome::Passed;
		let mut executed = 0;
		while executed < planned.iterations {
			executed += 1;
			outcome = self.run_iteration(planned.record, planned.test, user_data);
			if !outcome.is_passed() {
				break;
			}
		}

		if planned.options.contains(TestOption::Todo) {
			outcome = match outcome {
				CaseOutcome::Passed => CaseOutcome::Errored(String::from("test marked TODO, but was successful")),
				CaseOutcome::Failed(Some(failure)) => CaseOutcome::Todo(failure.to_string()),
				CaseOutcome::Failed(None) => CaseOutcome::Todo(String::from("test returned a failure")),
				CaseOutcome::Errored(message) => CaseOutcome::Todo(message),
				other => other,
			};
		}

		if outcome.is_failure() {
			log::warn!("{} failed: {outcome:?}", planned.path);
		}

		CaseReport {
			path: planned.path,
			outcome,
			iterations: executed,
			duration: start.elapsed(),
		}
	}

	fn run_iteration(&self, record: &TestRecord, test: TestFn, user_data: &mut dyn Any) -> CaseOutcome {
		let params = self.config.params.as_slice();

		let result = match record.setup {
			Some(setup) => {
				let mut fixture = match catch_failure(|| setup(params, user_data)) {
					Ok(fixture) => fixture,
					Err(abort) => return CaseOutcome::from_abort(abort),
				};
				let result = catch_failure(|| test(params, fixture.as_mut()));
				self.tear_down(record, fixture.as_mut(), result)
			}
			None => {
				let result = catch_failure(|| test(params, user_data));
				self.tear_down(record, user_data, result)
			}
		};

		match result {
			Ok(result) => CaseOutcome::from_result(result),
			Err(abort) => CaseOutcome::from_abort(abort),
		}
	}

	/// Runs the teardown, if any; a teardown abort only surfaces when the test itself passed.
	fn tear_down(
		&self,
		record: &TestRecord,
		data: &mut dyn Any,
		result: Result<TestResult, CaseAbort>,
	) -> Result<TestResult, CaseAbort> {
		let Some(teardown) = record.teardown else {
			return result;
		};
		match (result, catch_failure(|| teardown(data))) {
			(Ok(_), Err(abort)) => Err(abort),
			(result, _) => result,
		}
	}
}
