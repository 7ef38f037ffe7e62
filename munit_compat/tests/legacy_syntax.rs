//! Course-style test code driven through the facade, the way a lesson's `main` would use it.

use munit_compat::{
	core::{CaseAbort, CaseOutcome, RecordShape, Runner, catch_failure},
	*,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::{
	io::Write,
	sync::atomic::{AtomicUsize, Ordering},
};

fn add(a: i32, b: i32) -> i32 {
	a + b
}

fn expect_failure(result: Result<(), CaseAbort>) -> AssertionFailure {
	match result {
		Err(CaseAbort::Assertion(failure)) => failure,
		other => panic!("expected an assertion failure, got {other:?}"),
	}
}

#[test]
fn int_passes_and_fails() {
	catch_failure(|| assert_int!(5, ==, 5, "ok")).unwrap();

	let failure = expect_failure(catch_failure(|| assert_int!(5, ==, 6, "fail")));
	assert_eq!(failure.message, "fail");
	assert_eq!(failure.actual, "5");
	assert_eq!(failure.expected, "6");
	assert_eq!(failure.operator, Operator::Eq);
}

#[test]
fn string_equal_passes_and_fails() {
	catch_failure(|| assert_string_equal!("abc", "abc", "ok")).unwrap();

	let failure = expect_failure(catch_failure(|| assert_string_equal!("abc", "abd", "fail")));
	assert_eq!(failure.message, "fail");
	assert_eq!(failure.to_string(), format!("{}:{}: assertion failed: fail (\"abc\" == \"abd\")", failure.location.file, failure.location.line));
}

#[test]
fn every_kind_reports_the_call_site() {
	let cases = [
		(catch_failure(|| munit_assert_size!(1, >, 2, "size")), line!()),
		(catch_failure(|| munit_assert_uint8!(1, >, 2, "uint8")), line!()),
		(catch_failure(|| munit_assert_uint16!(1, >, 2, "uint16")), line!()),
		(catch_failure(|| munit_assert_uint32!(1, >, 2, "uint32")), line!()),
		(catch_failure(|| munit_assert_uint64!(1, >, 2, "uint64")), line!()),
		(catch_failure(|| munit_assert_int!(1, >, 2, "int")), line!()),
		(catch_failure(|| munit_assert_string_equal!("1", "2", "string")), line!()),
		(catch_failure(|| assert_int!(1, >, 2, "short int")), line!()),
		(catch_failure(|| assert_string_equal!("1", "2", "short string")), line!()),
	];

	for (result, line) in cases {
		let failure = expect_failure(result);
		assert_eq!(failure.location.file, file!(), "{}", failure.message);
		assert_eq!(failure.location.line, line, "{}", failure.message);
	}
}

#[test]
fn every_kind_passes_with_matching_values() {
	catch_failure(|| {
		munit_assert_size!(vec![1, 2, 3].len(), ==, 3, "size");
		munit_assert_uint8!(u8::MAX, >=, 255, "uint8");
		munit_assert_uint16!(1, !=, 2, "uint16");
		munit_assert_uint32!(1, <, 2, "uint32");
		munit_assert_uint64!(2, <=, 2, "uint64");
		munit_assert_int!(-3, <, 0, "int");
		munit_assert_string_equal!(String::from("abc"), "abc", "string");
	})
	.unwrap();
}

#[rstest]
#[case(Operator::Eq, 3, 3, true)]
#[case(Operator::Eq, 3, 4, false)]
#[case(Operator::Ne, 3, 4, true)]
#[case(Operator::Lt, -1, 0, true)]
#[case(Operator::Le, 0, 0, true)]
#[case(Operator::Gt, 0, 0, false)]
#[case(Operator::Ge, -5, 0, false)]
fn facade_functions_compare(#[case] operator: Operator, #[case] actual: i32, #[case] expected: i32, #[case] holds: bool) {
	let result = catch_failure(|| facade::assert_int(actual, operator, expected, "compare"));
	assert_eq!(result.is_ok(), holds);
}

static AFTER_FAILURE: AtomicUsize = AtomicUsize::new(0);

munit_case!(RUN, test_add, {
	assert_int!(add(2, 3), ==, 5, "2 + 3 should be 5");
	assert_int!(add(-2, 2), ==, 0, "-2 + 2 should be 0");
});

munit_case!(RUN, test_add_wrong, {
	assert_int!(add(2, 2), ==, 5, "2 + 2 is not 5");
	AFTER_FAILURE.fetch_add(1, Ordering::SeqCst);
});

munit_case!(SUBMIT, test_concat, {
	let name = format!("{}{}", "ab", "c");
	assert_string_equal!(name, "abc", "concatenation");
});

munit_case!(SUBMIT, test_skipped, {
	return TestResult::Skip;
});

#[test]
fn case_wrapper_reports_ok() {
	assert_eq!(test_add(&[], &mut ()), TestResult::Ok);
	assert_eq!(test_concat(&[], &mut ()), TestResult::Ok);
	assert_eq!(test_skipped(&[], &mut ()), TestResult::Skip);
}

#[test]
fn registration_records() {
	let record = munit_test!("/add", test_add);
	assert_eq!(record.path, Some("/add"));
	assert!(record.test.is_some());
	assert!(record.setup.is_none());
	assert!(record.teardown.is_none());
	assert_eq!(record.iterations, 0);
	assert!(record.options.is_empty());

	let sentinel = munit_null_test!();
	assert!(sentinel.is_sentinel());
}

#[test]
fn suite_name_gets_slash() {
	let tests = [munit_test!("/add", test_add), munit_null_test!()];
	let suite = munit_suite!("math", &tests);
	assert_eq!(suite.path(), "/math");
	assert_eq!(suite.iterations, 1);
	assert!(suite.suites.is_empty());
}

#[test]
fn runner_isolates_failures() {
	let tests = [
		munit_test!("/add", test_add),
		munit_test!("/add_wrong", test_add_wrong),
		munit_test!("/concat", test_concat),
		munit_test!("/skipped", test_skipped),
		munit_null_test!(),
		munit_test!("/never", test_add_wrong),
	];
	let suite = munit_suite!("math", &tests);
	let report = Runner::default().run(&suite, &mut ()).unwrap();

	let paths: Vec<&str> = report.cases.iter().map(|case| case.path.as_str()).collect();
	assert_eq!(paths, vec!["/math/add", "/math/add_wrong", "/math/concat", "/math/skipped"]);

	assert_eq!(report.cases[0].outcome, CaseOutcome::Passed);
	assert_eq!(report.cases[2].outcome, CaseOutcome::Passed);
	assert_eq!(report.cases[3].outcome, CaseOutcome::Skipped);
	match &report.cases[1].outcome {
		CaseOutcome::Failed(Some(failure)) => {
			assert_eq!(failure.message, "2 + 2 is not 5");
			assert_eq!(failure.location.file, file!());
		}
		other => panic!("unexpected outcome {other:?}"),
	}
	assert_eq!(AFTER_FAILURE.load(Ordering::SeqCst), 0);

	assert_eq!(report.successful(), 2);
	assert_eq!(report.failed(), 1);
	assert!(report.render(false).ends_with("2 of 3 (67%) tests successful, 1 (25%) test skipped.\n"));
}

#[test]
fn shape_from_config() {
	let config = RunnerConfig::from_string("records:\n  test_iterations: 2\n  suite_iterations: 3").unwrap();
	let shape: RecordShape = config.records;

	let tests = [munit_test!("/add", test_add, shape), munit_null_test!()];
	let suite = munit_suite!("math", &tests, shape);
	assert_eq!(tests[0].iterations, 2);
	assert_eq!(suite.iterations, 3);

	let report = Runner::default().run(&suite, &mut ()).unwrap();
	assert_eq!(report.cases[0].iterations, 2);
}

static CONFIGURED_RUNS: AtomicUsize = AtomicUsize::new(0);

munit_case!(RUN, test_counted, {
	CONFIGURED_RUNS.fetch_add(1, Ordering::SeqCst);
});

#[test]
fn records_section_of_config_file_applies() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "records:\n  test_iterations: 3\n  suite_iterations: 3").unwrap();
	let path = file.path().to_str().unwrap();

	let tests = [munit_test!("/counted", test_counted), munit_null_test!()];
	let suite = munit_suite!("config", &tests);
	assert_eq!(suite_exit_status(&suite, &mut (), ["config", "--no-color", "--config", path]), 0);
	assert_eq!(CONFIGURED_RUNS.load(Ordering::SeqCst), 3);
}

#[test]
fn suite_main_exit_codes() {
	let passing = [
		munit_test!("/add", test_add),
		munit_test!("/concat", test_concat),
		munit_null_test!(),
	];
	let suite = munit_suite!("math", &passing);
	assert_eq!(suite_exit_status(&suite, &mut (), ["math", "--no-color"]), 0);
	assert_eq!(suite_exit_status(&suite, &mut (), ["math", "--list"]), 0);

	let failing = [munit_test!("/add_wrong", test_add_wrong), munit_null_test!()];
	let suite = munit_suite!("math", &failing);
	assert_eq!(suite_exit_status(&suite, &mut (), ["math", "--no-color"]), 1);
	// a filter that excludes the failing test makes the run pass
	assert_eq!(suite_exit_status(&suite, &mut (), ["math", "/math/other"]), 0);

	let unterminated = [munit_test!("/add", test_add)];
	let suite = munit_suite!("math", &unterminated);
	assert_eq!(suite_exit_status(&suite, &mut (), ["math"]), 1);

	assert_eq!(suite_exit_status(&suite, &mut (), ["math", "--iterations", "many"]), 2);
}

#[test]
#[should_panic(expected = "assertion failed: outside any runner (5 == 6)")]
fn plain_test_functions_panic_with_the_diagnostic() {
	assert_int!(5, ==, 6, "outside any runner");
}
