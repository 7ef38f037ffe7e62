//! munit_compat core: the assertion backend the legacy facade forwards to.
//!
//! This crate holds everything the facade macros in `munit_compat` expand into:
//! - [`assert`]: full-form assertion entry points that take an explicit file and line,
//!   comparison [`Operator`]s, and the [`AssertionFailure`] payload that aborts a case,
//! - [`suite`]: registration records ([`TestRecord`], [`Suite`]), options and parameters,
//! - [`runner`]: a sequential [`Runner`] that catches aborted cases and builds a [`SuiteReport`],
//! - [`config`]: YAML configuration for the runner.
//!
//! # Quick start
//! ```rust
//! use munit_compat_core::*;
//! use std::any::Any;
//!
//! fn add(_params: &[Parameter], _user_data: &mut dyn Any) -> TestResult {
//!     assert::assert_int_full(2 + 3, Operator::Eq, 5, file!(), line!(), "2 + 3 should be 5");
//!     TestResult::Ok
//! }
//!
//! let tests = [TestRecord::new("/add", add), TestRecord::sentinel()];
//! let suite = Suite::new("math", &tests);
//! let report = Runner::default().run(&suite, &mut ()).unwrap();
//! assert!(report.is_success());
//! assert_eq!(report.cases[0].path, "/math/add");
//! ```

pub mod assert;
pub use assert::{AssertKind, AssertionFailure, CaseAbort, Operator, SourceLocation, catch_failure};

pub mod config;
pub use config::RunnerConfig;

pub mod runner;
pub use runner::{CaseOutcome, CaseReport, Runner, SuiteReport};

pub mod suite;
pub use suite::*;
