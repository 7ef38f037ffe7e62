//! # munit_compat
//!
//! Lets test code written in the legacy 4-argument munit style run on a location-aware
//! assertion backend. Every facade call forwards to a full-form entry point of
//! [`munit_compat_core`] with the call site's file and line filled in.
//!
//! ## Surface
//! - assertions: [`munit_assert_size!`], [`munit_assert_uint8!`], [`munit_assert_uint16!`],
//!   [`munit_assert_uint32!`], [`munit_assert_uint64!`], [`munit_assert_int!`],
//!   [`munit_assert_string_equal!`], and the short forms [`assert_int!`] and
//!   [`assert_string_equal!`]; [`facade`] has `#[track_caller]` function equivalents
//! - test cases: [`munit_case!`], or the attribute [`attr::munit_case`]
//! - registration: [`munit_test!`], [`munit_null_test!`], [`munit_suite!`]
//! - running: [`suite_main`]
//!
//! ## Usage Example
//!
//! ```rust
//! use munit_compat::*;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! munit_case!(RUN, test_add, {
//!     assert_int!(add(2, 3), ==, 5, "2 + 3 should be 5");
//!     assert_int!(add(-1, 1), ==, 0, "-1 + 1 should be 0");
//! });
//!
//! munit_case!(SUBMIT, test_greeting, {
//!     assert_string_equal!(format!("hi {}", "ada"), "hi ada", "greeting");
//! });
//!
//! let tests = [
//!     munit_test!("/add", test_add),
//!     munit_test!("/greeting", test_greeting),
//!     munit_null_test!(),
//! ];
//! let suite = munit_suite!("math", &tests);
//! assert_eq!(suite.path(), "/math");
//!
//! let status = suite_exit_status(&suite, &mut (), ["math", "--no-color"]);
//! assert_eq!(status, 0);
//! ```

extern crate self as munit_compat;

pub mod facade;
mod macros;
mod suite_main;

pub use munit_compat_core as core;
pub use munit_compat_core::{
	AssertionFailure, Operator, Parameter, RunnerConfig, Suite, SuiteReport, TestOption, TestRecord, TestResult,
};
pub use suite_main::{suite_exit_status, suite_main};

/// Attribute form of [`munit_case!`].
pub mod attr {
	pub use munit_compat_derive::munit_case;
}
