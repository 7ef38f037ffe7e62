//! Registration records consumed by the [`Runner`](crate::Runner).
//!
//! A test list is a slice of [`TestRecord`]s terminated by [`TestRecord::sentinel`]; a
//! [`Suite`] groups one such list (plus optional sub-suites) under a `/name` prefix.

mod options;
mod parameter;
mod record;
mod result;
mod shape;
mod test_suite;

pub use options::{TestOption, TestOptions};
pub use parameter::{Parameter, parameter_get};
pub use record::{SetupFn, TeardownFn, TestFn, TestRecord};
pub use result::TestResult;
pub use shape::RecordShape;
pub use test_suite::Suite;
