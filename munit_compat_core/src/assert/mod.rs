//! Full-form assertion entry points and the machinery that aborts a test case.
//!
//! Every entry point takes the call-site file and line explicitly. A mismatch builds an
//! [`AssertionFailure`] and unwinds out of the running case; [`catch_failure`] turns that
//! unwind back into a value.

mod capture;
mod failure;
mod full;
mod location;
mod operator;

pub use capture::{CaseAbort, catch_failure, is_capturing};
pub use failure::{AssertKind, AssertionFailure};
pub use full::*;
pub use location::SourceLocation;
pub use operator::Operator;
