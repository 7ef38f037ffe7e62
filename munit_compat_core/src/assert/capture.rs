//! Turning an aborted test case back into a value.
//!
//! Inside [`catch_failure`] a failed assertion unwinds with `resume_unwind`, which skips the
//! panic hook, so the runner is the only one reporting it. Outside of it (for example in a
//! plain `#[test]`) the failure becomes a regular panic carrying the rendered diagnostic.

use super::AssertionFailure;
use std::{
	any::Any,
	cell::Cell,
	fmt::Display,
	panic::{self, AssertUnwindSafe},
};

thread_local! {
	static CAPTURE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Why a test case stopped before reaching its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseAbort {
	/// A full-form assertion failed.
	Assertion(AssertionFailure),
	/// Any other panic; holds the panic message.
	Panic(String),
}

impl Display for CaseAbort {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CaseAbort::Assertion(failure) => write!(f, "{failure}"),
			CaseAbort::Panic(message) => write!(f, "panicked: {message}"),
		}
	}
}

impl CaseAbort {
	fn from_payload(payload: Box<dyn Any + Send>) -> Self {
		match payload.downcast::<AssertionFailure>() {
			Ok(failure) => CaseAbort::Assertion(*failure),
			Err(payload) => CaseAbort::Panic(panic_message(payload.as_ref())),
		}
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		String::from("Box<dyn Any>")
	}
}

struct CaptureScope;

impl CaptureScope {
	fn enter() -> Self {
		CAPTURE_DEPTH.with(|depth| depth.set(depth.get() + 1));
		CaptureScope
	}
}

impl Drop for CaptureScope {
	fn drop(&mut self) {
		CAPTURE_DEPTH.with(|depth| depth.set(depth.get() - 1));
	}
}

/// Returns `true` while the current thread runs inside [`catch_failure`].
pub fn is_capturing() -> bool {
	CAPTURE_DEPTH.with(Cell::get) > 0
}

/// Runs `f`, converting an unwind out of it into a [`CaseAbort`].
pub fn catch_failure<R>(f: impl FnOnce() -> R) -> Result<R, CaseAbort> {
	let _scope = CaptureScope::enter();
	panic::catch_unwind(AssertUnwindSafe(f)).map_err(CaseAbort::from_payload)
}

/// Aborts the current test case with `failure`.
#[track_caller]
pub(crate) fn abort(failure: AssertionFailure) -> ! {
	if is_capturing() {
		panic::resume_unwind(Box::new(failure))
	} else {
		panic!("{failure}")
	}
}
