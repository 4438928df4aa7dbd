//! HTTP middleware stack.

pub mod trace;

pub use trace::{X_TRACE_ID, trace_middleware};
