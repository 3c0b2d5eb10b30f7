//! Diagnostic system for compiler error reporting.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a clear message (what went wrong)
//! - a primary span (where it went wrong)
//! - optional notes
//!
//! Rendering diagnostics for a terminal or an editor is the caller's job;
//! this crate stops at the sorted list.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! emitted, so a pass cannot fail without reporting why.
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! queue.add(diagnostic, line, column);
//! let guarantee = queue.has_errors();
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
