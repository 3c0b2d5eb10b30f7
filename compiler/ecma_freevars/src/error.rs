//! Internal errors of the checker.
//!
//! These are never user-facing: they mean an upstream pass produced a
//! badly scoped tree or the walk itself broke stack discipline. Ordinary
//! free variables are reported through [`Reporter`](crate::Reporter).

use ecma_diagnostic::{Diagnostic, ErrorCode};

use crate::ScopeId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InternalError {
    /// A scope was closed while a different one was active.
    #[error("scope mismatch: closing {expected} but the active scope is {active:?}")]
    ScopeMismatch {
        expected: ScopeId,
        active: Option<ScopeId>,
    },

    /// A synthesized reference (no source location) resolved to nothing.
    #[error("generated variable {name} is not defined")]
    GeneratedVariableNotDefined { name: String },
}

impl InternalError {
    /// Internal compiler error diagnostic (`E9001`), for drivers that print
    /// it instead of aborting.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(format!("internal compiler error: {self}"))
            .with_note("this is a bug in an earlier compiler pass, not in the input program")
    }
}
