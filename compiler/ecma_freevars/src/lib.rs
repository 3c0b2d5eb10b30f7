//! Free variable checking for lowered ECMAScript trees.
//!
//! Runs after modules, classes and block scoping have been lowered away and
//! reports every identifier reference that resolves to no declaration in an
//! enclosing scope and to no name in the [`AmbientNamespace`].
//!
//! # Algorithm
//!
//! A single forward walk with deferred resolution:
//!
//! 1. The root scope is seeded with every ambient name.
//! 2. Functions, arrows, methods, accessors and catch clauses open scopes.
//! 3. Bindings declare into the active scope; identifier uses are recorded
//!    as references (first use wins).
//! 4. Closing a scope promotes its unresolved references to the parent.
//!    Whatever the root cannot resolve is a free variable.
//!
//! Declarations are therefore visible throughout their scope, before and
//! after their textual position, and inside nested closures.
//!
//! # Errors
//!
//! Free variables are ordinary diagnostics, handed to a [`Reporter`] in
//! source order. A broken internal invariant is an [`InternalError`] and
//! aborts the check.

mod ambient;
mod checker;
mod error;
mod reporter;
mod scope;

pub use ambient::AmbientNamespace;
pub use checker::{binding_name, check_program, check_program_diagnostics};
pub use error::InternalError;
pub use reporter::{DiagnosticReporter, FreeVariable, FreeVariableKind, Reporter};
pub use scope::{ScopeId, ScopeStack};
