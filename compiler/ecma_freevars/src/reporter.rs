//! Reporting free variables.
//!
//! The checker hands each free variable to a [`Reporter`] as a structured
//! [`FreeVariable`] record, once per name, in source order. Collecting them
//! in a `Vec` is enough for tests; drivers use [`DiagnosticReporter`] to get
//! ordinary compiler diagnostics.

use ecma_diagnostic::queue::too_many_errors;
use ecma_diagnostic::span_utils::LineOffsetTable;
use ecma_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use ecma_ir::{Name, Span, StringInterner};

/// What is wrong with a free variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FreeVariableKind {
    /// Not declared in any enclosing scope and not ambient.
    NotDefined,
}

/// An identifier reference that resolved to nothing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FreeVariable {
    /// First use of the name.
    pub span: Span,
    pub kind: FreeVariableKind,
    pub name: Name,
}

impl FreeVariable {
    pub fn not_defined(name: Name, span: Span) -> Self {
        FreeVariable {
            span,
            kind: FreeVariableKind::NotDefined,
            name,
        }
    }

    /// Plain message, e.g. `zzz is not defined`.
    pub fn message(&self, interner: &StringInterner) -> String {
        let name = interner.lookup(self.name);
        match self.kind {
            FreeVariableKind::NotDefined => format!("{name} is not defined"),
        }
    }

    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        let name = interner.lookup(self.name);
        match self.kind {
            FreeVariableKind::NotDefined => Diagnostic::error(ErrorCode::E2001)
                .with_message(format!("`{name}` is not defined"))
                .with_label(self.span, "not declared in any enclosing scope"),
        }
    }
}

/// Receiver of free variables.
pub trait Reporter {
    fn report_error(&mut self, error: FreeVariable);
}

impl Reporter for Vec<FreeVariable> {
    fn report_error(&mut self, error: FreeVariable) {
        self.push(error);
    }
}

/// Turns free variables into `E2001` diagnostics queued against `source`.
pub struct DiagnosticReporter<'a> {
    queue: DiagnosticQueue,
    error_limit: usize,
    source: &'a str,
    table: LineOffsetTable,
    interner: &'a StringInterner,
    /// First free variable dropped by the error limit.
    overflow: Option<Span>,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Self::with_config(source, interner, DiagnosticConfig::default())
    }

    pub fn with_config(
        source: &'a str,
        interner: &'a StringInterner,
        config: DiagnosticConfig,
    ) -> Self {
        DiagnosticReporter {
            error_limit: config.error_limit,
            queue: DiagnosticQueue::with_config(config),
            source,
            table: LineOffsetTable::build(source),
            interner,
            overflow: None,
        }
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        self.queue.has_errors()
    }

    /// All queued diagnostics, ordered by position. If the error limit cut
    /// anything off, a final `E9002` says so.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        let mut diagnostics = self.queue.flush();
        if let Some(span) = self.overflow {
            diagnostics.push(too_many_errors(self.error_limit, span));
        }
        diagnostics
    }
}

impl Reporter for DiagnosticReporter<'_> {
    fn report_error(&mut self, error: FreeVariable) {
        let diag = error.to_diagnostic(self.interner);
        let added = self.queue.add_with_table(diag, self.source, &self.table);
        if !added && self.overflow.is_none() && self.queue.limit_reached() {
            self.overflow = Some(error.span);
        }
    }
}
