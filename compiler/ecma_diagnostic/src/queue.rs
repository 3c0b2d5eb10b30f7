//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! - Error limits to keep output readable
//! - Deduplication of identical errors on the same line
//! - Position-ordered flush
//! - `ErrorGuaranteed` proof that errors were emitted

use ecma_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further ones are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error whose line and message match an already queued one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limits (for tests and batch tooling).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// 1-based line, for sorting.
    line: u32,
    /// 1-based column, for sorting within a line.
    column: u32,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic, line, column);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            config,
        }
    }

    /// Add a diagnostic at a known position.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        if self.limit_reached() {
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag, line) {
            return false;
        }

        self.error_count += 1;
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Add a diagnostic, computing its position from the primary span.
    pub fn add_with_table(
        &mut self,
        diag: Diagnostic,
        source: &str,
        table: &LineOffsetTable,
    ) -> bool {
        let (line, column) = diag
            .primary_span()
            .map_or((1, 1), |span| table.offset_to_line_col(source, span.start));
        self.add(diag, line, column)
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Proof of emission if any error was queued.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Sort by position, return, and reset the queue.
    ///
    /// Diagnostics at the same position keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column));

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| (d.line, d.column));
        }

        self.error_count = 0;
        self.diagnostics.drain(..).map(|d| d.diagnostic).collect()
    }

    fn is_duplicate(&self, diag: &Diagnostic, line: u32) -> bool {
        self.diagnostics.iter().any(|queued| {
            queued.line == line
                && queued.diagnostic.code == diag.code
                && queued.diagnostic.message == diag.message
        })
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting due to {limit} previous errors"))
        .with_label(span, "error limit reached here")
}
