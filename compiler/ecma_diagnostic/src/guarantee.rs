//! Proof that an error was reported.

use std::fmt;

/// Zero-sized proof that at least one error diagnostic was emitted.
///
/// Only obtainable from a [`DiagnosticQueue`](crate::DiagnosticQueue) that
/// actually recorded an error, or from a nonzero error count.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// `Some` when `count > 0`.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}
