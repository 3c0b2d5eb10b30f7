//! Error codes for diagnostics.
//!
//! Each code is a unique identifier (e.g., `E2001`) whose first digit names
//! the compiler phase. Used for `--explain` lookups and documentation.

use std::fmt;

/// Error codes for diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E2xxx: Name resolution errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Name Resolution Errors (E2xxx)
    /// Identifier is not defined in any enclosing scope
    E2001,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// All variants, kept in sync with `as_str()`.
    pub const ALL: &[ErrorCode] = &[ErrorCode::E2001, ErrorCode::E9001, ErrorCode::E9002];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description for `--explain` listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "identifier is not defined in any enclosing scope",
            ErrorCode::E9001 => "internal compiler error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this is a name resolution error (E2xxx range).
    pub fn is_name_resolution_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }

    /// Check if this is an internal compiler error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
