//! Error types. Hand-rolled `Display`/`std::error::Error` impls, matching
//! the rest of this dependency stack's preference for small error enums
//! over a derive-macro crate (see DESIGN.md).

use std::fmt;

/// A script that failed to parse as ECMAScript-2016 (spec.md §4.1, §7).
/// Carries the underlying parser's line/column and message; no partial
/// instrumentation is ever attempted on a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at {}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The source attempted to bind the reserved identifier
/// `_instruction_counter` as a variable, function declaration, or function
/// expression name (spec.md §4.3a, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedIdentifierError {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ReservedIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: `_instruction_counter` is reserved for the instruction counter and cannot be bound",
            self.line, self.column
        )
    }
}

impl std::error::Error for ReservedIdentifierError {}

/// Unified error type for [`crate::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    Parse(ParseError),
    ReservedIdentifier(ReservedIdentifierError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::ReservedIdentifier(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::ReservedIdentifier(e) => Some(e),
        }
    }
}

impl From<ParseError> for TransformError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ReservedIdentifierError> for TransformError {
    fn from(e: ReservedIdentifierError) -> Self {
        Self::ReservedIdentifier(e)
    }
}
