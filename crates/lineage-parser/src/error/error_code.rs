//! Error codes for the Lineage diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Model errors (name resolution and linking)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// No token rule matches the input at this position.
    E001,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser expected a specific token and found another one.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before the family tree was closed.
    E101,

    /// Unrecognized statement.
    ///
    /// A statement must start with a name followed by `(`, `<=>` or `->`.
    E102,

    /// Trailing input.
    ///
    /// Tokens were found after the closing `}` of the family tree.
    E103,

    // =========================================================================
    // Model Errors (E2xx)
    // =========================================================================
    /// Undeclared person.
    ///
    /// A link references a name that has not been declared earlier.
    E200,

    /// Duplicate declaration.
    ///
    /// A person with this name has already been declared.
    E201,

    /// Self-referential link.
    ///
    /// A person cannot marry themselves or be their own parent.
    E202,

    /// Too many parents.
    ///
    /// The familial link would give the child a third parent.
    E203,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unexpected character",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "unrecognized statement",
            ErrorCode::E103 => "trailing input",
            ErrorCode::E200 => "undeclared person",
            ErrorCode::E201 => "duplicate declaration",
            ErrorCode::E202 => "self-referential link",
            ErrorCode::E203 => "too many parents",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unexpected character");
        assert_eq!(ErrorCode::E200.description(), "undeclared person");
        assert_eq!(ErrorCode::E203.description(), "too many parents");
    }
}
