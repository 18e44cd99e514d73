//! The error returned by [`parse`](crate::parse).

use std::fmt;

use crate::error::Diagnostic;

/// Result of the internal parsing steps.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Parsing stopped at the wrapped diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(Box<Diagnostic>);

impl ParseError {
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        *self.0
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(Box::new(diagnostic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_wraps_diagnostic() {
        let err = ParseError::from(Diagnostic::new(
            ErrorCode::E200,
            "person `Marie` is not declared",
            Span::new(39..44),
        ));

        assert_eq!(err.diagnostic().code(), ErrorCode::E200);
        assert_eq!(err.to_string(), "error[E200]: person `Marie` is not declared");
        assert_eq!(err.into_diagnostic().span(), Span::new(39..44));
    }
}
