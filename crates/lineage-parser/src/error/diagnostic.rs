//! The diagnostic reported when a source cannot be turned into a tree.

use std::fmt;

use crate::{error::ErrorCode, span::Span};

/// A message attached to a range of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The first problem found in a source.
///
/// Every diagnostic has an [`ErrorCode`] and points at the offending range.
/// Its primary label defaults to the code's description. An optional
/// context label points at a related range, such as the first declaration
/// of a duplicated name.
///
/// ```text
/// error[E200]: person `Marie` is not declared
///   |
/// 3 | Jean->Marie;
///   |       ^^^^^ undeclared person
///   |
///   = help: declare `Marie` before linking it
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    primary: Label,
    context: Option<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// A diagnostic for `code` at `span`.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            primary: Label::new(span, code.description()),
            context: None,
            help: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the problem is.
    pub fn span(&self) -> Span {
        self.primary.span
    }

    pub fn label(&self) -> &Label {
        &self.primary
    }

    pub fn context(&self) -> Option<&Label> {
        self.context.as_ref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Replaces the text of the primary label.
    pub fn labelled(mut self, message: impl Into<String>) -> Self {
        self.primary.message = message.into();
        self
    }

    /// Points at a related range of the source.
    pub fn with_context(mut self, span: Span, message: impl Into<String>) -> Self {
        self.context = Some(Label::new(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
