//! Error and diagnostic system for the Lineage parser.
//!
//! Processing stops at the first problem. It is described by a
//! [`Diagnostic`] with an [`ErrorCode`], the offending span, an optional
//! related span and help text, wrapped in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use lineage_parser::error::{Diagnostic, ErrorCode};
//! # use lineage_parser::Span;
//!
//! let diag = Diagnostic::new(ErrorCode::E200, "person `Marie` is not declared", Span::new(40..45))
//!     .with_help("declare `Marie` before linking it");
//! assert_eq!(diag.label().message(), "undeclared person");
//! ```

mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
