//! # Lineage Parser
//!
//! Parser for the Lineage family tree language. This crate turns source
//! text into a [`FamilyTree`] in a single pass:
//!
//! 1. **Lexing**: source text into positioned tokens ([`tokenize`])
//! 2. **Parsing**: tokens into statements through a [`TokenCursor`]
//! 3. **Building**: each statement is applied to the model as soon as it is
//!    parsed, and reported to an optional [`ParseObserver`]
//!
//! Names must be declared before they are linked. The first error of any
//! phase aborts the whole run; no partial model is returned.
//!
//! ## Usage
//!
//! ```
//! # use lineage_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         family_tree {
//!             Jean(01/01/1900-01/01/1980);
//!             Marie(01/01/1910-01/01/1990);
//!             Jean <=> Marie(01/06/1930);
//!             Pierre(01/01/1935-);
//!             Jean -> Pierre;
//!         }
//!     "#;
//!
//!     let tree = parse(source)?;
//!     assert_eq!(tree.len(), 3);
//!     Ok(())
//! }
//! ```

mod builder;
mod cursor;
pub mod error;
mod lexer;
pub mod observer;
mod parser;
mod parser_types;
mod span;
pub mod tokens;

use log::debug;

use lineage_core::FamilyTree;

pub use cursor::TokenCursor;
pub use error::ParseError;
pub use lexer::tokenize;
pub use observer::ParseObserver;
pub use parser_types::{Declaration, FamilialLink, MaritalLink, Statement, StatementKind};
pub use span::{Span, Spanned};

use builder::TreeBuilder;

/// Parses Lineage source text into a [`FamilyTree`].
///
/// Equivalent to [`parse_with`] with the no-op observer `()`.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the first lexical, syntax or model
/// error.
pub fn parse(source: &str) -> Result<FamilyTree, ParseError> {
    parse_with(source, &mut ())
}

/// Parses Lineage source text, notifying `observer` of every statement
/// applied to the model.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the first lexical, syntax or model
/// error. Notifications already delivered are not retracted.
pub fn parse_with<O>(source: &str, observer: &mut O) -> Result<FamilyTree, ParseError>
where
    O: ParseObserver + ?Sized,
{
    let tokens = tokenize(source)?;
    debug!(tokens_len = tokens.len(); "Tokens parsed");

    let mut cursor = TokenCursor::new(tokens, source.len());
    let mut builder = TreeBuilder::new(observer);

    parser::family_tree(&mut cursor, |statement| builder.apply(statement)).map_err(
        |diagnostic| {
            debug!(
                code:? = diagnostic.code(),
                message = diagnostic.message();
                "Parsing failed"
            );
            ParseError::from(diagnostic)
        },
    )?;

    let tree = builder.finish();
    debug!(persons = tree.len(); "Family tree built");
    Ok(tree)
}
