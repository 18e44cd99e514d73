//! Recursive-descent parser for the Lineage grammar.
//!
//! ```text
//! family_tree   := 'family_tree' '{' stmt* '}'
//! stmt          := declaration | marital_link | familial_link
//! declaration   := NAME '(' DATE '-' DATE? ')' ';'
//! marital_link  := NAME '<=>' NAME ('(' DATE ')')? ';'
//! familial_link := NAME '->' NAME ';'
//! ```
//!
//! Statements are handed to the caller one at a time as soon as they are
//! parsed, so the model is built in the same pass and a link to an
//! undeclared name fails before anything after it is looked at.

use log::trace;

use lineage_core::date::Date;

use crate::{
    cursor::TokenCursor,
    error::{Diagnostic, ErrorCode, Result},
    parser_types::{Declaration, FamilialLink, MaritalLink, Statement, StatementKind},
    span::Spanned,
    tokens::{PositionedToken, Token, TokenKind},
};

/// Parses a whole `family_tree { ... }` block, passing every statement to
/// `apply` in source order.
///
/// The first error from the grammar or from `apply` aborts parsing.
pub(crate) fn family_tree<'src, F>(cursor: &mut TokenCursor<'src>, mut apply: F) -> Result<()>
where
    F: FnMut(Spanned<Statement<'src>>) -> Result<()>,
{
    cursor.consume_expected(TokenKind::FamilyTree)?;
    cursor.consume_expected(TokenKind::LeftBrace)?;

    while cursor.peek(0)?.kind() != TokenKind::RightBrace {
        let statement = statement(cursor)?;
        trace!(
            kind:? = statement.kind(),
            span:% = statement.span();
            "Parsed statement"
        );
        apply(statement)?;
    }

    cursor.consume_expected(TokenKind::RightBrace)?;

    if let Some(first) = cursor.lookahead(0) {
        let last = cursor.lookahead(cursor.remaining() - 1).unwrap_or(first);
        return Err(Diagnostic::new(
            ErrorCode::E103,
            format!("unexpected `{first}` after the end of the family tree"),
            first.span.union(last.span),
        )
        .with_help("a source holds exactly one `family_tree { ... }` block"));
    }

    Ok(())
}

/// Parses one statement, dispatching on the two-token lookahead.
fn statement<'src>(cursor: &mut TokenCursor<'src>) -> Result<Spanned<Statement<'src>>> {
    let start = cursor.peek(0)?.span;
    // A statement is never shorter than two tokens.
    cursor.peek(1)?;

    let Some(kind) = StatementKind::classify(cursor) else {
        return Err(unrecognized_statement(cursor));
    };

    let statement = match kind {
        StatementKind::Declaration => Statement::Declaration(declaration(cursor)?),
        StatementKind::MaritalLink => Statement::MaritalLink(marital_link(cursor)?),
        StatementKind::FamilialLink => Statement::FamilialLink(familial_link(cursor)?),
    };

    let end = cursor.consume_expected(TokenKind::Terminator)?.span;
    Ok(Spanned::new(statement, start.union(end)))
}

/// `NAME '(' DATE '-' DATE? ')'`
fn declaration<'src>(cursor: &mut TokenCursor<'src>) -> Result<Declaration<'src>> {
    let name = name(cursor)?;
    cursor.consume_expected(TokenKind::LeftParen)?;
    let birthdate = date(cursor)?;
    cursor.consume_expected(TokenKind::Range)?;
    let deathdate = if cursor.peek(0)?.kind() == TokenKind::Date {
        Some(date(cursor)?)
    } else {
        None
    };
    cursor.consume_expected(TokenKind::RightParen)?;

    Ok(Declaration {
        name,
        birthdate,
        deathdate,
    })
}

/// `NAME '<=>' NAME ('(' DATE ')')?`
fn marital_link<'src>(cursor: &mut TokenCursor<'src>) -> Result<MaritalLink<'src>> {
    let left = name(cursor)?;
    cursor.consume_expected(TokenKind::MaritalLink)?;
    let right = name(cursor)?;
    let wedding_date = if cursor.peek(0)?.kind() == TokenKind::LeftParen {
        cursor.consume()?;
        let date = date(cursor)?;
        cursor.consume_expected(TokenKind::RightParen)?;
        Some(date)
    } else {
        None
    };

    Ok(MaritalLink {
        left,
        right,
        wedding_date,
    })
}

/// `NAME '->' NAME`
fn familial_link<'src>(cursor: &mut TokenCursor<'src>) -> Result<FamilialLink<'src>> {
    let parent = name(cursor)?;
    cursor.consume_expected(TokenKind::FamilialLink)?;
    let child = name(cursor)?;

    Ok(FamilialLink { parent, child })
}

fn name<'src>(cursor: &mut TokenCursor<'src>) -> Result<Spanned<&'src str>> {
    let token = cursor.consume_expected(TokenKind::Name)?;
    Ok(Spanned::new(literal_text(&token), token.span))
}

fn date(cursor: &mut TokenCursor<'_>) -> Result<Spanned<Date>> {
    let token = cursor.consume_expected(TokenKind::Date)?;
    let date = literal_text(&token).parse::<Date>().map_err(|err| {
        Diagnostic::new(ErrorCode::E100, err.to_string(), token.span).labelled("invalid date")
    })?;
    Ok(Spanned::new(date, token.span))
}

fn literal_text<'src>(token: &PositionedToken<'src>) -> &'src str {
    match token.token {
        Token::Date(text) | Token::Name(text) => text,
        _ => "",
    }
}

fn unrecognized_statement(cursor: &TokenCursor<'_>) -> Diagnostic {
    let span = match (cursor.lookahead(0), cursor.lookahead(1)) {
        (Some(first), Some(second)) => first.span.union(second.span),
        (Some(first), None) => first.span,
        _ => cursor.eof_span(),
    };

    Diagnostic::new(
        ErrorCode::E102,
        "expected a declaration, a marital link or a familial link",
        span,
    )
    .with_help("statements look like `Name(DD/MM/YYYY-);`, `A <=> B;` or `A -> B;`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ParseError, lexer::tokenize, span::Span};

    fn statements(source: &str) -> Result<Vec<Statement<'_>>> {
        let tokens = tokenize(source).map_err(ParseError::into_diagnostic)?;
        let mut cursor = TokenCursor::new(tokens, source.len());
        let mut parsed = Vec::new();
        family_tree(&mut cursor, |statement| {
            parsed.push(statement.into_inner());
            Ok(())
        })?;
        Ok(parsed)
    }

    fn error_code(source: &str) -> ErrorCode {
        statements(source).unwrap_err().code()
    }

    #[test]
    fn test_empty_body() {
        assert!(statements("family_tree {}").unwrap().is_empty());
    }

    #[test]
    fn test_declarations() {
        let parsed = statements("family_tree { Jean(01/01/1900-01/01/1980); Pierre(1/1/1935-); }")
            .unwrap();

        let [Statement::Declaration(jean), Statement::Declaration(pierre)] = parsed.as_slice()
        else {
            panic!("expected two declarations, got {parsed:?}");
        };
        assert_eq!(*jean.name, "Jean");
        assert_eq!(*jean.birthdate, Date::new(1, 1, 1900));
        assert_eq!(jean.deathdate.map(Spanned::into_inner), Some(Date::new(1, 1, 1980)));
        assert_eq!(*pierre.name, "Pierre");
        assert!(pierre.deathdate.is_none());
    }

    #[test]
    fn test_marital_links() {
        let parsed = statements("family_tree { Jean<=>Marie(01/06/1930); Paul <=> Anne; }")
            .unwrap();

        let [Statement::MaritalLink(dated), Statement::MaritalLink(undated)] = parsed.as_slice()
        else {
            panic!("expected two marital links, got {parsed:?}");
        };
        assert_eq!(*dated.left, "Jean");
        assert_eq!(*dated.right, "Marie");
        assert_eq!(
            dated.wedding_date.map(Spanned::into_inner),
            Some(Date::new(1, 6, 1930))
        );
        assert!(undated.wedding_date.is_none());
    }

    #[test]
    fn test_familial_link() {
        let parsed = statements("family_tree { Jean -> Pierre; }").unwrap();

        assert_eq!(parsed.len(), 1);
        let Statement::FamilialLink(link) = &parsed[0] else {
            panic!("expected a familial link");
        };
        assert_eq!(*link.parent, "Jean");
        assert_eq!(*link.child, "Pierre");
        assert_eq!(link.child.span(), Span::new(22..28));
    }

    #[test]
    fn test_missing_keyword() {
        assert_eq!(error_code("{ Jean(01/01/1900-); }"), ErrorCode::E100);
    }

    #[test]
    fn test_unrecognized_statement() {
        let err = statements("family_tree { Jean Marie; }").unwrap_err();
        assert_eq!(err.code(), ErrorCode::E102);
        assert_eq!(err.span(), Span::new(14..24));
    }

    #[test]
    fn test_missing_terminator() {
        let err = statements("family_tree { Jean(01/01/1900-) }").unwrap_err();
        assert_eq!(err.code(), ErrorCode::E100);
        assert_eq!(err.message(), "expected `;`, found `}`");
    }

    #[test]
    fn test_missing_birthdate() {
        assert_eq!(
            error_code("family_tree { Jean(-01/01/1980); }"),
            ErrorCode::E100
        );
    }

    #[test]
    fn test_unclosed_tree() {
        assert_eq!(
            error_code("family_tree { Jean(01/01/1900-);"),
            ErrorCode::E101
        );
        assert_eq!(
            error_code("family_tree { Jean(01/01/1900"),
            ErrorCode::E101
        );
    }

    #[test]
    fn test_input_ending_inside_statement() {
        let err = statements("family_tree { Jean").unwrap_err();
        assert_eq!(err.code(), ErrorCode::E101);
        assert_eq!(err.span(), Span::new(18..18));
        assert_eq!(err.label().message(), "no tokens left");
    }

    #[test]
    fn test_trailing_input() {
        let err = statements("family_tree { } Jean;").unwrap_err();
        assert_eq!(err.code(), ErrorCode::E103);
        assert_eq!(err.span(), Span::new(16..21));
    }

    #[test]
    fn test_trailing_comment_is_allowed() {
        assert!(statements("family_tree { }\n// the end\n").is_ok());
    }

    #[test]
    fn test_apply_error_stops_parsing() {
        let source = "family_tree { Jean(01/01/1900-); Marie(01/01/1910-); }";
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(tokens, source.len());
        let mut seen = 0;

        let result = family_tree(&mut cursor, |_| {
            seen += 1;
            Err(Diagnostic::new(ErrorCode::E202, "stop", Span::new(0..0)))
        });

        assert!(result.is_err());
        assert_eq!(seen, 1);
    }
}
