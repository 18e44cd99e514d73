//! Lexical analyzer for Lineage source text.
//!
//! The lexer applies an ordered list of token rules at each position; the
//! first rule that matches wins. Whitespace produces no token, line comments
//! are kept as [`Token::LineComment`] and stripped later by the
//! [`TokenCursor`](crate::cursor::TokenCursor). The first character no rule
//! accepts aborts lexing with `E001`.

use log::debug;
use winnow::{
    Parser as _,
    combinator::{alt, preceded},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location},
    token::{literal, take_while},
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Parse line comment starting with '//'
fn line_comment<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    preceded("//", take_while(0.., |c| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

/// Parse the `family_tree` keyword.
///
/// There is no word boundary check: `family_treeX` lexes as the keyword
/// followed by the name `X`.
fn keyword<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    literal("family_tree")
        .value(Token::FamilyTree)
        .parse_next(input)
}

/// Parse link operators (`<=>` and `->`); must run before `-`.
fn link_operator<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        literal("<=>").value(Token::MaritalLink),
        literal("->").value(Token::FamilialLink),
    ))
    .parse_next(input)
}

/// Parse single character tokens
fn single_char_token<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
        '{'.value(Token::LeftBrace),
        '}'.value(Token::RightBrace),
        ';'.value(Token::Terminator),
        '-'.value(Token::Range),
    ))
    .parse_next(input)
}

/// Parse a `D{1,2}/D{1,2}/D{4}` date literal, captured as raw text.
fn date_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        take_while(1..=2, |c: char| c.is_ascii_digit()),
        '/',
        take_while(1..=2, |c: char| c.is_ascii_digit()),
        '/',
        take_while(4, |c: char| c.is_ascii_digit()),
    )
        .take()
        .map(Token::Date)
        .parse_next(input)
}

/// Parse a name: one or more ASCII letters.
fn name<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_ascii_alphabetic())
        .map(Token::Name)
        .parse_next(input)
}

/// Skip a run of blanks and line breaks.
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Option<PositionedToken<'a>>> {
    take_while(1.., [' ', '\t', '\n', '\r'])
        .value(None)
        .parse_next(input)
}

/// Parse a single token with position tracking
fn token<'a>(input: &mut Input<'a>) -> IResult<Option<PositionedToken<'a>>> {
    let start_pos = input.current_token_start();

    let token = alt((
        line_comment,      // Must come before single char '-'
        keyword,           // Must come before name
        link_operator,     // Must come before single char '-'
        single_char_token, // Structural tokens
        date_literal,      // Dates
        name,              // Names
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    let span = Span::new(start_pos..end_pos);

    Ok(Some(PositionedToken::new(token, span)))
}

/// Parse the next token, or skip whitespace and yield `None`.
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<Option<PositionedToken<'a>>> {
    alt((whitespace, token)).parse_next(input)
}

/// Build the `E001` diagnostic for the character at `error_pos`.
fn unexpected_character(source: &str, error_pos: usize) -> Diagnostic {
    let fragment = source[error_pos..].chars().next();
    let width = fragment.map_or(1, char::len_utf8);
    let span = Span::new(error_pos..error_pos + width);

    let message = match fragment {
        Some(c) => format!("unexpected character `{}`", c.escape_debug()),
        None => "unexpected character".to_string(),
    };

    Diagnostic::new(ErrorCode::E001, message, span)
        .with_help("names are letters only and dates are written DD/MM/YYYY")
}

/// Tokenize Lineage source text.
///
/// Tokens are returned in source order with their byte spans. Whitespace is
/// dropped; comments are kept.
///
/// # Errors
///
/// Returns a [`ParseError`] holding a single `E001` diagnostic at the first
/// character that starts no token.
pub fn tokenize(source: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let error_pos = input.current_token_start();
        match positioned_token(&mut input) {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => {}
            Err(ErrMode::Backtrack(_) | ErrMode::Cut(_) | ErrMode::Incomplete(_)) => {
                debug!(position = error_pos; "Lexing failed");
                return Err(unexpected_character(source, error_pos).into());
            }
        }
    }

    Ok(tokens)
}
