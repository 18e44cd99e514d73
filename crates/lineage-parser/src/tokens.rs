//! Token definitions for the Lineage language.

use std::fmt;

use crate::span::Span;

/// Token types for the Lineage language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    // Keywords
    FamilyTree,

    // Links
    MaritalLink,  // <=>
    FamilialLink, // ->

    // Punctuation
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Terminator, // ;
    Range,      // -

    // Literals
    Date(&'src str),
    Name(&'src str),

    // Comments
    LineComment(&'src str), // // comment
}

/// The tag of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    FamilyTree,
    MaritalLink,
    FamilialLink,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Terminator,
    Range,
    Date,
    Name,
    Comment,
}

impl Token<'_> {
    /// The tag of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::FamilyTree => TokenKind::FamilyTree,
            Token::MaritalLink => TokenKind::MaritalLink,
            Token::FamilialLink => TokenKind::FamilialLink,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::LeftBrace => TokenKind::LeftBrace,
            Token::RightBrace => TokenKind::RightBrace,
            Token::Terminator => TokenKind::Terminator,
            Token::Range => TokenKind::Range,
            Token::Date(_) => TokenKind::Date,
            Token::Name(_) => TokenKind::Name,
            Token::LineComment(_) => TokenKind::Comment,
        }
    }

    /// The captured text of literal tokens.
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Date(text) | Token::Name(text) | Token::LineComment(text) => Some(*text),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Date(date) => write!(f, "{date}"),
            Token::Name(name) => write!(f, "{name}"),
            Token::LineComment(comment) => write!(f, "//{comment}"),
            other => fmt::Display::fmt(&other.kind(), f),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::FamilyTree => "family_tree",
            TokenKind::MaritalLink => "<=>",
            TokenKind::FamilialLink => "->",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Terminator => ";",
            TokenKind::Range => "-",
            TokenKind::Date => "date",
            TokenKind::Name => "name",
            TokenKind::Comment => "comment",
        };
        f.write_str(text)
    }
}

/// A token with its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}
