//! Statement types produced by the grammar parser.

use lineage_core::date::Date;

use crate::{
    cursor::TokenCursor,
    span::{Span, Spanned},
    tokens::TokenKind,
};

/// `NAME '(' DATE '-' DATE? ')' ';'`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'src> {
    pub name: Spanned<&'src str>,
    pub birthdate: Spanned<Date>,
    pub deathdate: Option<Spanned<Date>>,
}

/// `NAME '<=>' NAME ('(' DATE ')')? ';'`
#[derive(Debug, Clone, PartialEq)]
pub struct MaritalLink<'src> {
    pub left: Spanned<&'src str>,
    pub right: Spanned<&'src str>,
    pub wedding_date: Option<Spanned<Date>>,
}

/// `NAME '->' NAME ';'`
#[derive(Debug, Clone, PartialEq)]
pub struct FamilialLink<'src> {
    pub parent: Spanned<&'src str>,
    pub child: Spanned<&'src str>,
}

/// One statement of a family tree body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'src> {
    Declaration(Declaration<'src>),
    MaritalLink(MaritalLink<'src>),
    FamilialLink(FamilialLink<'src>),
}

impl Statement<'_> {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Declaration(_) => StatementKind::Declaration,
            Statement::MaritalLink(_) => StatementKind::MaritalLink,
            Statement::FamilialLink(_) => StatementKind::FamilialLink,
        }
    }

    /// Span of the leading name.
    pub fn subject_span(&self) -> Span {
        match self {
            Statement::Declaration(declaration) => declaration.name.span(),
            Statement::MaritalLink(link) => link.left.span(),
            Statement::FamilialLink(link) => link.parent.span(),
        }
    }
}

/// The production a statement belongs to, decided before parsing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Declaration,
    MaritalLink,
    FamilialLink,
}

impl StatementKind {
    /// Decides the production from the next two tokens.
    ///
    /// A name followed by `(` is a declaration, by `<=>` a marital link and
    /// by `->` a familial link. Any other shape, including a stream with
    /// fewer than two tokens left, yields `None`. The cursor is not advanced.
    pub fn classify(cursor: &TokenCursor<'_>) -> Option<Self> {
        let first = cursor.lookahead(0)?;
        let second = cursor.lookahead(1)?;

        match (first.kind(), second.kind()) {
            (TokenKind::Name, TokenKind::LeftParen) => Some(StatementKind::Declaration),
            (TokenKind::Name, TokenKind::MaritalLink) => Some(StatementKind::MaritalLink),
            (TokenKind::Name, TokenKind::FamilialLink) => Some(StatementKind::FamilialLink),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn classify(source: &str) -> Option<StatementKind> {
        let cursor = TokenCursor::new(tokenize(source).unwrap(), source.len());
        StatementKind::classify(&cursor)
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("Jean(01/01/1900-);"),
            Some(StatementKind::Declaration)
        );
        assert_eq!(
            classify("Jean <=> Marie;"),
            Some(StatementKind::MaritalLink)
        );
        assert_eq!(
            classify("Jean -> Pierre;"),
            Some(StatementKind::FamilialLink)
        );
    }

    #[test]
    fn test_classify_rejects_other_shapes() {
        assert_eq!(classify("Jean Marie;"), None);
        assert_eq!(classify("(Jean);"), None);
        assert_eq!(classify("Jean"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_skips_comments() {
        assert_eq!(
            classify("Jean // spouse follows\n<=> Marie;"),
            Some(StatementKind::MaritalLink)
        );
    }
}
