//! Cursor over the token stream.
//!
//! The grammar parser only ever looks at tokens through a [`TokenCursor`]:
//! bounded lookahead with [`peek`](TokenCursor::peek), unconditional
//! [`consume`](TokenCursor::consume), and
//! [`consume_expected`](TokenCursor::consume_expected) for structural checks.

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    span::Span,
    tokens::{PositionedToken, TokenKind},
};

/// A forward-only cursor over comment-free tokens.
#[derive(Debug, Clone)]
pub struct TokenCursor<'src> {
    tokens: Vec<PositionedToken<'src>>,
    position: usize,
    /// Zero-width span at the end of the source, used for end-of-input errors.
    eof: Span,
}

impl<'src> TokenCursor<'src> {
    /// Creates a cursor over `tokens`, dropping comments.
    ///
    /// `source_len` is the byte length of the lexed text.
    pub fn new(tokens: Vec<PositionedToken<'src>>, source_len: usize) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| token.kind() != TokenKind::Comment)
            .collect();
        Self {
            tokens,
            position: 0,
            eof: Span::new(source_len..source_len),
        }
    }

    /// Returns the token `n` places ahead without consuming anything.
    ///
    /// `peek(0)` is the next token.
    ///
    /// # Errors
    ///
    /// `E101` when fewer than `n + 1` tokens remain.
    pub fn peek(&self, n: usize) -> Result<&PositionedToken<'src>> {
        self.tokens
            .get(self.position + n)
            .ok_or_else(|| self.end_of_input(None))
    }

    /// Like [`peek`](Self::peek) but returns `None` instead of an error.
    pub fn lookahead(&self, n: usize) -> Option<&PositionedToken<'src>> {
        self.tokens.get(self.position + n)
    }

    /// Removes and returns the next token.
    ///
    /// # Errors
    ///
    /// `E101` when the stream is exhausted.
    pub fn consume(&mut self) -> Result<PositionedToken<'src>> {
        let token = *self.peek(0)?;
        self.position += 1;
        Ok(token)
    }

    /// Removes and returns the next token if it has the `expected` kind.
    ///
    /// # Errors
    ///
    /// `E100` on a kind mismatch (nothing is consumed), `E101` when the
    /// stream is exhausted.
    pub fn consume_expected(&mut self, expected: TokenKind) -> Result<PositionedToken<'src>> {
        let Some(&token) = self.tokens.get(self.position) else {
            return Err(self.end_of_input(Some(expected)));
        };

        if token.kind() != expected {
            return Err(Diagnostic::new(
                ErrorCode::E100,
                format!("expected `{expected}`, found `{token}`"),
                token.span,
            )
            .labelled(format!("expected `{expected}`")));
        }

        self.position += 1;
        Ok(token)
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens left.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    /// Span of the end of the source.
    pub fn eof_span(&self) -> Span {
        self.eof
    }

    fn end_of_input(&self, expected: Option<TokenKind>) -> Diagnostic {
        let label = match expected {
            Some(kind) => format!("expected `{kind}`"),
            None => "no tokens left".to_string(),
        };
        Diagnostic::new(ErrorCode::E101, "unexpected end of input", self.eof)
            .labelled(label)
            .with_help("the family tree must be closed with `}`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::tokenize, tokens::Token};

    fn cursor(source: &str) -> TokenCursor<'_> {
        TokenCursor::new(tokenize(source).unwrap(), source.len())
    }

    #[test]
    fn test_comments_are_stripped() {
        let cursor = cursor("// heading\nJean // trailing\n;");

        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.peek(0).unwrap().token, Token::Name("Jean"));
        assert_eq!(cursor.peek(1).unwrap().token, Token::Terminator);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = cursor("Jean <=> Marie");

        assert_eq!(cursor.peek(1).unwrap().kind(), TokenKind::MaritalLink);
        assert_eq!(cursor.peek(0).unwrap().kind(), TokenKind::Name);
        assert_eq!(cursor.remaining(), 3);
    }

    #[test]
    fn test_peek_past_end() {
        let cursor = cursor("Jean");

        let diag = cursor.peek(1).unwrap_err();
        assert_eq!(diag.code(), ErrorCode::E101);
        assert_eq!(diag.span(), Span::new(4..4));
        assert_eq!(diag.label().message(), "no tokens left");
        assert!(cursor.lookahead(1).is_none());
    }

    #[test]
    fn test_consume_expected() {
        let mut cursor = cursor("Jean ;");

        let name = cursor.consume_expected(TokenKind::Name).unwrap();
        assert_eq!(name.value(), Some("Jean"));

        let diag = cursor.consume_expected(TokenKind::LeftParen).unwrap_err();
        assert_eq!(diag.code(), ErrorCode::E100);
        assert_eq!(diag.message(), "expected `(`, found `;`");
        assert_eq!(diag.span(), Span::new(5..6));

        // The mismatching token is still there.
        assert!(cursor.consume_expected(TokenKind::Terminator).is_ok());
        assert!(cursor.is_empty());

        let diag = cursor.consume_expected(TokenKind::RightBrace).unwrap_err();
        assert_eq!(diag.code(), ErrorCode::E101);
        assert!(cursor.consume().is_err());
    }
}
