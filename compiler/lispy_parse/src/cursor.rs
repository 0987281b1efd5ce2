//! Token cursor for navigating the token stream.

use lispy_ir::{Token, TokenKind, TokenList};

/// Cursor over a lexed `TokenList`.
///
/// Invariant: the list ends with `Eof`, and the cursor never moves past it.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            source,
            pos: 0,
        }
    }

    /// The current token, or a synthetic `Eof` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or_else(|| self.eof())
    }

    /// Consume and return the current token. `Eof` is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Source text covered by `token`.
    #[inline]
    pub(crate) fn text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    pub(crate) fn source_len(&self) -> u32 {
        u32::try_from(self.source.len()).unwrap_or(u32::MAX)
    }

    fn eof(&self) -> Token {
        Token::new(TokenKind::Eof, lispy_ir::Span::point(self.source_len()))
    }
}
