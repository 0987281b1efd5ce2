//! Lexer for Lispy using logos.
//!
//! Produces a `TokenList` terminated by `Eof`. Token text is not copied;
//! consumers slice it from the input with `Token::text`.

mod raw_token;

use logos::Logos;
use lispy_ir::{Span, Token, TokenKind, TokenList};

use raw_token::RawToken;

/// Tokenize `source`.
///
/// Characters that cannot start a token become `TokenKind::Error` tokens
/// so the parser can report them with a span; lexing never stops early.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = span_of(logos.span());
        let kind = match token_result {
            Ok(raw) => raw.kind(),
            Err(()) => {
                tracing::trace!(?span, text = logos.slice(), "invalid character");
                TokenKind::Error
            }
        };
        result.push(Token::new(kind, span));
    }

    result.push(Token::new(TokenKind::Eof, span_of(source.len()..source.len())));
    result
}

/// Convert a byte range, clamping inputs longer than `u32::MAX` bytes.
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}
