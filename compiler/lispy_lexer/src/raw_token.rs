//! Raw Token Definition
//!
//! The logos-derived tokenizer output, before conversion to `TokenKind`.

use logos::Logos;
use lispy_ir::TokenKind;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    // A leading digit always starts a number, so `1x` is `1` then `x`.
    #[regex(r"[a-zA-Z_+\-*/\\=<>!&|^~?%][a-zA-Z0-9_+\-*/\\=<>!&|^~?%]*")]
    Symbol,
}

impl RawToken {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Number => TokenKind::Number,
            RawToken::Symbol => TokenKind::Symbol,
        }
    }
}
