//! Parser for Lispy.
//!
//! Recursive descent over the token stream from `lispy_lexer`, producing a
//! labeled [`SyntaxNode`] tree:
//!
//! ```text
//! number : /[0-9]+(\.[0-9]*)?/
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&|^~?%]+/
//! sexpr  : '(' expr* ')'
//! qexpr  : '{' expr* '}'
//! expr   : number | symbol | sexpr | qexpr
//! lispy  : /^/ expr* /$/
//! ```
//!
//! The [`reader`] turns a tree into a `Value`.

mod cursor;
mod error;
pub mod reader;
mod syntax;

use lispy_ir::{Span, Token, TokenKind};
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use cursor::Cursor;
use error::closer_for;

pub use error::ParseError;
pub use reader::read;
pub use syntax::{NodeTag, SyntaxNode};

/// Parse a complete input into a `Root` node.
///
/// The first error stops parsing; there is no recovery.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let tokens = lispy_lexer::lex(source);
    let mut parser = Parser {
        cursor: Cursor::new(&tokens, source),
    };
    parser.parse_root()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl Parser<'_> {
    fn parse_root(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![SyntaxNode::anchor(0)];
        self.parse_items(None, &mut children)?;
        let end = self.cursor.source_len();
        children.push(SyntaxNode::anchor(end));
        Ok(SyntaxNode::branch(NodeTag::Root, Span::new(0, end), children))
    }

    /// Parse the rest of a list whose opener `open_token` was just consumed.
    fn parse_list(
        &mut self,
        tag: NodeTag,
        open: char,
        open_token: Token,
    ) -> Result<SyntaxNode, ParseError> {
        ensure_sufficient_stack(|| {
            let mut children = vec![SyntaxNode::delimiter(open, open_token.span)];
            let close = self.parse_items(Some((open, open_token)), &mut children)?;
            children.push(SyntaxNode::delimiter(closer_for(open), close.span));
            let span = open_token.span.merge(close.span);
            Ok(SyntaxNode::branch(tag, span, children))
        })
    }

    /// Parse expressions into `children` up to the end of the enclosing list.
    ///
    /// With `open` set, that is the matching closer; at the top level it is
    /// the end of input. Returns the token that ended the sequence.
    fn parse_items(
        &mut self,
        open: Option<(char, Token)>,
        children: &mut Vec<SyntaxNode>,
    ) -> Result<Token, ParseError> {
        loop {
            let token = self.cursor.advance();
            let text = self.cursor.text(token);
            trace!(kind = token.kind.display_name(), span = ?token.span, "parse item");
            match token.kind {
                TokenKind::Number => {
                    children.push(SyntaxNode::leaf(NodeTag::Number, token.span, text));
                }
                TokenKind::Symbol => {
                    children.push(SyntaxNode::leaf(NodeTag::Symbol, token.span, text));
                }
                TokenKind::LParen => {
                    children.push(self.parse_list(NodeTag::SExpr, '(', token)?);
                }
                TokenKind::LBrace => {
                    children.push(self.parse_list(NodeTag::QExpr, '{', token)?);
                }
                TokenKind::Error => {
                    return Err(ParseError::InvalidCharacter {
                        found: first_char(text),
                        span: token.span,
                    });
                }
                TokenKind::RParen | TokenKind::RBrace => {
                    let found = first_char(text);
                    return match open {
                        None => Err(ParseError::UnexpectedCloser {
                            found,
                            span: token.span,
                        }),
                        Some((open, _)) if found == closer_for(open) => Ok(token),
                        Some((open, open_token)) => Err(ParseError::MismatchedCloser {
                            expected: closer_for(open),
                            found,
                            span: token.span,
                            open_span: open_token.span,
                        }),
                    };
                }
                TokenKind::Eof => {
                    return match open {
                        None => Ok(token),
                        Some((open, open_token)) => Err(ParseError::UnclosedDelimiter {
                            open,
                            open_span: open_token.span,
                            end: token.span,
                        }),
                    };
                }
            }
        }
    }
}

fn first_char(text: &str) -> char {
    text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}
