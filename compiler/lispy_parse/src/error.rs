//! Parse error types.

use lispy_diagnostic::{Diagnostic, ErrorCode};
use lispy_ir::Span;

/// Why a line of input could not be turned into a syntax tree.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid character `{found}`")]
    InvalidCharacter { found: char, span: Span },

    #[error("unexpected closing delimiter `{found}`")]
    UnexpectedCloser { found: char, span: Span },

    #[error("mismatched closing delimiter `{found}`, expected `{expected}`")]
    MismatchedCloser {
        expected: char,
        found: char,
        span: Span,
        open_span: Span,
    },

    #[error("unclosed delimiter `{open}`")]
    UnclosedDelimiter { open: char, open_span: Span, end: Span },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::InvalidCharacter { .. } => ErrorCode::E0001,
            ParseError::UnexpectedCloser { .. } => ErrorCode::E1001,
            ParseError::MismatchedCloser { .. } => ErrorCode::E1002,
            ParseError::UnclosedDelimiter { .. } => ErrorCode::E1003,
        }
    }

    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::UnexpectedCloser { span, .. }
            | ParseError::MismatchedCloser { span, .. } => *span,
            ParseError::UnclosedDelimiter { open_span, .. } => *open_span,
        }
    }

    /// Convert to a labeled diagnostic for rendering.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::InvalidCharacter { .. } => diag
                .with_label(self.span(), "not part of any token")
                .with_note("numbers, symbols, `(`, `)`, `{` and `}` are the only tokens"),
            ParseError::UnexpectedCloser { .. } => {
                diag.with_label(self.span(), "nothing is open here")
            }
            ParseError::MismatchedCloser {
                expected, open_span, ..
            } => diag
                .with_label(self.span(), format!("expected `{expected}`"))
                .with_secondary_label(*open_span, "opened here"),
            ParseError::UnclosedDelimiter { open, end, .. } => diag
                .with_label(self.span(), "opened here")
                .with_secondary_label(*end, "input ends here")
                .with_note(format!("add a matching `{}`", closer_for(*open))),
        }
    }
}

/// The closing delimiter matching `open`.
pub(crate) fn closer_for(open: char) -> char {
    if open == '{' {
        '}'
    } else {
        ')'
    }
}
