//! Parse error types.

use bake_ast::Span;
use bake_lexer::Token;
use std::fmt;

/// Parse error with source location and context.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Kind of parse error
    pub kind: ParseErrorKind,
    /// Source location where the error occurred
    pub span: Span,
    /// Human-readable error message
    pub message: String,
}

/// Category of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific token was expected but a different one (or EOF) was found.
    UnexpectedToken,

    /// Input ended while a construct was still incomplete, e.g. an unclosed
    /// repeat block.
    UnexpectedEof,

    /// Tokens are present but violate the grammar in a way a single expected
    /// token can't describe, e.g. a fractional repeat count.
    InvalidSyntax,

    /// An ingredient mention referenced a code with no larder definition at
    /// the point of reference.
    UnknownIngredient,
}

impl ParseError {
    /// Create an "expected token" error.
    pub fn expected_token(expected: &Token, found: Option<&Token>, span: Span) -> Self {
        let message = match found {
            Some(token) => format!("expected '{expected}', found '{token}'"),
            None => format!("expected '{expected}', found end of input"),
        };
        Self {
            kind: if found.is_none() {
                ParseErrorKind::UnexpectedEof
            } else {
                ParseErrorKind::UnexpectedToken
            },
            span,
            message,
        }
    }

    /// Create an "unexpected token" error with a grammar context.
    pub fn unexpected_token(found: Option<&Token>, context: &str, span: Span) -> Self {
        let message = match found {
            Some(token) => format!("unexpected '{token}' {context}"),
            None => format!("unexpected end of input {context}"),
        };
        Self {
            kind: if found.is_none() {
                ParseErrorKind::UnexpectedEof
            } else {
                ParseErrorKind::UnexpectedToken
            },
            span,
            message,
        }
    }

    /// Create an "invalid syntax" error.
    pub fn invalid_syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::InvalidSyntax,
            span,
            message: message.into(),
        }
    }

    /// Create an "unknown ingredient code" error.
    pub fn unknown_ingredient(code: &str, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::UnknownIngredient,
            span,
            message: format!("unknown ingredient code '{code}'"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
