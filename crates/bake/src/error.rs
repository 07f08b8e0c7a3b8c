//! Interpretation error taxonomy.

use bake_lexer::LexError;
use bake_parser::{ParseError, ParseErrorKind};
use thiserror::Error;

/// Why an interpretation failed.
///
/// Every failure is fatal to the whole call: no partial document is
/// produced, and retrying is the caller's business.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// A byte sequence matched no token pattern.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token sequence violated the grammar.
    #[error(transparent)]
    Parse(ParseError),

    /// An ingredient mention referenced a code the larder never defined.
    #[error(transparent)]
    UnknownIngredient(ParseError),
}

impl From<ParseError> for InterpretError {
    fn from(error: ParseError) -> Self {
        match error.kind {
            ParseErrorKind::UnknownIngredient => InterpretError::UnknownIngredient(error),
            _ => InterpretError::Parse(error),
        }
    }
}
