// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Lexical analysis for the bake recipe notation.
//!
//! Tokenization uses logos. Whitespace is skipped; every other byte of the
//! input must belong to some token or lexing fails with a [`LexError`].
//!
//! # Design
//!
//! - `Token` — all lexical elements of the notation
//! - Sigils are stripped and numerals parsed in lexer callbacks, so the
//!   parser never re-scans token text
//! - Longest match wins: an ingredient mention like `200f` is one token,
//!   never a number followed by an identifier
//!
//! # Examples
//!
//! ```
//! use bake_ast::SourceId;
//! use bake_lexer::{Token, lex};
//!
//! let tokens = lex("Cake .bowl 200f mix", SourceId::Directions).unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert!(matches!(tokens[1].item, Token::Container(_)));
//! ```

use bake_ast::{SourceId, Span, Spanned};
use logos::Logos;
use std::rc::Rc;

/// An ingredient mention: a quantity immediately followed by a larder code,
/// with no separating space.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLit {
    pub amount: f64,
    pub code: Rc<str>,
}

/// A lexical token of the recipe notation.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Container reference `.bowl`; the leading dot is stripped here.
    #[regex(r"\.[A-Za-z][A-Za-z0-9]*", |lex| Rc::<str>::from(&lex.slice()[1..]))]
    Container(Rc<str>),

    /// Keyword `repeat` (high priority so it beats the identifier pattern).
    #[token("repeat", priority = 10)]
    Repeat,

    #[token("-")]
    Dash,
    #[token(",")]
    Comma,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    /// Ingredient mention, e.g. `200f` or `0.5e`.
    #[regex(r"[0-9]+(\.[0-9]+)?[A-Za-z]+", lex_ingredient)]
    Ingredient(IngredientLit),

    /// Bare number, e.g. a repeat count. The raw lexeme is kept; the parser
    /// decides how to read it (a larder unit word may also be a number).
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| Rc::<str>::from(lex.slice()))]
    Number(Rc<str>),

    /// Identifier: recipe names and process verbs, hyphens allowed.
    #[regex(r"[A-Za-z][A-Za-z0-9-]*", |lex| Rc::<str>::from(lex.slice()))]
    Ident(Rc<str>),
}

/// Split an ingredient mention into its numeral and code parts.
fn lex_ingredient(lex: &mut logos::Lexer<Token>) -> Option<IngredientLit> {
    let slice = lex.slice();
    let split = slice.find(|c: char| c.is_ascii_alphabetic())?;
    let amount: f64 = slice[..split].parse().ok()?;
    Some(IngredientLit {
        amount,
        code: Rc::from(&slice[split..]),
    })
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Container(name) => write!(f, ".{name}"),
            Token::Repeat => write!(f, "repeat"),
            Token::Dash => write!(f, "-"),
            Token::Comma => write!(f, ","),
            Token::BracketOpen => write!(f, "["),
            Token::BracketClose => write!(f, "]"),
            Token::ParenOpen => write!(f, "("),
            Token::ParenClose => write!(f, ")"),
            Token::Ingredient(lit) => write!(f, "{}{}", lit.amount, lit.code),
            Token::Number(raw) => write!(f, "{raw}"),
            Token::Ident(name) => write!(f, "{name}"),
        }
    }
}

/// Error during lexing.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub slice: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized input '{}' at {}",
            self.slice, self.span
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize one input text into spanned tokens.
///
/// Fails on the first byte sequence that matches no token pattern.
pub fn lex(source: &str, id: SourceId) -> Result<Vec<Spanned<Token>>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(id, range.start as u32, range.end as u32);
        match result {
            Ok(token) => tokens.push(Spanned::new(token, span)),
            Err(()) => {
                return Err(LexError {
                    span,
                    slice: lexer.slice().to_string(),
                });
            }
        }
    }

    Ok(tokens)
}
