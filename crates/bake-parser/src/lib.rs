//! Hand-written recursive descent parser for the bake recipe notation.
//!
//! One token of lookahead, no backtracking, no error recovery: the first
//! error aborts the interpretation and no partial recipe is produced.
//!
//! ## Architecture
//!
//! - `stream` — TokenStream wrapper with lookahead
//! - `error` — ParseError with kind, span, and message
//! - `larder` — ingredient registry built incrementally while parsing
//! - `recipe` — the grammar itself, plus all parse-time scope state
//!
//! ## Grammar
//!
//! ```text
//! Recipe       := LarderDef* Identifier (Step | LarderDef)*
//! LarderDef    := '(' Identifier '-' Word+ ',' Word ')'
//! Step         := ContainerRef StepBody
//! StepBody     := (Ingredient | Process | RepeatedBlock)*
//! Ingredient   := NumberLetters                  // e.g. "200f"
//! Process      := Identifier                     // e.g. "mix", "beat-well"
//! RepeatedBlock:= '[' StepBody ']' 'repeat' Number
//! ```
//!
//! The larder input parses as `LarderDef*` alone; the directions input
//! supplies the rest of the rule.

mod error;
mod larder;
mod recipe;
mod stream;

pub use error::{ParseError, ParseErrorKind};
pub use larder::Larder;
pub use recipe::parse_recipe;
pub use stream::TokenStream;

// Re-export lexer
pub use bake_lexer::Token;
