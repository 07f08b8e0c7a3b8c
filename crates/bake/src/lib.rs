//! # Bake
//!
//! Interpreter for a terse recipe notation. An interpretation takes two text
//! blocks — a larder defining ingredient codes and a directions body
//! referencing them — and returns one formatted document: the aggregated
//! ingredient list and the numbered preparation steps.
//!
//! This crate is a facade over the pipeline crates:
//!
//! ```text
//! bake-ast    - recipe data model, spans, fraction approximation
//! bake-lexer  - tokenization (logos)
//! bake-parser - recursive descent parsing into the instruction tree
//! bake-render - prose rendering and word transforms
//! ```
//!
//! Data flows strictly forward: text → tokens → recipe → rendered text.
//! Each call builds its own state; nothing persists between calls, and the
//! core performs no I/O. Callers own file loading and whatever hosting
//! surface sits around the interpreter.
//!
//! ## Usage
//!
//! ```
//! let larder = "(f - plain flour, g)(e - egg, 1)";
//! let directions = "Cake .bowl 200f 2e mix";
//!
//! let document = bake::interpret(larder, directions).unwrap();
//! assert!(document.contains("1. Mix 200g plain flour and 2 eggs in a bowl."));
//! ```

mod error;

pub use error::InterpretError;

// Re-export the pipeline crates
pub use bake_ast as ast;
pub use bake_ast::{Fraction, Recipe};
pub use bake_lexer as lexer;
pub use bake_parser as parser;
pub use bake_render as render;

use bake_ast::SourceId;
use tracing::debug;

/// Interpret a larder and a directions text into the rendered document.
///
/// The returned string follows the fixed layout: recipe name, the
/// `Ingredients:` block sorted by descending amount, then the numbered
/// `Method:` block, with a trailing newline.
pub fn interpret(larder: &str, directions: &str) -> Result<String, InterpretError> {
    let larder_tokens = bake_lexer::lex(larder, SourceId::Larder)?;
    let direction_tokens = bake_lexer::lex(directions, SourceId::Directions)?;
    debug!(
        larder = larder_tokens.len(),
        directions = direction_tokens.len(),
        "lexed recipe inputs"
    );

    let recipe = bake_parser::parse_recipe(&larder_tokens, &direction_tokens)?;
    debug!(
        name = %recipe.name,
        ingredients = recipe.totals.len(),
        instructions = recipe.instructions.len(),
        "parsed recipe"
    );

    Ok(bake_render::render(&recipe))
}
