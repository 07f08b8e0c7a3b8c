//! Error handling tests for the recipe parser.
//!
//! The parser stops at the first error: no recovery, no partial recipe.

use bake_ast::{SourceId, Spanned};
use bake_lexer::{Token, lex};
use bake_parser::{ParseError, ParseErrorKind, parse_recipe};

fn tokens(source: &str, id: SourceId) -> Vec<Spanned<Token>> {
    lex(source, id).expect("lexing should succeed")
}

/// Helper to verify that parsing fails.
fn expect_error(larder: &str, directions: &str) -> ParseError {
    let larder = tokens(larder, SourceId::Larder);
    let directions = tokens(directions, SourceId::Directions);
    match parse_recipe(&larder, &directions) {
        Ok(_) => panic!("expected a parse error, but parsing succeeded"),
        Err(error) => error,
    }
}

#[test]
fn test_unknown_ingredient_code() {
    let err = expect_error("(f - plain flour, g)", "Cake .bowl 2x mix");
    assert_eq!(err.kind, ParseErrorKind::UnknownIngredient);
    assert!(err.message.contains("'x'"), "got: {}", err.message);
}

#[test]
fn test_code_must_be_defined_before_mention() {
    // The definition arrives after the mention that needs it.
    let err = expect_error("", "Cake .bowl 2x mix (x - almond, 1)");
    assert_eq!(err.kind, ParseErrorKind::UnknownIngredient);
}

#[test]
fn test_missing_recipe_name() {
    let err = expect_error("(f - plain flour, g)", ".bowl 200f mix");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("recipe name"), "got: {}", err.message);
}

#[test]
fn test_step_outside_container() {
    // An ingredient mention at the top level has no container to go into.
    let err = expect_error("(f - plain flour, g)", "Cake 200f");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
}

#[test]
fn test_unclosed_repeat_block() {
    let err = expect_error("(e - egg, 1)", "Cake .bowl [ 1e crack");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert!(err.message.contains("']'"), "got: {}", err.message);
}

#[test]
fn test_repeat_block_missing_keyword() {
    let err = expect_error("(e - egg, 1)", "Cake .bowl [ 1e crack ] 3");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("'repeat'"), "got: {}", err.message);
}

#[test]
fn test_repeat_count_must_be_integer() {
    let err = expect_error("(e - egg, 1)", "Cake .bowl [ 1e crack ] repeat 2.5");
    assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
    assert!(err.message.contains("'2.5'"), "got: {}", err.message);
}

#[test]
fn test_repeat_count_must_be_positive() {
    let err = expect_error("(e - egg, 1)", "Cake .bowl [ 1e crack ] repeat 0");
    assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
}

#[test]
fn test_malformed_larder_definition() {
    let err = expect_error("(f plain flour, g)", "Cake .bowl mix");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("'-'"), "got: {}", err.message);
}

#[test]
fn test_larder_definition_missing_units() {
    let err = expect_error("(f - plain flour)", "Cake .bowl mix");
    // The name loop swallows words until a comma; the ')' arrives first.
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("ingredient name"), "got: {}", err.message);
}

#[test]
fn test_larder_rejects_steps() {
    let err = expect_error(".bowl mix", "Cake");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert!(err.message.contains("larder"), "got: {}", err.message);
}

#[test]
fn test_error_spans_point_into_the_right_input() {
    let err = expect_error("(f - plain flour, g)", "Cake .bowl 2x mix");
    assert_eq!(err.span.source, SourceId::Directions);
    // The span covers the `2x` mention.
    assert_eq!(err.span.start, 11);
    assert_eq!(err.span.end, 13);
}
