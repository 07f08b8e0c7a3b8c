//! The recipe grammar.
//!
//! All parse-time state lives on [`RecipeParser`]: the larder, the named
//! containers, the recipe-wide totals, and a stack of currently open
//! instruction sequences. The current container is threaded through the step
//! body parser as an explicit argument rather than stored as a mutable slot,
//! and process instructions take their snapshot via [`Container::drain`], so
//! a frozen snapshot never aliases the live vessel.

use crate::error::ParseError;
use crate::larder::Larder;
use crate::stream::TokenStream;
use bake_ast::{
    Container, IngredientAmount, IngredientType, Instruction, Recipe, SourceId, Spanned,
};
use bake_lexer::Token;
use indexmap::IndexMap;
use std::rc::Rc;

/// Parse a larder text and a directions text into a [`Recipe`].
///
/// The larder input must consist solely of ingredient definitions. The
/// directions input may define further ingredients between steps; every code
/// must be defined before the first mention that references it.
pub fn parse_recipe(
    larder: &[Spanned<Token>],
    directions: &[Spanned<Token>],
) -> Result<Recipe, ParseError> {
    let mut parser = RecipeParser::new();

    let mut stream = TokenStream::new(larder, SourceId::Larder);
    parser.parse_larder_defs(&mut stream)?;
    if !stream.at_end() {
        return Err(ParseError::unexpected_token(
            stream.peek(),
            "in the larder; only ingredient definitions are allowed here",
            stream.current_span(),
        ));
    }

    let mut stream = TokenStream::new(directions, SourceId::Directions);
    parser.parse_directions(&mut stream)
}

struct RecipeParser {
    larder: Larder,
    containers: IndexMap<Rc<str>, Container>,
    totals: IndexMap<Rc<str>, IngredientAmount>,
    /// Stack of open instruction sequences; the bottom entry is the
    /// top-level sequence, one entry is pushed per open repeat block.
    scopes: Vec<Vec<Instruction>>,
}

impl RecipeParser {
    fn new() -> Self {
        Self {
            larder: Larder::new(),
            containers: IndexMap::new(),
            totals: IndexMap::new(),
            scopes: vec![Vec::new()],
        }
    }

    /// `LarderDef*`
    fn parse_larder_defs(&mut self, s: &mut TokenStream) -> Result<(), ParseError> {
        while matches!(s.peek(), Some(Token::ParenOpen)) {
            self.parse_larder_def(s)?;
        }
        Ok(())
    }

    /// `Identifier (Step | LarderDef)*`, after any leading larder defs.
    fn parse_directions(mut self, s: &mut TokenStream) -> Result<Recipe, ParseError> {
        self.parse_larder_defs(s)?;
        let name = self.parse_name(s)?;

        loop {
            match s.peek() {
                Some(Token::Container(_)) => self.parse_step(s)?,
                Some(Token::ParenOpen) => self.parse_larder_def(s)?,
                Some(_) => {
                    return Err(ParseError::unexpected_token(
                        s.peek(),
                        "at a step; expected a container reference or ingredient definition",
                        s.current_span(),
                    ));
                }
                None => break,
            }
        }

        let instructions = self.scopes.pop().expect("BUG: scope stack underflow");
        debug_assert!(self.scopes.is_empty(), "unclosed instruction scope");

        Ok(Recipe {
            name,
            totals: self.totals,
            instructions,
        })
    }

    fn parse_name(&mut self, s: &mut TokenStream) -> Result<String, ParseError> {
        let span = s.current_span();
        match s.advance() {
            Some(Token::Ident(name)) => Ok(name.to_string()),
            found => Err(ParseError::unexpected_token(
                found,
                "at the recipe name",
                span,
            )),
        }
    }

    /// `'(' Identifier '-' Word+ ',' Word ')'`
    fn parse_larder_def(&mut self, s: &mut TokenStream) -> Result<(), ParseError> {
        s.expect(Token::ParenOpen)?;

        let span = s.current_span();
        let code = match s.advance() {
            Some(Token::Ident(code)) => code.clone(),
            found => {
                return Err(ParseError::unexpected_token(
                    found,
                    "at an ingredient code",
                    span,
                ));
            }
        };

        s.expect(Token::Dash)?;

        let mut words = Vec::new();
        while !matches!(s.peek(), Some(Token::Comma)) {
            words.push(self.parse_word(s, "in an ingredient name")?);
        }
        if words.is_empty() {
            return Err(ParseError::invalid_syntax(
                "ingredient name must have at least one word",
                s.current_span(),
            ));
        }

        s.expect(Token::Comma)?;
        let units = self.parse_word(s, "at the ingredient units")?;
        s.expect(Token::ParenClose)?;

        self.larder
            .register(IngredientType::new(code, words.join(" "), units));
        Ok(())
    }

    /// A word of a larder definition: an identifier, or a bare number (the
    /// unit of a discrete ingredient is the number `1`).
    fn parse_word(&mut self, s: &mut TokenStream, context: &str) -> Result<String, ParseError> {
        let span = s.current_span();
        match s.advance() {
            Some(Token::Ident(word)) => Ok(word.to_string()),
            Some(Token::Number(raw)) => Ok(raw.to_string()),
            found => Err(ParseError::unexpected_token(found, context, span)),
        }
    }

    /// `ContainerRef StepBody`
    fn parse_step(&mut self, s: &mut TokenStream) -> Result<(), ParseError> {
        let span = s.current_span();
        let name = match s.advance() {
            Some(Token::Container(name)) => name.clone(),
            found => {
                return Err(ParseError::unexpected_token(
                    found,
                    "at a container reference",
                    span,
                ));
            }
        };

        // A fresh vessel on first sight; otherwise resume whatever was left
        // in it (normally nothing, since process instructions drain it).
        self.containers
            .entry(name.clone())
            .or_insert_with(|| Container::new(name.clone()));

        self.parse_step_body(s, &name)
    }

    /// `(Ingredient | Process | RepeatedBlock)*`
    fn parse_step_body(&mut self, s: &mut TokenStream, container: &Rc<str>) -> Result<(), ParseError> {
        loop {
            match s.peek() {
                Some(Token::Ingredient(_)) => self.parse_ingredient(s, container)?,
                Some(Token::Ident(_)) => self.parse_process(s, container)?,
                Some(Token::BracketOpen) => self.parse_repeat_block(s, container)?,
                _ => break,
            }
        }
        Ok(())
    }

    /// An ingredient mention: pushed onto the current container and counted
    /// once toward the recipe-wide totals.
    fn parse_ingredient(&mut self, s: &mut TokenStream, container: &Rc<str>) -> Result<(), ParseError> {
        let span = s.current_span();
        let lit = match s.advance() {
            Some(Token::Ingredient(lit)) => lit.clone(),
            found => {
                return Err(ParseError::unexpected_token(
                    found,
                    "at an ingredient mention",
                    span,
                ));
            }
        };

        let kind = self
            .larder
            .lookup(&lit.code)
            .ok_or_else(|| ParseError::unknown_ingredient(&lit.code, span))?;
        let amount = IngredientAmount::new(kind, lit.amount);

        self.add_total(&amount);
        self.vessel(container).add(amount);
        Ok(())
    }

    /// A process verb: freezes the current container's contents into a
    /// `Process` instruction and empties the vessel in place.
    fn parse_process(&mut self, s: &mut TokenStream, container: &Rc<str>) -> Result<(), ParseError> {
        let span = s.current_span();
        let verb = match s.advance() {
            Some(Token::Ident(verb)) => verb.to_string(),
            found => {
                return Err(ParseError::unexpected_token(
                    found,
                    "at a process verb",
                    span,
                ));
            }
        };

        let ingredients = self.vessel(container).drain();
        self.push_instruction(Instruction::Process {
            verb,
            ingredients,
            container: container.clone(),
        });
        Ok(())
    }

    /// `'[' StepBody ']' 'repeat' Number`
    fn parse_repeat_block(&mut self, s: &mut TokenStream, container: &Rc<str>) -> Result<(), ParseError> {
        s.expect(Token::BracketOpen)?;

        self.scopes.push(Vec::new());
        self.parse_step_body(s, container)?;

        s.expect(Token::BracketClose)?;
        s.expect(Token::Repeat)?;

        let span = s.current_span();
        let count = match s.advance() {
            Some(Token::Number(raw)) => {
                raw.parse::<u32>().ok().filter(|count| *count >= 1).ok_or_else(|| {
                    ParseError::invalid_syntax(
                        format!("repeat count must be a positive integer, got '{raw}'"),
                        span,
                    )
                })?
            }
            found => {
                return Err(ParseError::unexpected_token(
                    found,
                    "at a repeat count",
                    span,
                ));
            }
        };

        let body = self.scopes.pop().expect("BUG: scope stack underflow");
        self.push_instruction(Instruction::Repeat { body, count });
        Ok(())
    }

    fn add_total(&mut self, amount: &IngredientAmount) {
        self.totals
            .entry(amount.kind.code.clone())
            .and_modify(|total| total.amount += amount.amount)
            .or_insert_with(|| amount.clone());
    }

    fn vessel(&mut self, container: &Rc<str>) -> &mut Container {
        self.containers
            .get_mut(container)
            .expect("BUG: step body parsed without a registered container")
    }

    fn push_instruction(&mut self, instruction: Instruction) {
        self.scopes
            .last_mut()
            .expect("BUG: scope stack underflow")
            .push(instruction);
    }
}
