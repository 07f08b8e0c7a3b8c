//! Rendering of a parsed recipe into the output document.
//!
//! The renderer walks the instruction tree in order, carrying two pieces of
//! print state: a monotonically increasing step counter and the name of the
//! last container mentioned in prose. It never mutates the recipe and reads
//! nothing back from the rendered text.
//!
//! The document layout is a compatibility contract: the literal headers, the
//! blank-line placement, and the trailing newline after the method block all
//! matter to downstream consumers.

pub mod words;

use bake_ast::{Fraction, IngredientAmount, Instruction, Recipe};
use std::rc::Rc;
use words::{capitalize_first, humanize_list, indefinite_article, pluralize};

/// Render a recipe into the final document text.
pub fn render(recipe: &Recipe) -> String {
    let title = capitalize_first(&recipe.name.replace('-', " "));
    let ingredients = ingredient_list(recipe);
    let method = Renderer::new().render_method(&recipe.instructions);

    format!(
        "{}\n\nIngredients:\n\n{}\n\nMethod:\n\n{}\n",
        title,
        ingredients.join("\n"),
        method.join("\n"),
    )
}

/// One line per ingredient type: descending amount, then ascending name.
fn ingredient_list(recipe: &Recipe) -> Vec<String> {
    let mut totals: Vec<&IngredientAmount> = recipe.totals.values().collect();
    totals.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.kind.name.cmp(&b.kind.name))
    });
    totals
        .into_iter()
        .map(|total| format!("{}.", ingredient_phrase(total)))
        .collect()
}

/// `{fraction}{unit-suffix} {name}`, pluralized for discrete ingredients
/// whose amount is not exactly one.
fn ingredient_phrase(amount: &IngredientAmount) -> String {
    let quantity = Fraction::approximate(amount.amount);
    let name = if amount.kind.is_discrete() && amount.amount != 1.0 {
        pluralize(&amount.kind.name)
    } else {
        amount.kind.name.clone()
    };
    format!("{}{} {}", quantity, amount.kind.unit_suffix(), name)
}

/// Print state for the method walk.
struct Renderer {
    step: usize,
    last_container: Option<Rc<str>>,
}

impl Renderer {
    fn new() -> Self {
        Self {
            step: 1,
            last_container: None,
        }
    }

    fn render_method(mut self, instructions: &[Instruction]) -> Vec<String> {
        let mut lines = Vec::new();
        self.walk(instructions, &mut lines);
        lines
    }

    fn walk(&mut self, instructions: &[Instruction], lines: &mut Vec<String>) {
        for instruction in instructions {
            match instruction {
                Instruction::Process {
                    verb,
                    ingredients,
                    container,
                } => {
                    let text = self.process_phrase(verb, ingredients, container);
                    self.emit(text, lines);
                }
                Instruction::Repeat { body, count } => {
                    let first = self.step;
                    self.walk(body, lines);
                    let last = self.step - 1;
                    // A count of 1 or an empty body needs no summary line.
                    if *count > 1 && last >= first {
                        let times = count - 1;
                        let text = if first == last {
                            format!("Repeat step {first} another {times} times.")
                        } else {
                            format!("Repeat step {first} to step {last} another {times} times.")
                        };
                        self.emit(text, lines);
                    }
                }
            }
        }
    }

    fn emit(&mut self, text: String, lines: &mut Vec<String>) {
        lines.push(format!("{}. {}", self.step, text));
        self.step += 1;
    }

    /// Verb words, then the ingredient list, then the container — the latter
    /// only when it differs from the last container mentioned in prose.
    fn process_phrase(
        &mut self,
        verb: &str,
        ingredients: &[IngredientAmount],
        container: &Rc<str>,
    ) -> String {
        let mut phrase: Vec<String> = verb.split('-').map(str::to_string).collect();

        if !ingredients.is_empty() {
            let parts: Vec<String> = ingredients.iter().map(ingredient_phrase).collect();
            phrase.push(humanize_list(&parts));
        }

        if self.last_container.as_deref() != Some(container.as_ref()) {
            phrase.push("in".to_string());
            phrase.push(indefinite_article(container).to_string());
            phrase.push(container.to_string());
            self.last_container = Some(container.clone());
        }

        format!("{}.", capitalize_first(&phrase.join(" ")))
    }
}
