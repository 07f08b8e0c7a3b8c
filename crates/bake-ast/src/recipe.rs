//! Recipe data model: ingredient types, containers, and the instruction tree.
//!
//! The parser produces exactly one [`Recipe`] per interpretation. Ingredient
//! types are owned by the parser's larder and shared into amounts via `Rc`;
//! everything else is plain owned data.

use indexmap::IndexMap;
use std::rc::Rc;

/// An ingredient definition from the larder.
///
/// Looked up by `code`, never by name. A unit string of `"1"` marks a
/// discrete ingredient (counted in whole items, eligible for pluralization);
/// anything else is a measure suffix printed directly after the quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientType {
    /// Short code referenced by ingredient mentions, e.g. `f`.
    pub code: Rc<str>,
    /// Full display name, e.g. `plain flour`.
    pub name: String,
    /// Unit string, e.g. `g`, `ml`, or `1` for discrete ingredients.
    pub units: String,
}

impl IngredientType {
    pub fn new(code: Rc<str>, name: String, units: String) -> Self {
        Self { code, name, units }
    }

    /// Discrete ingredients are measured in whole items.
    pub fn is_discrete(&self) -> bool {
        self.units == "1"
    }

    /// Suffix printed directly after a quantity; empty for discrete
    /// ingredients (`2 eggs`, not `21 eggs`).
    pub fn unit_suffix(&self) -> &str {
        if self.is_discrete() { "" } else { &self.units }
    }
}

/// A quantity of one ingredient type.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientAmount {
    pub kind: Rc<IngredientType>,
    pub amount: f64,
}

impl IngredientAmount {
    pub fn new(kind: Rc<IngredientType>, amount: f64) -> Self {
        Self { kind, amount }
    }
}

/// A named vessel accumulating ingredients between process steps.
///
/// Holds whatever has been added since it was last drained. A process
/// instruction takes the contents as an owned snapshot and leaves the same
/// vessel behind, empty and reusable.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    name: Rc<str>,
    contents: Vec<IngredientAmount>,
}

impl Container {
    pub fn new(name: Rc<str>) -> Self {
        Self {
            name,
            contents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Add an ingredient to this container.
    pub fn add(&mut self, amount: IngredientAmount) {
        self.contents.push(amount);
    }

    /// Take the accumulated contents, leaving the container empty in place.
    ///
    /// The returned sequence is owned outright; no aliasing with whatever is
    /// added to this container afterwards.
    pub fn drain(&mut self) -> Vec<IngredientAmount> {
        std::mem::take(&mut self.contents)
    }
}

/// One node of the instruction tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Apply a process verb to a container's accumulated contents.
    Process {
        /// Process verb as written, hyphen-separated, e.g. `beat-well`.
        verb: String,
        /// Frozen snapshot of the container at the moment the verb was parsed.
        ingredients: Vec<IngredientAmount>,
        /// Name of the container the snapshot was taken from.
        container: Rc<str>,
    },
    /// A bracketed sub-sequence annotated with a repetition count.
    Repeat {
        body: Vec<Instruction>,
        /// Always at least 1; enforced by the parser.
        count: u32,
    },
}

/// A fully parsed recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Name identifier as written, e.g. `victoria-sponge`.
    pub name: String,
    /// Total quantity of every ingredient mentioned anywhere in the
    /// directions, keyed by code. Each mention counts once; repeat blocks do
    /// not multiply totals.
    pub totals: IndexMap<Rc<str>, IngredientAmount>,
    /// Top-level instruction sequence.
    pub instructions: Vec<Instruction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour() -> Rc<IngredientType> {
        Rc::new(IngredientType::new(
            Rc::from("f"),
            "plain flour".to_string(),
            "g".to_string(),
        ))
    }

    fn egg() -> Rc<IngredientType> {
        Rc::new(IngredientType::new(
            Rc::from("e"),
            "egg".to_string(),
            "1".to_string(),
        ))
    }

    #[test]
    fn test_discrete_units() {
        assert!(egg().is_discrete());
        assert_eq!(egg().unit_suffix(), "");
        assert!(!flour().is_discrete());
        assert_eq!(flour().unit_suffix(), "g");
    }

    #[test]
    fn test_drain_leaves_container_empty() {
        let mut bowl = Container::new(Rc::from("bowl"));
        bowl.add(IngredientAmount::new(flour(), 200.0));
        bowl.add(IngredientAmount::new(egg(), 2.0));

        let snapshot = bowl.drain();
        assert_eq!(snapshot.len(), 2);
        assert!(bowl.is_empty());
        assert_eq!(bowl.name(), "bowl");

        // The vessel persists and can be refilled.
        bowl.add(IngredientAmount::new(egg(), 1.0));
        assert!(!bowl.is_empty());
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut bowl = Container::new(Rc::from("bowl"));
        bowl.add(IngredientAmount::new(egg(), 1.0));
        let first = bowl.drain();

        bowl.add(IngredientAmount::new(egg(), 3.0));
        let second = bowl.drain();

        assert_eq!(first[0].amount, 1.0);
        assert_eq!(second[0].amount, 3.0);
    }
}
