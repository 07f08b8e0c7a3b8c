//! Ingredient registry built incrementally while parsing.

use bake_ast::IngredientType;
use indexmap::IndexMap;
use std::rc::Rc;

/// The shared dictionary of ingredient codes.
///
/// Codes must be registered before any ingredient mention references them.
/// Registration is permissive: a duplicate code overwrites the earlier
/// definition, last wins.
#[derive(Debug, Default)]
pub struct Larder {
    entries: IndexMap<Rc<str>, Rc<IngredientType>>,
}

impl Larder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ingredient type under its code.
    pub fn register(&mut self, kind: IngredientType) -> Rc<IngredientType> {
        let kind = Rc::new(kind);
        self.entries.insert(kind.code.clone(), kind.clone());
        kind
    }

    /// Look up an ingredient type by code.
    pub fn lookup(&self, code: &str) -> Option<Rc<IngredientType>> {
        self.entries.get(code).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
