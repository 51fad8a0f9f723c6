use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewRecipe, Recipe, RecipePatch};

/// Owns every recipe in the catalog.
///
/// Mutations on unknown ids are silent no-ops; the `bool` return says
/// whether a record matched, it is never an error. Validation (non-empty
/// ingredients and so on) happens at the form boundary, not here.
#[derive(Debug, Default)]
pub struct RecipeRepository {
    recipes: Vec<Recipe>,
}

impl RecipeRepository {
    pub(crate) fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Accept a draft, assign it a fresh id and creation timestamp, and
    /// append it. Returns the stored record.
    pub fn add(&mut self, draft: NewRecipe) -> Recipe {
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            cook_time: draft.cook_time,
            servings: draft.servings,
            difficulty: draft.difficulty,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image: draft.image,
            tags: draft.tags,
            created_at: Utc::now(),
        };
        tracing::debug!("Added recipe '{}' ({})", recipe.title, recipe.id);
        self.recipes.push(recipe.clone());
        recipe
    }

    /// Merge the patch into the matching record. Returns false (and does
    /// nothing) when the id is unknown.
    pub fn update(&mut self, id: Uuid, patch: RecipePatch) -> bool {
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                patch.apply(recipe);
                tracing::debug!("Updated recipe {}", id);
                true
            }
            None => false,
        }
    }

    /// Drop the matching record permanently. Meal plans that embedded a
    /// snapshot of it are unaffected. Returns false when the id is unknown.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let len_before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        let removed = self.recipes.len() != len_before;
        if removed {
            tracing::debug!("Deleted recipe {}", id);
        }
        removed
    }

    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// All recipes, in insertion order.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes whose title or any ingredient line contains `term`
    /// (case-insensitive), optionally restricted to an exact category.
    pub fn search(&self, term: &str, category: Option<&str>) -> Vec<&Recipe> {
        let term_lower = term.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| {
                let matches_term = r.title.to_lowercase().contains(&term_lower)
                    || r.ingredients
                        .iter()
                        .any(|ing| ing.to_lowercase().contains(&term_lower));
                let matches_category = category.map_or(true, |c| r.category == c);
                matches_term && matches_category
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
