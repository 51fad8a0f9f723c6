//! Edge validation for user-submitted input.
//!
//! The store never rejects a write, so every check that keeps junk out of
//! it lives here, at the form boundary. A form collects raw field values
//! and `submit` either cleans them into a draft the store will accept or
//! reports why it refuses to.

use thiserror::Error;

use crate::models::{Difficulty, ItemCategory, NewRecipe, NewShoppingItem};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Recipe title cannot be blank")]
    BlankTitle,
    #[error("At least one non-blank ingredient is required")]
    NoIngredients,
    #[error("At least one non-blank instruction step is required")]
    NoInstructions,
    #[error("Item name cannot be blank")]
    BlankItemName,
    #[error("Item quantity cannot be blank")]
    BlankItemQuantity,
}

/// The add-recipe form.
///
/// Defaults match what the entry form starts with: 30 minutes, 4
/// servings, Easy.
#[derive(Debug, Clone)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            cook_time: 30,
            servings: 4,
            difficulty: Difficulty::Easy,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            image: None,
            tags: Vec::new(),
        }
    }
}

impl RecipeForm {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Add a tag, trimmed. Blank tags and exact duplicates are ignored.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Validate and convert into a draft the store will accept.
    ///
    /// Blank ingredient and instruction lines are dropped; if none remain
    /// in either list the submission is refused. The store itself would
    /// happily accept an empty recipe, which is exactly why this check
    /// sits here.
    pub fn submit(self) -> Result<NewRecipe, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::BlankTitle);
        }

        let ingredients: Vec<String> = self
            .ingredients
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let instructions: Vec<String> = self
            .instructions
            .into_iter()
            .filter(|step| !step.trim().is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(FormError::NoIngredients);
        }
        if instructions.is_empty() {
            return Err(FormError::NoInstructions);
        }

        let mut draft = NewRecipe::new(self.title, self.category)
            .with_description(self.description)
            .with_cook_time(self.cook_time)
            .with_servings(self.servings)
            .with_difficulty(self.difficulty)
            .with_ingredients(ingredients)
            .with_instructions(instructions)
            .with_tags(self.tags);
        draft.image = self.image;

        Ok(draft)
    }
}

/// The manual add-item form on the shopping view.
#[derive(Debug, Clone, Default)]
pub struct ShoppingItemForm {
    pub name: String,
    pub quantity: String,
    pub category: ItemCategory,
}

impl ShoppingItemForm {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            category: ItemCategory::default(),
        }
    }

    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    /// Refuses a blank name or blank quantity; otherwise yields a draft.
    pub fn submit(self) -> Result<NewShoppingItem, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::BlankItemName);
        }
        if self.quantity.trim().is_empty() {
            return Err(FormError::BlankItemQuantity);
        }

        Ok(NewShoppingItem::new(self.name, self.quantity).with_category(self.category))
    }
}
