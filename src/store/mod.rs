//! The process-wide in-memory store.
//!
//! One [`Store`] is constructed at startup and handed to every consumer;
//! all state lives in it and dies with it (persistence is deliberately
//! out of scope). Operations are synchronous and take `&mut self`, so
//! each mutation completes atomically from the caller's point of view.

mod generator;
mod mealplan_repo;
mod recipe_repo;
mod seed;
mod shopping_repo;

pub use generator::{aggregate_ingredients, AggregatedLine};
pub use mealplan_repo::MealPlanRepository;
pub use recipe_repo::RecipeRepository;
pub use shopping_repo::ShoppingListRepository;

use chrono::NaiveDate;

use crate::models::{NewShoppingItem, ShoppingItem};

/// All application state: the recipe catalog, the meal-plan grid, the
/// shopping list, and the fixed recipe-category list.
#[derive(Debug)]
pub struct Store {
    pub recipes: RecipeRepository,
    pub meal_plans: MealPlanRepository,
    pub shopping_list: ShoppingListRepository,
    categories: Vec<String>,
}

impl Store {
    /// A store seeded with the built-in example recipes.
    pub fn new() -> Self {
        let mut store = Self::empty();
        for draft in seed::sample_recipes() {
            store.recipes.add(draft);
        }
        tracing::info!("Store seeded with {} example recipes", store.recipes.len());
        store
    }

    /// A store with no recipes, plans, or items. The category list is
    /// always present.
    pub fn empty() -> Self {
        Self {
            recipes: RecipeRepository::new(),
            meal_plans: MealPlanRepository::new(),
            shopping_list: ShoppingListRepository::new(),
            categories: seed::recipe_categories(),
        }
    }

    /// The fixed recipe-category list.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Generate shopping items from every meal planned between `start`
    /// and `end`, both inclusive.
    ///
    /// Aggregated lines are appended to the shopping list through its
    /// normal add operation, so each gets a fresh id and starts
    /// uncompleted. Returns the items that were added.
    pub fn generate_shopping_list(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<ShoppingItem> {
        let plans = self.meal_plans.in_range(start, end);
        let lines = aggregate_ingredients(&plans);
        tracing::info!(
            "Generated {} shopping items from {} plans between {} and {}",
            lines.len(),
            plans.len(),
            start,
            end
        );

        lines
            .into_iter()
            .map(|line| {
                self.shopping_list.add(
                    NewShoppingItem::new(line.name, line.quantity).with_recipe(line.recipe_id),
                )
            })
            .collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
