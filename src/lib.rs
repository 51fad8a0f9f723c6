//! Mealkeeper Core Library
//!
//! In-memory core for a single-user recipe organizer: a recipe catalog,
//! a per-date meal-planning grid, and a shopping list derived from
//! planned meals.
//!
//! Everything hangs off one [`Store`], constructed at startup and
//! injected into whatever presents it. Nothing is persisted and nothing
//! talks to the network; when the process ends, the data ends with it.
//!
//! ```
//! use mealkeeper::{NewMealPlan, Store};
//!
//! let mut store = Store::new();
//! let carbonara = store.recipes.list()[0].clone();
//!
//! let date = "2024-02-05".parse().unwrap();
//! store
//!     .meal_plans
//!     .add(NewMealPlan::new(date).with_dinner(carbonara));
//!
//! let items = store.generate_shopping_list(date, date);
//! assert_eq!(items.len(), 6);
//! ```

pub mod forms;
pub mod models;
pub mod store;

pub use forms::{FormError, RecipeForm, ShoppingItemForm};
pub use models::{
    Difficulty, ItemCategory, MealPlan, MealPlanPatch, NewMealPlan, NewRecipe, NewShoppingItem,
    Recipe, RecipePatch, ShoppingItem,
};
pub use store::{
    aggregate_ingredients, AggregatedLine, MealPlanRepository, RecipeRepository,
    ShoppingListRepository, Store,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
