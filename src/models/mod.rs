mod category;
mod difficulty;
mod meal_plan;
mod recipe;
mod shopping_item;

pub use category::ItemCategory;
pub use difficulty::Difficulty;
pub use meal_plan::{MealPlan, MealPlanPatch, NewMealPlan};
pub use recipe::{NewRecipe, Recipe, RecipePatch};
pub use shopping_item::{NewShoppingItem, ShoppingItem};
