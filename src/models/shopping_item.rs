use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ItemCategory;

/// One line on the shopping list.
///
/// Items are independent entities once created. `recipe_id` records which
/// recipe produced an auto-generated item, for lookup only; the item
/// survives that recipe's deletion unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    /// Free text, e.g. "2 cartons" or the generator's "1 + more".
    /// Never parsed as a number.
    pub quantity: String,
    pub category: ItemCategory,
    pub completed: bool,
    pub recipe_id: Option<Uuid>,
}

/// Caller-supplied fields for a new shopping item; the repository assigns
/// the id.
#[derive(Debug, Clone)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: String,
    pub category: ItemCategory,
    pub completed: bool,
    pub recipe_id: Option<Uuid>,
}

impl NewShoppingItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            category: ItemCategory::default(),
            completed: false,
            recipe_id: None,
        }
    }

    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_recipe(mut self, recipe_id: Uuid) -> Self {
        self.recipe_id = Some(recipe_id);
        self
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.completed { "[x]" } else { "[ ]" };
        write!(f, "{} {:<25} {}", check, self.name, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shopping_item_defaults() {
        let draft = NewShoppingItem::new("Milk", "2");

        assert_eq!(draft.name, "Milk");
        assert_eq!(draft.quantity, "2");
        assert_eq!(draft.category, ItemCategory::Groceries);
        assert!(!draft.completed);
        assert!(draft.recipe_id.is_none());
    }

    #[test]
    fn test_new_shopping_item_builder() {
        let recipe_id = Uuid::new_v4();
        let draft = NewShoppingItem::new("Chicken thighs", "1kg")
            .with_category(ItemCategory::Meat)
            .with_recipe(recipe_id);

        assert_eq!(draft.category, ItemCategory::Meat);
        assert_eq!(draft.recipe_id, Some(recipe_id));
    }

    #[test]
    fn test_shopping_item_display() {
        let item = ShoppingItem {
            id: Uuid::new_v4(),
            name: "Milk".to_string(),
            quantity: "2".to_string(),
            category: ItemCategory::Dairy,
            completed: false,
            recipe_id: None,
        };
        assert!(format!("{}", item).starts_with("[ ] Milk"));

        let done = ShoppingItem {
            completed: true,
            ..item
        };
        assert!(format!("{}", done).starts_with("[x] Milk"));
    }

    #[test]
    fn test_shopping_item_json_roundtrip() {
        let item = ShoppingItem {
            id: Uuid::new_v4(),
            name: "4 large eggs".to_string(),
            quantity: "1 + more".to_string(),
            category: ItemCategory::Groceries,
            completed: false,
            recipe_id: Some(Uuid::new_v4()),
        };

        let json = serde_json::to_string(&item).unwrap();
        let parsed: ShoppingItem = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, item);
    }
}
