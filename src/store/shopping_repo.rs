use uuid::Uuid;

use crate::models::{ItemCategory, NewShoppingItem, ShoppingItem};

/// Owns the shopping list.
///
/// Adding always succeeds; toggle and remove are silent no-ops on unknown
/// ids, reported by the `bool` return.
#[derive(Debug, Default)]
pub struct ShoppingListRepository {
    items: Vec<ShoppingItem>,
}

impl ShoppingListRepository {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Accept a draft, assign it a fresh id, and append it.
    pub fn add(&mut self, draft: NewShoppingItem) -> ShoppingItem {
        let item = ShoppingItem {
            id: Uuid::new_v4(),
            name: draft.name,
            quantity: draft.quantity,
            category: draft.category,
            completed: draft.completed,
            recipe_id: draft.recipe_id,
        };
        tracing::debug!("Added shopping item '{}' ({})", item.name, item.id);
        self.items.push(item.clone());
        item
    }

    /// Flip `completed` on the matching item. Returns false when the id is
    /// unknown.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Drop the matching item. Returns false when the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != len_before
    }

    pub fn get(&self, id: Uuid) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All items, in insertion order.
    pub fn list(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Items in one category, in insertion order. The shopping view groups
    /// its display this way.
    pub fn in_category(&self, category: ItemCategory) -> Vec<&ShoppingItem> {
        self.items
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
