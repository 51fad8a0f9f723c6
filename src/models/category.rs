use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shopping-list aisle category. Auto-generated items land in Groceries;
/// the user picks one of the others when adding items by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ItemCategory {
    #[default]
    Groceries,
    Dairy,
    Meat,
    Produce,
    Pantry,
    Frozen,
    Other,
}

impl ItemCategory {
    /// Every category, in the order the shopping view lists them.
    pub const ALL: [ItemCategory; 7] = [
        ItemCategory::Groceries,
        ItemCategory::Dairy,
        ItemCategory::Meat,
        ItemCategory::Produce,
        ItemCategory::Pantry,
        ItemCategory::Frozen,
        ItemCategory::Other,
    ];
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCategory::Groceries => write!(f, "Groceries"),
            ItemCategory::Dairy => write!(f, "Dairy"),
            ItemCategory::Meat => write!(f, "Meat"),
            ItemCategory::Produce => write!(f, "Produce"),
            ItemCategory::Pantry => write!(f, "Pantry"),
            ItemCategory::Frozen => write!(f, "Frozen"),
            ItemCategory::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groceries" => Ok(ItemCategory::Groceries),
            "dairy" => Ok(ItemCategory::Dairy),
            "meat" => Ok(ItemCategory::Meat),
            "produce" => Ok(ItemCategory::Produce),
            "pantry" => Ok(ItemCategory::Pantry),
            "frozen" => Ok(ItemCategory::Frozen),
            "other" => Ok(ItemCategory::Other),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: groceries, dairy, meat, produce, pantry, frozen, other",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ItemCategory::Groceries), "Groceries");
        assert_eq!(format!("{}", ItemCategory::Frozen), "Frozen");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            ItemCategory::from_str("groceries").unwrap(),
            ItemCategory::Groceries
        );
        assert_eq!(ItemCategory::from_str("DAIRY").unwrap(), ItemCategory::Dairy);
        assert_eq!(ItemCategory::from_str("Meat").unwrap(), ItemCategory::Meat);
    }

    #[test]
    fn test_category_from_str_invalid() {
        assert!(ItemCategory::from_str("bakery").is_err());
        assert!(ItemCategory::from_str("").is_err());
    }

    #[test]
    fn test_category_default_is_groceries() {
        assert_eq!(ItemCategory::default(), ItemCategory::Groceries);
    }

    #[test]
    fn test_category_all_order() {
        assert_eq!(ItemCategory::ALL.len(), 7);
        assert_eq!(ItemCategory::ALL[0], ItemCategory::Groceries);
        assert_eq!(ItemCategory::ALL[6], ItemCategory::Other);
    }

    #[test]
    fn test_category_json_roundtrip() {
        let json = serde_json::to_string(&ItemCategory::Produce).unwrap();
        assert_eq!(json, "\"Produce\"");

        let parsed: ItemCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ItemCategory::Produce);
    }
}
