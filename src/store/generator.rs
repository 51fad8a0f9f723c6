//! Ingredient aggregation for shopping-list generation.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::MealPlan;

/// One aggregated ingredient line, keyed by the exact ingredient text.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedLine {
    pub name: String,
    pub quantity: String,
    /// Recipe that first used this ingredient within the scanned plans.
    pub recipe_id: Uuid,
}

/// Collapse every ingredient of every assigned recipe into one line per
/// distinct ingredient string, emitted in order of first appearance.
///
/// Matching is exact: case-sensitive, no trimming, no fuzzy matching.
/// Ingredient lines carry their own quantity in the text ("400g
/// spaghetti"), so repeats are not summed numerically; the first
/// occurrence gets quantity "1" and each repeat appends " + more", which
/// tells the user the line is needed by more than one meal without
/// claiming a precision the data does not have.
pub fn aggregate_ingredients(plans: &[&MealPlan]) -> Vec<AggregatedLine> {
    let mut lines: Vec<AggregatedLine> = Vec::new();
    // Exact ingredient string -> position in `lines`
    let mut index: HashMap<String, usize> = HashMap::new();

    for plan in plans {
        for recipe in plan.assigned_recipes() {
            for ingredient in &recipe.ingredients {
                match index.get(ingredient) {
                    Some(&i) => lines[i].quantity.push_str(" + more"),
                    None => {
                        index.insert(ingredient.clone(), lines.len());
                        lines.push(AggregatedLine {
                            name: ingredient.clone(),
                            quantity: "1".to_string(),
                            recipe_id: recipe.id,
                        });
                    }
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Recipe};
    use chrono::{NaiveDate, Utc};

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            category: "Italian".to_string(),
            cook_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec!["cook".into()],
            image: None,
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    fn plan(date: &str) -> MealPlan {
        MealPlan {
            id: Uuid::new_v4(),
            date: date.parse::<NaiveDate>().unwrap(),
            breakfast: None,
            lunch: None,
            dinner: None,
            snacks: vec![],
        }
    }

    #[test]
    fn test_no_plans_yields_nothing() {
        assert!(aggregate_ingredients(&[]).is_empty());
    }

    #[test]
    fn test_unplanned_day_contributes_nothing() {
        let empty = plan("2024-02-01");
        assert!(aggregate_ingredients(&[&empty]).is_empty());
    }

    #[test]
    fn test_single_recipe_one_line_per_ingredient() {
        let mut p = plan("2024-02-01");
        p.dinner = Some(recipe("Carbonara", &["400g spaghetti", "4 large eggs"]));

        let lines = aggregate_ingredients(&[&p]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "400g spaghetti");
        assert_eq!(lines[0].quantity, "1");
        assert_eq!(lines[1].name, "4 large eggs");
    }

    #[test]
    fn test_repeat_across_plans_appends_more() {
        let mut a = plan("2024-02-01");
        a.dinner = Some(recipe("Carbonara", &["2 eggs"]));
        let mut b = plan("2024-02-02");
        b.breakfast = Some(recipe("Omelette", &["2 eggs"]));

        let lines = aggregate_ingredients(&[&a, &b]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "2 eggs");
        assert_eq!(lines[0].quantity, "1 + more");
    }

    #[test]
    fn test_three_occurrences_accumulate_textually() {
        let mut a = plan("2024-02-01");
        a.breakfast = Some(recipe("Omelette", &["2 eggs"]));
        a.lunch = Some(recipe("Fried rice", &["2 eggs"]));
        let mut b = plan("2024-02-02");
        b.dinner = Some(recipe("Carbonara", &["2 eggs"]));

        let lines = aggregate_ingredients(&[&a, &b]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, "1 + more + more");
    }

    #[test]
    fn test_emission_order_is_first_seen() {
        let mut a = plan("2024-02-01");
        a.breakfast = Some(recipe("Oats", &["oats", "milk"]));
        a.dinner = Some(recipe("Stew", &["beef", "milk", "carrots"]));

        let lines = aggregate_ingredients(&[&a]);

        let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["oats", "milk", "beef", "carrots"]);
    }

    #[test]
    fn test_slot_order_breakfast_lunch_dinner_snacks() {
        let mut p = plan("2024-02-01");
        p.snacks = vec![recipe("Snack", &["crackers"])];
        p.dinner = Some(recipe("Dinner", &["beef"]));
        p.breakfast = Some(recipe("Breakfast", &["oats"]));
        p.lunch = Some(recipe("Lunch", &["bread"]));

        let lines = aggregate_ingredients(&[&p]);

        let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["oats", "bread", "beef", "crackers"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let mut p = plan("2024-02-01");
        p.lunch = Some(recipe("A", &["Salt"]));
        p.dinner = Some(recipe("B", &["salt"]));

        let lines = aggregate_ingredients(&[&p]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, "1");
        assert_eq!(lines[1].quantity, "1");
    }

    #[test]
    fn test_whitespace_variants_stay_distinct() {
        let mut p = plan("2024-02-01");
        p.lunch = Some(recipe("A", &["2 eggs"]));
        p.dinner = Some(recipe("B", &["2 eggs "]));

        let lines = aggregate_ingredients(&[&p]);

        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_recipe_id_comes_from_first_use() {
        let first = recipe("First", &["flour"]);
        let first_id = first.id;
        let mut a = plan("2024-02-01");
        a.lunch = Some(first);
        let mut b = plan("2024-02-02");
        b.lunch = Some(recipe("Second", &["flour"]));

        let lines = aggregate_ingredients(&[&a, &b]);

        assert_eq!(lines[0].recipe_id, first_id);
    }

    #[test]
    fn test_snacks_all_contribute() {
        let mut p = plan("2024-02-01");
        p.snacks = vec![
            recipe("Apple", &["1 apple"]),
            recipe("Trail mix", &["nuts", "raisins"]),
        ];

        let lines = aggregate_ingredients(&[&p]);

        assert_eq!(lines.len(), 3);
    }
}
