use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Recipe;

/// One day's planned meals.
///
/// Each slot embeds a full recipe snapshot rather than an id. That is
/// deliberate denormalization: a plan keeps showing the recipe as it was
/// when assigned, even after the original is edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub id: Uuid,
    pub date: NaiveDate,
    pub breakfast: Option<Recipe>,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
    /// Extra meals beyond the three main slots; empty means none.
    #[serde(default)]
    pub snacks: Vec<Recipe>,
}

impl MealPlan {
    /// Recipes assigned to this plan, in fixed slot order: breakfast,
    /// lunch, dinner, then each snack in sequence.
    pub fn assigned_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }

    /// True when no slot has a recipe assigned.
    pub fn is_unplanned(&self) -> bool {
        self.assigned_recipes().next().is_none()
    }
}

/// Caller-supplied fields for a new meal plan. Slot recipes are owned
/// copies; clone from the catalog when assigning.
#[derive(Debug, Clone)]
pub struct NewMealPlan {
    pub date: NaiveDate,
    pub breakfast: Option<Recipe>,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
    pub snacks: Vec<Recipe>,
}

impl NewMealPlan {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            breakfast: None,
            lunch: None,
            dinner: None,
            snacks: Vec::new(),
        }
    }

    pub fn with_breakfast(mut self, recipe: Recipe) -> Self {
        self.breakfast = Some(recipe);
        self
    }

    pub fn with_lunch(mut self, recipe: Recipe) -> Self {
        self.lunch = Some(recipe);
        self
    }

    pub fn with_dinner(mut self, recipe: Recipe) -> Self {
        self.dinner = Some(recipe);
        self
    }

    pub fn with_snacks(mut self, snacks: Vec<Recipe>) -> Self {
        self.snacks = snacks;
        self
    }
}

/// Partial update for a meal plan. `None` leaves a field untouched; a
/// slot can be assigned or replaced this way but not cleared.
#[derive(Debug, Clone, Default)]
pub struct MealPlanPatch {
    pub date: Option<NaiveDate>,
    pub breakfast: Option<Recipe>,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
    pub snacks: Option<Vec<Recipe>>,
}

impl MealPlanPatch {
    pub(crate) fn apply(self, plan: &mut MealPlan) {
        if let Some(date) = self.date {
            plan.date = date;
        }
        if let Some(breakfast) = self.breakfast {
            plan.breakfast = Some(breakfast);
        }
        if let Some(lunch) = self.lunch {
            plan.lunch = Some(lunch);
        }
        if let Some(dinner) = self.dinner {
            plan.dinner = Some(dinner);
        }
        if let Some(snacks) = self.snacks {
            plan.snacks = snacks;
        }
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Meal plan for {}", self.date)?;

        let slots = [
            ("Breakfast", &self.breakfast),
            ("Lunch", &self.lunch),
            ("Dinner", &self.dinner),
        ];
        for (label, slot) in slots {
            match slot {
                Some(recipe) => {
                    writeln!(f, "  {}: {} ({}m)", label, recipe.title, recipe.cook_time)?
                }
                None => writeln!(f, "  {}: -", label)?,
            }
        }

        for snack in &self.snacks {
            writeln!(f, "  Snack: {} ({}m)", snack.title, snack.cook_time)?;
        }

        Ok(())
    }
}
