use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{MealPlan, MealPlanPatch, NewMealPlan};

/// Owns the per-date meal plans.
///
/// Nothing enforces one plan per date; when duplicates exist, date lookup
/// returns whichever was added first. An empty lookup result is a normal
/// state, not an error.
#[derive(Debug, Default)]
pub struct MealPlanRepository {
    plans: Vec<MealPlan>,
}

impl MealPlanRepository {
    pub(crate) fn new() -> Self {
        Self { plans: Vec::new() }
    }

    /// Accept a draft, assign it a fresh id, and append it. The draft's
    /// slot recipes are already owned snapshots.
    pub fn add(&mut self, draft: NewMealPlan) -> MealPlan {
        let plan = MealPlan {
            id: Uuid::new_v4(),
            date: draft.date,
            breakfast: draft.breakfast,
            lunch: draft.lunch,
            dinner: draft.dinner,
            snacks: draft.snacks,
        };
        tracing::debug!("Added meal plan for {} ({})", plan.date, plan.id);
        self.plans.push(plan.clone());
        plan
    }

    /// Merge the patch into the matching record. Returns false (and does
    /// nothing) when the id is unknown.
    pub fn update(&mut self, id: Uuid, patch: MealPlanPatch) -> bool {
        match self.plans.iter_mut().find(|p| p.id == id) {
            Some(plan) => {
                patch.apply(plan);
                tracing::debug!("Updated meal plan {}", id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&MealPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// First plan recorded for the given date, if any.
    pub fn get_by_date(&self, date: NaiveDate) -> Option<&MealPlan> {
        self.plans.iter().find(|p| p.date == date)
    }

    /// Every plan with `start <= date <= end`, both bounds inclusive, in
    /// insertion order.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&MealPlan> {
        self.plans
            .iter()
            .filter(|p| p.date >= start && p.date <= end)
            .collect()
    }

    /// All plans, in insertion order.
    pub fn list(&self) -> &[MealPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
