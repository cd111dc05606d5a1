use chrono::{DateTime, Utc};
use recipe_wizard_kitchen::{Category, Ingredient, Notice};

pub const MAX_NOTICES: usize = 3;

#[derive(Debug, Clone)]
pub struct ToastNotice {
    pub notice: Notice,
    pub shown_at: DateTime<Utc>,
}

impl ToastNotice {
    pub fn new(notice: Notice, shown_at: DateTime<Utc>) -> Self {
        Self { notice, shown_at }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        now.signed_duration_since(self.shown_at).num_seconds() >= ttl
    }
}

/// A category header followed by its ingredients, as listed on the ingredients step.
#[derive(Debug, Clone)]
pub struct IngredientGroup {
    pub category: Category,
    pub items: Vec<Ingredient>,
}

pub fn group_by_category(ingredients: &[Ingredient]) -> Vec<IngredientGroup> {
    Category::ALL
        .into_iter()
        .map(|category| IngredientGroup {
            category,
            items: ingredients
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}
