//! Rule-based recipe synthesis from a flavor, a cuisine, and selected ingredients.
//!
//! Everything except amount selection is a pure function of the inputs. Amounts
//! are drawn from the caller's [`rand::Rng`], so a seeded generator pins the
//! whole recipe.

mod amounts;
mod description;
mod instructions;
mod tips;
mod title;

pub use amounts::{amount_for, amount_candidates};
pub use description::description;
pub use instructions::instructions;
pub use tips::tips;
pub use title::{dish_type, title, CUSTOM_TITLE};

use crate::tables::{self, GRAINS, HERBS, MAIN_VEGETABLES, PROTEINS, VEGETABLES};
use crate::types::{Cuisine, Difficulty, FlavorProfile, Ingredient, Recipe, RecipeIngredient};
use rand::Rng;
use tracing::debug;

pub fn generate<R: Rng + ?Sized>(
    ingredients: &[Ingredient],
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
    rng: &mut R,
) -> Recipe {
    let buckets = Buckets::new(ingredients);

    let recipe = Recipe {
        title: title(ingredients, flavor, cuisine),
        description: description(ingredients, flavor, cuisine),
        preparation_time: format!("{} min", preparation_minutes(&buckets)),
        cooking_time: format!("{} min", cooking_minutes(&buckets)),
        servings: servings(ingredients.len()),
        difficulty: difficulty(ingredients.len()),
        ingredients: ingredients
            .iter()
            .map(|ing| RecipeIngredient {
                name: ing.name.clone(),
                amount: amount_for(&ing.id, &mut *rng),
            })
            .collect(),
        instructions: instructions(ingredients, flavor, cuisine),
        tips: tips(ingredients, flavor, cuisine),
    };

    debug!(
        title = %recipe.title,
        steps = recipe.instructions.len(),
        tips = recipe.tips.len(),
        "generated recipe"
    );

    recipe
}

pub fn generate_random(
    ingredients: &[Ingredient],
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
) -> Recipe {
    generate(ingredients, flavor, cuisine, &mut rand::thread_rng())
}

fn preparation_minutes(buckets: &Buckets<'_>) -> usize {
    5 + 5 * (buckets.vegetables.len() + buckets.proteins.len())
}

fn cooking_minutes(buckets: &Buckets<'_>) -> usize {
    let mut minutes = 10;
    if !buckets.proteins.is_empty() {
        minutes += 10;
    }
    if !buckets.grains.is_empty() {
        minutes += 5;
    }
    if buckets.vegetables.len() > 2 {
        minutes += 5;
    }
    minutes
}

fn servings(count: usize) -> u32 {
    if count < 4 {
        2
    } else {
        4
    }
}

fn difficulty(count: usize) -> Difficulty {
    match count {
        0..=4 => Difficulty::Easy,
        5..=7 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Selected ingredients split by the membership tables, each in input order.
pub(crate) struct Buckets<'a> {
    all: &'a [Ingredient],
    pub proteins: Vec<&'a Ingredient>,
    pub vegetables: Vec<&'a Ingredient>,
    pub main_vegetables: Vec<&'a Ingredient>,
    pub grains: Vec<&'a Ingredient>,
    pub herbs: Vec<&'a Ingredient>,
}

impl<'a> Buckets<'a> {
    pub fn new(all: &'a [Ingredient]) -> Self {
        Self {
            all,
            proteins: tables::members(all, PROTEINS),
            vegetables: tables::members(all, VEGETABLES),
            main_vegetables: tables::members(all, MAIN_VEGETABLES),
            grains: tables::members(all, GRAINS),
            herbs: tables::members(all, HERBS),
        }
    }

    pub fn has(&self, id: &str) -> bool {
        tables::has(self.all, id)
    }

    pub fn find(&self, id: &str) -> Option<&'a Ingredient> {
        self.all.iter().find(|ing| ing.id == id)
    }
}

/// Lower-cased names joined as "a", "a and b", "a, b and c".
pub(crate) fn join_names(items: &[&Ingredient]) -> String {
    let names: Vec<String> = items.iter().map(|i| i.name.to_lowercase()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}
