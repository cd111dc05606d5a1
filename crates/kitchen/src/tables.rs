//! Fixed id-membership tables shared by recommendation and recipe synthesis.

use crate::types::{Category, Cuisine, FlavorProfile, Ingredient};

pub const PROTEINS: &[&str] = &["beef", "chicken", "fish", "pork", "tofu", "shrimp", "eggs"];

pub const VEGETABLES: &[&str] = &[
    "carrot",
    "broccoli",
    "spinach",
    "tomato",
    "onion",
    "garlic",
    "potato",
    "bellpepper",
];

/// Vegetables that can headline a dish title. Aromatics and tomato are left out.
pub const MAIN_VEGETABLES: &[&str] = &["carrot", "broccoli", "spinach", "potato", "bellpepper"];

pub const GRAINS: &[&str] = &["rice", "pasta", "bread", "quinoa", "oats"];

pub const DAIRY: &[&str] = &["milk", "cheese", "yogurt", "butter"];

pub const SPICES: &[&str] = &["salt", "pepper", "oregano", "basil", "thyme", "paprika", "cumin"];

pub const HERBS: &[&str] = &["basil", "oregano", "thyme"];

pub fn flavor_recommendations(flavor: FlavorProfile) -> &'static [&'static str] {
    match flavor {
        FlavorProfile::Spicy => &["pepper", "paprika", "cumin"],
        FlavorProfile::Sweet => &["carrot", "milk", "bread"],
        FlavorProfile::Savory => &["beef", "onion", "garlic", "thyme"],
        FlavorProfile::Tangy => &["tomato", "yogurt", "bellpepper"],
        FlavorProfile::Fresh => &["spinach", "basil", "fish"],
    }
}

pub fn cuisine_recommendations(cuisine: Cuisine) -> &'static [&'static str] {
    match cuisine {
        Cuisine::Italian => &["pasta", "tomato", "basil", "oregano"],
        Cuisine::Mexican => &["rice", "pepper", "bellpepper", "cumin"],
        Cuisine::Asian => &["rice", "tofu", "shrimp", "garlic"],
        Cuisine::Mediterranean => &["fish", "tomato", "oregano", "yogurt"],
        Cuisine::American => &["beef", "potato", "bread", "cheese"],
    }
}

/// Category derived from the membership lists; unlisted ids count as vegetables.
pub fn category_of(id: &str) -> Category {
    if PROTEINS.contains(&id) {
        Category::Protein
    } else if GRAINS.contains(&id) {
        Category::Grain
    } else if DAIRY.contains(&id) {
        Category::Dairy
    } else if SPICES.contains(&id) {
        Category::Spice
    } else {
        Category::Vegetable
    }
}

/// Ingredients, in input order, whose id is in `table`.
pub fn members<'a>(ingredients: &'a [Ingredient], table: &[&str]) -> Vec<&'a Ingredient> {
    ingredients
        .iter()
        .filter(|ing| table.contains(&ing.id.as_str()))
        .collect()
}

pub fn has(ingredients: &[Ingredient], id: &str) -> bool {
    ingredients.iter().any(|ing| ing.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn membership_lists_agree_with_catalog_categories() {
        for ingredient in catalog::ingredients() {
            assert_eq!(
                category_of(&ingredient.id),
                ingredient.category,
                "category mismatch for {}",
                ingredient.id
            );
        }
    }

    #[test]
    fn main_vegetables_and_herbs_are_subsets() {
        assert!(MAIN_VEGETABLES.iter().all(|id| VEGETABLES.contains(id)));
        assert!(HERBS.iter().all(|id| SPICES.contains(id)));
    }

    #[test]
    fn recommendation_tables_only_name_catalog_ids() {
        let ids: Vec<String> = catalog::ingredients().into_iter().map(|i| i.id).collect();
        for flavor in FlavorProfile::ALL {
            for id in flavor_recommendations(flavor) {
                assert!(ids.iter().any(|known| known == id), "{id}");
            }
        }
        for cuisine in Cuisine::ALL {
            for id in cuisine_recommendations(cuisine) {
                assert!(ids.iter().any(|known| known == id), "{id}");
            }
        }
    }

    #[test]
    fn unknown_ids_default_to_vegetable() {
        assert_eq!(category_of("tortilla"), Category::Vegetable);
    }
}
