use crate::error::{KitchenError, KitchenResult};
use crate::types::{Category, Cuisine, FlavorProfile, Ingredient};

const INGREDIENTS: &[(&str, &str, Category)] = &[
    ("beef", "Beef", Category::Protein),
    ("chicken", "Chicken", Category::Protein),
    ("fish", "Fish", Category::Protein),
    ("pork", "Pork", Category::Protein),
    ("tofu", "Tofu", Category::Protein),
    ("shrimp", "Shrimp", Category::Protein),
    ("eggs", "Eggs", Category::Protein),
    ("carrot", "Carrot", Category::Vegetable),
    ("broccoli", "Broccoli", Category::Vegetable),
    ("spinach", "Spinach", Category::Vegetable),
    ("tomato", "Tomato", Category::Vegetable),
    ("onion", "Onion", Category::Vegetable),
    ("garlic", "Garlic", Category::Vegetable),
    ("potato", "Potato", Category::Vegetable),
    ("bellpepper", "Bell Pepper", Category::Vegetable),
    ("rice", "Rice", Category::Grain),
    ("pasta", "Pasta", Category::Grain),
    ("bread", "Bread", Category::Grain),
    ("quinoa", "Quinoa", Category::Grain),
    ("oats", "Oats", Category::Grain),
    ("milk", "Milk", Category::Dairy),
    ("cheese", "Cheese", Category::Dairy),
    ("yogurt", "Yogurt", Category::Dairy),
    ("butter", "Butter", Category::Dairy),
    ("salt", "Salt", Category::Spice),
    ("pepper", "Pepper", Category::Spice),
    ("oregano", "Oregano", Category::Spice),
    ("basil", "Basil", Category::Spice),
    ("thyme", "Thyme", Category::Spice),
    ("paprika", "Paprika", Category::Spice),
    ("cumin", "Cumin", Category::Spice),
];

pub fn ingredients() -> Vec<Ingredient> {
    INGREDIENTS
        .iter()
        .map(|&(id, name, category)| Ingredient::new(id, name, category))
        .collect()
}

pub fn ingredient(id: &str) -> KitchenResult<Ingredient> {
    INGREDIENTS
        .iter()
        .find(|(known, _, _)| *known == id)
        .map(|&(id, name, category)| Ingredient::new(id, name, category))
        .ok_or_else(|| KitchenError::UnknownIngredient(id.to_string()))
}

pub fn flavor_description(flavor: FlavorProfile) -> &'static str {
    match flavor {
        FlavorProfile::Spicy => "Bold, fiery dishes that pack a punch",
        FlavorProfile::Sweet => "Delightful dishes with a touch of sweetness",
        FlavorProfile::Savory => "Rich, umami-filled comfort foods",
        FlavorProfile::Tangy => "Bright, acidic flavors that excite the palate",
        FlavorProfile::Fresh => "Light, vibrant, and refreshing dishes",
    }
}

pub fn cuisine_description(cuisine: Cuisine) -> &'static str {
    match cuisine {
        Cuisine::Italian => "Pasta, pizza, and Mediterranean flavors",
        Cuisine::Mexican => "Bold, vibrant dishes with corn, beans, and chilies",
        Cuisine::Asian => "Diverse flavors from across the continent",
        Cuisine::Mediterranean => "Healthy dishes with olive oil, herbs, and seafood",
        Cuisine::American => "Comfort foods and classics from the USA",
    }
}

/// Cuisines suggested for a flavor, in catalog order. No flavor means all of them.
pub fn cuisines_for(flavor: Option<FlavorProfile>) -> Vec<Cuisine> {
    let Some(flavor) = flavor else {
        return Cuisine::ALL.to_vec();
    };

    let suggested: &[Cuisine] = match flavor {
        FlavorProfile::Spicy => &[Cuisine::Mexican, Cuisine::Asian],
        FlavorProfile::Sweet => &[Cuisine::Italian, Cuisine::American],
        FlavorProfile::Savory => &[Cuisine::Italian, Cuisine::American, Cuisine::Mediterranean],
        FlavorProfile::Tangy => &[Cuisine::Mexican, Cuisine::Asian, Cuisine::Mediterranean],
        FlavorProfile::Fresh => &[Cuisine::Mediterranean, Cuisine::Asian],
    };

    Cuisine::ALL
        .into_iter()
        .filter(|cuisine| suggested.contains(cuisine))
        .collect()
}
