use crate::error::KitchenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Vegetable,
    Grain,
    Dairy,
    Spice,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Protein,
        Category::Vegetable,
        Category::Grain,
        Category::Dairy,
        Category::Spice,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Protein => "Proteins",
            Category::Vegetable => "Vegetables",
            Category::Grain => "Grains",
            Category::Dairy => "Dairy",
            Category::Spice => "Spices",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorProfile {
    Spicy,
    Sweet,
    Savory,
    Tangy,
    Fresh,
}

impl FlavorProfile {
    pub const ALL: [FlavorProfile; 5] = [
        FlavorProfile::Spicy,
        FlavorProfile::Sweet,
        FlavorProfile::Savory,
        FlavorProfile::Tangy,
        FlavorProfile::Fresh,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FlavorProfile::Spicy => "spicy",
            FlavorProfile::Sweet => "sweet",
            FlavorProfile::Savory => "savory",
            FlavorProfile::Tangy => "tangy",
            FlavorProfile::Fresh => "fresh",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlavorProfile::Spicy => "Spicy",
            FlavorProfile::Sweet => "Sweet",
            FlavorProfile::Savory => "Savory",
            FlavorProfile::Tangy => "Tangy",
            FlavorProfile::Fresh => "Fresh",
        }
    }
}

impl fmt::Display for FlavorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlavorProfile {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|flavor| flavor.id() == wanted)
            .ok_or_else(|| KitchenError::UnknownFlavor(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Italian,
    Mexican,
    Asian,
    Mediterranean,
    American,
}

impl Cuisine {
    pub const ALL: [Cuisine; 5] = [
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Asian,
        Cuisine::Mediterranean,
        Cuisine::American,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Cuisine::Italian => "italian",
            Cuisine::Mexican => "mexican",
            Cuisine::Asian => "asian",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::American => "american",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Asian => "Asian",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::American => "American",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cuisine {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|cuisine| cuisine.id() == wanted)
            .ok_or_else(|| KitchenError::UnknownCuisine(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub recommended: bool,
}

impl Ingredient {
    pub fn new(id: &str, name: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            recommended: false,
        }
    }

    pub fn display_name(&self) -> String {
        if self.recommended {
            format!("{} *", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub preparation_time: String,
    pub cooking_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}
