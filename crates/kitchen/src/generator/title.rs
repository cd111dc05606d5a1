use super::Buckets;
use crate::types::{Cuisine, FlavorProfile, Ingredient};

pub const CUSTOM_TITLE: &str = "Custom Recipe";

pub fn title(
    ingredients: &[Ingredient],
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
) -> String {
    if ingredients.is_empty() && flavor.is_none() && cuisine.is_none() {
        return CUSTOM_TITLE.to_string();
    }

    let buckets = Buckets::new(ingredients);

    let primary = buckets
        .proteins
        .first()
        .or(buckets.main_vegetables.first())
        .copied()
        .or(ingredients.first());

    let secondary = if !buckets.proteins.is_empty() && !buckets.main_vegetables.is_empty() {
        format!(" and {}", buckets.main_vegetables[0].name)
    } else if let Some(second) = buckets.main_vegetables.get(1) {
        format!(" and {}", second.name)
    } else if let Some(herb) = buckets
        .herbs
        .iter()
        .find(|herb| primary.map(|p| p.id != herb.id).unwrap_or(true))
    {
        format!(" with {}", herb.name)
    } else {
        String::new()
    };

    let raw = format!(
        "{}{}{}{} {}",
        flavor.map(|f| format!("{} ", f.name())).unwrap_or_default(),
        cuisine.map(|c| format!("{} ", c.name())).unwrap_or_default(),
        primary.map(|p| p.name.as_str()).unwrap_or_default(),
        secondary,
        dish_type(ingredients, cuisine),
    );

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First matching rule wins.
pub fn dish_type(ingredients: &[Ingredient], cuisine: Option<Cuisine>) -> &'static str {
    let buckets = Buckets::new(ingredients);

    if cuisine == Some(Cuisine::Italian) && buckets.has("pasta") {
        "Pasta"
    } else if cuisine == Some(Cuisine::Asian) && buckets.has("rice") {
        "Stir-Fry"
    } else if cuisine == Some(Cuisine::Mexican) && buckets.has("rice") {
        "Burrito Bowl"
    } else if cuisine == Some(Cuisine::Mediterranean) && buckets.has("quinoa") {
        "Grain Bowl"
    } else if cuisine == Some(Cuisine::American) && buckets.has("potato") {
        "Skillet"
    } else if !buckets.proteins.is_empty() && buckets.vegetables.len() > 2 {
        "Bowl"
    } else if buckets.has("bread") {
        "Sandwich"
    } else {
        "Dish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ingredient;

    fn pick(ids: &[&str]) -> Vec<Ingredient> {
        ids.iter()
            .map(|id| ingredient(id).expect("catalog id"))
            .collect()
    }

    #[test]
    fn custom_recipe_only_when_nothing_is_chosen() {
        assert_eq!(title(&[], None, None), CUSTOM_TITLE);
        assert_eq!(title(&[], Some(FlavorProfile::Sweet), None), "Sweet Dish");
        assert_eq!(title(&[], None, Some(Cuisine::Asian)), "Asian Dish");
    }

    #[test]
    fn protein_leads_and_vegetable_follows() {
        let ingredients = pick(&["broccoli", "rice", "chicken"]);
        assert_eq!(
            title(&ingredients, Some(FlavorProfile::Savory), Some(Cuisine::Asian)),
            "Savory Asian Chicken and Broccoli Stir-Fry"
        );
    }

    #[test]
    fn two_vegetables_without_protein() {
        let ingredients = pick(&["spinach", "potato", "cheese"]);
        assert_eq!(
            title(&ingredients, None, Some(Cuisine::American)),
            "American Spinach and Potato Skillet"
        );
    }

    #[test]
    fn herb_is_never_paired_with_itself() {
        let ingredients = pick(&["basil"]);
        assert_eq!(title(&ingredients, None, None), "Basil Dish");

        let ingredients = pick(&["basil", "thyme"]);
        assert_eq!(title(&ingredients, None, None), "Basil with Thyme Dish");
    }

    #[test]
    fn protein_with_herb() {
        let ingredients = pick(&["fish", "oregano", "bread"]);
        assert_eq!(
            title(&ingredients, Some(FlavorProfile::Tangy), None),
            "Tangy Fish with Oregano Sandwich"
        );
    }

    #[test]
    fn dish_type_follows_rule_order() {
        let bowl = pick(&["beef", "carrot", "onion", "garlic", "bread"]);
        assert_eq!(dish_type(&bowl, None), "Bowl");
        assert_eq!(dish_type(&pick(&["bread", "cheese"]), None), "Sandwich");
        assert_eq!(dish_type(&pick(&["pasta"]), Some(Cuisine::Mexican)), "Dish");
        assert_eq!(dish_type(&pick(&["rice"]), Some(Cuisine::Mexican)), "Burrito Bowl");
        assert_eq!(
            dish_type(&pick(&["quinoa"]), Some(Cuisine::Mediterranean)),
            "Grain Bowl"
        );
    }
}
