use crate::types::{Cuisine, FlavorProfile, Ingredient};

pub fn description(
    ingredients: &[Ingredient],
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
) -> String {
    let names: Vec<String> = ingredients
        .iter()
        .take(3)
        .map(|ing| ing.name.to_lowercase())
        .collect();

    let mut style: Vec<&str> = Vec::new();
    if let Some(flavor) = flavor {
        style.push(flavor.id());
    }
    if let Some(cuisine) = cuisine {
        style.push(cuisine.name());
    }

    match names.as_slice() {
        [] => format!(
            "{} you can put together with pantry staples.",
            with_article(&style, "dish")
        ),
        [a] => format!("{} that lets the {} shine.", with_article(&style, "recipe"), a),
        [a, b] => format!("{} pairing {} with {}.", with_article(&style, "recipe"), a, b),
        [a, b, c, ..] => format!(
            "{} featuring {}, {}, and {}.",
            with_article(&style, "recipe"),
            a,
            b,
            c
        ),
    }
}

fn with_article(style: &[&str], noun: &str) -> String {
    let phrase = style
        .iter()
        .copied()
        .chain(std::iter::once(noun))
        .collect::<Vec<_>>()
        .join(" ");
    let article = match phrase.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "An",
        _ => "A",
    };
    format!("{article} {phrase}")
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
    fn template_depends_on_ingredient_count() {
        assert_eq!(
            description(&[], None, None),
            "A dish you can put together with pantry staples."
        );
        assert_eq!(
            description(&pick(&["tofu"]), None, None),
            "A recipe that lets the tofu shine."
        );
        assert_eq!(
            description(&pick(&["tofu", "bellpepper"]), None, None),
            "A recipe pairing tofu with bell pepper."
        );
        assert_eq!(
            description(&pick(&["tofu", "bellpepper", "rice", "garlic"]), None, None),
            "A recipe featuring tofu, bell pepper, and rice."
        );
    }

    #[test]
    fn flavor_and_cuisine_prefix_the_noun() {
        assert_eq!(
            description(&[], Some(FlavorProfile::Spicy), Some(Cuisine::Mexican)),
            "A spicy Mexican dish you can put together with pantry staples."
        );
        assert_eq!(
            description(&pick(&["pasta", "tomato", "basil"]), None, Some(Cuisine::Italian)),
            "An Italian recipe featuring pasta, tomato, and basil."
        );
    }
}
