use super::{join_names, Buckets};
use crate::types::{Cuisine, FlavorProfile, Ingredient};

pub fn instructions(
    ingredients: &[Ingredient],
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
) -> Vec<String> {
    let buckets = Buckets::new(ingredients);
    let mut steps = Vec::new();

    if !buckets.vegetables.is_empty() {
        steps.push(format!(
            "Wash and chop the {} into bite-sized pieces.",
            join_names(&buckets.vegetables)
        ));
    }

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Pat the {} dry and season with salt and pepper.",
            join_names(&buckets.proteins)
        ));
    }

    match cuisine {
        Some(Cuisine::Italian) => italian(&buckets, &mut steps),
        Some(Cuisine::Mexican) => mexican(&buckets, &mut steps),
        Some(Cuisine::Asian) => asian(&buckets, &mut steps),
        Some(Cuisine::Mediterranean) => mediterranean(&buckets, &mut steps),
        Some(Cuisine::American) => american(&buckets, &mut steps),
        None => generic(&buckets, &mut steps),
    }

    if let Some(flavor) = flavor {
        let sentence = flavor_step(flavor).to_string();
        match flavor {
            FlavorProfile::Fresh => steps.push(sentence),
            _ => {
                let midpoint = steps.len() / 2;
                steps.insert(midpoint, sentence);
            }
        }
    }

    steps
}

fn flavor_step(flavor: FlavorProfile) -> &'static str {
    match flavor {
        FlavorProfile::Spicy => "Add chili flakes or a chopped fresh chili to build the heat.",
        FlavorProfile::Sweet => {
            "Stir in a teaspoon of honey to round out the dish with gentle sweetness."
        }
        FlavorProfile::Savory => {
            "Add a splash of soy sauce or a knob of butter to deepen the savory notes."
        }
        FlavorProfile::Tangy => "Brighten the dish with a squeeze of lemon or a splash of vinegar.",
        FlavorProfile::Fresh => {
            "Garnish with fresh herbs and a squeeze of lemon just before serving."
        }
    }
}

fn others<'a>(buckets: &Buckets<'a>, skip: &[&str]) -> Vec<&'a Ingredient> {
    buckets
        .vegetables
        .iter()
        .filter(|v| !skip.contains(&v.id.as_str()))
        .copied()
        .collect()
}

fn italian(buckets: &Buckets<'_>, steps: &mut Vec<String>) {
    let has_pasta = buckets.has("pasta");

    if has_pasta {
        steps.push(
            "Bring a large pot of salted water to a boil and cook the pasta until al dente."
                .to_string(),
        );
    }

    if buckets.has("garlic") {
        steps.push(
            "Heat olive oil in a large pan over medium heat and sauté the garlic until fragrant."
                .to_string(),
        );
    } else {
        steps.push("Heat olive oil in a large pan over medium heat.".to_string());
    }

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Add the {} and cook until golden on all sides.",
            join_names(&buckets.proteins)
        ));
    }

    if buckets.has("tomato") {
        steps.push("Stir in the tomato and simmer until it breaks down into a sauce.".to_string());
    }

    let rest = others(buckets, &["tomato", "garlic"]);
    if !rest.is_empty() {
        steps.push(format!("Add the {} and cook until tender.", join_names(&rest)));
    }

    if has_pasta {
        steps.push(
            "Drain the pasta, keeping a splash of the cooking water, and toss it with the sauce."
                .to_string(),
        );
    } else {
        steps.push("Let everything simmer together for a few minutes.".to_string());
    }

    if buckets.has("cheese") {
        steps.push("Finish with a generous handful of grated cheese.".to_string());
    }

    if !buckets.herbs.is_empty() {
        steps.push(format!(
            "Tear in the {} just before serving.",
            join_names(&buckets.herbs)
        ));
    }
}

fn mexican(buckets: &Buckets<'_>, steps: &mut Vec<String>) {
    if buckets.has("rice") {
        steps.push(
            "Cook the rice with a spoonful of tomato paste and a pinch of salt until fluffy."
                .to_string(),
        );
    }

    let toasted: Vec<&Ingredient> = ["cumin", "paprika"]
        .iter()
        .filter_map(|id| buckets.find(id))
        .collect();
    if !toasted.is_empty() {
        steps.push(format!(
            "Toast the {} in a dry skillet until fragrant.",
            join_names(&toasted)
        ));
    }

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Sear the {} in a hot skillet with chili powder until cooked through.",
            join_names(&buckets.proteins)
        ));
    }

    if !buckets.vegetables.is_empty() {
        steps.push(format!(
            "Add the {} and sauté until softened and lightly charred.",
            join_names(&buckets.vegetables)
        ));
    }

    if buckets.has("cheese") {
        steps.push("Sprinkle with cheese and let it melt.".to_string());
    }

    steps.push("Serve warm with lime wedges and fresh salsa.".to_string());
}

fn asian(buckets: &Buckets<'_>, steps: &mut Vec<String>) {
    let has_rice = buckets.has("rice");

    if has_rice {
        steps.push("Rinse the rice and steam it until tender.".to_string());
    }

    steps.push("Heat a splash of oil in a wok over high heat.".to_string());

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Stir-fry the {} until browned, then push to the side of the wok.",
            join_names(&buckets.proteins)
        ));
    }

    if !buckets.vegetables.is_empty() {
        steps.push(format!(
            "Add the {} and stir-fry for 3-4 minutes until crisp-tender.",
            join_names(&buckets.vegetables)
        ));
    }

    steps.push(
        "Season with soy sauce, fresh ginger, and a drizzle of sesame oil, tossing to coat."
            .to_string(),
    );

    if has_rice {
        steps.push("Serve immediately over the rice.".to_string());
    } else {
        steps.push("Serve immediately.".to_string());
    }
}

fn mediterranean(buckets: &Buckets<'_>, steps: &mut Vec<String>) {
    if buckets.has("quinoa") {
        steps.push("Rinse the quinoa and simmer it in salted water for 15 minutes.".to_string());
    }

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Marinate the {} in olive oil, lemon juice, and oregano, then grill until done.",
            join_names(&buckets.proteins)
        ));
    }

    if !buckets.vegetables.is_empty() {
        steps.push(format!(
            "Toss the {} with olive oil and roast at 200°C (400°F) for 20-25 minutes.",
            join_names(&buckets.vegetables)
        ));
    }

    if buckets.has("yogurt") {
        steps.push("Whisk the yogurt with lemon and a pinch of salt for a quick sauce.".to_string());
    }

    steps.push("Arrange everything on a platter and finish with a drizzle of olive oil.".to_string());
}

fn american(buckets: &Buckets<'_>, steps: &mut Vec<String>) {
    if buckets.has("potato") {
        steps.push("Cut the potatoes into wedges and roast until golden and crispy.".to_string());
    }

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Grill or pan-fry the {} over medium-high heat until cooked through.",
            join_names(&buckets.proteins)
        ));
    }

    let rest = others(buckets, &["potato"]);
    if !rest.is_empty() {
        let fat = if buckets.has("butter") {
            "butter"
        } else {
            "a little oil"
        };
        steps.push(format!(
            "Sauté the {} in {} until tender.",
            join_names(&rest),
            fat
        ));
    }

    if buckets.has("bread") {
        steps.push("Toast the bread and use it to build your plate.".to_string());
    }

    if buckets.has("cheese") {
        steps.push("Top with cheese and let it melt.".to_string());
    }

    steps.push("Serve hot with your favorite condiments.".to_string());
}

fn generic(buckets: &Buckets<'_>, steps: &mut Vec<String>) {
    steps.push("Heat a tablespoon of oil in a large pan over medium heat.".to_string());

    if !buckets.proteins.is_empty() {
        steps.push(format!(
            "Cook the {} until browned and cooked through.",
            join_names(&buckets.proteins)
        ));
    }

    if !buckets.vegetables.is_empty() {
        steps.push(format!(
            "Add the {} and cook until tender.",
            join_names(&buckets.vegetables)
        ));
    }

    if !buckets.grains.is_empty() {
        steps.push(format!(
            "Prepare the {} according to the package instructions.",
            join_names(&buckets.grains)
        ));
    }

    steps.push("Season to taste with salt and pepper, then serve.".to_string());
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
    fn prep_steps_come_first() {
        let steps = instructions(&pick(&["chicken", "carrot", "onion"]), None, None);
        assert_eq!(steps[0], "Wash and chop the carrot and onion into bite-sized pieces.");
        assert_eq!(steps[1], "Pat the chicken dry and season with salt and pepper.");
        assert_eq!(
            steps.last().map(String::as_str),
            Some("Season to taste with salt and pepper, then serve.")
        );
    }

    #[test]
    fn italian_pasta_script() {
        let steps = instructions(&pick(&["pasta", "tomato", "basil"]), None, Some(Cuisine::Italian));
        assert_eq!(
            steps,
            vec![
                "Wash and chop the tomato into bite-sized pieces.",
                "Bring a large pot of salted water to a boil and cook the pasta until al dente.",
                "Heat olive oil in a large pan over medium heat.",
                "Stir in the tomato and simmer until it breaks down into a sauce.",
                "Drain the pasta, keeping a splash of the cooking water, and toss it with the sauce.",
                "Tear in the basil just before serving.",
            ]
        );
    }

    #[test]
    fn flavor_sentence_goes_to_the_midpoint() {
        let ingredients = pick(&["tofu", "broccoli", "rice"]);
        let plain = instructions(&ingredients, None, Some(Cuisine::Asian));
        let spicy = instructions(&ingredients, Some(FlavorProfile::Spicy), Some(Cuisine::Asian));

        assert_eq!(spicy.len(), plain.len() + 1);
        let midpoint = plain.len() / 2;
        assert_eq!(spicy[midpoint], flavor_step(FlavorProfile::Spicy));
        assert_eq!(&spicy[..midpoint], &plain[..midpoint]);
        assert_eq!(&spicy[midpoint + 1..], &plain[midpoint..]);
    }

    #[test]
    fn fresh_sentence_is_appended() {
        let ingredients = pick(&["fish", "spinach"]);
        let steps = instructions(&ingredients, Some(FlavorProfile::Fresh), Some(Cuisine::Mediterranean));
        assert_eq!(
            steps.last().map(String::as_str),
            Some(flavor_step(FlavorProfile::Fresh))
        );
    }

    #[test]
    fn every_cuisine_produces_a_script_for_an_empty_pantry() {
        for cuisine in Cuisine::ALL {
            assert!(!instructions(&[], None, Some(cuisine)).is_empty());
        }
        assert_eq!(
            instructions(&[], Some(FlavorProfile::Sweet), None),
            vec![
                "Heat a tablespoon of oil in a large pan over medium heat.",
                flavor_step(FlavorProfile::Sweet),
                "Season to taste with salt and pepper, then serve.",
            ]
        );
    }

    #[test]
    fn american_script_uses_butter_when_available() {
        let steps = instructions(&pick(&["potato", "onion", "butter"]), None, Some(Cuisine::American));
        assert!(steps.contains(&"Sauté the onion in butter until tender.".to_string()));
        assert!(steps[1].starts_with("Cut the potatoes"));
    }
}
