use super::Buckets;
use crate::types::{Cuisine, FlavorProfile, Ingredient};

const GENERAL_TIP: &str = "Taste as you go and adjust the seasoning to your liking.";

pub fn tips(
    ingredients: &[Ingredient],
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
) -> Vec<String> {
    let buckets = Buckets::new(ingredients);
    let mut tips = vec![GENERAL_TIP.to_string()];

    if !buckets.proteins.is_empty() {
        tips.push(
            "Make sure meat, fish, and eggs reach a safe internal temperature before serving."
                .to_string(),
        );
    }
    if buckets.has("pasta") {
        tips.push(
            "Save a cup of the starchy pasta water; it helps the sauce cling to the pasta."
                .to_string(),
        );
    }
    if buckets.has("rice") {
        tips.push("Rinse the rice until the water runs clear for fluffier grains.".to_string());
    }
    if let Some(flavor) = flavor {
        tips.push(flavor_tip(flavor).to_string());
    }
    if let Some(cuisine) = cuisine {
        tips.push(cuisine_tip(cuisine).to_string());
    }

    tips
}

fn flavor_tip(flavor: FlavorProfile) -> &'static str {
    match flavor {
        FlavorProfile::Spicy => {
            "Build the heat gradually; you can always add more chili, but you can't take it away."
        }
        FlavorProfile::Sweet => {
            "Balance sweetness with a pinch of salt or a splash of acid so the dish doesn't taste flat."
        }
        FlavorProfile::Savory => {
            "Let the pan get properly hot before adding ingredients to develop deep browned flavors."
        }
        FlavorProfile::Tangy => {
            "Add acidic ingredients near the end of cooking to keep their brightness."
        }
        FlavorProfile::Fresh => {
            "Use the freshest produce you can find and keep cooking times short to preserve its crunch."
        }
    }
}

fn cuisine_tip(cuisine: Cuisine) -> &'static str {
    match cuisine {
        Cuisine::Italian => "Finish with a drizzle of good extra-virgin olive oil.",
        Cuisine::Mexican => "Warm tortillas in a dry skillet for a few seconds per side before serving.",
        Cuisine::Asian => "Prep everything before you start; stir-frying moves fast once the wok is hot.",
        Cuisine::Mediterranean => {
            "A squeeze of lemon and a handful of fresh herbs brighten almost any Mediterranean plate."
        }
        Cuisine::American => "Let grilled or roasted meat rest for five minutes so the juices settle.",
    }
}
