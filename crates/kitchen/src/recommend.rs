use crate::tables::{cuisine_recommendations, flavor_recommendations};
use crate::types::{Cuisine, FlavorProfile, Ingredient};
use tracing::debug;

/// Marks catalog entries suggested for the flavor and cuisine.
///
/// The result has the same length and order as `catalog`. Matching entries are
/// copied with `recommended` set; everything else passes through untouched.
pub fn recommend(
    flavor: Option<FlavorProfile>,
    cuisine: Option<Cuisine>,
    catalog: &[Ingredient],
) -> Vec<Ingredient> {
    if flavor.is_none() && cuisine.is_none() {
        return catalog.to_vec();
    }

    let flavor_ids = flavor.map(flavor_recommendations).unwrap_or_default();
    let cuisine_ids = cuisine.map(cuisine_recommendations).unwrap_or_default();

    let annotated: Vec<Ingredient> = catalog
        .iter()
        .map(|ing| {
            let id = ing.id.as_str();
            if flavor_ids.contains(&id) || cuisine_ids.contains(&id) {
                Ingredient {
                    recommended: true,
                    ..ing.clone()
                }
            } else {
                ing.clone()
            }
        })
        .collect();

    debug!(
        ?flavor,
        ?cuisine,
        recommended = annotated.iter().filter(|i| i.recommended).count(),
        "annotated catalog"
    );

    annotated
}

pub fn recommended_only(annotated: &[Ingredient]) -> Vec<Ingredient> {
    annotated.iter().filter(|i| i.recommended).cloned().collect()
}
