use crate::tables::category_of;
use crate::types::Category;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn amount_candidates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Protein => &["200g", "300g", "400g", "1 lb"],
        Category::Vegetable => &["1 medium", "2 medium", "1 cup", "2 cups", "1 handful"],
        Category::Grain => &["1 cup", "2 cups", "200g", "250g"],
        Category::Dairy => &["2 tbsp", "1/2 cup", "1 cup", "50g"],
        Category::Spice => &["1 pinch", "1/2 tsp", "1 tsp", "1 tbsp", "to taste"],
    }
}

/// Picks a unit for the ingredient uniformly from its category's candidates.
pub fn amount_for<R: Rng + ?Sized>(id: &str, rng: &mut R) -> String {
    amount_candidates(category_of(id))
        .choose(rng)
        .copied()
        .unwrap_or("to taste")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn unknown_ids_use_vegetable_amounts() {
        let mut rng = StdRng::seed_from_u64(11);
        let amount = amount_for("tortilla", &mut rng);
        assert!(amount_candidates(Category::Vegetable).contains(&amount.as_str()));
    }

    #[test]
    fn draws_cover_the_candidate_list() {
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: HashSet<String> = (0..200).map(|_| amount_for("salt", &mut rng)).collect();
        assert_eq!(seen.len(), amount_candidates(Category::Spice).len());
    }
}
