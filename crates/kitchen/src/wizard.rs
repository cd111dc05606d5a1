use crate::catalog;
use crate::error::WizardError;
use crate::generator;
use crate::recommend::{recommend, recommended_only};
use crate::selection::SelectedIngredients;
use crate::types::{Cuisine, FlavorProfile, Ingredient, Recipe};
use rand::Rng;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Flavor,
    Cuisine,
    Ingredients,
    Recipe,
}

const TRANSITIONS: &[(WizardStep, WizardStep)] = &[
    (WizardStep::Flavor, WizardStep::Cuisine),
    (WizardStep::Cuisine, WizardStep::Ingredients),
    (WizardStep::Ingredients, WizardStep::Recipe),
];

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Flavor,
        WizardStep::Cuisine,
        WizardStep::Ingredients,
        WizardStep::Recipe,
    ];

    pub fn next(self) -> Option<Self> {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|&(_, to)| to)
    }

    pub fn previous(self) -> Option<Self> {
        TRANSITIONS
            .iter()
            .find(|(_, to)| *to == self)
            .map(|&(from, _)| from)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Flavor => "Flavor",
            WizardStep::Cuisine => "Cuisine",
            WizardStep::Ingredients => "Ingredients",
            WizardStep::Recipe => "Recipe",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

/// Short acknowledgement emitted on every forward transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub selected_flavor: Option<FlavorProfile>,
    pub selected_cuisine: Option<Cuisine>,
    pub selected_ingredients: SelectedIngredients,
    pub recipe: Option<Recipe>,
}

/// Linear flavor → cuisine → ingredients → recipe flow.
///
/// Going back keeps the flavor, cuisine and ingredient selections so they are
/// pre-filled when the user moves forward again. Only the generated recipe is
/// dropped.
#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    catalog: Vec<Ingredient>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_catalog(catalog::ingredients())
    }

    pub fn with_catalog(catalog: Vec<Ingredient>) -> Self {
        Self {
            state: WizardState::default(),
            catalog,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.state.recipe.as_ref()
    }

    pub fn selection(&self) -> &SelectedIngredients {
        &self.state.selected_ingredients
    }

    pub fn available_cuisines(&self) -> Vec<Cuisine> {
        catalog::cuisines_for(self.state.selected_flavor)
    }

    pub fn annotated_catalog(&self) -> Vec<Ingredient> {
        recommend(
            self.state.selected_flavor,
            self.state.selected_cuisine,
            &self.catalog,
        )
    }

    pub fn choose_flavor(&mut self, flavor: FlavorProfile) -> Result<Notice, WizardError> {
        self.expect_step(WizardStep::Flavor)?;
        self.state.selected_flavor = Some(flavor);
        self.advance()?;
        Ok(Notice::new(
            "Flavor selected",
            format!("{} it is. Now pick a cuisine.", flavor.name()),
        ))
    }

    pub fn choose_cuisine(&mut self, cuisine: Cuisine) -> Result<Notice, WizardError> {
        self.expect_step(WizardStep::Cuisine)?;
        self.state.selected_cuisine = Some(cuisine);
        self.advance()?;
        Ok(Notice::new(
            "Cuisine selected",
            format!("Choose the ingredients for your {} dish.", cuisine.name()),
        ))
    }

    /// Returns true if the ingredient is now selected.
    pub fn toggle_ingredient(&mut self, ingredient: &Ingredient) -> Result<bool, WizardError> {
        self.expect_step(WizardStep::Ingredients)?;
        Ok(self.state.selected_ingredients.toggle(ingredient))
    }

    /// Adds every recommended ingredient that isn't selected yet. Returns how many were added.
    pub fn select_recommended(&mut self) -> Result<usize, WizardError> {
        self.expect_step(WizardStep::Ingredients)?;
        let mut added = 0;
        for ingredient in recommended_only(&self.annotated_catalog()) {
            if self.state.selected_ingredients.select(&ingredient) {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn clear_ingredients(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Ingredients)?;
        self.state.selected_ingredients.clear();
        Ok(())
    }

    pub fn submit_ingredients<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Notice, WizardError> {
        self.expect_step(WizardStep::Ingredients)?;
        let recipe = generator::generate(
            self.state.selected_ingredients.as_slice(),
            self.state.selected_flavor,
            self.state.selected_cuisine,
            rng,
        );
        self.state.recipe = Some(recipe);
        self.advance()?;
        Ok(Notice::new(
            "Recipe generated!",
            "Your recipe has been created based on your ingredients.",
        ))
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let previous = self
            .state
            .current_step
            .previous()
            .ok_or(WizardError::AtFirstStep)?;

        if self.state.current_step == WizardStep::Recipe {
            self.state.recipe = None;
        }

        info!(from = %self.state.current_step, to = %previous, "wizard back");
        self.state.current_step = previous;
        Ok(previous)
    }

    pub fn reset(&mut self) {
        info!("wizard reset");
        self.state = WizardState::default();
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.state.current_step == expected {
            Ok(())
        } else {
            Err(WizardError::OutOfStep {
                expected,
                actual: self.state.current_step,
            })
        }
    }

    fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let current = self.state.current_step;
        let next = current.next().ok_or(WizardError::OutOfStep {
            expected: current,
            actual: current,
        })?;
        info!(from = %current, to = %next, "wizard forward");
        self.state.current_step = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ingredient;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at_ingredients(flavor: FlavorProfile, cuisine: Cuisine) -> Wizard {
        let mut wizard = Wizard::new();
        wizard.choose_flavor(flavor).expect("flavor step");
        wizard.choose_cuisine(cuisine).expect("cuisine step");
        wizard
    }

    #[test]
    fn transition_table_is_linear() {
        assert_eq!(WizardStep::Flavor.previous(), None);
        assert_eq!(WizardStep::Recipe.next(), None);
        for pair in WizardStep::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
    }

    #[test]
    fn walks_forward_and_stores_selections() {
        let mut wizard = at_ingredients(FlavorProfile::Fresh, Cuisine::Italian);
        assert_eq!(wizard.step(), WizardStep::Ingredients);

        for id in ["pasta", "tomato", "basil"] {
            let added = wizard
                .toggle_ingredient(&ingredient(id).expect("catalog id"))
                .expect("ingredients step");
            assert!(added);
        }

        let notice = wizard
            .submit_ingredients(&mut StdRng::seed_from_u64(9))
            .expect("submit");
        assert_eq!(notice.title, "Recipe generated!");
        assert_eq!(wizard.step(), WizardStep::Recipe);

        let recipe = wizard.recipe().expect("recipe stored");
        assert!(recipe.title.starts_with("Fresh Italian Pasta"));
        assert_eq!(wizard.state().selected_flavor, Some(FlavorProfile::Fresh));
        assert_eq!(wizard.state().selected_cuisine, Some(Cuisine::Italian));
    }

    #[test]
    fn every_forward_transition_has_a_notice() {
        let mut wizard = Wizard::new();
        let flavor = wizard.choose_flavor(FlavorProfile::Spicy).expect("flavor");
        let cuisine = wizard.choose_cuisine(Cuisine::Mexican).expect("cuisine");
        let recipe = wizard
            .submit_ingredients(&mut StdRng::seed_from_u64(1))
            .expect("recipe");

        assert!(flavor.description.contains("Spicy"));
        assert!(cuisine.description.contains("Mexican"));
        assert_eq!(
            recipe.description,
            "Your recipe has been created based on your ingredients."
        );
    }

    #[test]
    fn rejects_out_of_step_calls() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.choose_cuisine(Cuisine::Asian),
            Err(WizardError::OutOfStep {
                expected: WizardStep::Cuisine,
                actual: WizardStep::Flavor,
            })
        );
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));
        assert!(wizard
            .toggle_ingredient(&ingredient("rice").expect("rice"))
            .is_err());
        assert_eq!(wizard.step(), WizardStep::Flavor);
    }

    #[test]
    fn back_then_forward_reproduces_annotations() {
        let mut wizard = at_ingredients(FlavorProfile::Spicy, Cuisine::Mexican);
        let before = wizard.annotated_catalog();

        assert_eq!(wizard.back(), Ok(WizardStep::Cuisine));
        wizard.choose_cuisine(Cuisine::Mexican).expect("cuisine again");

        assert_eq!(wizard.annotated_catalog(), before);
    }

    #[test]
    fn back_from_recipe_keeps_selection_and_drops_recipe() {
        let mut wizard = at_ingredients(FlavorProfile::Savory, Cuisine::American);
        wizard
            .toggle_ingredient(&ingredient("beef").expect("beef"))
            .expect("toggle");
        wizard
            .submit_ingredients(&mut StdRng::seed_from_u64(4))
            .expect("submit");

        assert_eq!(wizard.back(), Ok(WizardStep::Ingredients));
        assert!(wizard.recipe().is_none());
        assert!(wizard.selection().contains("beef"));
    }

    #[test]
    fn select_recommended_adds_only_missing_items() {
        let mut wizard = at_ingredients(FlavorProfile::Sweet, Cuisine::Italian);
        wizard
            .toggle_ingredient(&ingredient("pasta").expect("pasta"))
            .expect("toggle");

        let added = wizard.select_recommended().expect("ingredients step");
        assert_eq!(added, 6);
        let ids: Vec<&str> = wizard.selection().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["pasta", "carrot", "tomato", "bread", "milk", "oregano", "basil"]
        );
    }

    #[test]
    fn cuisines_follow_the_chosen_flavor() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.available_cuisines().len(), 5);
        wizard.choose_flavor(FlavorProfile::Spicy).expect("flavor");
        assert_eq!(
            wizard.available_cuisines(),
            vec![Cuisine::Mexican, Cuisine::Asian]
        );
    }

    #[test]
    fn reset_starts_a_fresh_session() {
        let mut wizard = at_ingredients(FlavorProfile::Tangy, Cuisine::Asian);
        wizard
            .toggle_ingredient(&ingredient("tofu").expect("tofu"))
            .expect("toggle");
        wizard.reset();
        assert_eq!(wizard.state(), &WizardState::default());
    }
}
