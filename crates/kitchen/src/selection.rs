use crate::types::Ingredient;

/// Ingredients picked by the user: unique by id, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedIngredients {
    items: Vec<Ingredient>,
}

impl SelectedIngredients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the ingredient, or removes it if already selected. Returns true if it was added.
    pub fn toggle(&mut self, ingredient: &Ingredient) -> bool {
        if let Some(pos) = self.position(&ingredient.id) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(Self::stored(ingredient));
            true
        }
    }

    /// Adds the ingredient unless it is already selected.
    pub fn select(&mut self, ingredient: &Ingredient) -> bool {
        if self.contains(&ingredient.id) {
            return false;
        }
        self.items.push(Self::stored(ingredient));
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Ingredient] {
        &self.items
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    // The recommended flag belongs to the catalog view, not to the selection.
    fn stored(ingredient: &Ingredient) -> Ingredient {
        Ingredient {
            recommended: false,
            ..ingredient.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ingredient;

    fn ids(selection: &SelectedIngredients) -> Vec<&str> {
        selection.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn toggle_twice_restores_original_set() {
        let mut selection = SelectedIngredients::new();
        selection.toggle(&ingredient("pasta").expect("pasta"));
        let before = selection.clone();

        let tomato = ingredient("tomato").expect("tomato");
        assert!(selection.toggle(&tomato));
        assert!(!selection.toggle(&tomato));

        assert_eq!(selection, before);
    }

    #[test]
    fn keeps_insertion_order_and_uniqueness() {
        let mut selection = SelectedIngredients::new();
        for id in ["rice", "beef", "garlic"] {
            selection.toggle(&ingredient(id).expect("catalog id"));
        }
        assert!(!selection.select(&ingredient("beef").expect("beef")));
        assert_eq!(ids(&selection), vec!["rice", "beef", "garlic"]);

        selection.toggle(&ingredient("beef").expect("beef"));
        selection.toggle(&ingredient("beef").expect("beef"));
        assert_eq!(ids(&selection), vec!["rice", "garlic", "beef"]);
    }

    #[test]
    fn stores_ingredients_without_recommendation_flag() {
        let mut selection = SelectedIngredients::new();
        let mut basil = ingredient("basil").expect("basil");
        basil.recommended = true;
        selection.select(&basil);
        assert!(selection.iter().all(|i| !i.recommended));
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = SelectedIngredients::new();
        selection.select(&ingredient("milk").expect("milk"));
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }
}
