pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Flavor & Cuisine:
  ↑ / ↓  k / j  Move
  Enter         Choose
  Esc           Back (quit on the first step)

Ingredients:
  ↑ / ↓  k / j  Move
  Space         Select / deselect
  r             Add all recommended (*)
  c             Clear selection
  Enter         Generate recipe
  Esc           Back

Recipe:
  ↑ / ↓  k / j  Scroll
  n             Start over
  Esc           Back to ingredients

General:
  ?             Toggle this help
  Ctrl + Q      Quit
"#
        .to_string()
    }

    pub fn hint(&self, step: recipe_wizard_kitchen::WizardStep) -> &'static str {
        use recipe_wizard_kitchen::WizardStep;

        match step {
            WizardStep::Flavor => "[↑↓] move  [Enter] choose  [Esc] quit  [?] help",
            WizardStep::Cuisine => "[↑↓] move  [Enter] choose  [Esc] back  [?] help",
            WizardStep::Ingredients => {
                "[↑↓] move  [Space] toggle  [r] recommended  [c] clear  [Enter] generate  [Esc] back"
            }
            WizardStep::Recipe => "[↑↓] scroll  [n] start over  [Esc] back  [?] help",
        }
    }
}
