use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Resize(_, _) => Ok(false),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        match self.wizard.step() {
            WizardStep::Flavor | WizardStep::Cuisine => self.handle_choice_key(key),
            WizardStep::Ingredients => self.handle_ingredients_key(key),
            WizardStep::Recipe => self.handle_recipe_key(key),
        }

        Ok(self.should_quit)
    }

    fn handle_choice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => match self.wizard.step() {
                WizardStep::Flavor => self.choose_highlighted_flavor(),
                WizardStep::Cuisine => self.choose_highlighted_cuisine(),
                _ => {}
            },
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_ingredients_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(' ') => self.toggle_highlighted(),
            KeyCode::Char('r') => self.select_recommended(),
            KeyCode::Char('c') => self.clear_selection(),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_recipe_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_recipe(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_recipe(1),
            KeyCode::PageUp => self.scroll_recipe(-10),
            KeyCode::PageDown => self.scroll_recipe(10),
            KeyCode::Char('n') => self.start_over(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }
}
