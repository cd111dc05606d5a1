use super::*;

impl App {
    /// Ingredients in the order they are listed: grouped by category, catalog order within.
    pub(super) fn ordered_ingredients(&self) -> Vec<Ingredient> {
        group_by_category(&self.wizard.annotated_catalog())
            .into_iter()
            .flat_map(|group| group.items)
            .collect()
    }

    pub(super) fn cursor_len(&self) -> usize {
        match self.wizard.step() {
            WizardStep::Flavor => FlavorProfile::ALL.len(),
            WizardStep::Cuisine => self.wizard.available_cuisines().len(),
            WizardStep::Ingredients => self.ordered_ingredients().len(),
            WizardStep::Recipe => 0,
        }
    }

    pub(super) fn move_cursor(&mut self, delta: isize) {
        let len = self.cursor_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub(super) fn scroll_recipe(&mut self, delta: i16) {
        self.recipe_scroll = self
            .recipe_scroll
            .saturating_add_signed(delta)
            .min(self.recipe_max_scroll);
    }

    pub(super) fn choose_highlighted_flavor(&mut self) {
        let Some(&flavor) = FlavorProfile::ALL.get(self.cursor) else {
            return;
        };
        match self.wizard.choose_flavor(flavor) {
            Ok(notice) => self.after_forward(notice),
            Err(e) => self.report_error("Could not choose flavor", e),
        }
    }

    pub(super) fn choose_highlighted_cuisine(&mut self) {
        let Some(cuisine) = self.wizard.available_cuisines().get(self.cursor).copied() else {
            return;
        };
        match self.wizard.choose_cuisine(cuisine) {
            Ok(notice) => self.after_forward(notice),
            Err(e) => self.report_error("Could not choose cuisine", e),
        }
    }

    pub(super) fn toggle_highlighted(&mut self) {
        let Some(ingredient) = self.ordered_ingredients().into_iter().nth(self.cursor) else {
            return;
        };
        match self.wizard.toggle_ingredient(&ingredient) {
            Ok(selected) => {
                tracing::debug!(id = %ingredient.id, selected, "toggled ingredient");
                self.clear_error();
            }
            Err(e) => self.report_error("Could not toggle ingredient", e),
        }
    }

    pub(super) fn select_recommended(&mut self) {
        match self.wizard.select_recommended() {
            Ok(0) => {}
            Ok(added) => {
                self.clear_error();
                self.push_notice(
                    Notice {
                        title: "Recommended added".to_string(),
                        description: format!("Added {added} recommended ingredients."),
                    },
                    Utc::now(),
                );
            }
            Err(e) => self.report_error("Could not add recommended ingredients", e),
        }
    }

    pub(super) fn clear_selection(&mut self) {
        if let Err(e) = self.wizard.clear_ingredients() {
            self.report_error("Could not clear selection", e);
        }
    }

    pub(super) fn submit(&mut self) {
        if self.wizard.selection().is_empty() {
            self.last_error = Some(EMPTY_SELECTION.to_string());
            return;
        }
        match self.wizard.submit_ingredients(&mut self.rng) {
            Ok(notice) => self.after_forward(notice),
            Err(e) => self.report_error("Could not generate recipe", e),
        }
    }

    /// Esc on the first step quits.
    pub(super) fn go_back(&mut self) {
        match self.wizard.back() {
            Ok(_) => {
                self.clear_error();
                self.sync_cursor();
            }
            Err(WizardError::AtFirstStep) => self.should_quit = true,
            Err(e) => self.report_error("Could not go back", e),
        }
    }

    pub(super) fn start_over(&mut self) {
        self.wizard.reset();
        self.clear_error();
        self.sync_cursor();
    }

    pub fn expire_notices(&mut self, now: DateTime<Utc>) {
        let ttl = self.config.ui.notice_seconds;
        self.notices.retain(|toast| !toast.is_expired(now, ttl));
    }

    pub(super) fn push_notice(&mut self, notice: Notice, now: DateTime<Utc>) {
        self.notices.push_back(ToastNotice::new(notice, now));
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    fn after_forward(&mut self, notice: Notice) {
        tracing::info!(title = %notice.title, "{}", notice.description);
        self.push_notice(notice, Utc::now());
        self.clear_error();
        self.sync_cursor();
    }

    /// Puts the cursor back on the previous choice when a step is revisited.
    fn sync_cursor(&mut self) {
        let state = self.wizard.state();
        self.cursor = match self.wizard.step() {
            WizardStep::Flavor => state
                .selected_flavor
                .and_then(|f| FlavorProfile::ALL.iter().position(|&x| x == f))
                .unwrap_or(0),
            WizardStep::Cuisine => state
                .selected_cuisine
                .and_then(|c| self.wizard.available_cuisines().iter().position(|&x| x == c))
                .unwrap_or(0),
            WizardStep::Ingredients | WizardStep::Recipe => 0,
        };
        self.recipe_scroll = 0;
        self.recipe_max_scroll = 0;
    }
}
