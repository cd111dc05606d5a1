use crate::keybinds::Keybinds;
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use recipe_wizard_kitchen::{
    catalog, FlavorProfile, Ingredient, KitchenError, Notice, Recipe, Wizard, WizardError,
    WizardStep,
};
use std::collections::VecDeque;

mod actions;
mod input;
mod render;
mod state;
mod types;

pub use state::App;
pub use types::{group_by_category, IngredientGroup, ToastNotice, MAX_NOTICES};

pub(crate) const EMPTY_SELECTION: &str = "Select at least one ingredient to generate a recipe.";

impl App {
    /// Shows the short user-facing message and logs the full error.
    pub(super) fn report_error(&mut self, context: &str, error: impl Into<KitchenError>) {
        let error = error.into();
        self.last_error = Some(error.user_message().to_string());
        tracing::warn!("{context}: {error}");
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
    }
}
