pub mod catalog;
pub mod error;
pub mod generator;
pub mod recommend;
pub mod selection;
pub mod tables;
pub mod types;
pub mod wizard;

pub use error::{KitchenError, KitchenResult, WizardError};
pub use generator::{generate, generate_random};
pub use recommend::{recommend, recommended_only};
pub use selection::SelectedIngredients;
pub use types::*;
pub use wizard::{Notice, Wizard, WizardState, WizardStep};
