use crate::wizard::WizardStep;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitchenError {
    #[error("Unknown flavor profile: {0}")]
    UnknownFlavor(String),

    #[error("Unknown cuisine: {0}")]
    UnknownCuisine(String),

    #[error("Unknown ingredient id: {0}")]
    UnknownIngredient(String),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Expected the {expected} step but the wizard is on the {actual} step")]
    OutOfStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Already on the first step")]
    AtFirstStep,
}

impl KitchenError {
    pub fn user_message(&self) -> &'static str {
        match self {
            KitchenError::UnknownFlavor(_) => "That flavor isn't on the menu.",
            KitchenError::UnknownCuisine(_) => "That cuisine isn't on the menu.",
            KitchenError::UnknownIngredient(_) => "That ingredient isn't in the pantry.",
            KitchenError::Wizard(e) => e.user_message(),
        }
    }
}

impl WizardError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WizardError::OutOfStep { .. } => "That action isn't available on this step.",
            WizardError::AtFirstStep => "You're already at the first step.",
        }
    }
}

pub type KitchenResult<T> = Result<T, KitchenError>;
