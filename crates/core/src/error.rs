//! Error types for Hackdesk Core

use thiserror::Error;

use crate::validation::ValidationError;
use crate::wizard::WizardStep;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: expected the {expected} step, wizard is at {actual}")]
    InvalidTransition {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Roster parse error: {0}")]
    Roster(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
