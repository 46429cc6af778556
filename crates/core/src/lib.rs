//! Hackdesk Core Library
//!
//! Hackathon creation wizard, sub-record editors and the meal distribution
//! tracker. Everything here is in-memory; saving and displaying is left to
//! the caller.

pub mod collection;
pub mod error;
pub mod invariants;
pub mod models;
pub mod notice;
pub mod roster;
pub mod tracker;
pub mod validation;
pub mod wizard;

pub use collection::{CollectionEditor, Record, RecordId};
pub use error::{Error, Result};
pub use models::*;
pub use notice::{Notice, NoticeLevel};
pub use tracker::{MealStats, MealToggled, MealTracker, Search};
pub use validation::{DraftField, DraftWarning, ValidationError};
pub use wizard::{Finalized, WizardEngine, WizardSnapshot, WizardStep};
