//! View models for the console
//!
//! Turn engine snapshots into display rows. Nothing here mutates state.

mod meals;
mod wizard;

pub use meals::{meal_rows, render_rows, StatsView};
pub use wizard::WizardView;
