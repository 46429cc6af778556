//! Data models for Hackdesk

mod hackathon;
mod participant;
mod records;

pub use hackathon::*;
pub use participant::*;
pub use records::*;
