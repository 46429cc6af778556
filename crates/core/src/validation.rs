//! Step validation and draft review
//!
//! Blocking checks (`check_*`) gate wizard transitions. `review` produces
//! non-blocking warnings about a draft that is otherwise submittable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{BasicInfo, HackathonDraft};
use crate::notice::Notice;
use crate::wizard::WizardStep;

/// Draft fields that must be filled in before a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Tagline,
    About,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Tagline => "Tagline",
            DraftField::About => "About",
        }
    }

    fn join(fields: &[DraftField]) -> String {
        fields
            .iter()
            .map(DraftField::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A required field was left empty; nothing was changed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields on the {step} step: {}", DraftField::join(.missing))]
pub struct ValidationError {
    pub step: WizardStep,
    pub missing: Vec<DraftField>,
}

impl ValidationError {
    pub fn notice(&self) -> Notice {
        Notice::error("Please fill in all required fields")
    }
}

/// Blank means empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Step 3 only requires a name
pub fn check_basic_info(info: &BasicInfo) -> std::result::Result<(), ValidationError> {
    if is_blank(&info.name) {
        return Err(ValidationError {
            step: WizardStep::BasicInfo,
            missing: vec![DraftField::Name],
        });
    }
    Ok(())
}

/// A draft can be submitted once name, tagline and about are filled in
pub fn check_submission(draft: &HackathonDraft) -> std::result::Result<(), ValidationError> {
    let missing: Vec<DraftField> = [
        (DraftField::Name, draft.basic_info.name.as_str()),
        (DraftField::Tagline, draft.details.tagline.as_str()),
        (DraftField::About, draft.details.about.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| is_blank(value))
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            step: WizardStep::Details,
            missing,
        })
    }
}

/// Parse the answer of the participation fee select
pub fn parse_fee_answer(answer: &str) -> Result<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" | "" => Ok(false),
        other => Err(Error::Parse(format!(
            "fee answer must be yes or no, got '{}'",
            other
        ))),
    }
}

/// Parse an optional count field. Empty means "not given".
pub fn parse_count(value: &str) -> Option<std::result::Result<u32, String>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.parse::<u32>().map_err(|_| value.to_string()))
}

/// Something odd about a draft that does not block submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DraftWarning {
    NotANumber { field: &'static str, value: String },
    TeamSizeInverted { min: u32, max: u32 },
    ApplicationWindowInverted,
    ApplicationClosesAfterBegin,
    DeadlineBeforeBegin,
}

impl fmt::Display for DraftWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftWarning::NotANumber { field, value } => {
                write!(f, "{} is not a number: '{}'", field, value)
            }
            DraftWarning::TeamSizeInverted { min, max } => {
                write!(f, "Minimum team size {} is above maximum {}", min, max)
            }
            DraftWarning::ApplicationWindowInverted => {
                write!(f, "Applications close before they open")
            }
            DraftWarning::ApplicationClosesAfterBegin => {
                write!(f, "Applications close after the hackathon begins")
            }
            DraftWarning::DeadlineBeforeBegin => {
                write!(f, "Submission deadline is before the hackathon begins")
            }
        }
    }
}

/// Look over a draft for inconsistent numbers and dates
pub fn review(draft: &HackathonDraft) -> Vec<DraftWarning> {
    let details = &draft.details;
    let mut warnings = Vec::new();

    let mut count = |field: &'static str, value: &str| match parse_count(value) {
        Some(Ok(n)) => Some(n),
        Some(Err(value)) => {
            warnings.push(DraftWarning::NotANumber { field, value });
            None
        }
        None => None,
    };

    let _ = count("expectedParticipants", &details.expected_participants);
    let min = count("minTeamSize", &details.min_team_size);
    let max = count("maxTeamSize", &details.max_team_size);

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            warnings.push(DraftWarning::TeamSizeInverted { min, max });
        }
    }

    if let (Some(open), Some(close)) = (details.application_open, details.application_close) {
        if close < open {
            warnings.push(DraftWarning::ApplicationWindowInverted);
        }
    }

    if let (Some(close), Some(begin)) = (details.application_close, details.hackathon_begin) {
        if close > begin {
            warnings.push(DraftWarning::ApplicationClosesAfterBegin);
        }
    }

    if let (Some(begin), Some(deadline)) = (details.hackathon_begin, details.submission_deadline) {
        if deadline < begin {
            warnings.push(DraftWarning::DeadlineBeforeBegin);
        }
    }

    warnings
}
