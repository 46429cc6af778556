//! Hackathon draft model - everything the creation wizard accumulates

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Faq, Partner, Prize};
use crate::collection::CollectionEditor;
use crate::error::{Error, Result};

/// Who the hackathon is organized for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonType {
    Students,
    Communities,
}

impl HackathonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HackathonType::Students => "students",
            HackathonType::Communities => "communities",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HackathonType::Students => "For Students",
            HackathonType::Communities => "For Communities/Companies",
        }
    }
}

impl FromStr for HackathonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "students" => Ok(HackathonType::Students),
            "communities" => Ok(HackathonType::Communities),
            other => Err(Error::Parse(format!("unknown hackathon type '{}'", other))),
        }
    }
}

/// How the hackathon runs; cannot be changed once chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HackathonMode {
    #[serde(rename = "offline")]
    Offline,
    #[serde(rename = "online")]
    Online,
    /// Online, with organizers screening applications
    #[serde(rename = "online-review")]
    OnlineReview,
}

impl HackathonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HackathonMode::Offline => "offline",
            HackathonMode::Online => "online",
            HackathonMode::OnlineReview => "online-review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HackathonMode::Offline => "Offline",
            HackathonMode::Online => "Online",
            HackathonMode::OnlineReview => "Online + Application review",
        }
    }
}

impl FromStr for HackathonMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(HackathonMode::Offline),
            "online" => Ok(HackathonMode::Online),
            "online-review" => Ok(HackathonMode::OnlineReview),
            other => Err(Error::Parse(format!("unknown hackathon mode '{}'", other))),
        }
    }
}

/// Step 3 payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    /// University being represented; optional
    pub university: String,
    /// Whether participants pay a fee
    pub has_fee: bool,
}

impl BasicInfo {
    pub fn new(name: impl Into<String>, university: impl Into<String>, has_fee: bool) -> Self {
        Self {
            name: name.into(),
            university: university.into(),
            has_fee,
        }
    }
}

/// Details a participant may be asked for when applying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticipantField {
    FirstName,
    LastName,
    Gender,
    Github,
    Linkedin,
    Phone,
    Email,
}

impl ParticipantField {
    pub const ALL: [ParticipantField; 7] = [
        ParticipantField::FirstName,
        ParticipantField::LastName,
        ParticipantField::Gender,
        ParticipantField::Github,
        ParticipantField::Linkedin,
        ParticipantField::Phone,
        ParticipantField::Email,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ParticipantField::FirstName => "firstName",
            ParticipantField::LastName => "lastName",
            ParticipantField::Gender => "gender",
            ParticipantField::Github => "github",
            ParticipantField::Linkedin => "linkedin",
            ParticipantField::Phone => "phone",
            ParticipantField::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParticipantField::FirstName => "First Name",
            ParticipantField::LastName => "Last Name",
            ParticipantField::Gender => "Gender",
            ParticipantField::Github => "GitHub",
            ParticipantField::Linkedin => "LinkedIn",
            ParticipantField::Phone => "Phone Number",
            ParticipantField::Email => "Email ID",
        }
    }
}

impl FromStr for ParticipantField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ParticipantField::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Parse(format!("unknown participant field '{}'", s)))
    }
}

/// Which participant details are mandatory on the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredFields {
    pub first_name: bool,
    pub last_name: bool,
    pub gender: bool,
    pub github: bool,
    pub linkedin: bool,
    pub phone: bool,
    pub email: bool,
}

impl Default for RequiredFields {
    fn default() -> Self {
        Self {
            first_name: true,
            last_name: true,
            gender: true,
            github: false,
            linkedin: false,
            phone: true,
            email: true,
        }
    }
}

impl RequiredFields {
    pub fn is_required(&self, field: ParticipantField) -> bool {
        match field {
            ParticipantField::FirstName => self.first_name,
            ParticipantField::LastName => self.last_name,
            ParticipantField::Gender => self.gender,
            ParticipantField::Github => self.github,
            ParticipantField::Linkedin => self.linkedin,
            ParticipantField::Phone => self.phone,
            ParticipantField::Email => self.email,
        }
    }

    pub fn set(&mut self, field: ParticipantField, required: bool) {
        let slot = match field {
            ParticipantField::FirstName => &mut self.first_name,
            ParticipantField::LastName => &mut self.last_name,
            ParticipantField::Gender => &mut self.gender,
            ParticipantField::Github => &mut self.github,
            ParticipantField::Linkedin => &mut self.linkedin,
            ParticipantField::Phone => &mut self.phone,
            ParticipantField::Email => &mut self.email,
        };
        *slot = required;
    }

    /// Required fields in form order
    pub fn required(&self) -> impl Iterator<Item = ParticipantField> + '_ {
        ParticipantField::ALL
            .into_iter()
            .filter(|f| self.is_required(*f))
    }
}

/// Free-form fields of the details step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailsField {
    Tagline,
    About,
    Theme,
    ExpectedParticipants,
    MinTeamSize,
    MaxTeamSize,
    Venue,
    Website,
    Logo,
    Favicon,
    ApplicationOpen,
    ApplicationClose,
    HackathonBegin,
    SubmissionDeadline,
}

impl DetailsField {
    pub const ALL: [DetailsField; 14] = [
        DetailsField::Tagline,
        DetailsField::About,
        DetailsField::Theme,
        DetailsField::ExpectedParticipants,
        DetailsField::MinTeamSize,
        DetailsField::MaxTeamSize,
        DetailsField::Venue,
        DetailsField::Website,
        DetailsField::Logo,
        DetailsField::Favicon,
        DetailsField::ApplicationOpen,
        DetailsField::ApplicationClose,
        DetailsField::HackathonBegin,
        DetailsField::SubmissionDeadline,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DetailsField::Tagline => "tagline",
            DetailsField::About => "about",
            DetailsField::Theme => "theme",
            DetailsField::ExpectedParticipants => "expectedParticipants",
            DetailsField::MinTeamSize => "minTeamSize",
            DetailsField::MaxTeamSize => "maxTeamSize",
            DetailsField::Venue => "venue",
            DetailsField::Website => "website",
            DetailsField::Logo => "logo",
            DetailsField::Favicon => "favicon",
            DetailsField::ApplicationOpen => "applicationOpen",
            DetailsField::ApplicationClose => "applicationClose",
            DetailsField::HackathonBegin => "hackathonBegin",
            DetailsField::SubmissionDeadline => "submissionDeadline",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(
            self,
            DetailsField::ApplicationOpen
                | DetailsField::ApplicationClose
                | DetailsField::HackathonBegin
                | DetailsField::SubmissionDeadline
        )
    }
}

impl FromStr for DetailsField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DetailsField::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Parse(format!("unknown details field '{}'", s)))
    }
}

/// Step 4 payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonDetails {
    pub tagline: String,
    pub about: String,
    pub theme: String,
    /// Kept as typed; see `validation::review` for numeric checks
    pub expected_participants: String,
    pub min_team_size: String,
    pub max_team_size: String,
    pub venue: String,
    pub website: String,
    pub logo: String,
    pub favicon: String,
    pub application_open: Option<NaiveDate>,
    pub application_close: Option<NaiveDate>,
    pub hackathon_begin: Option<NaiveDate>,
    pub submission_deadline: Option<NaiveDate>,
    #[serde(rename = "requiredParticipantFields")]
    pub required_fields: RequiredFields,
}

impl HackathonDetails {
    /// Set a field from its text form. Dates are `YYYY-MM-DD`; an empty
    /// value clears a date.
    pub fn set_field(&mut self, field: DetailsField, value: &str) -> Result<()> {
        if field.is_date() {
            let date = parse_date(value)?;
            match field {
                DetailsField::ApplicationOpen => self.application_open = date,
                DetailsField::ApplicationClose => self.application_close = date,
                DetailsField::HackathonBegin => self.hackathon_begin = date,
                DetailsField::SubmissionDeadline => self.submission_deadline = date,
                _ => unreachable!("non-date field {:?}", field),
            }
            return Ok(());
        }

        let value = value.to_string();
        match field {
            DetailsField::Tagline => self.tagline = value,
            DetailsField::About => self.about = value,
            DetailsField::Theme => self.theme = value,
            DetailsField::ExpectedParticipants => self.expected_participants = value,
            DetailsField::MinTeamSize => self.min_team_size = value,
            DetailsField::MaxTeamSize => self.max_team_size = value,
            DetailsField::Venue => self.venue = value,
            DetailsField::Website => self.website = value,
            DetailsField::Logo => self.logo = value,
            DetailsField::Favicon => self.favicon = value,
            _ => unreachable!("date field {:?}", field),
        }
        Ok(())
    }

    /// Text form of a field, dates as `YYYY-MM-DD` or empty
    pub fn field(&self, field: DetailsField) -> String {
        let date = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
        match field {
            DetailsField::Tagline => self.tagline.clone(),
            DetailsField::About => self.about.clone(),
            DetailsField::Theme => self.theme.clone(),
            DetailsField::ExpectedParticipants => self.expected_participants.clone(),
            DetailsField::MinTeamSize => self.min_team_size.clone(),
            DetailsField::MaxTeamSize => self.max_team_size.clone(),
            DetailsField::Venue => self.venue.clone(),
            DetailsField::Website => self.website.clone(),
            DetailsField::Logo => self.logo.clone(),
            DetailsField::Favicon => self.favicon.clone(),
            DetailsField::ApplicationOpen => date(self.application_open),
            DetailsField::ApplicationClose => date(self.application_close),
            DetailsField::HackathonBegin => date(self.hackathon_begin),
            DetailsField::SubmissionDeadline => date(self.submission_deadline),
        }
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| Error::Parse(format!("invalid date '{}': {}", value, e)))
}

/// The in-progress hackathon record
///
/// Updates go through the `with_*` functions, which consume the draft and
/// return the next value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonDraft {
    #[serde(rename = "type")]
    pub hackathon_type: Option<HackathonType>,
    pub mode: Option<HackathonMode>,
    pub basic_info: BasicInfo,
    pub details: HackathonDetails,
    pub partners: CollectionEditor<Partner>,
    pub prizes: CollectionEditor<Prize>,
    pub faqs: CollectionEditor<Faq>,
}

impl HackathonDraft {
    pub fn with_type(mut self, hackathon_type: HackathonType) -> Self {
        self.hackathon_type = Some(hackathon_type);
        self
    }

    pub fn with_mode(mut self, mode: HackathonMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_basic_info(mut self, basic_info: BasicInfo) -> Self {
        self.basic_info = basic_info;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.basic_info.name = name.into();
        self
    }

    pub fn with_details(mut self, details: HackathonDetails) -> Self {
        self.details = details;
        self
    }

    pub fn name(&self) -> &str {
        &self.basic_info.name
    }

    /// Whether name, tagline and about are all filled in
    pub fn is_submittable(&self) -> bool {
        crate::validation::check_submission(self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_defaults() {
        let fields = RequiredFields::default();
        let required: Vec<_> = fields.required().collect();
        assert_eq!(
            required,
            vec![
                ParticipantField::FirstName,
                ParticipantField::LastName,
                ParticipantField::Gender,
                ParticipantField::Phone,
                ParticipantField::Email,
            ]
        );
        assert!(!fields.is_required(ParticipantField::Github));
        assert!(!fields.is_required(ParticipantField::Linkedin));
    }

    #[test]
    fn test_required_field_toggle() {
        let mut fields = RequiredFields::default();
        fields.set(ParticipantField::Github, true);
        fields.set(ParticipantField::Phone, false);
        assert!(fields.is_required(ParticipantField::Github));
        assert!(!fields.is_required(ParticipantField::Phone));
    }

    #[test]
    fn test_parse_type_and_mode() {
        assert_eq!("Students".parse::<HackathonType>().unwrap(), HackathonType::Students);
        assert_eq!(
            "online-review".parse::<HackathonMode>().unwrap(),
            HackathonMode::OnlineReview
        );
        assert!("hybrid".parse::<HackathonMode>().is_err());
    }

    #[test]
    fn test_details_set_field() {
        let mut details = HackathonDetails::default();
        details.set_field(DetailsField::Tagline, "Build cool stuff").unwrap();
        details
            .set_field(DetailsField::HackathonBegin, "2026-11-02")
            .unwrap();

        assert_eq!(details.tagline, "Build cool stuff");
        assert_eq!(
            details.hackathon_begin,
            Some(NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
        );
        assert_eq!(details.field(DetailsField::HackathonBegin), "2026-11-02");

        details.set_field(DetailsField::HackathonBegin, "").unwrap();
        assert_eq!(details.hackathon_begin, None);
    }

    #[test]
    fn test_details_rejects_bad_date() {
        let mut details = HackathonDetails::default();
        let err = details
            .set_field(DetailsField::ApplicationOpen, "next tuesday")
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(details.application_open, None);
    }

    #[test]
    fn test_draft_serializes_with_camel_case_keys() {
        let draft = HackathonDraft::default()
            .with_type(HackathonType::Students)
            .with_mode(HackathonMode::OnlineReview);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "students");
        assert_eq!(json["mode"], "online-review");
        assert_eq!(json["details"]["requiredParticipantFields"]["firstName"], true);
    }
}
