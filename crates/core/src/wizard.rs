//! Hackathon creation wizard
//!
//! A forward-only state machine over `WizardStep::ORDER`. Each successful
//! submission moves the cursor one step. The only way back is a reset
//! (`cancel`, or a successful `finalize`), which returns to the first step
//! with an empty draft.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::CollectionEditor;
use crate::error::{Error, Result};
use crate::invariants::assert_draft_invariants;
use crate::models::{
    BasicInfo, Faq, HackathonDetails, HackathonDraft, HackathonMode, HackathonType, Partner, Prize,
};
use crate::notice::Notice;
use crate::validation::{self, DraftWarning};

/// Wizard stages in order
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum WizardStep {
    #[default]
    TypeSelect = 1,
    ModeSelect = 2,
    BasicInfo = 3,
    Details = 4,
}

impl WizardStep {
    pub const ORDER: [WizardStep; 4] = [
        WizardStep::TypeSelect,
        WizardStep::ModeSelect,
        WizardStep::BasicInfo,
        WizardStep::Details,
    ];

    /// 1-based position
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ORDER.get(self.number() as usize).copied()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Dialog heading shown for this step
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::TypeSelect => "Choose the type of hackathon to proceed",
            WizardStep::ModeSelect => "Select hackathon mode",
            WizardStep::BasicInfo => "Let's get you started",
            WizardStep::Details => "Hackathon Details",
        }
    }

    fn label(self) -> &'static str {
        match self {
            WizardStep::TypeSelect => "type selection",
            WizardStep::ModeSelect => "mode selection",
            WizardStep::BasicInfo => "basic info",
            WizardStep::Details => "details",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owned view of the wizard after an operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub draft: HackathonDraft,
}

impl WizardSnapshot {
    /// "Step n of 4"
    pub fn progress(&self) -> (u8, u8) {
        (self.step.number(), WizardStep::ORDER.len() as u8)
    }
}

/// A completed hackathon, handed over for saving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finalized {
    pub hackathon: HackathonDraft,
    pub warnings: Vec<DraftWarning>,
}

impl Finalized {
    pub fn notice(&self) -> Notice {
        Notice::success("Hackathon created successfully!")
    }
}

/// Drives one creation session
#[derive(Debug, Clone, Default)]
pub struct WizardEngine {
    step: WizardStep,
    draft: HackathonDraft,
}

impl WizardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &HackathonDraft {
        &self.draft
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            draft: self.draft.clone(),
        }
    }

    /// Step 1: choose who the hackathon is for
    pub fn select_type(&mut self, hackathon_type: HackathonType) -> Result<WizardSnapshot> {
        self.expect_step(WizardStep::TypeSelect)?;
        self.update(|draft| draft.with_type(hackathon_type));
        tracing::debug!(hackathon_type = hackathon_type.as_str(), "Hackathon type selected");
        Ok(self.advance())
    }

    /// Step 2: choose how it runs
    pub fn select_mode(&mut self, mode: HackathonMode) -> Result<WizardSnapshot> {
        self.expect_step(WizardStep::ModeSelect)?;
        self.update(|draft| draft.with_mode(mode));
        tracing::debug!(mode = mode.as_str(), "Hackathon mode selected");
        Ok(self.advance())
    }

    /// Step 3: name, university and fee. Rejected without a name.
    pub fn submit_basic_info(&mut self, info: BasicInfo) -> Result<WizardSnapshot> {
        self.expect_step(WizardStep::BasicInfo)?;
        if let Err(e) = validation::check_basic_info(&info) {
            tracing::debug!(error = %e, "Basic info rejected");
            return Err(e.into());
        }
        tracing::debug!(name = %info.name, has_fee = info.has_fee, "Basic info accepted");
        self.update(|draft| draft.with_basic_info(info));
        Ok(self.advance())
    }

    /// Change the name while on the details step. Not validated here;
    /// `finalize` checks it again.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<WizardSnapshot> {
        self.expect_step(WizardStep::Details)?;
        let name = name.into();
        self.update(|draft| draft.with_name(name));
        Ok(self.snapshot())
    }

    pub fn partners_mut(&mut self) -> Result<&mut CollectionEditor<Partner>> {
        self.expect_step(WizardStep::Details)?;
        Ok(&mut self.draft.partners)
    }

    pub fn prizes_mut(&mut self) -> Result<&mut CollectionEditor<Prize>> {
        self.expect_step(WizardStep::Details)?;
        Ok(&mut self.draft.prizes)
    }

    pub fn faqs_mut(&mut self) -> Result<&mut CollectionEditor<Faq>> {
        self.expect_step(WizardStep::Details)?;
        Ok(&mut self.draft.faqs)
    }

    /// Step 4: merge the details form and complete the session
    ///
    /// On success the finished draft is returned and the wizard resets.
    /// On a validation failure nothing changes and the wizard stays on the
    /// details step.
    pub fn finalize(&mut self, details: HackathonDetails) -> Result<Finalized> {
        self.expect_step(WizardStep::Details)?;

        let candidate = self.draft.clone().with_details(details);
        if let Err(e) = validation::check_submission(&candidate) {
            tracing::debug!(error = %e, "Finalize rejected");
            return Err(e.into());
        }

        let warnings = validation::review(&candidate);
        tracing::info!(
            name = %candidate.name(),
            partners = candidate.partners.len(),
            prizes = candidate.prizes.len(),
            faqs = candidate.faqs.len(),
            warnings = warnings.len(),
            "Hackathon finalized"
        );

        self.reset();
        Ok(Finalized {
            hackathon: candidate,
            warnings,
        })
    }

    /// Drop the draft and go back to the first step
    pub fn cancel(&mut self) -> WizardSnapshot {
        if self.step != WizardStep::TypeSelect || self.draft != HackathonDraft::default() {
            tracing::debug!(step = %self.step, "Wizard cancelled");
        }
        self.reset();
        self.snapshot()
    }

    fn reset(&mut self) {
        self.step = WizardStep::TypeSelect;
        self.draft = HackathonDraft::default();
    }

    fn expect_step(&self, expected: WizardStep) -> Result<()> {
        if self.step != expected {
            tracing::warn!(%expected, actual = %self.step, "Rejected out-of-order wizard call");
            return Err(Error::InvalidTransition {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn update(&mut self, f: impl FnOnce(HackathonDraft) -> HackathonDraft) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = f(draft);
    }

    fn advance(&mut self) -> WizardSnapshot {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        assert_draft_invariants(self.step, &self.draft);
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FaqField, PartnerField};
    use crate::validation::DraftField;

    fn at_details() -> WizardEngine {
        let mut wizard = WizardEngine::new();
        wizard.select_type(HackathonType::Students).unwrap();
        wizard.select_mode(HackathonMode::Online).unwrap();
        wizard
            .submit_basic_info(BasicInfo::new("HackX", "", false))
            .unwrap();
        wizard
    }

    fn filled_details() -> HackathonDetails {
        HackathonDetails {
            tagline: "Build cool stuff".into(),
            about: "A hackathon.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_step_order() {
        assert_eq!(WizardStep::TypeSelect.next(), Some(WizardStep::ModeSelect));
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Details));
        assert_eq!(WizardStep::Details.next(), None);
        assert!(WizardStep::Details.is_last());
        assert_eq!(WizardStep::default().number(), 1);
    }

    #[test]
    fn test_steps_advance_by_one() {
        let mut wizard = WizardEngine::new();
        assert_eq!(wizard.step(), WizardStep::TypeSelect);

        let snap = wizard.select_type(HackathonType::Communities).unwrap();
        assert_eq!(snap.step.number(), 2);

        let snap = wizard.select_mode(HackathonMode::Offline).unwrap();
        assert_eq!(snap.step.number(), 3);

        let snap = wizard
            .submit_basic_info(BasicInfo::new("DevFest", "", true))
            .unwrap();
        assert_eq!(snap.step.number(), 4);
        assert_eq!(snap.progress(), (4, 4));
    }

    #[test]
    fn test_full_scenario() {
        let mut wizard = WizardEngine::new();
        wizard.select_type(HackathonType::Students).unwrap();
        wizard.select_mode(HackathonMode::Online).unwrap();
        let fee = validation::parse_fee_answer("no").unwrap();
        let snap = wizard
            .submit_basic_info(BasicInfo::new("HackX", "", fee))
            .unwrap();

        assert_eq!(snap.step, WizardStep::Details);
        assert_eq!(snap.draft.hackathon_type, Some(HackathonType::Students));
        assert_eq!(snap.draft.mode, Some(HackathonMode::Online));
        assert_eq!(snap.draft.basic_info.name, "HackX");

        let finalized = wizard.finalize(filled_details()).unwrap();
        assert_eq!(finalized.hackathon.name(), "HackX");
        assert_eq!(finalized.hackathon.details.tagline, "Build cool stuff");
        assert_eq!(finalized.notice().message, "Hackathon created successfully!");

        assert_eq!(wizard.step(), WizardStep::TypeSelect);
        assert_eq!(wizard.draft(), &HackathonDraft::default());
    }

    #[test]
    fn test_empty_name_rejected_without_change() {
        let mut wizard = WizardEngine::new();
        wizard.select_type(HackathonType::Students).unwrap();
        wizard.select_mode(HackathonMode::OnlineReview).unwrap();
        let before = wizard.snapshot();

        let err = wizard
            .submit_basic_info(BasicInfo::new("", "Stanford", true))
            .unwrap_err();

        match err {
            Error::Validation(v) => {
                assert_eq!(v.step, WizardStep::BasicInfo);
                assert_eq!(v.missing, vec![DraftField::Name]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(wizard.snapshot(), before);
    }

    #[test]
    fn test_finalize_requires_tagline_and_about() {
        let mut wizard = at_details();
        wizard.partners_mut().unwrap().add(Partner::new("Acme", ""));
        let before = wizard.snapshot();

        let missing_about = HackathonDetails {
            tagline: "Build cool stuff".into(),
            ..Default::default()
        };
        assert!(matches!(
            wizard.finalize(missing_about),
            Err(Error::Validation(_))
        ));
        assert_eq!(wizard.snapshot(), before);

        let missing_tagline = HackathonDetails {
            about: "A hackathon.".into(),
            ..Default::default()
        };
        assert!(wizard.finalize(missing_tagline).is_err());
        assert_eq!(wizard.snapshot(), before);
        assert_eq!(wizard.step(), WizardStep::Details);
    }

    #[test]
    fn test_finalize_rechecks_renamed_name() {
        let mut wizard = at_details();
        wizard.rename("  ").unwrap();

        let err = wizard.finalize(filled_details()).unwrap_err();
        match err {
            Error::Validation(v) => assert_eq!(v.missing, vec![DraftField::Name]),
            other => panic!("unexpected error: {other}"),
        }

        wizard.rename("HackX 2").unwrap();
        let finalized = wizard.finalize(filled_details()).unwrap();
        assert_eq!(finalized.hackathon.name(), "HackX 2");
    }

    #[test]
    fn test_finalize_carries_collections_and_warnings() {
        let mut wizard = at_details();
        let partner = wizard.partners_mut().unwrap().add_blank();
        wizard
            .partners_mut()
            .unwrap()
            .update_field(partner, PartnerField::Name, "Acme");
        wizard
            .prizes_mut()
            .unwrap()
            .add(Prize::new("Best hack", "$1000", ""));
        let faq = wizard.faqs_mut().unwrap().add(Faq::new("Is it free?", ""));
        wizard
            .faqs_mut()
            .unwrap()
            .update_field(faq, FaqField::Answer, "Yes");

        let details = HackathonDetails {
            min_team_size: "4".into(),
            max_team_size: "2".into(),
            ..filled_details()
        };
        let finalized = wizard.finalize(details).unwrap();

        assert_eq!(finalized.hackathon.partners.items()[0].name, "Acme");
        assert_eq!(finalized.hackathon.prizes.len(), 1);
        assert_eq!(finalized.hackathon.faqs.items()[0].answer, "Yes");
        assert_eq!(
            finalized.warnings,
            vec![DraftWarning::TeamSizeInverted { min: 4, max: 2 }]
        );
    }

    #[test]
    fn test_cancel_from_any_step_is_idempotent() {
        for steps in 0..=3 {
            let mut wizard = WizardEngine::new();
            if steps >= 1 {
                wizard.select_type(HackathonType::Students).unwrap();
            }
            if steps >= 2 {
                wizard.select_mode(HackathonMode::Online).unwrap();
            }
            if steps >= 3 {
                wizard
                    .submit_basic_info(BasicInfo::new("HackX", "", false))
                    .unwrap();
                wizard.faqs_mut().unwrap().add_blank();
            }

            let once = wizard.cancel();
            let twice = wizard.cancel();
            assert_eq!(once.step, WizardStep::TypeSelect);
            assert_eq!(once.draft, HackathonDraft::default());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_out_of_order_calls_rejected() {
        let mut wizard = WizardEngine::new();

        assert!(matches!(
            wizard.select_mode(HackathonMode::Online),
            Err(Error::InvalidTransition {
                expected: WizardStep::ModeSelect,
                actual: WizardStep::TypeSelect,
            })
        ));
        assert!(wizard.partners_mut().is_err());
        assert!(wizard.finalize(filled_details()).is_err());

        wizard.select_type(HackathonType::Students).unwrap();
        // type cannot be chosen again once past step 1
        assert!(wizard.select_type(HackathonType::Communities).is_err());
        assert_eq!(wizard.draft().hackathon_type, Some(HackathonType::Students));
        assert_eq!(wizard.step(), WizardStep::ModeSelect);
    }

    #[test]
    fn test_collection_ids_reset_with_session() {
        let mut wizard = at_details();
        let first = wizard.prizes_mut().unwrap().add_blank();
        wizard.cancel();

        let mut wizard2 = at_details();
        let again = wizard2.prizes_mut().unwrap().add_blank();
        assert_eq!(first, again);
        assert!(wizard.draft().prizes.is_empty());
    }
}
