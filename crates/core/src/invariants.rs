//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::collection::{CollectionEditor, Record};
use crate::models::{HackathonDraft, Participant};
use crate::validation::is_blank;
use crate::wizard::WizardStep;

/// Validate that a draft holds everything the steps behind it collected
pub fn assert_draft_invariants(step: WizardStep, draft: &HackathonDraft) {
    // Every step past the first implies a chosen type
    debug_assert!(
        step == WizardStep::TypeSelect || draft.hackathon_type.is_some(),
        "Wizard at {} step without a hackathon type",
        step
    );

    debug_assert!(
        step <= WizardStep::ModeSelect || draft.mode.is_some(),
        "Wizard at {} step without a hackathon mode",
        step
    );

    // Name must not be empty once basic info was accepted
    debug_assert!(
        step < WizardStep::Details || !is_blank(&draft.basic_info.name),
        "Wizard reached details with an empty name"
    );

    assert_unique_record_ids(&draft.partners);
    assert_unique_record_ids(&draft.prizes);
    assert_unique_record_ids(&draft.faqs);
}

/// Validate that no two records in a collection share an id
pub fn assert_unique_record_ids<T: Record>(collection: &CollectionEditor<T>) {
    let mut seen = HashSet::new();
    for id in collection.ids() {
        debug_assert!(seen.insert(id), "Duplicate {} id {}", T::KIND, id);
    }
}

/// Validate that participant ids are unique
pub fn assert_roster_invariants(participants: &[Participant]) {
    let mut seen = HashSet::new();
    for p in participants {
        debug_assert!(
            seen.insert(p.id.as_str()),
            "Duplicate participant id {}",
            p.id
        );
    }
}
