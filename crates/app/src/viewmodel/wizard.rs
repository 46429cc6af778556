//! Wizard view model

use hackdesk_core::{
    CollectionEditor, DetailsField, HackathonDetails, HackathonMode, HackathonType,
    ParticipantField, Record, WizardSnapshot, WizardStep,
};

/// What the wizard dialog shows for the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub heading: String,
    /// "Step n of 4"
    pub progress: String,
    pub lines: Vec<String>,
}

impl WizardView {
    pub fn new(snapshot: &WizardSnapshot, form: &HackathonDetails) -> Self {
        let (step, total) = snapshot.progress();
        let lines = match snapshot.step {
            WizardStep::TypeSelect => [HackathonType::Students, HackathonType::Communities]
                .iter()
                .map(|t| format!("  type {:<12} {}", t.as_str(), t.display_name()))
                .collect(),
            WizardStep::ModeSelect => {
                let mut lines: Vec<String> = [
                    HackathonMode::Offline,
                    HackathonMode::Online,
                    HackathonMode::OnlineReview,
                ]
                .iter()
                .map(|m| format!("  mode {:<14} {}", m.as_str(), m.display_name()))
                .collect();
                lines.push("You'll not be able to change the hackathon mode later.".to_string());
                lines
            }
            WizardStep::BasicInfo => {
                vec!["  basic <name> ; <university> ; <yes|no fee>".to_string()]
            }
            WizardStep::Details => details_lines(snapshot, form),
        };

        Self {
            heading: snapshot.step.title().to_string(),
            progress: format!("Step {} of {}", step, total),
            lines,
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut out = vec![format!("{} ({})", self.heading, self.progress)];
        out.extend(self.lines.iter().cloned());
        out
    }
}

fn details_lines(snapshot: &WizardSnapshot, form: &HackathonDetails) -> Vec<String> {
    let draft = &snapshot.draft;
    let mut lines = vec![
        format!("  name: {}", draft.basic_info.name),
        format!(
            "  type: {}  mode: {}",
            draft.hackathon_type.map(|t| t.as_str()).unwrap_or("-"),
            draft.mode.map(|m| m.as_str()).unwrap_or("-"),
        ),
        format!(
            "  university: {}  fee: {}",
            if draft.basic_info.university.is_empty() {
                "-"
            } else {
                draft.basic_info.university.as_str()
            },
            if draft.basic_info.has_fee { "yes" } else { "no" },
        ),
    ];

    for field in DetailsField::ALL {
        let value = form.field(field);
        if !value.is_empty() {
            lines.push(format!("  {}: {}", field.key(), value));
        }
    }

    let required: Vec<&str> = form
        .required_fields
        .required()
        .map(|f: ParticipantField| f.label())
        .collect();
    lines.push(format!("  required from participants: {}", required.join(", ")));

    collection_lines(&mut lines, "partners", &draft.partners);
    collection_lines(&mut lines, "prizes", &draft.prizes);
    collection_lines(&mut lines, "faqs", &draft.faqs);
    lines
}

fn collection_lines<T: Record>(lines: &mut Vec<String>, title: &str, editor: &CollectionEditor<T>) {
    lines.push(format!("  {} ({})", title, editor.len()));
    for record in editor {
        let values: Vec<&str> = T::FIELDS.iter().map(|f| record.field(*f)).collect();
        lines.push(format!("    #{} {}", record.id(), values.join(" | ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackdesk_core::{BasicInfo, Partner, WizardEngine};

    #[test]
    fn test_type_step_view() {
        let wizard = WizardEngine::new();
        let view = WizardView::new(&wizard.snapshot(), &HackathonDetails::default());
        assert_eq!(view.heading, "Choose the type of hackathon to proceed");
        assert_eq!(view.progress, "Step 1 of 4");
        assert_eq!(view.lines.len(), 2);
    }

    #[test]
    fn test_details_view_lists_collections() {
        let mut wizard = WizardEngine::new();
        wizard.select_type(HackathonType::Students).unwrap();
        wizard.select_mode(HackathonMode::Offline).unwrap();
        wizard
            .submit_basic_info(BasicInfo::new("HackX", "IIT", true))
            .unwrap();
        wizard
            .partners_mut()
            .unwrap()
            .add(Partner::new("Acme", "acme.png"));

        let form = HackathonDetails {
            tagline: "Build cool stuff".into(),
            ..Default::default()
        };
        let rendered = WizardView::new(&wizard.snapshot(), &form).render();

        assert_eq!(rendered[0], "Hackathon Details (Step 4 of 4)");
        assert!(rendered.contains(&"  name: HackX".to_string()));
        assert!(rendered.contains(&"  university: IIT  fee: yes".to_string()));
        assert!(rendered.contains(&"  tagline: Build cool stuff".to_string()));
        assert!(rendered.contains(&"  partners (1)".to_string()));
        assert!(rendered.contains(&"    #1 Acme | acme.png".to_string()));
    }
}
