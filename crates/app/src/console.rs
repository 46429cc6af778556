//! Line-oriented console commands
//!
//! Each input line parses into a `Command`. Executing it against the
//! session hub yields output lines and notices for the caller to print.

use std::str::FromStr;

use hackdesk_core::{
    roster, validation, BasicInfo, CollectionEditor, DetailsField, Error, FaqField,
    HackathonMode, HackathonType, MealType, Notice, ParticipantField, PartnerField, PrizeField,
    Record, RecordId, WizardStep,
};

use crate::error::{AppError, Result};
use crate::state::SessionHub;
use crate::viewmodel::{meal_rows, render_rows, StatsView, WizardView};

pub const HELP: &[&str] = &[
    "Wizard:",
    "  type <students|communities>",
    "  mode <offline|online|online-review>",
    "  basic <name> ; <university> ; <yes|no>",
    "  rename <name>",
    "  field <key> <value>          e.g. field tagline Build cool stuff",
    "  require <participant-field> <on|off>",
    "  partner|prize|faq add [v1 ; v2 ; ...]",
    "  partner|prize|faq set <id> <field> <value>",
    "  partner|prize|faq rm <id>",
    "  submit | cancel | show | hackathons",
    "Meals:",
    "  toggle <participant-id> <breakfast|lunch|dinner|snacks>",
    "  search [query] | stats | export",
    "Sessions:",
    "  session new | session list | session use <n> | session close",
    "  help | quit",
];

/// An edit to one of the draft's sub-record collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<F> {
    /// Field values in form order; missing ones stay empty
    Add(Vec<String>),
    Set {
        id: RecordId,
        field: F,
        value: String,
    },
    Remove(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Show,
    SelectType(HackathonType),
    SelectMode(HackathonMode),
    BasicInfo(BasicInfo),
    Rename(String),
    SetField(DetailsField, String),
    Require(ParticipantField, bool),
    Partner(Edit<PartnerField>),
    Prize(Edit<PrizeField>),
    Faq(Edit<FaqField>),
    Submit,
    Cancel,
    Hackathons,
    Toggle {
        participant_id: String,
        meal: MealType,
    },
    Search(String),
    Stats,
    Export,
    SessionNew,
    SessionList,
    SessionUse(usize),
    SessionClose,
}

/// What a command produced
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Output {
    pub lines: Vec<String>,
    pub notices: Vec<Notice>,
    pub quit: bool,
}

impl Output {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

fn usage(message: &str) -> AppError {
    AppError::Usage(message.to_string())
}

/// Split off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn split_values(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(';').map(|v| v.trim().to_string()).collect()
}

fn parse_edit<F>(rest: &str, kind: &str) -> Result<Edit<F>>
where
    F: FromStr<Err = Error>,
{
    let (action, rest) = split_word(rest);
    match action {
        "add" => Ok(Edit::Add(split_values(rest))),
        "set" => {
            let (id, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            if id.is_empty() || field.is_empty() {
                return Err(usage(&format!("{} set <id> <field> <value>", kind)));
            }
            Ok(Edit::Set {
                id: id.parse()?,
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "rm" | "remove" => Ok(Edit::Remove(rest.parse()?)),
        _ => Err(usage(&format!("{} add|set|rm ...", kind))),
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let (word, rest) = split_word(line);
        let command = match word {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "show" => Command::Show,
            "type" => Command::SelectType(rest.parse()?),
            "mode" => Command::SelectMode(rest.parse()?),
            "basic" => {
                let values = split_values(rest);
                let get = |i: usize| values.get(i).cloned().unwrap_or_default();
                let has_fee = validation::parse_fee_answer(&get(2))?;
                Command::BasicInfo(BasicInfo::new(get(0), get(1), has_fee))
            }
            "rename" => Command::Rename(rest.to_string()),
            "field" => {
                let (key, value) = split_word(rest);
                Command::SetField(key.parse()?, value.to_string())
            }
            "require" => {
                let (key, flag) = split_word(rest);
                let required = match flag {
                    "on" | "yes" | "true" => true,
                    "off" | "no" | "false" => false,
                    _ => return Err(usage("require <participant-field> <on|off>")),
                };
                Command::Require(key.parse()?, required)
            }
            "partner" => Command::Partner(parse_edit(rest, "partner")?),
            "prize" => Command::Prize(parse_edit(rest, "prize")?),
            "faq" => Command::Faq(parse_edit(rest, "faq")?),
            "submit" => Command::Submit,
            "cancel" => Command::Cancel,
            "hackathons" => Command::Hackathons,
            "toggle" => {
                let (id, meal) = split_word(rest);
                if id.is_empty() {
                    return Err(usage("toggle <participant-id> <meal>"));
                }
                Command::Toggle {
                    participant_id: id.to_string(),
                    meal: meal.parse()?,
                }
            }
            "search" => Command::Search(rest.to_string()),
            "stats" => Command::Stats,
            "export" => Command::Export,
            "session" => {
                let (action, arg) = split_word(rest);
                match action {
                    "new" => Command::SessionNew,
                    "list" | "" => Command::SessionList,
                    "use" => Command::SessionUse(
                        arg.parse()
                            .map_err(|_| usage("session use <n>"))?,
                    ),
                    "close" => Command::SessionClose,
                    _ => return Err(usage("session new|list|use <n>|close")),
                }
            }
            "" => return Err(usage("empty command, try 'help'")),
            other => return Err(usage(&format!("unknown command '{}', try 'help'", other))),
        };
        Ok(command)
    }
}

/// The details form is only open on the last step
fn expect_details(step: WizardStep) -> Result<()> {
    if step != WizardStep::Details {
        return Err(Error::InvalidTransition {
            expected: WizardStep::Details,
            actual: step,
        }
        .into());
    }
    Ok(())
}

fn apply_edit<T>(editor: &mut CollectionEditor<T>, edit: Edit<T::Field>, out: &mut Output)
where
    T: Record + Default,
{
    match edit {
        Edit::Add(values) => {
            let mut record = T::default();
            for (field, value) in T::FIELDS.iter().zip(values) {
                record.set_field(*field, value);
            }
            let id = editor.add(record);
            out.line(format!("Added {} #{}", T::KIND, id));
        }
        Edit::Set { id, field, value } => {
            if editor.update_field(id, field, value) {
                out.line(format!("Updated {} #{}", T::KIND, id));
            } else {
                out.line(format!("No {} #{}", T::KIND, id));
            }
        }
        Edit::Remove(id) => {
            if editor.remove_by_id(id).is_some() {
                out.line(format!("Removed {} #{}", T::KIND, id));
            } else {
                out.line(format!("No {} #{}", T::KIND, id));
            }
        }
    }
}

/// Run one command against the current session
pub fn execute(hub: &mut SessionHub, command: Command) -> Result<Output> {
    let mut out = Output::default();

    match command {
        Command::Help => out.lines.extend(HELP.iter().map(|s| s.to_string())),
        Command::Quit => out.quit = true,
        Command::Show => {}
        Command::SelectType(t) => {
            hub.current_mut().wizard.select_type(t)?;
        }
        Command::SelectMode(m) => {
            hub.current_mut().wizard.select_mode(m)?;
        }
        Command::BasicInfo(info) => match hub.current_mut().wizard.submit_basic_info(info) {
            Ok(_) => {}
            Err(Error::Validation(e)) => {
                out.line(e.to_string());
                hub.current_mut().push_notice(e.notice());
            }
            Err(e) => return Err(e.into()),
        },
        Command::Rename(name) => {
            hub.current_mut().wizard.rename(name)?;
        }
        Command::SetField(field, value) => {
            let session = hub.current_mut();
            expect_details(session.wizard.step())?;
            session.details_form.set_field(field, &value)?;
        }
        Command::Require(field, required) => {
            let session = hub.current_mut();
            expect_details(session.wizard.step())?;
            session.details_form.required_fields.set(field, required);
        }
        Command::Partner(edit) => apply_edit(hub.current_mut().wizard.partners_mut()?, edit, &mut out),
        Command::Prize(edit) => apply_edit(hub.current_mut().wizard.prizes_mut()?, edit, &mut out),
        Command::Faq(edit) => apply_edit(hub.current_mut().wizard.faqs_mut()?, edit, &mut out),
        Command::Submit => {
            let session = hub.current_mut();
            let form = session.details_form.clone();
            match session.wizard.finalize(form) {
                Ok(finalized) => {
                    for warning in &finalized.warnings {
                        out.line(format!("warning: {}", warning));
                    }
                    session.push_notice(finalized.notice());
                    session.created.push(finalized.hackathon);
                    session.reset_form();
                }
                Err(Error::Validation(e)) => {
                    out.line(e.to_string());
                    session.push_notice(e.notice());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Cancel => {
            let session = hub.current_mut();
            session.wizard.cancel();
            session.reset_form();
        }
        Command::Hackathons => {
            let session = hub.current();
            if session.created.is_empty() {
                out.line("No hackathons created in this session");
            }
            for (i, h) in session.created.iter().enumerate() {
                out.line(format!(
                    "{}. {} - {} ({})",
                    i + 1,
                    h.name(),
                    h.details.tagline,
                    h.mode.map(|m| m.display_name()).unwrap_or("-")
                ));
            }
            return Ok(out);
        }
        Command::Toggle {
            participant_id,
            meal,
        } => {
            let session = hub.current_mut();
            if let Some(toggled) = session.tracker.toggle_meal(&participant_id, meal) {
                out.line(format!(
                    "{}: {} {}",
                    toggled.participant_name,
                    toggled.meal,
                    if toggled.served { "served" } else { "not served" }
                ));
                session.push_notice(toggled.notice());
            }
            return finish_tracker(hub, out, "");
        }
        Command::Search(query) => return finish_tracker(hub, out, &query),
        Command::Stats => {
            out.lines
                .extend(StatsView::new(&hub.current().tracker.stats()).render());
            return Ok(out);
        }
        Command::Export => {
            out.line(roster::export_json(&hub.current().tracker)?);
            return Ok(out);
        }
        Command::SessionNew => {
            let id = hub.open();
            out.line(format!("Opened session {} ({} open)", id, hub.len()));
        }
        Command::SessionList => {
            for (position, session, current) in hub.list() {
                out.line(format!(
                    "{} {}. {} (step {})",
                    if current { "*" } else { " " },
                    position,
                    session.id,
                    session.wizard.step().number()
                ));
            }
            return Ok(out);
        }
        Command::SessionUse(position) => {
            let id = hub.switch_to(position)?;
            out.line(format!("Switched to session {}", id));
        }
        Command::SessionClose => {
            let id = hub.current().id;
            hub.close(id);
            out.line(format!("Closed session {}", id));
        }
    }

    if out.quit {
        return Ok(out);
    }

    let session = hub.current_mut();
    let view = WizardView::new(&session.wizard.snapshot(), &session.details_form);
    out.lines.extend(view.render());
    out.notices = session.take_notices();
    Ok(out)
}

fn finish_tracker(hub: &mut SessionHub, mut out: Output, query: &str) -> Result<Output> {
    let session = hub.current_mut();
    out.lines
        .extend(render_rows(&meal_rows(&session.tracker.search(query))));
    out.notices = session.take_notices();
    Ok(out)
}
