//! Per-session state
//!
//! Every session owns its own wizard, tracker and pending details form.
//! Nothing is shared between sessions; new sessions start from a clone of
//! the seed roster.

use hackdesk_core::{Error, HackathonDetails, HackathonDraft, MealTracker, Notice, WizardEngine};
use uuid::Uuid;

use crate::error::Result;

/// One organizer's wizard and tracker
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub wizard: WizardEngine,
    pub tracker: MealTracker,
    /// Details form being filled in on step 4, submitted by `finalize`
    pub details_form: HackathonDetails,
    /// Hackathons finalized in this session
    pub created: Vec<HackathonDraft>,
    /// Ephemeral notices, not persisted
    notices: Vec<Notice>,
}

impl Session {
    pub fn new(tracker: MealTracker) -> Self {
        Self {
            id: Uuid::new_v4(),
            wizard: WizardEngine::new(),
            tracker,
            details_form: HackathonDetails::default(),
            created: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drain notices for display
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Clear the form alongside a wizard reset
    pub fn reset_form(&mut self) {
        self.details_form = HackathonDetails::default();
    }
}

/// Open sessions in creation order, with one current session
#[derive(Debug)]
pub struct SessionHub {
    seed: MealTracker,
    sessions: Vec<Session>,
    current: usize,
}

impl SessionHub {
    /// Create a hub with one open session
    pub fn new(seed: MealTracker) -> Self {
        let first = Session::new(seed.clone());
        tracing::info!(session_id = %first.id, "Session opened");
        Self {
            seed,
            sessions: vec![first],
            current: 0,
        }
    }

    /// Open a new session and make it current
    pub fn open(&mut self) -> Uuid {
        let session = Session::new(self.seed.clone());
        let id = session.id;
        self.sessions.push(session);
        self.current = self.sessions.len() - 1;
        tracing::info!(session_id = %id, "Session opened");
        id
    }

    pub fn current(&self) -> &Session {
        &self.sessions[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Session {
        &mut self.sessions[self.current]
    }

    /// Switch by 1-based position as shown by `list`
    pub fn switch_to(&mut self, position: usize) -> Result<Uuid> {
        let index = position
            .checked_sub(1)
            .filter(|i| *i < self.sessions.len())
            .ok_or_else(|| Error::NotFound(format!("session #{}", position)))?;
        self.current = index;
        Ok(self.sessions[index].id)
    }

    /// Close a session. The last session is replaced by a fresh one.
    pub fn close(&mut self, id: Uuid) -> bool {
        let Some(index) = self.sessions.iter().position(|s| s.id == id) else {
            return false;
        };
        self.sessions.remove(index);
        tracing::info!(session_id = %id, "Session closed");

        if self.sessions.is_empty() {
            self.sessions.push(Session::new(self.seed.clone()));
            self.current = 0;
        } else if self.current >= index && self.current > 0 {
            self.current -= 1;
        }
        true
    }

    /// (position, session, is_current)
    pub fn list(&self) -> impl Iterator<Item = (usize, &Session, bool)> {
        self.sessions
            .iter()
            .enumerate()
            .map(move |(i, s)| (i + 1, s, i == self.current))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hackdesk_core::{HackathonType, MealType};

    #[test]
    fn test_sessions_are_isolated() {
        let mut hub = SessionHub::new(MealTracker::sample());
        let first = hub.current().id;

        hub.current_mut()
            .wizard
            .select_type(HackathonType::Students)
            .unwrap();
        hub.current_mut().tracker.toggle_meal("2", MealType::Lunch);

        let second = hub.open();
        assert_ne!(first, second);
        assert_eq!(hub.current().wizard.step().number(), 1);
        assert_eq!(hub.current().tracker.stats().lunch, 0);

        hub.switch_to(1).unwrap();
        assert_eq!(hub.current().id, first);
        assert_eq!(hub.current().wizard.step().number(), 2);
        assert_eq!(hub.current().tracker.stats().lunch, 1);
    }

    #[test]
    fn test_switch_out_of_range() {
        let mut hub = SessionHub::new(MealTracker::default());
        assert!(hub.switch_to(0).is_err());
        assert!(hub.switch_to(2).is_err());
        assert!(hub.switch_to(1).is_ok());
    }

    #[test]
    fn test_close_sessions() {
        let mut hub = SessionHub::new(MealTracker::default());
        let first = hub.current().id;
        let second = hub.open();

        assert!(hub.close(second));
        assert_eq!(hub.current().id, first);
        assert!(!hub.close(second));

        assert!(hub.close(first));
        assert_eq!(hub.len(), 1);
        assert_ne!(hub.current().id, first);
    }

    #[test]
    fn test_notices_drain() {
        let mut session = Session::new(MealTracker::default());
        session.push_notice(Notice::success("Meal status updated"));
        assert_eq!(session.take_notices().len(), 1);
        assert!(session.take_notices().is_empty());
    }
}
