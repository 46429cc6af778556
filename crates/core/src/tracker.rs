//! Meal distribution tracker
//!
//! Holds the participant roster and their served-meal flags. Toggling is
//! the only mutation; stats are recomputed from the roster on every call.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::invariants::assert_roster_invariants;
use crate::models::{MealType, Meals, Participant, ParticipantId};
use crate::notice::Notice;

/// Result of a successful toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealToggled {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub meal: MealType,
    /// Flag value after the toggle
    pub served: bool,
}

impl MealToggled {
    pub fn notice(&self) -> Notice {
        Notice::success("Meal status updated")
    }
}

/// Served counts per meal type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealStats {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
    pub snacks: usize,
    /// Roster size the counts were taken over
    pub participants: usize,
}

impl MealStats {
    pub fn served(&self, meal: MealType) -> usize {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snacks => self.snacks,
        }
    }

    /// Participants still waiting for this meal
    pub fn remaining(&self, meal: MealType) -> usize {
        self.participants - self.served(meal)
    }

    fn record(&mut self, meals: &Meals) {
        self.participants += 1;
        for meal in MealType::ALL {
            if meals.get(meal) {
                *self.slot(meal) += 1;
            }
        }
    }

    fn slot(&mut self, meal: MealType) -> &mut usize {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }
}

/// Participants whose name or email contains a query
///
/// Nothing is filtered until `iter` is called, and `iter` can be called
/// again to restart.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    participants: &'a [Participant],
    needle: String,
}

impl<'a> Search<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Participant> + '_ {
        let participants: &'a [Participant] = self.participants;
        let needle = self.needle.as_str();
        participants.iter().filter(move |p| p.matches(needle))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Roster and meal flags for one tracking session
#[derive(Debug, Clone, Default)]
pub struct MealTracker {
    participants: Vec<Participant>,
}

impl MealTracker {
    /// Build a tracker from an imported roster. Ids must be unique.
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for p in &participants {
            if !seen.insert(p.id.as_str()) {
                return Err(Error::DuplicateParticipant(p.id.to_string()));
            }
        }
        tracing::info!(participants = participants.len(), "Meal tracker loaded");
        Ok(Self { participants })
    }

    /// The two demo participants the organizer dashboard starts with
    pub fn sample() -> Self {
        let john = Participant::new("1", "John Doe", "john@example.com", "Team Alpha").with_meals(
            Meals {
                breakfast: true,
                snacks: true,
                ..Meals::default()
            },
        );
        let jane = Participant::new("2", "Jane Smith", "jane@example.com", "Team Beta");
        Self {
            participants: vec![john, jane],
        }
    }

    /// All participants in roster order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Flip one meal flag. Unknown ids are ignored.
    pub fn toggle_meal(&mut self, participant_id: &str, meal: MealType) -> Option<MealToggled> {
        let Some(participant) = self
            .participants
            .iter_mut()
            .find(|p| p.id.as_str() == participant_id)
        else {
            tracing::debug!(participant_id, meal = meal.as_str(), "Toggle ignored, unknown participant");
            return None;
        };

        let served = participant.meals.toggle(meal);
        tracing::debug!(participant_id, meal = meal.as_str(), served, "Meal toggled");

        let toggled = MealToggled {
            participant_id: participant.id.clone(),
            participant_name: participant.name.clone(),
            meal,
            served,
        };
        assert_roster_invariants(&self.participants);
        Some(toggled)
    }

    /// Case-insensitive substring search over name and email
    pub fn search(&self, query: &str) -> Search<'_> {
        Search {
            participants: &self.participants,
            needle: query.to_lowercase(),
        }
    }

    /// Served counts, recomputed from the roster
    pub fn stats(&self) -> MealStats {
        let mut stats = MealStats::default();
        for p in &self.participants {
            stats.record(&p.meals);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stats() {
        let tracker = MealTracker::sample();
        let stats = tracker.stats();
        assert_eq!(stats.breakfast, 1);
        assert_eq!(stats.lunch, 0);
        assert_eq!(stats.dinner, 0);
        assert_eq!(stats.snacks, 1);
        assert_eq!(stats.participants, 2);
        assert_eq!(stats.remaining(MealType::Breakfast), 1);
    }

    #[test]
    fn test_toggle_changes_only_that_count() {
        let mut tracker = MealTracker::sample();
        let before = tracker.stats();

        let toggled = tracker.toggle_meal("2", MealType::Lunch).unwrap();
        assert!(toggled.served);
        assert_eq!(toggled.participant_name, "Jane Smith");
        assert_eq!(toggled.notice().message, "Meal status updated");

        let after = tracker.stats();
        assert_eq!(after.lunch, before.lunch + 1);
        assert_eq!(after.breakfast, before.breakfast);
        assert_eq!(after.dinner, before.dinner);
        assert_eq!(after.snacks, before.snacks);

        let toggled = tracker.toggle_meal("2", MealType::Lunch).unwrap();
        assert!(!toggled.served);
        assert_eq!(tracker.stats(), before);
    }

    #[test]
    fn test_toggle_unknown_participant_is_noop() {
        let mut tracker = MealTracker::sample();
        let before = tracker.participants().to_vec();
        assert!(tracker.toggle_meal("404", MealType::Dinner).is_none());
        assert_eq!(tracker.participants(), before.as_slice());
    }

    #[test]
    fn test_search_empty_returns_all_in_order() {
        let tracker = MealTracker::sample();
        let names: Vec<_> = tracker.search("").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith"]);
    }

    #[test]
    fn test_search_by_name_and_email() {
        let tracker = MealTracker::sample();

        let jane: Vec<_> = tracker.search("jane").iter().collect();
        assert_eq!(jane.len(), 1);
        assert_eq!(jane[0].name, "Jane Smith");

        assert_eq!(tracker.search("JOHN@EXAMPLE").count(), 1);
        assert_eq!(tracker.search("example.com").count(), 2);
        assert!(tracker.search("nobody").is_empty());
    }

    #[test]
    fn test_search_matches_query_verbatim() {
        let tracker = MealTracker::sample();
        assert!(tracker.search("doe ").is_empty());
        assert!(tracker.search("   ").is_empty());
        let names: Vec<_> = tracker.search("john doe").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe"]);
    }

    #[test]
    fn test_search_is_restartable() {
        let tracker = MealTracker::sample();
        let search = tracker.search("doe");
        assert_eq!(search.iter().count(), 1);
        assert_eq!(search.iter().count(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let roster = vec![
            Participant::new("1", "A", "a@x.io", "T"),
            Participant::new("1", "B", "b@x.io", "T"),
        ];
        assert!(matches!(
            MealTracker::new(roster),
            Err(Error::DuplicateParticipant(id)) if id == "1"
        ));
    }
}
