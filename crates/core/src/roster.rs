//! Participant roster import and export
//!
//! Rosters come from the registration export as either TOML
//! (`[[participants]]` tables) or JSON (an array of participants).
//! The format is picked from the file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Participant;
use crate::tracker::MealTracker;

/// TOML roster file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Parse a roster from TOML content
pub fn from_toml(content: &str) -> Result<Vec<Participant>> {
    let file: RosterFile = toml::from_str(content)?;
    Ok(file.participants)
}

/// Parse a roster from a JSON array
pub fn from_json(content: &str) -> Result<Vec<Participant>> {
    Ok(serde_json::from_str(content)?)
}

/// Load a roster file, choosing the parser by extension
pub fn load(path: &Path) -> Result<Vec<Participant>> {
    let content = std::fs::read_to_string(path)?;
    let participants = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => from_toml(&content)?,
        Some("json") => from_json(&content)?,
        other => {
            return Err(Error::Parse(format!(
                "unsupported roster format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            )))
        }
    };
    tracing::info!(path = %path.display(), participants = participants.len(), "Loaded roster");
    Ok(participants)
}

/// Load a roster file straight into a tracker
pub fn load_tracker(path: &Path) -> Result<MealTracker> {
    MealTracker::new(load(path)?)
}

/// Pretty JSON of the current roster, meal flags included
pub fn export_json(tracker: &MealTracker) -> Result<String> {
    Ok(serde_json::to_string_pretty(tracker.participants())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use std::io::Write;

    const ROSTER_TOML: &str = r#"
[[participants]]
id = "a1"
name = "Grace Hopper"
email = "grace@navy.mil"
team = "Compilers"

[participants.meals]
lunch = true

[[participants]]
id = "a2"
name = "Alan Turing"
email = "alan@bletchley.uk"
team = "Enigma"
"#;

    #[test]
    fn test_parse_toml_roster() {
        let roster = from_toml(ROSTER_TOML).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Grace Hopper");
        assert!(roster[0].meals.lunch);
        assert!(!roster[0].meals.dinner);
        assert_eq!(roster[1].meals, Default::default());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("roster.toml");
        std::fs::File::create(&toml_path)
            .unwrap()
            .write_all(ROSTER_TOML.as_bytes())
            .unwrap();
        let tracker = load_tracker(&toml_path).unwrap();
        assert_eq!(tracker.stats().lunch, 1);

        let json_path = dir.path().join("roster.json");
        std::fs::write(&json_path, export_json(&tracker).unwrap()).unwrap();
        let reloaded = load(&json_path).unwrap();
        assert_eq!(reloaded, tracker.participants());

        let csv_path = dir.path().join("roster.csv");
        std::fs::write(&csv_path, "id,name").unwrap();
        assert!(matches!(load(&csv_path), Err(Error::Parse(_))));
    }

    #[test]
    fn test_export_reflects_toggles() {
        let mut tracker = MealTracker::sample();
        tracker.toggle_meal("2", MealType::Dinner);
        let json = export_json(&tracker).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["meals"]["dinner"], true);
        assert_eq!(value[0]["id"], "1");
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(from_toml("participants = 3"), Err(Error::Roster(_))));
    }
}
