//! User document: one voice-platform user and their activities.

use crate::error::SkillError;
use crate::models::{spoken_list, Activity};
use serde::{Deserialize, Serialize};

/// User document stored in Firestore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Voice-platform user ID (document key)
    pub id: String,
    /// Activities in the order they were added
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// When the user was first seen (ISO 8601)
    #[serde(default)]
    pub created_at: String,
    /// Last time the document was written (ISO 8601)
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Create an empty user document.
    pub fn new(id: impl Into<String>, now: &str) -> Self {
        Self {
            id: id.into(),
            activities: Vec::new(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    /// Index of the first activity with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Result<usize, SkillError> {
        self.activities
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| SkillError::ActivityNotFound(name.to_string()))
    }

    pub fn activity(&self, name: &str) -> Result<&Activity, SkillError> {
        let index = self.find_by_name(name)?;
        Ok(&self.activities[index])
    }

    pub fn activity_mut(&mut self, name: &str) -> Result<&mut Activity, SkillError> {
        let index = self.find_by_name(name)?;
        Ok(&mut self.activities[index])
    }

    /// Append a new, empty activity.
    pub fn add_activity(&mut self, name: &str) -> Result<&Activity, SkillError> {
        if self.find_by_name(name).is_ok() {
            return Err(SkillError::ActivityAlreadyExists(name.to_string()));
        }
        self.activities.push(Activity::new(name));
        Ok(&self.activities[self.activities.len() - 1])
    }

    /// Remove the first activity with this name, keeping the others in order.
    pub fn remove_activity(&mut self, name: &str) -> Result<Activity, SkillError> {
        let index = self.find_by_name(name)?;
        Ok(self.activities.remove(index))
    }

    /// Spoken enumeration of the user's activities.
    pub fn activities_summary(&self) -> String {
        let names: Vec<&str> = self.activities.iter().map(|a| a.name.as_str()).collect();
        match names.as_slice() {
            [] => "You have no activities currently".to_string(),
            [only] => format!("You have one activity {only}"),
            names => format!("You have {} activities {}", names.len(), spoken_list(names)),
        }
    }
}
