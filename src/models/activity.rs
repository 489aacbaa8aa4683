// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Shared activity model and its turn rotation.
//!
//! The people list defines rotation order and `current_turn` points at the
//! person whose turn it is. Name matching is exact and case-sensitive.

use crate::error::SkillError;
use crate::models::spoken_list;
use serde::{Deserialize, Serialize};

/// A recurring activity shared by a group of people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name, unique within a user's list
    pub name: String,
    /// Index into `people` of the current turn holder
    #[serde(rename = "whoseCurrent", default)]
    pub current_turn: usize,
    /// People in rotation order
    #[serde(default)]
    pub people: Vec<String>,
}

/// Result of reporting a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The reporter held the turn; the pointer moved on to `next`.
    Advanced { next: String },
    /// The reporter did not hold the turn; nothing changed.
    NotTheirTurn,
}

impl TurnOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, TurnOutcome::Advanced { .. })
    }
}

/// How the turn pointer is adjusted after someone leaves an activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnRepair {
    /// Leave the pointer untouched. It may then name a different person or
    /// run past the end of the list.
    #[default]
    Preserve,
    /// Keep the pointer on the same person when someone earlier is removed,
    /// and wrap to the start when the pointer falls off the end.
    Shift,
}

impl TurnRepair {
    /// Compute the new pointer after removing index `removed`, leaving
    /// `remaining` people.
    pub fn apply(self, current: usize, removed: usize, remaining: usize) -> usize {
        match self {
            TurnRepair::Preserve => current,
            TurnRepair::Shift => {
                // A stored pointer may already be past the end of the old list.
                let current = current % (remaining + 1);
                if remaining == 0 {
                    0
                } else if removed < current {
                    current - 1
                } else if current >= remaining {
                    0
                } else {
                    current
                }
            }
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "preserve" => Some(TurnRepair::Preserve),
            "shift" => Some(TurnRepair::Shift),
            _ => None,
        }
    }
}

impl Activity {
    /// Create an activity with nobody assigned.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_turn: 0,
            people: Vec::new(),
        }
    }

    /// Append a person to the end of the rotation.
    pub fn add_person(&mut self, person: &str) -> Result<(), SkillError> {
        if self.people.iter().any(|p| p == person) {
            return Err(SkillError::PersonAlreadyPresent {
                person: person.to_string(),
                activity: self.name.clone(),
            });
        }
        self.people.push(person.to_string());
        Ok(())
    }

    /// Remove the first person with this exact name.
    ///
    /// Returns the index the person occupied.
    pub fn remove_person(&mut self, person: &str, repair: TurnRepair) -> Result<usize, SkillError> {
        let index = self
            .people
            .iter()
            .position(|p| p == person)
            .ok_or_else(|| SkillError::PersonNotFound {
                person: person.to_string(),
                activity: self.name.clone(),
            })?;

        self.people.remove(index);
        self.current_turn = repair.apply(self.current_turn, index, self.people.len());
        Ok(index)
    }

    /// Position of the current turn holder, if anyone is assigned.
    ///
    /// A stored pointer past the end is read modulo the list length.
    pub fn turn_index(&self) -> Option<usize> {
        if self.people.is_empty() {
            None
        } else {
            Some(self.current_turn % self.people.len())
        }
    }

    /// Name of the person whose turn it is.
    pub fn whose_turn(&self) -> Result<&str, SkillError> {
        self.turn_index()
            .map(|i| self.people[i].as_str())
            .ok_or_else(|| SkillError::EmptyPeopleList(self.name.clone()))
    }

    /// Record that `person` completed the activity.
    ///
    /// Only the current holder can complete a turn; the pointer then
    /// advances to `(i + 1) mod len`.
    pub fn complete_turn(&mut self, person: &str) -> Result<TurnOutcome, SkillError> {
        if self.whose_turn()? != person {
            return Ok(TurnOutcome::NotTheirTurn);
        }

        let len = self.people.len();
        let next = self.turn_index().map_or(0, |i| (i + 1) % len);
        self.current_turn = next;
        Ok(TurnOutcome::Advanced {
            next: self.people[next].clone(),
        })
    }

    /// Spoken enumeration of the people on this activity.
    pub fn people_summary(&self) -> String {
        match self.people.as_slice() {
            [] => format!("There is no one currently assigned to {}", self.name),
            [only] => format!("{} is the only one assigned to {}", only, self.name),
            people => format!(
                "You have {} people on this activity {}",
                people.len(),
                spoken_list(people)
            ),
        }
    }
}
