// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Intent dispatch.
//!
//! Maps a recognized intent and its slot values to an operation on the
//! user's activities and renders the spoken reply. Domain errors are
//! answered in speech and never mutate the user.

use crate::error::SkillError;
use crate::models::{EchoRequest, TurnOutcome, TurnRepair, User};
use std::collections::HashMap;

pub const SLOT_ACTIVITY: &str = "activity";
pub const SLOT_PERSON: &str = "person";

pub const HELP_TEXT: &str = "Try adding an activity by saying add, then the name of the activity";
pub const GOODBYE_TEXT: &str = "Goodbye";

/// Intents the skill understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Help,
    Stop,
    Cancel,
    ListActivities,
    ListPeopleOnActivity,
    AddActivity,
    AddPersonToActivity,
    RemoveActivity,
    RemovePersonFromActivity,
    WhoseTurnForActivity,
    CompletedActivity,
}

impl Intent {
    pub const ALL: [Intent; 11] = [
        Intent::Help,
        Intent::Stop,
        Intent::Cancel,
        Intent::ListActivities,
        Intent::ListPeopleOnActivity,
        Intent::AddActivity,
        Intent::AddPersonToActivity,
        Intent::RemoveActivity,
        Intent::RemovePersonFromActivity,
        Intent::WhoseTurnForActivity,
        Intent::CompletedActivity,
    ];

    /// Intent name as sent by the voice platform.
    pub fn name(self) -> &'static str {
        match self {
            Intent::Help => "AMAZON.HelpIntent",
            Intent::Stop => "AMAZON.StopIntent",
            Intent::Cancel => "AMAZON.CancelIntent",
            Intent::ListActivities => "ListActivities",
            Intent::ListPeopleOnActivity => "ListPeopleOnActivity",
            Intent::AddActivity => "AddActivity",
            Intent::AddPersonToActivity => "AddPersonToActivity",
            Intent::RemoveActivity => "RemoveActivity",
            Intent::RemovePersonFromActivity => "RemovePersonFromActivity",
            Intent::WhoseTurnForActivity => "WhoseTurnForActivity",
            Intent::CompletedActivity => "CompletedActivity",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, SkillError> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.name() == name)
            .ok_or_else(|| SkillError::UnrecognizedIntent(name.to_string()))
    }
}

/// Source of slot values for one request.
pub trait SlotSource {
    fn slot_value(&self, name: &str) -> Option<&str>;
}

impl SlotSource for EchoRequest {
    fn slot_value(&self, name: &str) -> Option<&str> {
        EchoRequest::slot_value(self, name)
    }
}

impl SlotSource for HashMap<String, String> {
    fn slot_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }
}

fn require<'a>(slots: &'a impl SlotSource, name: &'static str) -> Result<&'a str, SkillError> {
    slots.slot_value(name).ok_or(SkillError::SlotMissing(name))
}

/// Spoken outcome of one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub speech: String,
    pub end_session: bool,
    /// Whether the user document changed and must be saved
    pub mutated: bool,
}

impl Reply {
    fn say(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            end_session: false,
            mutated: false,
        }
    }

    fn changed(speech: impl Into<String>) -> Self {
        Self {
            mutated: true,
            ..Self::say(speech)
        }
    }

    fn farewell() -> Self {
        Self {
            end_session: true,
            ..Self::say(GOODBYE_TEXT)
        }
    }

    pub fn from_error(err: &SkillError) -> Self {
        Self {
            end_session: err.ends_session(),
            ..Self::say(err.speech())
        }
    }
}

/// Dispatches intents against a user's activities.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentRouter {
    repair: TurnRepair,
}

impl IntentRouter {
    pub fn new(repair: TurnRepair) -> Self {
        Self { repair }
    }

    /// Run one intent. Domain errors become spoken replies.
    pub fn dispatch(&self, intent: Intent, slots: &impl SlotSource, user: &mut User) -> Reply {
        tracing::debug!(intent = intent.name(), user_id = %user.id, "Dispatching intent");

        match self.handle(intent, slots, user) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::info!(intent = intent.name(), error = %err, "Intent rejected");
                Reply::from_error(&err)
            }
        }
    }

    fn handle(
        &self,
        intent: Intent,
        slots: &impl SlotSource,
        user: &mut User,
    ) -> Result<Reply, SkillError> {
        match intent {
            Intent::Help => Ok(Reply::say(HELP_TEXT)),
            Intent::Stop | Intent::Cancel => Ok(Reply::farewell()),
            Intent::ListActivities => Ok(Reply::say(user.activities_summary())),
            Intent::ListPeopleOnActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                Ok(Reply::say(user.activity(activity)?.people_summary()))
            }
            Intent::AddActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                user.add_activity(activity)?;
                Ok(Reply::changed(format!(
                    "Added {activity} to list of activities"
                )))
            }
            Intent::AddPersonToActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                let person = require(slots, SLOT_PERSON)?;
                user.activity_mut(activity)?.add_person(person)?;
                Ok(Reply::changed(format!("Added {person} to {activity}")))
            }
            Intent::RemoveActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                user.remove_activity(activity)?;
                Ok(Reply::changed(format!(
                    "Removed {activity} from the list of activities"
                )))
            }
            Intent::RemovePersonFromActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                let person = require(slots, SLOT_PERSON)?;
                user.activity_mut(activity)?
                    .remove_person(person, self.repair)?;
                Ok(Reply::changed(format!("Removed {person} from {activity}")))
            }
            Intent::WhoseTurnForActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                let holder = user.activity(activity)?.whose_turn()?;
                Ok(Reply::say(format!("It is {holder}'s turn to {activity}")))
            }
            Intent::CompletedActivity => {
                let activity = require(slots, SLOT_ACTIVITY)?;
                let person = require(slots, SLOT_PERSON)?;
                match user.activity_mut(activity)?.complete_turn(person)? {
                    TurnOutcome::Advanced { next } => Ok(Reply::changed(format!(
                        "{person} has completed the activity, it is now {next}'s turn to {activity}"
                    ))),
                    TurnOutcome::NotTheirTurn => {
                        Ok(Reply::say(format!("It is not {person}'s turn to {activity}")))
                    }
                }
            }
        }
    }
}
