//! Plan model definition and related functionality.

use std::{convert::Infallible, fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PlanState;
use crate::date_key::DateKey;

/// Opaque, never-reused identifier of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlanId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlanId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for PlanId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A single day's intention and its fulfillment state.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: PlanId,

    /// Title of the plan, trimmed and never empty
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Calendar day the plan is attached to
    pub date: DateKey,

    /// Planted or completed
    pub state: PlanState,

    /// When the seed was planted (UTC). Absent only if the stored value was
    /// unreadable.
    pub planted_at: Option<Timestamp>,

    /// When the plan bloomed (UTC); cleared on reopening
    pub completed_at: Option<Timestamp>,
}

impl Plan {
    /// Creates a freshly planted plan.
    pub fn planted(date: DateKey, title: String, description: Option<String>, now: Timestamp) -> Self {
        Self {
            id: PlanId::generate(),
            title,
            description,
            date,
            state: PlanState::Planted,
            planted_at: Some(now),
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == PlanState::Completed
    }

    /// Moves the plan to `state`, stamping or clearing `completed_at`.
    ///
    /// Completing keeps an existing completion time. Returning to planted
    /// clears it. `planted_at` is never touched.
    pub fn transition_to(&mut self, state: PlanState, now: Timestamp) {
        match state {
            PlanState::Completed => {
                if self.completed_at.is_none() {
                    self.completed_at = Some(now);
                }
            }
            PlanState::Planted => self.completed_at = None,
        }
        self.state = state;
    }
}

/// Current time truncated to millisecond precision, the resolution the
/// persisted form keeps.
pub fn now_millis() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now)
}
