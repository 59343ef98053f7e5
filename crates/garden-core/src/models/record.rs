//! Persisted form of a plan.
//!
//! Records use the field names and string encodings of the stored payload:
//! camelCase keys, `YYYY-MM-DD` dates and ISO-8601 timestamps. Conversion back
//! into a [`Plan`] is lenient. A record with an unreadable date or a blank
//! title is dropped, and an unreadable timestamp is dropped on its own.

use jiff::Timestamp;
use log::warn;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanId, PlanState};
use crate::date_key::DateKey;

/// One plan as it appears in the stored payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    /// Opaque plan identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    /// `planted` or `completed`
    pub state: PlanState,
    /// ISO-8601 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planted_at: Option<String>,
    /// ISO-8601 completion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Formats a timestamp as UTC ISO-8601 with millisecond precision.
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    format!("{timestamp:.3}")
}

impl From<&Plan> for PlanRecord {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.to_string(),
            title: plan.title.clone(),
            description: plan.description.clone(),
            date: plan.date.to_string(),
            state: plan.state,
            planted_at: plan.planted_at.as_ref().map(format_timestamp),
            completed_at: plan.completed_at.as_ref().map(format_timestamp),
        }
    }
}

impl PlanRecord {
    /// Converts the record into a plan, or `None` if its date is unreadable
    /// or its title is blank.
    pub fn into_plan(self) -> Option<Plan> {
        let date = match self.date.parse::<DateKey>() {
            Ok(date) => date,
            Err(e) => {
                warn!("Dropping stored plan {}: {e}", self.id);
                return None;
            }
        };
        let title = self.title.trim();
        if title.is_empty() {
            warn!("Dropping stored plan {}: title is empty", self.id);
            return None;
        }
        let title = title.to_string();

        let planted_at = parse_timestamp(&self.id, "plantedAt", self.planted_at.as_deref());
        let completed_at = parse_timestamp(&self.id, "completedAt", self.completed_at.as_deref());

        Some(Plan {
            id: PlanId::from(self.id),
            title,
            description: self.description,
            date,
            state: self.state,
            planted_at,
            completed_at,
        })
    }
}

fn parse_timestamp(id: &str, field: &str, value: Option<&str>) -> Option<Timestamp> {
    let value = value?;
    match value.parse::<Timestamp>() {
        Ok(ts) => Some(ts),
        Err(e) => {
            warn!("Ignoring malformed {field} '{value}' on plan {id}: {e}");
            None
        }
    }
}
