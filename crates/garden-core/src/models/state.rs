//! Plan state enumeration.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a plan: a seed that is planted, or one that has bloomed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanState {
    /// Intention recorded, not yet fulfilled
    #[default]
    Planted,

    /// Intention fulfilled
    Completed,
}

impl FromStr for PlanState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planted" | "seed" => Ok(PlanState::Planted),
            "completed" | "bloom" | "bloomed" => Ok(PlanState::Completed),
            _ => Err(format!("Invalid plan state: {s}")),
        }
    }
}

impl PlanState {
    /// Serialized string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanState::Planted => "planted",
            PlanState::Completed => "completed",
        }
    }

    /// Get state with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use garden_core::models::PlanState;
    ///
    /// assert_eq!(PlanState::Planted.with_icon(), "○ Planted");
    /// assert_eq!(PlanState::Completed.with_icon(), "● Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanState::Planted => "○ Planted",
            PlanState::Completed => "● Completed",
        }
    }
}
