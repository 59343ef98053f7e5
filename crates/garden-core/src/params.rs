//! Parameter structures for garden operations
//!
//! These structures are shared by every interface that drives the core. They
//! carry no framework-specific derives: the CLI defines its own clap argument
//! structs and converts them into these with `From` impls, so the core stays
//! independent of how input was collected.
//!
//! ```text
//! CLI Args (clap) ──into()──▶ Core Params ──▶ Garden / PlanStore
//! ```

use std::str::FromStr;

use crate::{
    date_key::DateKey,
    error::GardenError,
    models::{PlanId, PlanState},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: PlanId,
}

/// Parameters for planting a seed on a day.
#[derive(Debug, Clone)]
pub struct PlantSeed {
    /// Day to plant on
    pub date: DateKey,
    /// Title of the plan; trimmed before storage
    pub title: String,
    /// Optional description
    pub description: Option<String>,
}

/// Partial update of a plan. Only provided fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlan {
    /// New title, trimmed; must not be empty
    pub title: Option<String>,
    /// New description; an empty string clears it
    pub description: Option<String>,
    /// New state; completing stamps `completed_at`, reopening clears it
    pub state: Option<PlanState>,
}

impl UpdatePlan {
    /// Update that only changes the state.
    pub fn state(state: PlanState) -> Self {
        Self {
            state: Some(state),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.state.is_none()
    }
}

/// Inclusive range of days.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: DateKey,
    pub end: DateKey,
}

/// Reference to a plan by ID or by the day it occupies.
///
/// Since a day holds at most one plan, a date identifies a plan as well as its
/// ID does. Strings shaped like `YYYY-MM-DD` are read as dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanRef {
    Id(PlanId),
    Date(DateKey),
}

impl FromStr for PlanRef {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GardenError::invalid_input("plan").with_reason("must not be empty"));
        }
        match s.parse::<DateKey>() {
            Ok(date) => Ok(PlanRef::Date(date)),
            Err(_) => Ok(PlanRef::Id(PlanId::from(s))),
        }
    }
}
