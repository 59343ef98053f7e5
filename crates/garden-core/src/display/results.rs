//! Result wrapper types for displaying operation outcomes.
//!
//! These format the results of plant, update and delete operations with a
//! one-line confirmation followed by the affected plan.

use std::fmt;

use crate::models::Plan;

/// Result of planting a seed.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Planted a seed on {}", self.resource.date)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of an update, optionally listing what changed.
///
/// ```rust
/// use garden_core::{display::UpdateResult, models::Plan};
/// use jiff::Timestamp;
///
/// let plan = Plan::planted("2024-03-05".parse().unwrap(), "Read".to_string(), None, Timestamp::now());
/// let result = UpdateResult::with_changes(plan, vec!["Marked as completed".to_string()]);
/// assert!(result.to_string().contains("- Marked as completed"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan on {}", self.resource.date)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of a deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' from {} (ID: {})",
            self.resource.title, self.resource.date, self.resource.id
        )
    }
}
