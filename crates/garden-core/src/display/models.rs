//! Display implementations for domain models.
//!
//! Plans render as markdown: a heading with the title, a metadata list, and
//! the description as a trailing paragraph.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanState};

impl fmt::Display for PlanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- Date: {}", self.date)?;
        writeln!(f, "- State: {}", self.state.with_icon())?;
        writeln!(f, "- ID: {}", self.id)?;
        if let Some(planted_at) = &self.planted_at {
            writeln!(f, "- Planted: {}", LocalDateTime(planted_at))?;
        }
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl Plan {
    /// One-line list entry: `- 2024-03-05 ○ Read (id)`.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.state {
            PlanState::Planted => "○",
            PlanState::Completed => "●",
        };
        writeln!(f, "- {} {icon} **{}** `{}`", self.date, self.title, self.id)
    }
}
