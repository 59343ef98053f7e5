//! Collection wrapper types for displaying groups of plans.

use std::fmt;

use crate::models::Plan;

/// Newtype wrapper for displaying a list of plans, one line each.
///
/// ```rust
/// use garden_core::{display::Plans, models::Plan};
/// use jiff::Timestamp;
///
/// let plan = Plan::planted("2024-03-05".parse().unwrap(), "Read".to_string(), None, Timestamp::now());
/// let output = Plans(vec![plan]).to_string();
/// assert!(output.contains("2024-03-05 ○ **Read**"));
/// assert_eq!(Plans(vec![]).to_string(), "No plans found.\n");
/// ```
pub struct Plans(pub Vec<Plan>);

impl Plans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plan> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Plans {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            plan.fmt_line(f)?;
        }
        Ok(())
    }
}
