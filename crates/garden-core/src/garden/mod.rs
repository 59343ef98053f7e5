//! High-level garden API.
//!
//! [`Garden`] is what interactive consumers talk to. It owns a
//! [`PlanStore`] over whichever backend the [`GardenBuilder`] selected and
//! exposes the mutating operations, the month and year views, and the
//! statistics.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Garden      │    │    PlanStore    │    │   PlanBackend   │
//! │ (plan_ops,      │───▶│ (snapshot +     │───▶│ (sqlite, json,  │
//! │  view_ops)      │    │  invariants)    │    │  memory)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use garden_core::{
//!     calendar::YearMonth,
//!     garden::{BackendKind, GardenBuilder},
//!     params::PlantSeed,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut garden = GardenBuilder::new().backend(BackendKind::Memory).build()?;
//!
//! let plan = garden.plant_seed(&PlantSeed {
//!     date: "2024-03-05".parse()?,
//!     title: "Read".to_string(),
//!     description: None,
//! })?;
//!
//! let view = garden.month_view(YearMonth::new(2024, 3)?, None);
//! assert_eq!(view.stats.count, 1);
//! # let _ = plan;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod plan_ops;
pub mod view_ops;

#[cfg(test)]
mod tests;

pub use builder::{BackendKind, GardenBuilder};
pub use view_ops::{MonthView, YearView};

use crate::store::{PlanBackend, PlanStore};

/// Main entry point for tending plans.
pub struct Garden {
    pub(crate) store: PlanStore<Box<dyn PlanBackend>>,
}

impl Garden {
    pub(crate) fn new(store: PlanStore<Box<dyn PlanBackend>>) -> Self {
        Self { store }
    }

    /// Where the plans are persisted.
    pub fn location(&self) -> String {
        self.store.backend().describe()
    }
}
