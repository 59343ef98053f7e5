//! Core library for the garden daily planner.
//!
//! Every calendar day can hold one plan: a seed planted with an intention for
//! that day, which blooms once it is done. This crate owns those plans and
//! their persistence, and lays them out as a month grid, a year heatmap and
//! completion statistics.
//!
//! # Layers
//!
//! - [`date_key`]: [`DateKey`], the canonical `YYYY-MM-DD` local day
//! - [`store`]: [`PlanStore`] and its persistence backends
//! - [`calendar`]: month grid and year heatmap builders
//! - [`stats`]: counts, completion rates and the year overview
//! - [`garden`]: the [`Garden`] facade used by interactive consumers
//! - [`display`]: markdown formatting of all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use garden_core::{
//!     garden::{BackendKind, GardenBuilder},
//!     params::{Id, PlantSeed},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut garden = GardenBuilder::new().backend(BackendKind::Memory).build()?;
//!
//! let plan = garden.plant_seed(&PlantSeed {
//!     date: "2024-03-05".parse()?,
//!     title: "Read".to_string(),
//!     description: Some("Chapter 3".to_string()),
//! })?;
//! let plan = garden.complete_plan(&Id { id: plan.id })?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod calendar;
pub mod date_key;
pub mod display;
pub mod error;
pub mod garden;
pub mod models;
pub mod params;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use calendar::{
    HeatCell, Intensity, MonthCell, MonthGrid, MonthGridBuilder, WeekColumn, YearHeatmap,
    YearHeatmapBuilder, YearMonth,
};
pub use date_key::{days_in_month, is_leap_year, DateKey};
pub use display::{CreateResult, DeleteResult, LocalDateTime, Plans, UpdateResult};
pub use error::{GardenError, Result};
pub use garden::{BackendKind, Garden, GardenBuilder, MonthView, YearView};
pub use models::{Plan, PlanId, PlanRecord, PlanState};
pub use params::{DateRange, Id, PlanRef, PlantSeed, UpdatePlan};
pub use stats::{MonthBloom, MonthSummary, PlanStats, StatsAggregator, YearOverview};
pub use store::{FileBackend, MemoryBackend, PlanBackend, PlanStore, SqliteBackend};
