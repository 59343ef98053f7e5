//! Display formatting for plans, operation results and calendar views.
//!
//! Domain models implement [`std::fmt::Display`] directly; wrapper types add
//! context-specific formatting on top (a list of plans, the outcome of an
//! operation). Everything renders as markdown, which the CLI hands to its
//! terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & View │    │   Formatted     │
//! │  (Plan, views)  │───▶│  Display impls  │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Plans`], a list of plans
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`datetime`]: [`LocalDateTime`] for timestamps in the system timezone
//! - [`models`]: `Display` for [`crate::models::Plan`]
//! - [`calendar`]: `Display` for the month and year views

pub mod calendar;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::Plans;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
