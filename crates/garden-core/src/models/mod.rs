//! Data models for plans.
//!
//! A [`Plan`] is the unit of user intent: one per calendar day, created as a
//! planted seed and later marked as bloomed. [`PlanRecord`] is the same plan
//! in its persisted shape. Display implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{Plan, PlanState};
//! use jiff::Timestamp;
//!
//! let mut plan = Plan::planted(
//!     "2024-03-05".parse().unwrap(),
//!     "Read".to_string(),
//!     None,
//!     Timestamp::from_second(1709625600).unwrap(),
//! );
//! assert_eq!(plan.state, PlanState::Planted);
//!
//! plan.transition_to(PlanState::Completed, Timestamp::from_second(1709650000).unwrap());
//! assert!(plan.completed_at.is_some());
//! ```

pub mod plan;
pub mod record;
pub mod state;


pub use plan::{now_millis, Plan, PlanId};
pub use record::{format_timestamp, PlanRecord};
pub use state::PlanState;
