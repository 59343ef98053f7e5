//! Calendar layouts: the month grid and the year heatmap.
//!
//! Both builders are pure. They take the plans to lay out and an optional
//! `today` to highlight, and never read the clock themselves;
//! [`YearMonth::current`] and [`DateKey::today`](crate::DateKey::today) are
//! the only places that do.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  &[Plan]     │────▶│ MonthGridBuilder  │────▶│  MonthGrid   │
//! │  + today     │     │ YearHeatmapBuilder│     │  YearHeatmap │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//! ```

pub mod month;
pub mod year;
pub mod year_month;

pub use month::{MonthCell, MonthGrid, MonthGridBuilder};
pub use year::{HeatCell, Intensity, WeekColumn, YearHeatmap, YearHeatmapBuilder};
pub use year_month::{month_abbr, month_name, YearMonth};
