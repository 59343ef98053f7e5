//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From` impls, so `garden-core` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Garden
//! ```

use std::{path::PathBuf, str::FromStr};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use garden_core::{
    params::{PlanRef, PlantSeed, UpdatePlan},
    BackendKind, DateKey, PlanState, YearMonth,
};

/// Plant one seed a day and watch your garden bloom
///
/// Each calendar day holds at most one plan. Plant a seed with an intention
/// for the day, mark it bloomed once done, and look back over the month grid
/// or the year heatmap.
#[derive(Parser)]
#[command(version, about, name = "garden")]
pub struct Args {
    /// Path to the data file. Defaults to $XDG_DATA_HOME/garden/garden.db
    /// (or plans.json with --backend json)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Storage format of the data file
    #[arg(long, global = true, value_enum, default_value_t = Backend::Sqlite)]
    pub backend: Backend,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Storage backends selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Sqlite,
    Json,
}

impl From<Backend> for BackendKind {
    fn from(val: Backend) -> Self {
        match val {
            Backend::Sqlite => BackendKind::Sqlite,
            Backend::Json => BackendKind::Json,
        }
    }
}

/// Available commands for the garden CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Plant a seed on a day
    #[command(alias = "seed")]
    Plant(PlantArgs),
    /// Show a plan
    Show(PlanArgs),
    /// Change a plan's title, description or state
    Update(UpdateArgs),
    /// Mark a plan as bloomed
    #[command(alias = "bloom")]
    Complete(PlanArgs),
    /// Move a bloomed plan back to planted
    Reopen(PlanArgs),
    /// Delete a plan
    #[command(aliases = ["rm", "d"])]
    Delete(PlanArgs),
    /// List plans in a date range
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show a month grid
    Month(MonthArgs),
    /// Show a year heatmap and overview
    Year(YearArgs),
    /// Show completion statistics
    Stats(StatsArgs),
    /// Print the JSON schema of the stored plans
    Schema,
}

/// Plant a seed
#[derive(ClapArgs)]
pub struct PlantArgs {
    /// Day to plant on (YYYY-MM-DD)
    pub date: DateKey,
    /// What you intend to do that day
    pub title: String,
    /// Optional description providing more context
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<PlantArgs> for PlantSeed {
    fn from(val: PlantArgs) -> Self {
        PlantSeed {
            date: val.date,
            title: val.title,
            description: val.description,
        }
    }
}

/// Select a single plan
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Plan ID or date (YYYY-MM-DD)
    pub plan: PlanRef,
}

/// Update a plan
#[derive(ClapArgs)]
pub struct UpdateArgs {
    /// Plan ID or date (YYYY-MM-DD)
    pub plan: PlanRef,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New description; pass an empty string to clear it
    #[arg(short, long)]
    pub description: Option<String>,
    /// New state: planted (seed) or completed (bloom)
    #[arg(short, long)]
    pub state: Option<PlanState>,
}

impl From<&UpdateArgs> for UpdatePlan {
    fn from(val: &UpdateArgs) -> Self {
        UpdatePlan {
            title: val.title.clone(),
            description: val.description.clone(),
            state: val.state,
        }
    }
}

/// List plans
#[derive(ClapArgs)]
pub struct ListArgs {
    /// First day to include (YYYY-MM-DD). Defaults to the start of the
    /// current month
    #[arg(long)]
    pub from: Option<DateKey>,
    /// Last day to include (YYYY-MM-DD). Defaults to the end of the current
    /// month
    #[arg(long)]
    pub to: Option<DateKey>,
}

/// Show a month
#[derive(ClapArgs, Default)]
pub struct MonthArgs {
    /// Month to show (YYYY-MM). Defaults to the current month
    pub month: Option<YearMonth>,
    /// Show the month before
    #[arg(long, conflicts_with = "next")]
    pub prev: bool,
    /// Show the month after
    #[arg(long)]
    pub next: bool,
}

/// Show a year
#[derive(ClapArgs)]
pub struct YearArgs {
    /// Year to show (YYYY). Defaults to the current year
    pub year: Option<i16>,
}

/// Show statistics
#[derive(ClapArgs)]
pub struct StatsArgs {
    /// Year (YYYY) or month (YYYY-MM). Defaults to the current month
    pub period: Option<Period>,
}

/// A year or a month, as accepted by `stats`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Year(i16),
    Month(YearMonth),
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse()
                .map(Period::Year)
                .map_err(|e| format!("invalid year '{s}': {e}"));
        }
        s.parse::<YearMonth>()
            .map(Period::Month)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!("2024".parse::<Period>().unwrap(), Period::Year(2024));
        assert_eq!(
            "2024-03".parse::<Period>().unwrap(),
            Period::Month(YearMonth::new(2024, 3).unwrap())
        );
        assert!("24".parse::<Period>().is_err());
        assert!("2024-3".parse::<Period>().is_err());
    }

    #[test]
    fn test_aliases_parse() {
        for alias in ["seed", "plant"] {
            let args =
                Args::try_parse_from(["garden", alias, "2024-03-05", "Read"]).unwrap();
            assert!(matches!(args.command, Some(Commands::Plant(_))));
        }
        let args = Args::try_parse_from(["garden", "bloom", "2024-03-05"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Complete(_))));
        let args = Args::try_parse_from(["garden", "rm", "2024-03-05"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Delete(_))));
    }

    #[test]
    fn test_prev_and_next_conflict() {
        assert!(Args::try_parse_from(["garden", "month", "--prev", "--next"]).is_err());
    }

    #[test]
    fn test_invalid_date_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["garden", "plant", "2024-02-30", "Read"]).is_err());
    }
}
