//! Command handlers.
//!
//! Each handler calls into the [`Garden`] and renders the markdown produced
//! by `garden-core`'s display types. Errors bubble up to `main` with context.

use anyhow::{anyhow, Context, Result};
use garden_core::{
    date_key::days_in_year,
    display::{CreateResult, DeleteResult, Plans, UpdateResult},
    params::{DateRange, UpdatePlan},
    DateKey, Garden, PlanRecord, PlanState, YearMonth,
};
use log::debug;

use crate::{
    args::{ListArgs, MonthArgs, Period, PlanArgs, PlantArgs, StatsArgs, UpdateArgs, YearArgs},
    renderer::TerminalRenderer,
};

/// Runs commands against one garden.
pub struct Cli {
    garden: Garden,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(garden: Garden, renderer: TerminalRenderer) -> Self {
        Self { garden, renderer }
    }

    pub fn plant(&mut self, args: PlantArgs) -> Result<()> {
        let plan = self
            .garden
            .plant_seed(&args.into())
            .context("Failed to plant seed")?;
        self.renderer.render(&CreateResult::new(plan).to_string());
        Ok(())
    }

    pub fn show(&self, args: &PlanArgs) -> Result<()> {
        let id = self.garden.resolve(&args.plan)?;
        let plan = self
            .garden
            .get_plan(&id.id)
            .ok_or_else(|| anyhow!("Plan {} vanished", id.id))?;
        self.renderer.render(&plan.to_string());
        Ok(())
    }

    pub fn update(&mut self, args: &UpdateArgs) -> Result<()> {
        let changes = UpdatePlan::from(args);
        if changes.is_empty() {
            return Err(anyhow!(
                "Nothing to update: pass --title, --description or --state"
            ));
        }

        let id = self.garden.resolve(&args.plan)?;
        let plan = self
            .garden
            .update_plan(&id, &changes)
            .context("Failed to update plan")?;
        self.renderer
            .render(&UpdateResult::with_changes(plan, describe_changes(&changes)).to_string());
        Ok(())
    }

    pub fn complete(&mut self, args: &PlanArgs) -> Result<()> {
        let id = self.garden.resolve(&args.plan)?;
        let plan = self
            .garden
            .complete_plan(&id)
            .context("Failed to complete plan")?;
        let changes = vec!["Marked as completed".to_string()];
        self.renderer
            .render(&UpdateResult::with_changes(plan, changes).to_string());
        Ok(())
    }

    pub fn reopen(&mut self, args: &PlanArgs) -> Result<()> {
        let id = self.garden.resolve(&args.plan)?;
        let plan = self
            .garden
            .reopen_plan(&id)
            .context("Failed to reopen plan")?;
        let changes = vec!["Moved back to planted".to_string()];
        self.renderer
            .render(&UpdateResult::with_changes(plan, changes).to_string());
        Ok(())
    }

    pub fn delete(&mut self, args: &PlanArgs) -> Result<()> {
        let id = self.garden.resolve(&args.plan)?;
        let plan = self
            .garden
            .delete_plan(&id)
            .context("Failed to delete plan")?;
        self.renderer.render(&DeleteResult::new(plan).to_string());
        Ok(())
    }

    pub fn list(&self, args: &ListArgs) -> Result<()> {
        let current = YearMonth::current();
        let range = DateRange {
            start: args.from.unwrap_or_else(|| current.first_day()),
            end: args.to.unwrap_or_else(|| current.last_day()),
        };
        debug!("list: {} to {}", range.start, range.end);

        let plans = self.garden.plans_in_range(&range);
        let markdown = format!(
            "# Plans from {} to {}\n\n{}",
            range.start,
            range.end,
            Plans(plans)
        );
        self.renderer.render(&markdown);
        Ok(())
    }

    pub fn month(&self, args: &MonthArgs) -> Result<()> {
        let mut month = args.month.unwrap_or_else(YearMonth::current);
        if args.prev {
            month = month
                .previous()
                .ok_or_else(|| anyhow!("No month before {month}"))?;
        }
        if args.next {
            month = month
                .next()
                .ok_or_else(|| anyhow!("No month after {month}"))?;
        }

        let view = self.garden.month_view(month, Some(DateKey::today()));
        self.renderer.render(&view.to_string());
        Ok(())
    }

    pub fn year(&self, args: &YearArgs) -> Result<()> {
        let today = DateKey::today();
        let year = args.year.unwrap_or_else(|| today.year());
        let view = self
            .garden
            .year_view(year, Some(today))
            .with_context(|| format!("Failed to build view of {year}"))?;
        self.renderer.render(&view.to_string());
        Ok(())
    }

    pub fn stats(&self, args: &StatsArgs) -> Result<()> {
        let period = args
            .period
            .unwrap_or_else(|| Period::Month(YearMonth::current()));

        let (label, range, days) = match period {
            Period::Month(month) => (
                format!("{} {}", month.name(), month.year()),
                DateRange {
                    start: month.first_day(),
                    end: month.last_day(),
                },
                month.days_in_month() as u32,
            ),
            Period::Year(year) => {
                let first = YearMonth::new(year, 1)?;
                let last = YearMonth::new(year, 12)?;
                (
                    year.to_string(),
                    DateRange {
                        start: first.first_day(),
                        end: last.last_day(),
                    },
                    u32::from(days_in_year(year)),
                )
            }
        };

        let stats = self.garden.stats(&range, days);
        let markdown = format!(
            "# Stats for {label}\n\n\
             - Plans: {}\n\
             - Seeds planted: {}\n\
             - Plants grown: {}\n\
             - Completion: {}% of {days} days\n",
            stats.count,
            stats.planted_count,
            stats.completed_count,
            stats.completion_percent(),
        );
        self.renderer.render(&markdown);
        Ok(())
    }
}

/// JSON schema of the stored payload.
pub fn schema() -> Result<String> {
    let schema = schemars::schema_for!(Vec<PlanRecord>);
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}

fn describe_changes(changes: &UpdatePlan) -> Vec<String> {
    let mut described = Vec::new();
    if let Some(title) = &changes.title {
        described.push(format!("Title set to '{}'", title.trim()));
    }
    match changes.description.as_deref().map(str::trim) {
        Some("") => described.push("Description cleared".to_string()),
        Some(_) => described.push("Description updated".to_string()),
        None => {}
    }
    match changes.state {
        Some(PlanState::Completed) => described.push("Marked as completed".to_string()),
        Some(PlanState::Planted) => described.push("Moved back to planted".to_string()),
        None => {}
    }
    described
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_changes() {
        let changes = UpdatePlan {
            title: Some(" Read ".to_string()),
            description: Some(String::new()),
            state: Some(PlanState::Completed),
        };
        assert_eq!(
            describe_changes(&changes),
            [
                "Title set to 'Read'",
                "Description cleared",
                "Marked as completed"
            ]
        );
        assert!(describe_changes(&UpdatePlan::default()).is_empty());
    }

    #[test]
    fn test_schema_describes_records() {
        let schema = schema().unwrap();
        assert!(schema.contains("plantedAt"));
        assert!(schema.contains("completed"));
    }
}
