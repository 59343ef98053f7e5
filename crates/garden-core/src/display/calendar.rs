//! Markdown rendering of the month and year views.

use std::fmt;

use crate::{
    calendar::{month_abbr, HeatCell, Intensity, MonthCell, YearHeatmap},
    garden::{MonthView, YearView},
    models::PlanState,
    stats::YearOverview,
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ym = self.grid.year_month;
        writeln!(f, "# {} {}", ym.name(), ym.year())?;
        writeln!(f)?;

        writeln!(f, "| {} |", WEEKDAYS.join(" | "))?;
        writeln!(f, "|{}", ":---:|".repeat(7))?;
        for week in self.grid.weeks() {
            let mut cells: Vec<String> = week.iter().map(month_cell).collect();
            cells.resize(7, String::new());
            writeln!(f, "| {} |", cells.join(" | "))?;
        }

        let planted: Vec<_> = self.grid.days().filter_map(MonthCell::plan).collect();
        if !planted.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Plans")?;
            writeln!(f)?;
            for plan in planted {
                plan.fmt_line(f)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Seeds planted: **{}** | Plants grown: **{}** | Completion: **{}%**",
            self.stats.planted_count,
            self.stats.completed_count,
            self.stats.completion_percent()
        )
    }
}

fn month_cell(cell: &MonthCell) -> String {
    match cell {
        MonthCell::Filler => String::new(),
        MonthCell::Day {
            day,
            plan,
            is_today,
            ..
        } => {
            let icon = match plan.as_ref().map(|plan| plan.state) {
                None => "",
                Some(PlanState::Planted) => " ○",
                Some(PlanState::Completed) => " ●",
            };
            if *is_today {
                format!("**{day}**{icon}")
            } else {
                format!("{day}{icon}")
            }
        }
    }
}

impl fmt::Display for YearView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} Garden", self.heatmap.year)?;
        writeln!(f)?;
        write!(f, "{}", self.heatmap)?;
        writeln!(f)?;
        write!(f, "{}", self.overview)
    }
}

impl fmt::Display for YearHeatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GUTTER: usize = 4;

        // Two characters per week column; a label is dropped if it would
        // overlap the previous one.
        let mut label_row = " ".repeat(GUTTER + self.weeks.len() * 2 + 2);
        let mut free_from = 0;
        for (column, label) in self.labels.iter().enumerate() {
            if let Some(month) = label {
                let at = GUTTER + column * 2;
                let abbr = month_abbr(*month);
                if at >= free_from {
                    label_row.replace_range(at..at + abbr.len(), abbr);
                    free_from = at + abbr.len() + 1;
                }
            }
        }

        writeln!(f, "```text")?;
        writeln!(f, "{}", label_row.trim_end())?;
        for (weekday, name) in WEEKDAYS.iter().enumerate() {
            let row: String = self
                .weeks
                .iter()
                .map(|week| heat_glyph(week.slots[weekday].as_ref()))
                .flat_map(|glyph| [glyph, ' '])
                .collect();
            writeln!(f, "{name:<width$}{}", row.trim_end(), width = GUTTER)?;
        }
        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(f, "`·` empty   `○` planted   `●` completed")
    }
}

fn heat_glyph(cell: Option<&HeatCell>) -> char {
    match cell.map(|cell| cell.intensity) {
        None => ' ',
        Some(Intensity::Empty) => '·',
        Some(Intensity::Planted) => '○',
        Some(Intensity::Completed) => '●',
    }
}

impl fmt::Display for YearOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Overview")?;
        writeln!(f)?;
        writeln!(f, "| Month | Planted | Completed | Completion | Garden |")?;
        writeln!(f, "|:---|---:|---:|---:|:---|")?;
        for summary in &self.months {
            writeln!(
                f,
                "| {} | {} | {} | {}% | {} |",
                summary.year_month.name(),
                summary.stats.planted_count,
                summary.stats.completed_count,
                summary.stats.completion_percent(),
                summary.bloom.as_str()
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total completed: **{}** | Currently growing: **{}** | Year progress: **{}%**",
            self.totals.completed_count,
            self.totals.planted_count,
            self.totals.completion_percent()
        )
    }
}
