//! Garden CLI Application
//!
//! Command-line interface for planting one seed a day.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, MonthArgs};
use clap::Parser;
use cli::Cli;
use garden_core::GardenBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        backend,
        no_color,
        command,
    } = Args::parse();

    if let Some(Schema) = command {
        println!("{}", cli::schema()?);
        return Ok(());
    }

    let garden = GardenBuilder::new()
        .backend(backend.into())
        .with_data_path(data_file)
        .build()
        .context("Failed to open garden")?;

    info!("Garden opened at {}", garden.location());

    let mut cli = Cli::new(garden, TerminalRenderer::new(!no_color));
    match command {
        Some(Plant(args)) => cli.plant(args),
        Some(Show(args)) => cli.show(&args),
        Some(Update(args)) => cli.update(&args),
        Some(Complete(args)) => cli.complete(&args),
        Some(Reopen(args)) => cli.reopen(&args),
        Some(Delete(args)) => cli.delete(&args),
        Some(List(args)) => cli.list(&args),
        Some(Month(args)) => cli.month(&args),
        Some(Year(args)) => cli.year(&args),
        Some(Stats(args)) => cli.stats(&args),
        Some(Schema) | None => cli.month(&MonthArgs::default()),
    }
}
