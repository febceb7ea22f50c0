use std::path::PathBuf;

use clap::Parser;
use log::info;
use tour_test_shared::{Scenario, prelude::*, run_scenario};

#[derive(Parser)]
/// Replays a walk through a building catalog and prints what the tour would report
struct Cli {
    /// Path to a JSON scenario with `buildings`, `steps`, and optional `settings`
    scenario: PathBuf,

    /// Print each notification as a line of JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result {
    colog::init();
    let cli = Cli::parse();

    let scenario = Scenario::load(&cli.scenario)?;
    info!(
        "Loaded {} buildings and {} steps",
        scenario.buildings.len(),
        scenario.steps.len()
    );

    for notification in run_scenario(&scenario) {
        if cli.json {
            let encoded =
                serde_json::to_string(&notification).context("Failed to encode notification")?;
            println!("{encoded}");
        } else {
            println!("{notification}");
        }
    }

    Ok(())
}
