use andor::{AndOrSearch, NondeterministicProblem};
use anyhow::Context;
use settings::Settings;

use crate::vacuum::VacuumWorld;

mod output;
mod settings;
mod simulation;
mod vacuum;

pub fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("Error reading configuration")?;

    settings
        .monitoring
        .init()
        .map_err(|e| anyhow::anyhow!("Error initializing monitoring: {e}"))?;

    let world = VacuumWorld::new(settings.world.initial_state());
    tracing::info!("Start planning from {}", world.initial_state());

    let mut search = AndOrSearch::new();
    let Some(plan) = search.search(&world) else {
        tracing::warn!("No conditional plan found, metrics {}", search.metrics());
        anyhow::bail!("No conditional plan reaches a clean world from {}", world.initial_state());
    };

    tracing::info!("Planning done, metrics {}", search.metrics());
    println!("{}", output::render(&plan, search.metrics(), settings.output.format)?);

    let summary = simulation::simulate(&plan, &world, &settings.simulation);
    tracing::info!(
        "Goal reached in {}/{} trials ({} failed), averages: {:.1} actions, cost {:.1}, performance {:.1}",
        summary.goals_reached,
        summary.trials,
        summary.failures,
        summary.average_actions,
        summary.average_path_cost,
        summary.average_performance
    );

    Ok(())
}
