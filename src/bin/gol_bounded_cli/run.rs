use crate::util::{local_time, print_population, GridArgs, SeedArgs};
use anyhow::Result;
use clap::Args;
use gol_bounded::{Simulation, SimulationConfig, ThreadSleep, VERSION};
use log::info;
use std::time::Duration;

#[derive(Args, Debug)]
pub(super) struct RunArgs {
    #[command(flatten)]
    grid: GridArgs,

    #[command(flatten)]
    seeds: SeedArgs,

    /// Pause between generations, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    delay: u64,

    /// Print the population after the last generation
    #[arg(short, long)]
    population: bool,
}

pub(super) fn run_simulation(args: RunArgs) -> Result<()> {
    let config = SimulationConfig {
        width: args.grid.width,
        height: args.grid.height,
        generations: args.grid.generations,
        delay: Duration::from_millis(args.delay),
    };
    info!("gol_bounded {} started at {}", VERSION, local_time());

    let mut simulation = Simulation::new(config, args.grid.engine.build(), ThreadSleep)?;
    let seeds = args
        .seeds
        .seeds(simulation.config().width, simulation.config().height)?;
    let initial = simulation.seed(seeds)?;

    let mut stdout = std::io::stdout().lock();
    let report = simulation.run(initial, &mut stdout)?;
    if report.interrupted_pauses > 0 {
        info!("{} pauses were interrupted", report.interrupted_pauses);
    }
    if args.population {
        print_population(&report.final_grid);
    }
    Ok(())
}
