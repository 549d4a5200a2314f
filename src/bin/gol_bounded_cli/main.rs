mod run;
mod stats;
mod util;

use clap::{Parser, Subcommand};
use run::{run_simulation, RunArgs};
use stats::{run_stats, StatsArgs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Render every generation of the simulation to the console
    Run(RunArgs),
    /// Simulate without rendering and report population and timing
    Stats(StatsArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CLIParser::parse();

    match args.action {
        Action::Run(args) => run_simulation(args),
        Action::Stats(args) => run_stats(args),
    }
}
