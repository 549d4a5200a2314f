use crate::util::{print_population, GridArgs, SeedArgs};
use anyhow::Result;
use clap::Args;
use gol_bounded::Grid;

#[derive(Args, Debug)]
pub(super) struct StatsArgs {
    #[command(flatten)]
    grid: GridArgs,

    #[command(flatten)]
    seeds: SeedArgs,
}

pub(super) fn run_stats(args: StatsArgs) -> Result<()> {
    let timer = std::time::Instant::now();
    let (w, h) = (args.grid.width, args.grid.height);
    let grid = Grid::new(w, h, args.seeds.seeds(w, h)?)?;
    println!(
        "Seeded {}x{} grid in {:.1} secs",
        grid.width(),
        grid.height(),
        timer.elapsed().as_secs_f64()
    );
    print_population(&grid);

    let engine = args.grid.engine.build();
    let timer = std::time::Instant::now();
    let updated = engine.advance(&grid, args.grid.generations);
    println!(
        "Updated grid by {} generations with the {} engine in {:.1} secs",
        args.grid.generations,
        engine.name(),
        timer.elapsed().as_secs_f64()
    );
    print_population(&updated);
    Ok(())
}
