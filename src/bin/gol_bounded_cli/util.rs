use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, ValueEnum};
use gol_bounded::{seeds, Cell, GoLEngine, Grid, NeighborEngine, Position, Preset, RowEngine};
use num_format::{CustomFormat, Grouping, ToFormattedString};

#[derive(Args, Debug)]
pub(super) struct GridArgs {
    /// Number of columns of the grid
    #[arg(long, default_value_t = 25)]
    pub width: u32,

    /// Number of rows of the grid
    #[arg(long, default_value_t = 25)]
    pub height: u32,

    /// How many generations to simulate
    #[arg(short, long, default_value_t = 15)]
    pub generations: u64,

    /// The engine to use for the simulation
    #[arg(short, long, value_enum, default_value_t = Engine::Neighbor)]
    pub engine: Engine,
}

#[derive(Args, Debug)]
pub(super) struct SeedArgs {
    /// Built-in starting pattern; the glider at (8, 11) is used if no seed source is given
    #[arg(long, value_enum, conflicts_with = "rle")]
    preset: Option<PresetArg>,

    /// Pattern text in the RLE format, header on the first line
    #[arg(long)]
    rle: Option<String>,

    /// Fill the grid randomly, each cell being alive with this probability;
    /// a preset or RLE pattern is drawn on top
    #[arg(long)]
    random: Option<f64>,

    /// Seed for `--random`; seeds from the OS if omitted
    #[arg(long, requires = "random")]
    rng_seed: Option<u64>,

    /// Top-left corner of the preset or RLE pattern, as `x,y`
    #[arg(long, value_parser = parse_position, default_value = "0,0")]
    at: Position,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(super) enum Engine {
    /// Collects the neighbor set of every cell
    Neighbor,
    /// Sweeps the grid with per-column sums of three rows
    Row,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Glider,
    Blinker,
    Block,
}

impl Engine {
    pub(super) fn build(self) -> Box<dyn GoLEngine> {
        match self {
            Engine::Neighbor => Box::new(NeighborEngine),
            Engine::Row => Box::new(RowEngine),
        }
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x = x.trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    Ok(Position::new(x, y))
}

impl SeedArgs {
    /// Collects the seeds of every requested source.
    pub(super) fn seeds(&self, width: u32, height: u32) -> Result<Vec<Cell>> {
        let mut lists = vec![];
        if let Some(density) = self.random {
            lists.push(seeds::random(width, height, density, self.rng_seed)?);
        }
        if let Some(preset) = self.preset {
            let preset = match preset {
                PresetArg::Glider => Preset::Glider,
                PresetArg::Blinker => Preset::Blinker,
                PresetArg::Block => Preset::Block,
            };
            lists.push(preset.cells(self.at)?);
        }
        if let Some(text) = &self.rle {
            lists.push(seeds::parse_rle(text, self.at).context("Failed to parse --rle")?);
        }
        if lists.is_empty() {
            lists.push(seeds::default_seeds());
        }
        Ok(seeds::merge(lists))
    }
}

pub(super) fn print_population(grid: &Grid) {
    let fmt = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator("_")
        .build()
        .unwrap();
    println!(
        "Population: {} of {}",
        grid.population().to_formatted_string(&fmt),
        grid.len().to_formatted_string(&fmt)
    );
}

pub(super) fn local_time() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct SeedCli {
        #[command(flatten)]
        seeds: SeedArgs,
    }

    fn seeds_from(args: &[&str]) -> Result<Vec<Cell>> {
        let cli = SeedCli::try_parse_from(std::iter::once("seeds").chain(args.iter().copied()))?;
        cli.seeds.seeds(25, 25)
    }

    #[test]
    fn test_default_is_reference_glider() {
        assert_eq!(seeds_from(&[]).unwrap(), seeds::merge([seeds::default_seeds()]));
    }

    #[test]
    fn test_inline_rle() {
        let cells = seeds_from(&["--rle", "x = 3, y = 1\n3o!", "--at", "1,2"]).unwrap();
        assert_eq!(cells, vec![Cell::alive(1, 2), Cell::alive(2, 2), Cell::alive(3, 2)]);
        assert!(seeds_from(&["--rle", "3o!"]).is_err());
    }

    #[test]
    fn test_pattern_paths_are_not_accepted() {
        assert!(SeedCli::try_parse_from(["seeds", "--pattern", "glider.rle"]).is_err());
    }

    #[test]
    fn test_preset_drawn_over_random_fill() {
        let cells = seeds_from(&["--random", "0", "--preset", "block", "--at", "3,3"]).unwrap();
        assert_eq!(
            cells,
            vec![Cell::alive(3, 3), Cell::alive(3, 4), Cell::alive(4, 3), Cell::alive(4, 4)]
        );
    }

    #[test]
    fn test_all_dead_seeding_builds_a_grid() {
        let cells = seeds_from(&["--random", "0"]).unwrap();
        assert!(cells.is_empty());
        let grid = Grid::new(25, 25, cells).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("4, 7"), Ok(Position::new(4, 7)));
        assert!(parse_position("4").is_err());
        assert!(parse_position("-1,2").is_err());
    }
}
