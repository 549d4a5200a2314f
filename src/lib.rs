#![warn(clippy::all)]

mod driver;
mod grid;
mod neighbor;
pub mod render;
mod row;
pub mod rules;
pub mod seeds;
mod traits;

pub use driver::{Pause, Simulation, SimulationConfig, SimulationReport, ThreadSleep};
pub use grid::{Cell, CellState, Grid, Position};
pub use neighbor::NeighborEngine;
pub use row::RowEngine;
pub use seeds::Preset;
pub use traits::GoLEngine;

pub type DefaultEngine = NeighborEngine;

pub const VERSION: &str = "0.1.0";

/// Computes the next generation of `grid` with [`DefaultEngine`].
pub fn next_generation(grid: &Grid) -> Grid {
    DefaultEngine::default().next_generation(grid)
}
