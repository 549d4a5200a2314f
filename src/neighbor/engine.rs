use crate::{rules, GoLEngine, Grid, Position};
use log::trace;

/// The reference engine: for every cell it collects the neighbor set from
/// the previous grid and applies the transition rule to it.
///
/// Lookups are O(1) thanks to the indexed [`Grid`], so a generation costs
/// O(width * height).
///
/// # Example
///
/// ```rust
/// use gol_bounded::{Cell, GoLEngine, Grid, NeighborEngine, Position};
///
/// let blinker = Grid::new(5, 5, [Cell::alive(1, 2), Cell::alive(2, 2), Cell::alive(3, 2)]).unwrap();
/// let next = NeighborEngine.next_generation(&blinker);
/// assert_eq!(
///     next.alive_positions(),
///     vec![Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborEngine;

impl GoLEngine for NeighborEngine {
    fn next_generation(&self, grid: &Grid) -> Grid {
        let (w, h) = (grid.width(), grid.height());
        let mut states = Vec::with_capacity(grid.len());
        for y in 0..h {
            for x in 0..w {
                let position = Position::new(x, y);
                let cell = grid
                    .cell(position)
                    .expect("A bug in NeighborEngine: position outside of the grid");
                let neighbors = grid.neighbors(position);
                states.push(rules::transition(&cell, &neighbors));
            }
        }
        trace!("{}: computed {} cells", self.name(), states.len());
        Grid::from_states(w, h, states)
    }

    fn name(&self) -> &'static str {
        "neighbor"
    }
}
