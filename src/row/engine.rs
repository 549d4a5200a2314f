use crate::{rules, CellState, GoLEngine, Grid};
use log::trace;

/// An engine that sweeps the grid row by row, keeping per-column sums of
/// three adjacent rows of the previous generation.
///
/// Rows above the top edge and below the bottom edge are treated as absent,
/// not as dead padding that could be counted, which gives exactly the same
/// neighborhoods as [`crate::NeighborEngine`]. It avoids building a neighbor
/// set per cell and is noticeably faster on large grids.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowEngine;

impl RowEngine {
    /// Adds the alive cells of `row` to the per-column sums.
    fn accumulate(sums: &mut [u8], row: &[CellState]) {
        for (sum, state) in sums.iter_mut().zip(row) {
            *sum += state.is_alive() as u8;
        }
    }

    fn update_row(
        row_prev: Option<&[CellState]>,
        row_curr: &[CellState],
        row_next: Option<&[CellState]>,
        column_sums: &mut [u8],
        dst: &mut Vec<CellState>,
    ) {
        let w = row_curr.len();
        column_sums.fill(0);
        Self::accumulate(column_sums, row_curr);
        for row in [row_prev, row_next].into_iter().flatten() {
            Self::accumulate(column_sums, row);
        }

        for x in 0..w {
            let left = if x > 0 { column_sums[x - 1] } else { 0 };
            let right = if x + 1 < w { column_sums[x + 1] } else { 0 };
            let state = row_curr[x];
            // the 3x3 block includes the cell itself
            let alive = left + column_sums[x] + right - state.is_alive() as u8;
            dst.push(rules::next_state(state, alive as usize));
        }
    }
}

impl GoLEngine for RowEngine {
    fn next_generation(&self, grid: &Grid) -> Grid {
        let (w, h) = (grid.width(), grid.height());
        let mut states = Vec::with_capacity(grid.len());
        let mut column_sums = vec![0u8; w as usize];

        for y in 0..h {
            let row_prev = y.checked_sub(1).map(|y| grid.row(y));
            let row_next = (y + 1 < h).then(|| grid.row(y + 1));
            Self::update_row(row_prev, grid.row(y), row_next, &mut column_sums, &mut states);
        }

        trace!("{}: computed {} cells", self.name(), states.len());
        Grid::from_states(w, h, states)
    }

    fn name(&self) -> &'static str {
        "row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_single_row_grid() {
        // a 1-high grid: no cell can reach 3 neighbors
        let grid = Grid::new(5, 1, (0..5).map(|x| Cell::alive(x, 0))).unwrap();
        let next = RowEngine.next_generation(&grid);
        assert_eq!(
            next.alive_positions(),
            vec![Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
        );
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::new(1, 1, [Cell::alive(0, 0)]).unwrap();
        assert_eq!(RowEngine.next_generation(&grid).population(), 0);
    }

    #[test]
    fn test_full_grid_corners_survive() {
        // corners have 3 neighbors, everything else has at least 5
        let grid = Grid::new(
            4,
            4,
            (0..4).flat_map(|x| (0..4).map(move |y| Cell::alive(x, y))),
        )
        .unwrap();
        let next = RowEngine.next_generation(&grid);
        assert_eq!(
            next.alive_positions(),
            vec![
                Position::new(0, 0),
                Position::new(0, 3),
                Position::new(3, 0),
                Position::new(3, 3)
            ]
        );
    }
}
