use crate::Grid;

/// Generation engine for Game of Life on a bounded grid
pub trait GoLEngine {
    /// Computes the generation following `grid`.
    ///
    /// Every cell is updated against the same unmodified `grid`, so no
    /// freshly computed state can influence a neighbor within one step.
    /// Cells outside the grid do not exist and are never counted.
    ///
    /// # Returns
    /// A new grid with the same dimensions as `grid`. The input is left
    /// untouched.
    fn next_generation(&self, grid: &Grid) -> Grid;

    /// Advances `grid` by `generations` steps.
    ///
    /// # Returns
    /// A new grid after `generations` applications of
    /// [`GoLEngine::next_generation`]; a copy of `grid` when `generations`
    /// is zero.
    fn advance(&self, grid: &Grid, generations: u64) -> Grid {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.next_generation(&current);
        }
        current
    }

    /// Short human-readable name used in logs and the CLI.
    fn name(&self) -> &'static str;
}

impl<T: GoLEngine + ?Sized> GoLEngine for Box<T> {
    fn next_generation(&self, grid: &Grid) -> Grid {
        (**self).next_generation(grid)
    }

    fn advance(&self, grid: &Grid, generations: u64) -> Grid {
        (**self).advance(grid, generations)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
