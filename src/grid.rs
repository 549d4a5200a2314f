use ahash::AHashMap as HashMap;
use anyhow::{anyhow, Result};

/// Coordinates of a cell inside a bounded grid.
///
/// Ordering compares `x` first, then `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`, or `None` if either
    /// coordinate would become negative or overflow.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        let x = u32::try_from(self.x as i64 + dx).ok()?;
        let y = u32::try_from(self.y as i64 + dy).ok()?;
        Some(Self { x, y })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// A single cell: where it is and whether it is alive.
///
/// Unlike a position-keyed lookup, two cells compare equal only if both the
/// position and the state match. Uniqueness of positions is enforced by
/// [`Grid`] itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub position: Position,
    pub state: CellState,
}

impl Cell {
    pub const fn new(position: Position, state: CellState) -> Self {
        Self { position, state }
    }

    pub const fn alive(x: u32, y: u32) -> Self {
        Self::new(Position::new(x, y), CellState::Alive)
    }

    pub const fn dead(x: u32, y: u32) -> Self {
        Self::new(Position::new(x, y), CellState::Dead)
    }
}

/// Offsets of the eight cells at Chebyshev distance 1.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size rectangular field of cells with no wraparound.
///
/// # Overview
///
/// Every position in `[0, width) x [0, height)` holds exactly one
/// [`CellState`]. The states are stored densely in row-major order, so a
/// lookup by [`Position`] is a single index computation.
///
/// A `Grid` has no mutating methods: engines read one grid and build a new
/// one, which keeps the update of all cells simultaneous.
///
/// # Example
///
/// ```rust
/// use gol_bounded::{Cell, CellState, Grid, Position};
///
/// let grid = Grid::new(5, 5, [Cell::alive(1, 2), Cell::alive(2, 2)]).unwrap();
/// assert_eq!(grid.len(), 25);
/// assert_eq!(grid.get(Position::new(2, 2)), Some(CellState::Alive));
/// assert_eq!(grid.population(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
    /// `states[y * width + x]` is the state at `(x, y)`.
    states: Vec<CellState>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if `width * height`
    /// does not fit into `usize`.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!(
                "Grid dimensions must be positive, got {}x{}",
                width,
                height
            ));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| anyhow!("Grid {}x{} is too large", width, height))?;
        Ok(Self {
            width,
            height,
            states: vec![CellState::Dead; len],
        })
    }

    /// Creates a grid where every cell is dead except the seeded ones.
    ///
    /// A seed sets the state of its position to the seed's own state, so a
    /// dead seed also overrides the default. If the same position is seeded
    /// several times, the last seed wins.
    ///
    /// # Errors
    ///
    /// Returns an error if any seed lies outside `[0, width) x [0, height)`,
    /// or for the same reasons as [`Grid::blank`]. Out-of-bounds seeds are
    /// never clamped or dropped.
    pub fn new(width: u32, height: u32, seeds: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let mut grid = Self::blank(width, height)?;
        for seed in seeds {
            let idx = grid.index(seed.position).ok_or_else(|| {
                anyhow!(
                    "Seed ({}, {}) is outside of the {}x{} grid",
                    seed.position.x,
                    seed.position.y,
                    width,
                    height
                )
            })?;
            grid.states[idx] = seed.state;
        }
        Ok(grid)
    }

    /// Builds a grid from states laid out in row-major order.
    ///
    /// Used by engines, which always produce exactly `width * height` states.
    pub(crate) fn from_states(width: u32, height: u32, states: Vec<CellState>) -> Self {
        debug_assert_eq!(states.len(), width as usize * height as usize);
        Self {
            width,
            height,
            states,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, always `width * height`.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: dimensions are positive by construction.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Returns the state at `position`, or `None` if it is outside the grid.
    pub fn get(&self, position: Position) -> Option<CellState> {
        self.index(position).map(|idx| self.states[idx])
    }

    /// Returns the cell at `position`, or `None` if it is outside the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.get(position).map(|state| Cell::new(position, state))
    }

    /// Iterates over all cells in [`Position`] order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).map(move |y| {
                let position = Position::new(x, y);
                Cell::new(position, self.states[y as usize * self.width as usize + x as usize])
            })
        })
    }

    /// Row `y` as a slice of states ordered by `x`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[CellState] {
        let w = self.width as usize;
        &self.states[y as usize * w..(y as usize + 1) * w]
    }

    /// Positions of all alive cells in [`Position`] order.
    pub fn alive_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.state.is_alive())
            .map(|cell| cell.position)
            .collect()
    }

    /// Counts alive cells.
    pub fn population(&self) -> usize {
        self.states.iter().filter(|s| s.is_alive()).count()
    }

    /// Returns the in-bounds cells at Chebyshev distance 1 from `position`.
    ///
    /// The target itself is never included and there is no wraparound, so a
    /// corner has 3 neighbors, an edge cell 5 and an interior cell 8.
    pub fn neighbors(&self, position: Position) -> Vec<Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| position.offset(dx, dy))
            .filter_map(|p| self.cell(p))
            .collect()
    }
}

/// Collapses a seed list so that each position appears once, keeping the
/// last state given for it. The result is sorted by position.
pub fn dedup_seeds(seeds: impl IntoIterator<Item = Cell>) -> Vec<Cell> {
    let mut by_position = HashMap::new();
    for seed in seeds {
        by_position.insert(seed.position, seed.state);
    }
    let mut result = by_position
        .into_iter()
        .map(|(position, state)| Cell::new(position, state))
        .collect::<Vec<_>>();
    result.sort_by_key(|cell| cell.position);
    result
}
