use crate::{Cell, CellState};

/// Applies the B3/S23 rule to a single cell.
///
/// | state | alive neighbors | next  |
/// |-------|-----------------|-------|
/// | Alive | 0..=1           | Dead  |
/// | Alive | 2..=3           | Alive |
/// | Alive | 4..             | Dead  |
/// | Dead  | 3               | Alive |
/// | Dead  | anything else   | Dead  |
pub fn next_state(state: CellState, alive_neighbors: usize) -> CellState {
    match (state, alive_neighbors) {
        (CellState::Alive, 0..=1) => CellState::Dead,
        (CellState::Alive, 2..=3) => CellState::Alive,
        (CellState::Alive, _) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Dead, _) => CellState::Dead,
    }
}

/// Computes the next state of `cell` given its neighbor set.
///
/// Only the number of alive cells in `neighbors` matters, not their order.
pub fn transition<'a>(cell: &Cell, neighbors: impl IntoIterator<Item = &'a Cell>) -> CellState {
    let alive = neighbors
        .into_iter()
        .filter(|n| n.state.is_alive())
        .count();
    next_state(cell.state, alive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_birth() {
        assert_eq!(next_state(CellState::Dead, 3), CellState::Alive);
        assert_eq!(next_state(CellState::Dead, 2), CellState::Dead);
        assert_eq!(next_state(CellState::Dead, 4), CellState::Dead);
        for n in [0, 1, 5, 6, 7, 8] {
            assert_eq!(next_state(CellState::Dead, n), CellState::Dead);
        }
    }

    #[test]
    fn test_death_and_survival() {
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(CellState::Alive, n), CellState::Dead, "n = {}", n);
        }
        assert_eq!(next_state(CellState::Alive, 2), CellState::Alive);
        assert_eq!(next_state(CellState::Alive, 3), CellState::Alive);
    }

    #[test]
    fn test_transition_counts_only_alive_neighbors() {
        let target = Cell::dead(1, 1);
        let neighbors = [
            Cell::alive(0, 0),
            Cell::alive(1, 0),
            Cell::dead(2, 0),
            Cell::alive(0, 1),
            Cell::dead(2, 1),
        ];
        assert_eq!(transition(&target, &neighbors), CellState::Alive);

        let target = Cell::new(Position::new(1, 1), CellState::Alive);
        assert_eq!(transition(&target, &neighbors[..2]), CellState::Alive);
        assert_eq!(transition(&target, &neighbors[..1]), CellState::Dead);
    }
}
