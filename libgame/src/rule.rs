use crate::cell::CellState;

/// The classic B3/S23 transition: birth on exactly three live neighbors,
/// survival on two or three.
pub fn next_state(current: CellState, live_neighbors: usize) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
