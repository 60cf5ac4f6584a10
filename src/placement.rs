use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Cell, GridSize};

/// Picks a uniformly random cell that is not in `occupied`.
///
/// Rejection sampling: keeps drawing until a free cell comes up. The caller
/// must leave at least one cell of the board free or this never returns.
pub fn random_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    occupied: &HashSet<Cell>,
) -> Cell {
    loop {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
