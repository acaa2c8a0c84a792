use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use tracing::warn;

use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::grid::{Cell, Grid};

/// Food currently on the board. Never coincides with a snake segment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Places food on a cell not in `occupied`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: Grid,
        occupied: &HashSet<Cell>,
    ) -> Result<Self, PlacementError> {
        place_food(rng, grid, occupied).map(Self::new)
    }
}

/// Why food could not be placed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free cell left on the {size}x{size} board")]
    BoardFull { size: u16 },
}

/// Picks a uniformly random in-bounds cell that is not in `occupied`.
///
/// Tries rejection sampling first, which is almost always enough while the
/// snake is short. After [`MAX_PLACEMENT_ATTEMPTS`] misses it samples
/// directly from the free cells, so the call always terminates.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Cell>,
) -> Result<Cell, PlacementError> {
    let upper = i32::from(grid.size());

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Cell {
            x: rng.gen_range(0..upper),
            y: rng.gen_range(0..upper),
        };
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }

    warn!(
        occupied = occupied.len(),
        attempts = MAX_PLACEMENT_ATTEMPTS,
        "food placement falling back to free-cell scan"
    );

    let candidates: Vec<Cell> = grid
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if candidates.is_empty() {
        return Err(PlacementError::BoardFull { size: grid.size() });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
