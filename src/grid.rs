use crate::config::GRID_SIZE;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// The result may lie outside the grid; callers check bounds.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Square playable coordinate space `[0, size) x [0, size)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl Grid {
    /// Creates a grid of `size` x `size` cells.
    ///
    /// # Panics
    ///
    /// Panics when `size < 2`; a one-cell board has no room for food.
    #[must_use]
    pub fn new(size: u16) -> Self {
        assert!(size >= 2, "grid must be at least 2x2");
        Self { size }
    }

    /// Side length in cells.
    #[must_use]
    pub fn size(self) -> u16 {
        self.size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn area(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Cell where a fresh snake spawns.
    #[must_use]
    pub fn center(self) -> Cell {
        let mid = i32::from(self.size / 2);
        Cell { x: mid, y: mid }
    }

    /// Returns true iff both coordinates lie in `[0, size)`.
    #[must_use]
    pub fn is_in_bounds(self, cell: Cell) -> bool {
        let upper = i32::from(self.size);
        cell.x >= 0 && cell.y >= 0 && cell.x < upper && cell.y < upper
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let upper = i32::from(self.size);
        (0..upper).flat_map(move |y| (0..upper).map(move |x| Cell { x, y }))
    }
}
