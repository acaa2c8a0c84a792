//! Read-only projection of a session into the cells and text a renderer draws.

use crate::game::{EndReason, GameSession, GameStatus};
use crate::grid::Cell;

/// Classification of one grid cell for drawing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

/// Status banner shown next to the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Banner {
    PressStart,
    GameOver(Option<EndReason>),
}

impl Banner {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::PressStart => "press start",
            Self::GameOver(_) => "game over — press restart",
        }
    }

    /// Secondary line describing how the game ended.
    #[must_use]
    pub fn detail(self) -> Option<&'static str> {
        match self {
            Self::GameOver(Some(EndReason::Wall)) => Some("hit the wall"),
            Self::GameOver(Some(EndReason::SelfCollision)) => Some("bit yourself"),
            Self::GameOver(Some(EndReason::BoardFilled)) => Some("board filled"),
            Self::GameOver(None) | Self::PressStart => None,
        }
    }
}

/// Snapshot of everything that crosses into the renderer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardView {
    size: u16,
    cells: Vec<CellKind>,
    pub score: u32,
    pub banner: Option<Banner>,
}

impl BoardView {
    /// Classifies every cell of `session`'s grid.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        let grid = session.grid();
        let size = grid.size();
        let mut cells = vec![CellKind::Empty; grid.area()];

        let index = |cell: Cell| -> Option<usize> {
            if !grid.is_in_bounds(cell) {
                return None;
            }
            let x = usize::try_from(cell.x).ok()?;
            let y = usize::try_from(cell.y).ok()?;
            Some(y * usize::from(size) + x)
        };

        if let Some(i) = session.food_position().and_then(&index) {
            cells[i] = CellKind::Food;
        }
        for segment in session.snake.segments().skip(1) {
            if let Some(i) = index(*segment) {
                cells[i] = CellKind::Body;
            }
        }
        if let Some(i) = index(session.snake.head()) {
            cells[i] = CellKind::Head;
        }

        let banner = match session.status {
            GameStatus::Idle => Some(Banner::PressStart),
            GameStatus::Playing => None,
            GameStatus::GameOver => Some(Banner::GameOver(session.end_reason)),
        };

        Self {
            size,
            cells,
            score: session.score,
            banner,
        }
    }

    /// Side length in cells.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Kind of the cell at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<CellKind> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells
            .get(usize::from(y) * usize::from(self.size) + usize::from(x))
            .copied()
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(usize::from(self.size))
    }
}
