use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::SCORE_PER_FOOD;
use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::input::{resolve_direction, Direction, GameInput};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Snake is static, waiting for the first input.
    Idle,
    Playing,
    /// Terminal until restart; ticks are ignored.
    GameOver,
}

/// Why a session left `Playing`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    Wall,
    SelfCollision,
    /// The snake covers every cell and no food can be placed.
    BoardFilled,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The session was not playing; nothing changed.
    Skipped,
    Moved,
    Ate,
    Ended(EndReason),
}

/// Signal the session hands back to its host after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Signal {
    Continue,
    /// The host should tear the game view down.
    Exit,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    /// Food on the board; `None` only once the snake fills every cell.
    pub food: Option<Food>,
    /// Direction the next tick moves in; unset until the first start input.
    pub direction: Option<Direction>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    /// Direction of the last committed move.
    travelled: Option<Direction>,
    grid: Grid,
    rng: StdRng,
}

impl GameSession {
    /// Creates an idle session with entropy-seeded food placement.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::fresh(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::fresh(grid, StdRng::seed_from_u64(seed))
    }

    fn fresh(grid: Grid, mut rng: StdRng) -> Self {
        let snake = Snake::new(grid.center());
        let food = Food::spawn(&mut rng, grid, &snake.occupied())
            .expect("a one-cell snake always leaves room for food");

        Self {
            snake,
            food: Some(food),
            direction: None,
            score: 0,
            status: GameStatus::Idle,
            end_reason: None,
            travelled: None,
            grid,
            rng,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn food_position(&self) -> Option<Cell> {
        self.food.map(|food| food.position)
    }

    /// Direction of the last move actually made, if any.
    #[must_use]
    pub fn travelled_direction(&self) -> Option<Direction> {
        self.travelled
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Ticks outside `Playing` are no-ops.
    pub fn tick(&mut self) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Skipped;
        }

        let Some(direction) = self.direction else {
            return StepOutcome::Skipped;
        };

        let next_head = self.snake.head().step(direction);
        if !self.grid.is_in_bounds(next_head) {
            return self.end(EndReason::Wall);
        }

        let eats = self.food_position() == Some(next_head);
        if self.snake.would_collide(next_head, eats) {
            return self.end(EndReason::SelfCollision);
        }

        self.snake.advance(next_head, eats);
        self.travelled = Some(direction);
        if !eats {
            return StepOutcome::Moved;
        }

        self.score += SCORE_PER_FOOD;
        debug!(score = self.score, length = self.snake.len(), "food eaten");

        match Food::spawn(&mut self.rng, self.grid, &self.snake.occupied()) {
            Ok(food) => {
                self.food = Some(food);
                StepOutcome::Ate
            }
            Err(error) => {
                info!(%error, "no room left for food");
                self.food = None;
                self.end(EndReason::BoardFilled)
            }
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) -> Signal {
        match (self.status, input) {
            (_, GameInput::Exit) => return Signal::Exit,
            (GameStatus::Idle, GameInput::Confirm) => self.start(Direction::Right),
            (GameStatus::Idle, GameInput::Direction(direction)) => self.start(direction),
            (GameStatus::Playing, GameInput::Direction(direction)) => {
                let pending = self.direction.unwrap_or(direction);
                self.direction = Some(resolve_direction(self.travelled, pending, direction));
            }
            (GameStatus::GameOver, GameInput::Confirm) => self.restart(),
            (GameStatus::Playing, GameInput::Confirm)
            | (GameStatus::GameOver, GameInput::Direction(_)) => {}
        }

        Signal::Continue
    }

    fn start(&mut self, direction: Direction) {
        self.direction = Some(direction);
        self.status = GameStatus::Playing;
        info!(?direction, "game started");
    }

    /// Replaces this session with a fresh idle one, keeping grid and RNG.
    fn restart(&mut self) {
        let rng = self.rng.clone();
        *self = Self::fresh(self.grid, rng);
        info!("game reset");
    }

    fn end(&mut self, reason: EndReason) -> StepOutcome {
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        info!(
            ?reason,
            score = self.score,
            length = self.snake.len(),
            "game over"
        );
        StepOutcome::Ended(reason)
    }
}
