//! Host-facing game view: one scope that owns the session, its tick
//! schedule and the terminal that key events are read from.

use std::time::Instant;

use tracing::info;

use crate::board::BoardView;
use crate::config::{tick_interval, THEME_TERMINAL};
use crate::error::AppError;
use crate::game::{GameSession, GameStatus, Signal, StepOutcome};
use crate::grid::Grid;
use crate::input::{poll_input, GameInput};
use crate::renderer;
use crate::terminal_runtime::TerminalSession;
use crate::ticker::Ticker;
use crate::ui::hud::HudInfo;

/// Session plus the bookkeeping that survives restarts within one view.
///
/// Holds no terminal or timer resources, so it can be driven by hand.
#[derive(Debug, Clone)]
pub struct GameController {
    session: GameSession,
    best_score: u32,
}

impl GameController {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            best_score: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highest score reached since the view opened.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score.max(self.session.score)
    }

    /// Routes one input; returns whether the session just started playing.
    pub fn handle_input(&mut self, input: GameInput) -> (Signal, bool) {
        let was_playing = self.session.status == GameStatus::Playing;
        if self.session.status == GameStatus::GameOver && input == GameInput::Confirm {
            self.best_score = self.best_score();
        }

        let signal = self.session.apply_input(input);
        let started = !was_playing && self.session.status == GameStatus::Playing;
        (signal, started)
    }

    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.session.tick();
        if matches!(outcome, StepOutcome::Ended(_)) {
            self.best_score = self.best_score();
        }
        outcome
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        BoardView::capture(&self.session)
    }
}

/// An open game view bound to the terminal.
///
/// Keys are only read and ticks only fired inside [`GameView::run`], and the
/// [`TerminalSession`] it owns is released whichever way `run` returns.
pub struct GameView {
    controller: GameController,
    ticker: Ticker,
    terminal: TerminalSession,
}

impl GameView {
    /// Acquires the terminal and starts the tick schedule.
    pub fn open(grid: Grid, seed: Option<u64>) -> Result<Self, AppError> {
        let session = match seed {
            Some(seed) => GameSession::new_with_seed(grid, seed),
            None => GameSession::new(grid),
        };
        let terminal = TerminalSession::enter()?;
        info!(size = grid.size(), ?seed, "game view opened");

        Ok(Self {
            controller: GameController::new(session),
            ticker: Ticker::start(tick_interval(), Instant::now()),
            terminal,
        })
    }

    /// Draws, waits for a key or the next tick, and repeats until exit.
    pub fn run(mut self) -> Result<(), AppError> {
        loop {
            self.draw()?;

            let timeout = self.ticker.timeout(Instant::now());
            if let Some(input) = poll_input(timeout)? {
                let (signal, started) = self.controller.handle_input(input);
                if signal == Signal::Exit {
                    break;
                }
                if started {
                    self.ticker.restart(Instant::now());
                }
            }

            if self.ticker.due(Instant::now()) {
                self.controller.tick();
            }
        }

        info!(best_score = self.controller.best_score(), "game view closed");
        self.terminal.close()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), AppError> {
        let view = self.controller.snapshot();
        let hud = HudInfo {
            best_score: self.controller.best_score(),
            theme: &THEME_TERMINAL,
        };

        self.terminal
            .draw(|frame| renderer::render(frame, &view, hud))?;
        Ok(())
    }
}
