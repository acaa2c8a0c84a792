//! Randomised play-throughs checking the movement and placement rules on
//! every tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pocket_snake::game::{EndReason, GameSession, GameStatus, StepOutcome};
use pocket_snake::grid::{Cell, Grid};
use pocket_snake::input::{Direction, GameInput};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn body(session: &GameSession) -> Vec<Cell> {
    session.snake.segments().copied().collect()
}

/// Steers towards the food most of the time so snakes actually grow.
fn choose_input(rng: &mut StdRng, session: &GameSession) -> GameInput {
    let food = match session.food_position() {
        Some(food) if !rng.gen_bool(0.3) => food,
        _ => return GameInput::Direction(DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())]),
    };

    let head = session.snake.head();
    let direction = if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    };
    GameInput::Direction(direction)
}

#[test]
fn every_tick_respects_the_movement_rules() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::new(rng.gen_range(4..=20));
        let mut session = GameSession::new_with_seed(grid, seed);
        session.apply_input(GameInput::Confirm);

        for _ in 0..2_000 {
            if session.status == GameStatus::GameOver {
                session.apply_input(GameInput::Confirm);
                session.apply_input(GameInput::Confirm);
            }

            let before = body(&session);
            let food_before = session.food_position().expect("food is on the board");
            let score_before = session.score;
            let travelled_before = session.travelled_direction();

            // Several presses may land between two ticks.
            for _ in 0..rng.gen_range(1..=3) {
                session.apply_input(choose_input(&mut rng, &session));
            }
            if let (Some(travelled), Some(pending)) = (travelled_before, session.direction) {
                assert_ne!(pending, travelled.opposite(), "reversal accepted");
            }

            let outcome = session.tick();
            let after = body(&session);

            assert!(session.snake.is_contiguous(), "gap in {after:?}");
            assert!(after.iter().all(|cell| grid.is_in_bounds(*cell)));
            if let Some(food) = session.food_position() {
                assert!(!session.snake.occupies(food));
            } else {
                assert_eq!(outcome, StepOutcome::Ended(EndReason::BoardFilled));
            }

            match outcome {
                StepOutcome::Moved | StepOutcome::Ate if before.len() > 1 => {
                    assert_ne!(after[0], before[1], "head turned back into the neck");
                }
                _ => {}
            }

            match outcome {
                StepOutcome::Moved => {
                    assert_eq!(after.len(), before.len());
                    assert_ne!(after[0], food_before);
                    assert_eq!(session.score, score_before);
                }
                StepOutcome::Ate => {
                    assert_eq!(after.len(), before.len() + 1);
                    assert_eq!(after[0], food_before);
                    assert_eq!(session.score, score_before + 10);
                }
                StepOutcome::Ended(_) => {
                    assert_eq!(session.status, GameStatus::GameOver);
                }
                StepOutcome::Skipped => assert_eq!(after, before),
            }

            let mut unique = after.clone();
            unique.sort_by_key(|cell| (cell.x, cell.y));
            unique.dedup();
            assert_eq!(unique.len(), after.len(), "self overlap in {after:?}");
        }
    }
}

#[test]
fn collisions_leave_the_body_untouched() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = GameSession::new_with_seed(Grid::new(8), seed);
        session.apply_input(GameInput::Confirm);

        for _ in 0..100_000 {
            let before = body(&session);
            session.apply_input(choose_input(&mut rng, &session));
            match session.tick() {
                StepOutcome::Ended(EndReason::Wall | EndReason::SelfCollision) => {
                    assert_eq!(body(&session), before);
                    break;
                }
                StepOutcome::Ended(EndReason::BoardFilled) => break,
                _ => {}
            }
        }
    }
}
