use pocket_snake::food::Food;
use pocket_snake::game::{EndReason, GameSession, GameStatus, StepOutcome};
use pocket_snake::grid::{Cell, Grid};
use pocket_snake::input::{Direction, GameInput};
use pocket_snake::snake::Snake;

fn body(session: &GameSession) -> Vec<Cell> {
    session.snake.segments().copied().collect()
}

#[test]
fn arrow_right_from_idle_then_one_tick() {
    let mut session = GameSession::new_with_seed(Grid::default(), 42);
    session.food = Some(Food::new(Cell::new(3, 3)));
    assert_eq!(body(&session), vec![Cell::new(10, 10)]);
    assert_eq!(session.direction, None);

    session.apply_input(GameInput::Direction(Direction::Right));
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.direction, Some(Direction::Right));

    session.tick();
    assert_eq!(body(&session), vec![Cell::new(11, 10)]);
}

#[test]
fn eating_food_grows_and_respawns_elsewhere() {
    let mut session = GameSession::new_with_seed(Grid::default(), 7);
    session.snake = Snake::new(Cell::new(5, 5));
    session.food = Some(Food::new(Cell::new(6, 5)));
    session.apply_input(GameInput::Direction(Direction::Right));

    assert_eq!(session.tick(), StepOutcome::Ate);
    assert_eq!(body(&session), vec![Cell::new(6, 5), Cell::new(5, 5)]);
    assert_eq!(session.score, 10);
    let food = session.food_position().expect("food is respawned");
    assert_ne!(food, Cell::new(6, 5));
    assert_ne!(food, Cell::new(5, 5));
}

#[test]
fn stepping_off_the_left_edge_ends_the_game() {
    let mut session = GameSession::new_with_seed(Grid::default(), 9);
    session.snake = Snake::new(Cell::new(0, 0));
    session.apply_input(GameInput::Direction(Direction::Left));

    assert_eq!(session.tick(), StepOutcome::Ended(EndReason::Wall));
    assert_eq!(session.status, GameStatus::GameOver);
    assert_eq!(body(&session), vec![Cell::new(0, 0)]);
}

#[test]
fn stepwise_food_collection_turn_and_wall_collision() {
    let mut session = GameSession::new_with_seed(Grid::new(6), 42);
    session.snake = Snake::new(Cell::new(1, 1));
    session.food = Some(Food::new(Cell::new(2, 1)));
    session.apply_input(GameInput::Confirm);

    assert_eq!(session.tick(), StepOutcome::Ate);
    assert_eq!(session.snake.len(), 2);
    assert_eq!(session.snake.head(), Cell::new(2, 1));

    session.food = Some(Food::new(Cell::new(5, 5)));
    session.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(session.tick(), StepOutcome::Moved);
    assert_eq!(body(&session), vec![Cell::new(2, 0), Cell::new(2, 1)]);

    session.apply_input(GameInput::Direction(Direction::Down));
    assert_eq!(session.direction, Some(Direction::Up));
    assert_eq!(session.tick(), StepOutcome::Ended(EndReason::Wall));

    session.apply_input(GameInput::Confirm);
    assert_eq!(session.status, GameStatus::Idle);
    assert_eq!(body(&session), vec![Cell::new(3, 3)]);
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let script = [
        GameInput::Confirm,
        GameInput::Direction(Direction::Up),
        GameInput::Direction(Direction::Left),
        GameInput::Direction(Direction::Down),
        GameInput::Direction(Direction::Right),
    ];

    let play = || {
        let mut session = GameSession::new_with_seed(Grid::default(), 1234);
        let mut trace = Vec::new();
        for input in script {
            session.apply_input(input);
            for _ in 0..3 {
                session.tick();
                trace.push((body(&session), session.food_position(), session.score));
            }
        }
        trace
    };

    assert_eq!(play(), play());
}

#[test]
fn quick_double_turn_does_not_reverse_into_the_neck() {
    let mut session = GameSession::new_with_seed(Grid::default(), 21);
    session.snake = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]);
    session.food = Some(Food::new(Cell::new(15, 15)));
    session.apply_input(GameInput::Direction(Direction::Right));
    session.tick();

    session.apply_input(GameInput::Direction(Direction::Up));
    session.apply_input(GameInput::Direction(Direction::Left));

    assert_eq!(session.tick(), StepOutcome::Moved);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(body(&session), vec![Cell::new(6, 4), Cell::new(6, 5), Cell::new(5, 5)]);
}
