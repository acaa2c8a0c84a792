use std::time::Duration;

use ratatui::style::Color;

/// Width and height of the square play field, in cells.
pub const GRID_SIZE: u16 = 20;

/// Fixed simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

/// Points awarded per food eaten.
pub const SCORE_PER_FOOD: u32 = 10;

/// Uniform draws tried before food placement falls back to the free-cell list.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Returns the tick interval as a [`Duration`].
#[must_use]
pub fn tick_interval() -> Duration {
    Duration::from_millis(TICK_INTERVAL_MS)
}

/// Colours applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub banner_idle: Color,
    pub banner_game_over: Color,
    pub help_text: Color,
}

/// Green terminal look.
pub const THEME_TERMINAL: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::LightRed,
    play_bg: Color::Black,
    border_fg: Color::Green,
    hud_text: Color::Green,
    banner_idle: Color::Green,
    banner_game_over: Color::LightRed,
    help_text: Color::DarkGray,
};
