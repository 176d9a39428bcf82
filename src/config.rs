//! Board geometry, scoring and speed progression.
//!
//! The board is described in pixels and divided into square units, so the
//! grid is `WIDTH / UNIT_SIZE` by `HEIGHT / UNIT_SIZE` cells.

use log::LevelFilter;

use crate::snake::{Cell, Direction};

/// Board width in pixels
pub const WIDTH: i32 = 800;

/// Board height in pixels
pub const HEIGHT: i32 = 600;

/// Side of one grid cell in pixels
pub const UNIT_SIZE: i32 = 25;

pub const COLS: i32 = WIDTH / UNIT_SIZE;
pub const ROWS: i32 = HEIGHT / UNIT_SIZE;

/// Where a new snake starts, and which way it faces
pub const START_CELL: Cell = Cell::new(5, 5);
pub const START_DIRECTION: Direction = Direction::Right;

/// Points awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

/// Tick period at the start of a game, in milliseconds
pub const INITIAL_DELAY_MS: u64 = 150;

/// The tick period never drops below this
pub const MIN_DELAY_MS: u64 = 50;

/// How much faster the game gets on each speed-up
pub const DELAY_STEP_MS: u64 = 10;

/// A speed-up happens every time the score reaches a multiple of this
pub const SPEEDUP_SCORE_INTERVAL: u32 = 50;

/// Diagnostics go to a file since the terminal is taken by the game
pub const LOG_FILE: &str = "snake.log";
pub const LOG_LEVEL_ENV: &str = "SNAKE_LOG";

/// How food is placed after the previous one is eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPlacement {
    /// Any cell of the board, including ones covered by the snake
    Uniform,
    /// Only cells not covered by the snake, when there are any left
    AvoidSnake,
}

/// Rules a game is played with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: i32,
    pub rows: i32,
    pub start: Cell,
    pub start_direction: Direction,
    pub food_reward: u32,
    pub initial_delay_ms: u64,
    pub min_delay_ms: u64,
    pub delay_step_ms: u64,
    pub speedup_every: u32,
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,
            start: START_CELL,
            start_direction: START_DIRECTION,
            food_reward: FOOD_REWARD,
            initial_delay_ms: INITIAL_DELAY_MS,
            min_delay_ms: MIN_DELAY_MS,
            delay_step_ms: DELAY_STEP_MS,
            speedup_every: SPEEDUP_SCORE_INTERVAL,
            food_placement: FoodPlacement::Uniform,
        }
    }
}

impl GameConfig {
    /// Same rules, but food never spawns on top of the snake
    pub fn avoiding_snake() -> Self {
        Self {
            food_placement: FoodPlacement::AvoidSnake,
            ..Default::default()
        }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

/// Log level from the `SNAKE_LOG` value, `info` when unset or unparseable
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_geometry() {
        assert_eq!(COLS, 32);
        assert_eq!(ROWS, 24);

        let config = GameConfig::default();
        assert_eq!(config.cell_count(), 32 * 24);
        assert_eq!(config.food_placement, FoodPlacement::Uniform);
    }

    #[test]
    fn test_bounds() {
        let config = GameConfig::default();
        assert!(config.in_bounds(Cell::new(0, 0)));
        assert!(config.in_bounds(Cell::new(COLS - 1, ROWS - 1)));
        assert!(!config.in_bounds(Cell::new(-1, 0)));
        assert!(!config.in_bounds(Cell::new(0, -1)));
        assert!(!config.in_bounds(Cell::new(COLS, 0)));
        assert!(!config.in_bounds(Cell::new(0, ROWS)));
    }

    #[test]
    fn test_avoiding_snake_keeps_other_rules() {
        let config = GameConfig::avoiding_snake();
        assert_eq!(config.food_placement, FoodPlacement::AvoidSnake);
        assert_eq!(config.initial_delay_ms, INITIAL_DELAY_MS);
        assert_eq!(config.start, START_CELL);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(None), LevelFilter::Info);
        assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(log_level(Some("loud")), LevelFilter::Info);
    }
}
