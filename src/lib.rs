//! Grid snake: a rules engine for the game plus a crossterm front end.
//!
//! [`state::GameState`] holds the board and applies intents and ticks; the
//! renderer, input mapping and tick scheduler only read from it or feed it.

pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod snake;
pub mod state;
pub mod term;

pub type TermInt = u16;

pub use config::GameConfig;
pub use game::SnakeGame;
pub use snake::{Cell, Direction, Snake};
pub use state::{Collision, GameState, Status, TickOutcome};
