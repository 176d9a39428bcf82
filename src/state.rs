//! The rules engine: everything that happens on the board, and nothing about
//! how it is drawn or how keys arrive.

use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{FoodPlacement, GameConfig};
use crate::snake::{Cell, Direction, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// What a single tick did. `new_delay` is set whenever the tick period
/// changed and the scheduler has to pick it up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collision: Option<Collision>,
    pub new_delay: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GameState<R = ThreadRng> {
    config: GameConfig,
    rng: R,
    snake: Snake,
    food: Cell,
    pending_direction: Option<Direction>,
    score: u32,
    delay: u64,
    game_over: bool,
    paused: bool,
}

impl<R> GameState<R> {
    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else if self.paused {
            Status::Paused
        } else {
            Status::Running
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.snake.get_direction()
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn delay(&self) -> u64 {
        self.delay
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl GameState<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        GameState::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let mut state = GameState {
            snake: Snake::new(config.start, config.start_direction),
            food: config.start,
            pending_direction: None,
            score: 0,
            delay: config.initial_delay_ms,
            game_over: false,
            paused: false,
            config,
            rng,
        };
        state.food = state.place_food();
        state
    }

    /// Back to the starting position with a fresh food placement.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.start, self.config.start_direction);
        self.pending_direction = None;
        self.score = 0;
        self.delay = self.config.initial_delay_ms;
        self.game_over = false;
        self.paused = false;
        self.food = self.place_food();
    }

    /// Queues a turn for the next tick. Reversals and turns after the game
    /// ended are dropped.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || direction.is_opposite(self.snake.get_direction()) {
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }

        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.game_over || self.paused {
            return outcome;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.snake.set_direction(direction);
        }

        let new_head = self.snake.next_head();

        if new_head == self.food {
            self.snake.move_to(new_head, true);
            self.score += self.config.food_reward;
            self.food = self.place_food();
            outcome.ate_food = true;
            outcome.new_delay = self.speed_up();
        } else {
            self.snake.move_to(new_head, false);
        }

        // The colliding head stays in place; the board is frozen as it died.
        if !self.config.in_bounds(new_head) {
            outcome.collision = Some(Collision::Wall);
        } else if self.snake.body_contains(new_head) {
            outcome.collision = Some(Collision::SelfCollision);
        }

        if let Some(collision) = outcome.collision {
            self.game_over = true;
            info!("game over ({:?}) at {:?} with score {}", collision, new_head, self.score);
        }

        outcome
    }

    /// Picks the next food cell according to the configured placement.
    pub fn place_food(&mut self) -> Cell {
        match self.config.food_placement {
            FoodPlacement::Uniform => self.random_cell(),
            FoodPlacement::AvoidSnake => {
                let snake = &self.snake;
                let free: Vec<Cell> = (0..self.config.rows)
                    .flat_map(|y| (0..self.config.cols).map(move |x| Cell::new(x, y)))
                    .filter(|cell| !snake.contains(*cell))
                    .collect();

                match free.choose(&mut self.rng) {
                    Some(cell) => *cell,
                    None => {
                        warn!("no free cell left for food, placing it anywhere");
                        self.random_cell()
                    }
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn random_cell(&mut self) -> Cell {
        Cell::new(
            self.rng.gen_range(0..self.config.cols),
            self.rng.gen_range(0..self.config.rows),
        )
    }

    fn speed_up(&mut self) -> Option<u64> {
        let every = self.config.speedup_every;
        if self.score == 0 || every == 0 || self.score % every != 0 {
            return None;
        }
        if self.delay <= self.config.min_delay_ms {
            return None;
        }

        self.delay = self
            .delay
            .saturating_sub(self.config.delay_step_ms)
            .max(self.config.min_delay_ms);
        info!("score {}, tick delay now {}ms", self.score, self.delay);
        Some(self.delay)
    }
}

#[cfg(test)]
impl<R: Rng> GameState<R> {
    /// Puts the snake and the food exactly where a test needs them.
    pub(crate) fn arrange(&mut self, snake: Snake, food: Cell) {
        self.snake = snake;
        self.food = food;
        self.pending_direction = None;
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
