use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use log::info;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::input::Intent;
use crate::render::{Canvas, Renderer};
use crate::scheduler::Ticker;
use crate::state::{GameState, TickOutcome};
use crate::term::TermManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Game state plus the clock that drives it. Intents and ticks are applied
/// on the same thread, so a tick always sees a settled set of intents.
pub struct Session<R = ThreadRng> {
    state: GameState<R>,
    ticker: Ticker,
}

impl<R: Rng> Session<R> {
    pub fn new(state: GameState<R>, now: Instant) -> Self {
        let ticker = Ticker::new(state.delay(), now);
        Session { state, ticker }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn apply(&mut self, intent: Intent, now: Instant) -> Flow {
        match intent {
            Intent::Turn(direction) => {
                self.state.set_direction(direction);
            }
            Intent::TogglePause => self.state.toggle_pause(),
            Intent::Restart => {
                if self.state.is_game_over() {
                    self.state.reset();
                    self.ticker.restart(self.state.delay(), now);
                    info!("restarting");
                }
            }
            Intent::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    /// Runs a tick if one is due, handing any new period to the ticker.
    pub fn step(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.ticker.is_due(now) {
            return None;
        }

        self.ticker.mark(now);
        let outcome = self.state.tick();
        if let Some(delay) = outcome.new_delay {
            self.ticker.set_delay(delay);
        }

        Some(outcome)
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Duration {
        self.ticker.time_until_next(now)
    }
}

pub struct SnakeGame {
    session: Session,
    renderer: Renderer,
    canvas: Canvas,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        let term = TermManager::new()?;
        let renderer = Renderer::new(&config);

        let (width, height) = term.get_terminal_size();
        let (board_w, board_h) = renderer.board_size();
        if width < board_w || height < board_h {
            bail!(
                "terminal is {}x{}, the board needs at least {}x{}",
                width, height, board_w, board_h
            );
        }

        let session = Session::new(GameState::new(config), Instant::now());
        Ok(SnakeGame { session, renderer, canvas: Canvas::new(width, height), term })
    }

    /// Takes over the terminal until the player quits, restoring it even when
    /// the game loop fails.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let result = self.play();
        self.term.restore()?;
        result
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        self.draw()?;

        loop {
            let timeout = self.session.time_until_next_tick(Instant::now());

            for key_ev in self.term.read_key_events(timeout)? {
                if let Some(intent) = Intent::from_key_event(&key_ev) {
                    if self.session.apply(intent, Instant::now()) == Flow::Quit {
                        info!("quitting with score {}", self.session.state().score());
                        return Ok(());
                    }
                }
            }

            self.session.step(Instant::now());
            self.draw()?;
        }
    }

    fn draw(&mut self) -> Result<()> {
        let (width, height) = self.term.get_terminal_size();
        if (width, height) != (self.canvas.width(), self.canvas.height()) {
            self.canvas = Canvas::new(width, height);
        }

        self.renderer.draw(self.session.state(), &mut self.canvas);
        self.term.present(&self.canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COLS;
    use crate::snake::{Cell, Direction::*, Snake};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(start: Instant) -> Session<StdRng> {
        let state = GameState::with_rng(GameConfig::default(), StdRng::seed_from_u64(11));
        Session::new(state, start)
    }

    fn after(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_ticks_only_when_due() {
        let start = Instant::now();
        let mut session = session(start);
        session.state.arrange(Snake::new(Cell::new(5, 5), Right), Cell::new(20, 20));

        assert_eq!(session.step(after(start, 100)), None);
        assert!(session.step(after(start, 150)).is_some());
        assert_eq!(session.state().snake().head(), Cell::new(6, 5));
        assert_eq!(session.step(after(start, 200)), None);
    }

    #[test]
    fn test_speed_up_reaches_ticker() {
        let start = Instant::now();
        let mut session = session(start);
        session.state.set_score(40);
        session.state.arrange(Snake::new(Cell::new(5, 5), Right), Cell::new(6, 5));

        let outcome = session.step(after(start, 150)).unwrap();

        assert_eq!(outcome.new_delay, Some(140));
        assert_eq!(session.ticker().delay(), 140);
        assert!(!session.ticker().is_due(after(start, 289)));
        assert!(session.ticker().is_due(after(start, 290)));
    }

    #[test]
    fn test_turn_and_pause_intents() {
        let start = Instant::now();
        let mut session = session(start);

        assert_eq!(session.apply(Intent::Turn(Down), start), Flow::Continue);
        assert_eq!(session.state().pending_direction(), Some(Down));

        session.apply(Intent::TogglePause, start);
        assert!(session.state().is_paused());
        session.apply(Intent::TogglePause, start);
        assert!(!session.state().is_paused());
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let start = Instant::now();
        let mut session = session(start);
        session.state.arrange(Snake::new(Cell::new(7, 5), Right), Cell::new(20, 20));

        session.apply(Intent::Restart, start);
        assert_eq!(session.state().snake().head(), Cell::new(7, 5));

        session.state.arrange(Snake::new(Cell::new(COLS - 1, 5), Right), Cell::new(20, 20));
        session.step(after(start, 150));
        assert!(session.state().is_game_over());

        let later = after(start, 1000);
        session.apply(Intent::Restart, later);

        assert!(!session.state().is_game_over());
        assert_eq!(session.state().snake().head(), Cell::new(5, 5));
        assert_eq!(session.ticker().delay(), 150);
        assert_eq!(session.time_until_next_tick(later), Duration::from_millis(150));
    }

    #[test]
    fn test_quit() {
        let start = Instant::now();
        let mut session = session(start);
        assert_eq!(session.apply(Intent::Quit, start), Flow::Quit);
    }
}
