use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, WriteLogger};

use snake::config::{self, LOG_FILE, LOG_LEVEL_ENV};
use snake::{GameConfig, SnakeGame};

fn main() -> Result<()> {
    let level = config::log_level(env::var(LOG_LEVEL_ENV).ok().as_deref());
    let log_file = File::create(LOG_FILE).with_context(|| format!("Error creating {}", LOG_FILE))?;
    WriteLogger::init(level, Config::default(), log_file).context("Error initializing logger")?;

    info!("starting snake");

    // Terminal is restored by run() before any error reaches us
    let mut game = SnakeGame::new(GameConfig::default())?;
    game.run()
}
