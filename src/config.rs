use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    /// When set, the board is shuffled with a seeded RNG so runs are
    /// reproducible.
    pub board_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            board_seed: match env::var("BOARD_SEED") {
                Ok(raw) => Some(raw.parse().context("BOARD_SEED must be a number")?),
                Err(_) => None,
            },
        };

        Ok(Config { game })
    }
}
