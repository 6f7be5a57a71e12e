//! Boggle board-path validation engine.
//!
//! A board is a fixed-size grid of lettered dice; the engine answers one
//! question about it: can a candidate string be traced as a non-repeating
//! path of adjacent cells whose face labels spell the string, and is that
//! string in the dictionary? Shuffling re-randomizes die placements and
//! shown faces without ever altering any die's face set.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use config::Config;
pub use dictionary::Dictionary;
pub use error::EngineError;
pub use game::{Boggle, Board, WordValidator};
pub use models::{Die, Position, Tile};
