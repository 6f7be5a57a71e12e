pub mod die;

pub use die::{Die, Tile};

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, zero-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}
