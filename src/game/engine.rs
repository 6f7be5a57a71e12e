use rand::Rng;

use crate::dictionary::Dictionary;
use crate::game::{board::Board, validator::WordValidator};
use crate::models::Die;

/// The Boggle game model: one board plus one validator, exposing the
/// surface the app shell consumes.
///
/// The engine does no internal locking. `shuffle_and_roll` mutates the
/// board in place, so callers sharing a game across threads must serialize
/// access themselves; `is_a_boggle_word` is a pure read of board state.
pub struct Boggle {
    board: Board,
    validator: WordValidator,
}

impl Boggle {
    pub fn new(board: Board, dictionary: Dictionary) -> Self {
        Self {
            board,
            validator: WordValidator::new(dictionary),
        }
    }

    /// A game on the standard 16-die 4x4 board.
    pub fn classic(dictionary: Dictionary) -> Self {
        Self::new(Board::classic(), dictionary)
    }

    /// True iff `word` is in the dictionary and placeable on the current
    /// board. Pure and idempotent for a fixed board state.
    pub fn is_a_boggle_word(&self, word: &str) -> bool {
        self.validator.is_boggle_word(&self.board, word)
    }

    /// Re-randomize the board with the thread-local RNG.
    pub fn shuffle_and_roll(&mut self) {
        let mut rng = rand::rng();
        self.board.shuffle_and_roll(&mut rng);
    }

    /// Re-randomize the board with a caller-supplied RNG; a seeded `StdRng`
    /// makes runs reproducible.
    pub fn shuffle_and_roll_with(&mut self, rng: &mut impl Rng) {
        self.board.shuffle_and_roll(rng);
    }

    /// Independent snapshot of the dice, in row-major cell order.
    pub fn dice(&self) -> Vec<Die> {
        self.board.dice()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
