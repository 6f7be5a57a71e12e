use crate::dictionary::Dictionary;
use crate::game::{board::Board, path};

/// Combines dictionary membership with board placement into the single
/// question the game asks: is this string a valid word on this board?
pub struct WordValidator {
    dictionary: Dictionary,
}

impl WordValidator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// True iff `word` is in the dictionary and can be traced as a
    /// non-repeating path of adjacent cells on `board`.
    ///
    /// The dictionary lookup runs first so unknown words never pay for the
    /// path search. Case-insensitive; empty or unplaceable input is simply
    /// false, never an error.
    pub fn is_boggle_word(&self, board: &Board, word: &str) -> bool {
        self.dictionary.contains(word) && path::exists(board, word)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
