use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::EngineError;
use crate::models::{Die, Position};
use crate::utils::dice_sets::CLASSIC_DICE;

/// A rows x cols grid of dice, each showing one face.
///
/// Cells are stored row-major. Adjacency is the 8-neighborhood clipped at
/// the grid edges. The board owns its dice; callers that need to inspect
/// them get value snapshots via [`Board::dice`], never live references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    dice: Vec<Die>,
}

impl Board {
    /// Build a board from dimensions and an ordered list of per-die face
    /// sets, one set per cell in row-major order.
    pub fn new<S: AsRef<str>>(
        rows: usize,
        cols: usize,
        face_sets: &[Vec<S>],
    ) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard { rows, cols });
        }
        let expected = rows * cols;
        if face_sets.len() != expected {
            return Err(EngineError::DiceCountMismatch {
                rows,
                cols,
                expected,
                got: face_sets.len(),
            });
        }
        let dice = face_sets
            .iter()
            .map(|faces| Die::new(faces))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows, cols, dice })
    }

    /// The standard 4x4 board built from the classic 16-die Boggle set.
    pub fn classic() -> Self {
        Self::new(4, 4, &CLASSIC_DICE).expect("classic dice table is well-formed")
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn die_count(&self) -> usize {
        self.dice.len()
    }

    pub(crate) fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// The label currently shown by the die at `pos`.
    pub fn label_at(&self, pos: Position) -> &str {
        self.dice[self.cell_index(pos)].value()
    }

    /// The up-to-8 in-bounds neighbors of `pos`, excluding `pos` itself,
    /// in row-major order.
    pub fn neighbors_of(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);
        for row in pos.row.saturating_sub(1)..=(pos.row + 1).min(self.rows - 1) {
            for col in pos.col.saturating_sub(1)..=(pos.col + 1).min(self.cols - 1) {
                if row != pos.row || col != pos.col {
                    neighbors.push(Position { row, col });
                }
            }
        }
        neighbors
    }

    /// A fresh snapshot of all dice in row-major cell order. Each returned
    /// die is an independent copy; mutating the list or the dice in it has
    /// no effect on the board.
    pub fn dice(&self) -> Vec<Die> {
        self.dice.clone()
    }

    /// Re-randomize the board: permute which die sits at which cell, then
    /// re-roll every die's shown face with an independent draw. The multiset
    /// of per-die face sets is unchanged; only placements and shown faces
    /// move.
    pub fn shuffle_and_roll(&mut self, rng: &mut impl Rng) {
        self.dice.shuffle(rng);
        for die in &mut self.dice {
            die.roll(rng);
        }
        tracing::debug!(rows = self.rows, cols = self.cols, "board shuffled and rolled");
    }
}
