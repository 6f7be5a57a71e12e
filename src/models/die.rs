use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A single labeled face of a die.
///
/// The label is stored in uppercase canonical form and may be longer than one
/// character: the classic dice set contains a combined `"QU"` face, which is
/// matched as one atomic unit during path search. Two tiles on different
/// faces may carry the same label; the face number is what tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    label: String,
}

impl Tile {
    fn new(label: &str) -> Result<Self, EngineError> {
        let label = label.trim().to_uppercase();
        if label.is_empty() {
            return Err(EngineError::BlankFace);
        }
        Ok(Self { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An n-sided die whose faces are decorated with strings.
///
/// The face set is fixed at construction and never changes afterwards;
/// rolling only moves the pointer to the currently shown face. Cloning
/// yields an independent die with the same faces showing the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<Tile>,
    current: usize,
}

impl Die {
    /// Build a die with one face per entry in `faces`.
    ///
    /// The initial shown face is the first entry. Fails if `faces` is empty
    /// or any label is blank.
    pub fn new<S: AsRef<str>>(faces: &[S]) -> Result<Self, EngineError> {
        if faces.is_empty() {
            return Err(EngineError::EmptyFaceSet);
        }
        let faces = faces
            .iter()
            .map(|s| Tile::new(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { faces, current: 0 })
    }

    /// Number of faces on this die.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Roll to a uniformly random face and return the label now showing.
    pub fn roll(&mut self, rng: &mut impl Rng) -> &str {
        self.current = rng.random_range(0..self.faces.len());
        self.value()
    }

    /// The label of the currently shown face.
    pub fn value(&self) -> &str {
        self.faces[self.current].label()
    }

    /// Face-number to label mapping, numbered 1 through n and sorted by face
    /// number. The map is built fresh on every call, so mutating it has no
    /// effect on the die.
    pub fn value_map(&self) -> BTreeMap<u8, String> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, tile)| ((i + 1) as u8, tile.label().to_string()))
            .collect()
    }

    /// All face labels in ascending order, independent of which face is
    /// currently shown. Useful for comparing dice by face set.
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> =
            self.faces.iter().map(|t| t.label().to_string()).collect();
        labels.sort();
        labels
    }
}
