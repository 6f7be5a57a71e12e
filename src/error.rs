use thiserror::Error;

/// Errors raised while constructing dice and boards.
///
/// These are fatal configuration errors: a malformed die or board is never
/// usable in a degraded mode. Query-time failures ("word not found") are not
/// errors and are reported through boolean results instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("a die must have at least one face")]
    EmptyFaceSet,

    #[error("die face labels must not be blank")]
    BlankFace,

    #[error("a {rows}x{cols} board needs {expected} face sets, got {got}")]
    DiceCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },

    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },
}
