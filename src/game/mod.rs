// Game engine modules

pub mod board;
pub mod engine;
pub mod path;
pub mod validator;

pub use board::Board;
pub use engine::Boggle;
pub use validator::WordValidator;
