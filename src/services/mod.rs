// Service exports
pub mod scoreboard;

pub use scoreboard::{ScoreBoard, ScoreBoardError};
