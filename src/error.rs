//! Error types for the NFL depth chart service

use thiserror::Error;

use crate::cli::types::{PlayerNumber, Position};

pub type Result<T> = std::result::Result<T, DepthChartError>;

#[derive(Error, Debug)]
pub enum DepthChartError {
    #[error(
        "Player Number: {number}, Player Name: {name} already exists in Depth Chart For Position {position}"
    )]
    DuplicatePlayer {
        number: PlayerNumber,
        name: String,
        position: Position,
    },

    #[error("Position: {position} does not exist in the depth chart")]
    PositionNotFound { position: Position },

    #[error("Invalid position: {position:?}")]
    InvalidPosition { position: String },

    #[error("Failed to parse player number: {0}")]
    InvalidPlayerNumber(#[from] std::num::ParseIntError),

    #[error("Depth chart lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}
