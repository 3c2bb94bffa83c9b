use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board side must be at least 1")]
    InvalidDimension,
    #[error("Invalid configuration, need 1 <= size and 1 <= mines <= size * size - 1")]
    InvalidConfiguration,
    #[error("Coordinates are outside of the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
