use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must be positive")]
    InvalidDimensions,
    #[error("Mine density must be a percentage between 0 and 100")]
    InvalidDensity,
    #[error("Unrecognized move state")]
    InvalidMoveState,
    #[error("Unrecognized session state")]
    InvalidSessionState,
}

pub type Result<T> = core::result::Result<T, GameError>;
