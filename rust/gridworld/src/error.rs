use crate::{Continous, Discrete, State};

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Grid size must be positive, got {0}")]
    InvalidGridSize(Discrete),

    #[error("State {state} is outside the grid of {n_s} states")]
    StateOutOfRange { state: State, n_s: usize },

    #[error("Coordinates ({row}, {col}) are outside the {size}x{size} grid")]
    CoordinatesOutOfRange {
        row: Discrete,
        col: Discrete,
        size: Discrete,
    },

    #[error("Value function has {actual} entries, expected {expected}")]
    ValueLengthMismatch { expected: usize, actual: usize },

    #[error("Convergence threshold must be positive, got {0}")]
    InvalidTheta(Continous),

    #[error("Policy table row {state} has {actual} entries, expected {expected}")]
    PolicyShapeMismatch {
        state: State,
        expected: usize,
        actual: usize,
    },
}
