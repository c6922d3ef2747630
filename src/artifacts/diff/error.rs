use thiserror::Error;

/// Which input sequence an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Old => write!(f, "old"),
            Side::New => write!(f, "new"),
        }
    }
}

/// Errors produced by the diff engine.
///
/// The engine is pure and deterministic, so none of these are transient.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("invalid argument: {side} line {index} is blank or not trimmed: {line:?}")]
    InvalidLine {
        side: Side,
        index: usize,
        line: String,
    },

    #[error("malformed state: {side} line {index} has not been classified")]
    Unclassified { side: Side, index: usize },
}

impl DiffError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DiffError::InvalidLine { .. })
    }

    pub fn is_malformed_state(&self) -> bool {
        matches!(self, DiffError::Unclassified { .. })
    }
}
