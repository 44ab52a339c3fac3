//! Error types for Wiring Core

use thiserror::Error;

use crate::board::Direction;

#[derive(Error, Debug)]
pub enum WiringError {
    #[error("Duplicate port order: {direction} port {order} appears more than once")]
    DuplicatePortOrder { direction: Direction, order: u32 },

    #[error("Port order out of range: {direction} port {order} is not below the board limit {limit}")]
    PortOrderOutOfRange {
        direction: Direction,
        order: u32,
        limit: u32,
    },

    #[error("Sequence order out of range: {direction} port {order} uses sequence {sequence}, capacity is {capacity}")]
    SequenceOrderOutOfRange {
        direction: Direction,
        order: u32,
        sequence: u32,
        capacity: u32,
    },

    #[error("Duplicate sequence order: {direction} port {order} assigns sequence {sequence} more than once")]
    DuplicateSequenceOrder {
        direction: Direction,
        order: u32,
        sequence: u32,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl WiringError {
    /// True when the descriptor contradicts itself and availability for the
    /// board must be treated as unknown.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            WiringError::DuplicatePortOrder { .. }
                | WiringError::PortOrderOutOfRange { .. }
                | WiringError::SequenceOrderOutOfRange { .. }
                | WiringError::DuplicateSequenceOrder { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WiringError>;
