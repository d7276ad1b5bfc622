use core::fmt;

use crate::topology::{MATRIX_DIM, POWER_BUDGET};

/// Broad category of a [`PatternError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied mask was rejected before encoding
    Validation,
    /// Encoder produced inconsistent output. Indicates a topology bug.
    Internal,
    /// Pattern sequence has no free slot
    Capacity,
}

/// Errors produced while validating, encoding or storing patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Input is not a 16x16 grid
    InvalidShape { rows: usize, cols: usize },
    /// Cell value is neither 0 nor 1
    InvalidCell { col: usize, row: usize, value: u8 },
    /// Too many LEDs lit at once
    PowerBudgetExceeded { lit: usize },
    /// Number of set register bits differs from the number of lit cells
    EncodingMismatch { expected: usize, actual: usize },
    /// Sequence is at capacity
    SequenceFull,
}

impl PatternError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidShape { .. }
            | Self::InvalidCell { .. }
            | Self::PowerBudgetExceeded { .. } => ErrorKind::Validation,
            Self::EncodingMismatch { .. } => ErrorKind::Internal,
            Self::SequenceFull => ErrorKind::Capacity,
        }
    }

    /// Returns true if the caller's input was rejected
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { rows, cols } => {
                write!(
                    f,
                    "invalid pattern shape {rows}x{cols}, expected {MATRIX_DIM}x{MATRIX_DIM}"
                )
            }
            Self::InvalidCell { col, row, value } => {
                write!(f, "invalid cell value {value} at ({col}, {row}), expected 0 or 1")
            }
            Self::PowerBudgetExceeded { lit } => {
                write!(f, "{lit} lit LEDs exceed the power budget of {POWER_BUDGET}")
            }
            Self::EncodingMismatch { expected, actual } => {
                write!(f, "encoded {actual} bits for {expected} lit LEDs")
            }
            Self::SequenceFull => write!(f, "pattern sequence is full"),
        }
    }
}

impl core::error::Error for PatternError {}
