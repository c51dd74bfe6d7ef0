//! Error types for board snapshot conversion.

use std::fmt;

/// Error type for cell-code snapshot parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellCodeError {
    /// Cell code outside the valid range 0-4
    InvalidCode { code: u8, row: usize, col: usize },
}

impl fmt::Display for CellCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellCodeError::InvalidCode { code, row, col } => {
                write!(f, "Invalid cell code {code} at ({row}, {col}), expected 0-4")
            }
        }
    }
}

impl std::error::Error for CellCodeError {}
