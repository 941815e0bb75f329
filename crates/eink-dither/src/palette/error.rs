//! Error types for palette validation.

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette does not hold exactly two distinct colors.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Palette does not have exactly two entries
    WrongSize {
        /// Number of colors that were provided
        len: usize,
    },
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongSize { len } => {
                write!(f, "palette must have exactly 2 colors, got {}", len)
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
