//! Error types for color parsing and palette validation.

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Non-hexadecimal character encountered
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette cannot be empty")]
    EmptyPalette,

    #[error("color at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate color name {name:?}")]
    DuplicateName { name: String },

    #[error("invalid color for {name:?}: {source}")]
    ParseColor {
        name: String,
        #[source]
        source: ParseColorError,
    },
}
