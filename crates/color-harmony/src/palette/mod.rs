//! Named color palette
//!
//! This module provides the static table of human-readable fashion color
//! names and perceptual nearest-name lookup over it.

mod error;
mod named;
mod table;

pub use error::{PaletteError, ParseColorError};
pub use named::{ColorFamily, NamedColor, NamedPalette};
