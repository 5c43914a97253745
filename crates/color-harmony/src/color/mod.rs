//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - **sRGB**: hex strings and palette entries. Use for I/O.
//! - **LinearRgb**: linear light, the bridge into Oklab.
//! - **Oklab**: perceptual distance.
//! - **Hsl**: hue angle arithmetic for color-wheel relations.
//!
//! # Example
//!
//! ```
//! use color_harmony::{Hsl, Srgb};
//!
//! let teal: Srgb = "#008080".parse().unwrap();
//! let hsl = Hsl::from(teal);
//! assert!((hsl.h - 180.0).abs() < 0.5);
//! ```

mod hsl;
mod linear_rgb;
mod oklab;
mod srgb;

pub use hsl::Hsl;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use srgb::{normalize_hex, Srgb, FALLBACK_HEX};
