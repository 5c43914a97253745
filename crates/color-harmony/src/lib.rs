#![allow(clippy::excessive_precision)]

//! color-harmony: color-wheel relations for outfit pairing
//!
//! This library provides the color math behind ZMODA's outfit advice:
//! hex parsing, conversions between sRGB, linear RGB, Oklab and HSL, a
//! static table of named fashion colors, and the classic color-wheel
//! relations (complementary, analogous, neutral).
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{rich_palette, ColorFamily, Hsl, NamedPalette, Srgb};
//!
//! let navy: Srgb = "#1F2937".parse().unwrap();
//! let palette = NamedPalette::builtin();
//!
//! let accents = rich_palette(Hsl::from(navy));
//! let contrast = palette.find_nearest(accents.complementary, Some(ColorFamily::Chromatic));
//! assert!(!contrast.name.is_empty());
//! ```
//!
//! # Color Spaces
//!
//! | Color Space | Used For |
//! |-------------|----------|
//! | [`Srgb`] | Hex input/output, the palette table |
//! | [`Hsl`] | Hue rotation on the color wheel |
//! | [`Oklab`] | Perceptual distance when resolving names |
//!
//! Hue rotation happens in HSL because that is the wheel stylists reason
//! about: "opposite" and "next to" are defined on the HSL hue circle.
//! Resolving a computed color to a human name uses Oklab, where Euclidean
//! distance tracks perceived difference, so a rotated hue snaps to the
//! entry that *looks* closest rather than the one with the nearest bytes.

pub mod color;
pub mod harmony;
pub mod palette;

pub use color::{normalize_hex, Hsl, LinearRgb, Oklab, Srgb, FALLBACK_HEX};
pub use harmony::{matching_colors, rich_palette, MatchingColors, RichPalette};
pub use palette::{ColorFamily, NamedColor, NamedPalette, PaletteError, ParseColorError};
