//! sRGB color type
//!
//! sRGB is the encoding of every hex string the app sees: detected garment
//! colors, profile favorites and the named palette table.

use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use crate::palette::ParseColorError;

/// Hex used whenever an input color cannot be parsed.
pub const FALLBACK_HEX: &str = "#000000";

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Canonical uppercase `#RRGGBB` form.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Srgb;
    /// let navy: Srgb = "#1f2937".parse().unwrap();
    /// assert_eq!(navy.to_hex(), "#1F2937");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<LinearRgb> for Srgb {
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: LinearRgb::encode(linear.r),
            g: LinearRgb::encode(linear.g),
            b: LinearRgb::encode(linear.b),
        }
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Checked up front so byte slicing below stays on char boundaries
        // and `from_str_radix` never sees a sign character.
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }

        let digit = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|_| ParseColorError::InvalidHex(s.to_string()))
        };

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = digit(0..1)? * 17;
                let g = digit(1..2)? * 17;
                let b = digit(2..3)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => Ok(Self::from_u8(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Normalize any hex-ish string to uppercase `#RRGGBB`.
///
/// Never fails: input that does not parse becomes [`FALLBACK_HEX`].
///
/// ```
/// use color_harmony::normalize_hex;
/// assert_eq!(normalize_hex(" #abc "), "#AABBCC");
/// assert_eq!(normalize_hex("not a color"), "#000000");
/// ```
pub fn normalize_hex(input: &str) -> String {
    input
        .parse::<Srgb>()
        .map(Srgb::to_hex)
        .unwrap_or_else(|_| FALLBACK_HEX.to_string())
}
