//! Linear RGB color type
//!
//! Linear RGB sits between sRGB and Oklab. Gamma is applied with the exact
//! IEC 61966-2-1 formula; the advisor converts a few dozen colors per
//! request so there is nothing to gain from a lookup table.

use super::srgb::Srgb;

/// A color in linear RGB color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// sRGB component to linear light.
    #[inline]
    pub fn decode(srgb: f32) -> f32 {
        let srgb = srgb.clamp(0.0, 1.0);
        if srgb <= 0.04045 {
            srgb / 12.92
        } else {
            ((srgb + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Linear light to sRGB component.
    #[inline]
    pub fn encode(linear: f32) -> f32 {
        let linear = linear.clamp(0.0, 1.0);
        if linear <= 0.003_130_8 {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: Self::decode(srgb.r),
            g: Self::decode(srgb.g),
            b: Self::decode(srgb.b),
        }
    }
}
