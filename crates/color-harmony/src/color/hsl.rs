//! HSL cylinder for color-wheel arithmetic.
//!
//! Hue is kept in degrees in `0.0..360.0` so that "complementary" is a
//! literal `+180`.

use super::srgb::Srgb;

/// Saturation below which a color reads as grey and its hue is noise.
const ACHROMATIC_SATURATION: f32 = 0.08;

/// A color as hue (degrees), saturation and lightness (both 0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create an HSL color; hue is wrapped, saturation and lightness clamped.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Rotate the hue around the wheel, keeping saturation and lightness.
    ///
    /// ```
    /// use color_harmony::Hsl;
    /// let orange = Hsl::new(30.0, 0.8, 0.5);
    /// assert_eq!(orange.rotate(180.0).h, 210.0);
    /// assert_eq!(orange.rotate(-60.0).h, 330.0);
    /// ```
    pub fn rotate(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    pub fn with_saturation(self, s: f32) -> Self {
        Self::new(self.h, s, self.l)
    }

    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// True for greys, blacks and whites where hue carries no meaning.
    pub fn is_achromatic(self) -> bool {
        self.s < ACHROMATIC_SATURATION || self.l < 0.03 || self.l > 0.97
    }
}

fn wrap_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Srgb> for Hsl {
    fn from(c: Srgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d <= f32::EPSILON {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == c.r {
            (c.g - c.b) / d + if c.g < c.b { 6.0 } else { 0.0 }
        } else if max == c.g {
            (c.b - c.r) / d + 2.0
        } else {
            (c.r - c.g) / d + 4.0
        };

        Self::new(h * 60.0, s, l)
    }
}

impl From<Hsl> for Srgb {
    fn from(hsl: Hsl) -> Self {
        let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        let x = c * (1.0 - ((hsl.h / 60.0) % 2.0 - 1.0).abs());
        let m = hsl.l - c / 2.0;

        let (r, g, b) = match hsl.h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Srgb::new(r + m, g + m, b + m)
    }
}
