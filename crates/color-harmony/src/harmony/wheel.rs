use crate::color::{Hsl, Srgb};

/// Hue offset of the complementary color.
pub const COMPLEMENTARY_OFFSET: f32 = 180.0;

/// Hue offset of each analogous neighbor.
pub const ANALOGOUS_OFFSET: f32 = 30.0;

/// Hue used in place of a grey base's meaningless hue.
pub const ACHROMATIC_ANCHOR_HUE: f32 = 210.0;

const RICH_SATURATION: (f32, f32) = (0.55, 0.85);
const RICH_LIGHTNESS: (f32, f32) = (0.42, 0.62);

const DARK_BASE_MAX_LIGHTNESS: f32 = 0.45;
const LIGHT_BASE_MIN_LIGHTNESS: f32 = 0.65;

/// Textbook color-wheel relations of a base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingColors {
    pub base: Hsl,
    pub complementary: Hsl,
    /// Counter-clockwise neighbor first, then clockwise.
    pub analogous: [Hsl; 2],
}

/// Compute complementary and analogous hues, keeping saturation and
/// lightness of the base.
///
/// ```
/// use color_harmony::{matching_colors, Hsl};
///
/// let m = matching_colors(Hsl::new(215.0, 0.28, 0.17));
/// assert_eq!(m.complementary.h, 35.0);
/// assert_eq!(m.analogous[0].h, 185.0);
/// assert_eq!(m.analogous[1].h, 245.0);
/// ```
pub fn matching_colors(base: Hsl) -> MatchingColors {
    MatchingColors {
        base,
        complementary: base.rotate(COMPLEMENTARY_OFFSET),
        analogous: [base.rotate(-ANALOGOUS_OFFSET), base.rotate(ANALOGOUS_OFFSET)],
    }
}

/// Accent targets suitable for clothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RichPalette {
    pub complementary: Srgb,
    pub analogous: [Srgb; 2],
    /// Desaturated companions, lightest-contrast first.
    pub neutrals: Vec<Srgb>,
}

/// Build wearable accent targets for a base color.
///
/// Chromatic accents are the [`matching_colors`] relations with saturation
/// clamped to 0.55..=0.85 and lightness to 0.42..=0.62, so a near-black
/// navy still suggests a visible ochre rather than a near-black brown.
/// Achromatic bases rotate from [`ACHROMATIC_ANCHOR_HUE`].
///
/// Neutrals contrast with the base's lightness: dark bases get light
/// neutrals, light bases get dark ones, mid-tones get one of each.
pub fn rich_palette(base: Hsl) -> RichPalette {
    let anchor = if base.is_achromatic() {
        Hsl::new(ACHROMATIC_ANCHOR_HUE, base.s, base.l)
    } else {
        base
    };
    let relations = matching_colors(anchor);

    RichPalette {
        complementary: enrich(relations.complementary),
        analogous: relations.analogous.map(enrich),
        neutrals: neutral_targets(anchor)
            .into_iter()
            .map(Srgb::from)
            .collect(),
    }
}

fn enrich(color: Hsl) -> Srgb {
    let s = color.s.clamp(RICH_SATURATION.0, RICH_SATURATION.1);
    let l = color.l.clamp(RICH_LIGHTNESS.0, RICH_LIGHTNESS.1);
    Srgb::from(color.with_saturation(s).with_lightness(l))
}

fn neutral_targets(base: Hsl) -> [Hsl; 2] {
    if base.l < DARK_BASE_MAX_LIGHTNESS {
        [Hsl::new(base.h, 0.06, 0.94), Hsl::new(38.0, 0.40, 0.80)]
    } else if base.l > LIGHT_BASE_MIN_LIGHTNESS {
        [Hsl::new(base.h, 0.10, 0.22), Hsl::new(30.0, 0.30, 0.45)]
    } else {
        [Hsl::new(base.h, 0.05, 0.95), Hsl::new(base.h, 0.08, 0.18)]
    }
}
