//! Named palette with perceptual nearest-name matching.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::PaletteError;
use super::table::BUILTIN;
use crate::color::{Oklab, Srgb};

/// Whether a palette entry is a hue in its own right or a neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Chromatic,
    Neutral,
}

/// A human-readable color name with its canonical hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    /// Uppercase `#RRGGBB`
    pub hex: String,
    pub family: ColorFamily,
}

impl NamedColor {
    fn from_bytes(name: &str, bytes: [u8; 3], family: ColorFamily) -> Self {
        Self {
            name: name.to_string(),
            hex: Srgb::from_u8(bytes[0], bytes[1], bytes[2]).to_hex(),
            family,
        }
    }
}

/// A table of named colors with precomputed Oklab coordinates.
///
/// Names are unique case-insensitively. The palette is never empty, so
/// [`NamedPalette::find_nearest`] always has an answer.
///
/// # Example
///
/// ```
/// use color_harmony::{NamedPalette, Srgb};
///
/// let palette = NamedPalette::builtin();
/// let nearest = palette.find_nearest(Srgb::from_u8(252, 252, 252), None);
/// assert_eq!(nearest.name, "White");
/// ```
#[derive(Debug, Clone)]
pub struct NamedPalette {
    colors: Vec<NamedColor>,
    // Precomputed once: entries never change after construction
    oklab: Vec<Oklab>,
}

impl NamedPalette {
    /// Build a palette from arbitrary entries.
    ///
    /// Hex values are normalized to uppercase `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] when `colors` is empty
    /// - [`PaletteError::EmptyName`] for a blank name
    /// - [`PaletteError::DuplicateName`] for a repeated name (case-insensitive)
    /// - [`PaletteError::ParseColor`] for an invalid hex
    pub fn new(colors: Vec<NamedColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(colors.len());
        let mut oklab = Vec::with_capacity(colors.len());

        for (index, color) in colors.into_iter().enumerate() {
            let name = color.name.trim().to_string();
            if name.is_empty() {
                return Err(PaletteError::EmptyName { index });
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(PaletteError::DuplicateName { name });
            }
            let srgb: Srgb = color
                .hex
                .parse()
                .map_err(|source| PaletteError::ParseColor {
                    name: name.clone(),
                    source,
                })?;

            oklab.push(Oklab::from(srgb));
            normalized.push(NamedColor {
                name,
                hex: srgb.to_hex(),
                family: color.family,
            });
        }

        Ok(Self {
            colors: normalized,
            oklab,
        })
    }

    /// The built-in fashion color table.
    pub fn builtin() -> Self {
        let colors: Vec<NamedColor> = BUILTIN
            .iter()
            .map(|&(name, bytes, family)| NamedColor::from_bytes(name, bytes, family))
            .collect();
        let oklab = BUILTIN
            .iter()
            .map(|&(_, [r, g, b], _)| Oklab::from(Srgb::from_u8(r, g, b)))
            .collect();
        Self { colors, oklab }
    }

    /// Append entries, validating the combined table.
    pub fn with_colors(self, extra: Vec<NamedColor>) -> Result<Self, PaletteError> {
        let mut colors = self.colors;
        colors.extend(extra);
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[NamedColor] {
        &self.colors
    }

    /// Look up an entry by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&NamedColor> {
        let name = name.trim();
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find the perceptually nearest entry, optionally within one family.
    ///
    /// Falls back to the whole table when no entry has the requested family.
    /// Ties resolve to the earlier entry, keeping results deterministic.
    pub fn find_nearest(&self, color: Srgb, family: Option<ColorFamily>) -> &NamedColor {
        let target = Oklab::from(color);
        self.nearest_index(target, family)
            .or_else(|| self.nearest_index(target, None))
            .map(|idx| &self.colors[idx])
            .unwrap_or(&self.colors[0])
    }

    fn nearest_index(&self, target: Oklab, family: Option<ColorFamily>) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        // Linear scan: the table holds a few dozen entries
        for (i, (color, &lab)) in self.colors.iter().zip(&self.oklab).enumerate() {
            if family.is_some_and(|f| f != color.family) {
                continue;
            }
            let dist = target.distance_squared(lab);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl Default for NamedPalette {
    fn default() -> Self {
        Self::builtin()
    }
}
