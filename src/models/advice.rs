use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::swatch::ColorSwatch;

/// Color-wheel relation behind a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PairingKind {
    /// Complementary hue, 180° away
    Contrast,
    /// Analogous hues, next to the base
    Harmony,
    /// Low-saturation companions
    Neutral,
}

impl PairingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contrast => "contrast",
            Self::Harmony => "harmony",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for PairingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggested set of accent colors with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorPairing {
    pub key: PairingKind,
    pub title: String,
    pub colors: Vec<ColorSwatch>,
    pub rationale: String,
    /// Set when the pairing features one of the user's favorite colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

/// Advice returned for a garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorAdvice {
    /// `null` when no color was supplied
    pub base_color: Option<ColorSwatch>,
    pub summary: String,
    /// At most two pairings, best first
    pub pairings: Vec<ColorPairing>,
}
