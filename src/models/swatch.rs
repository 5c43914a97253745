use color_harmony::NamedColor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named color, as detected on a garment or suggested as an accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorSwatch {
    /// Human-readable name, e.g. "Navy"
    #[serde(default)]
    pub name: String,
    /// Hex color; outputs are always uppercase `#RRGGBB`
    #[serde(default)]
    pub hex: String,
}

impl ColorSwatch {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Identity used to deduplicate swatches within a pairing.
    pub fn key(&self) -> String {
        format!("{}|{}", self.name.to_lowercase(), self.hex)
    }

    /// Same color by name (case-insensitive) or by hex.
    pub fn same_color(&self, other: &ColorSwatch) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) || self.hex == other.hex
    }
}

impl From<&NamedColor> for ColorSwatch {
    fn from(color: &NamedColor) -> Self {
        Self::new(color.name.clone(), color.hex.clone())
    }
}
