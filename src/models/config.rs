use crate::assets::AssetLoader;
use color_harmony::NamedColor;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::advice::PairingKind;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Named colors appended to the built-in palette
    #[serde(default)]
    pub palette: Vec<NamedColor>,

    /// Style descriptor to favored pairing relation
    #[serde(default)]
    pub style_affinities: BTreeMap<String, PairingKind>,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to defaults on error
    pub fn parse(content: &str) -> Self {
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                let config = config.unwrap_or_default();
                tracing::info!(
                    palette = config.palette.len(),
                    style_affinities = config.style_affinities.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
