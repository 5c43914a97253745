//! Personalized color pairing advice.
//!
//! The advisor is a pure function of its inputs and two immutable tables
//! (named colors and style affinities). It never fails: missing colors
//! produce a generic summary and malformed hex is coerced to black.

use std::collections::HashSet;
use std::sync::LazyLock;

use color_harmony::{normalize_hex, rich_palette, ColorFamily, Hsl, NamedPalette, Srgb};

use super::garment::normalize_garment;
use super::phrasing::{self, RationaleContext};
use super::sanitize::{sanitize_list, sanitize_text};
use super::style::{gender_clause, tone_word, StyleTable};
use crate::models::{
    AppConfig, ColorAdvice, ColorPairing, ColorSwatch, PairingKind, UserStyleProfile,
};

/// Most pairings returned per request.
pub const MAX_PAIRINGS: usize = 2;

/// Bonus for a pairing that features a favorite color, applied once.
pub const FAVORITE_BONUS: u32 = 3;

static DEFAULT_ADVISOR: LazyLock<ColorAdvisor> = LazyLock::new(ColorAdvisor::default);

/// Build advice with the built-in palette and style table.
///
/// `colors[0]` is the base color; an empty slice yields the generic
/// neutral suggestion.
///
/// ```
/// use zmoda::models::ColorSwatch;
/// use zmoda::services::build_personalized_color_advice;
///
/// let advice = build_personalized_color_advice(&[], Some("bottom"), None);
/// assert!(advice.base_color.is_none());
/// assert!(advice.pairings.is_empty());
///
/// let navy = [ColorSwatch::new("Navy", "#1f2937")];
/// let advice = build_personalized_color_advice(&navy, Some("top"), None);
/// assert_eq!(advice.base_color.unwrap().hex, "#1F2937");
/// assert!(advice.summary.contains("top"));
/// ```
pub fn build_personalized_color_advice(
    colors: &[ColorSwatch],
    garment_type: Option<&str>,
    profile: Option<&UserStyleProfile>,
) -> ColorAdvice {
    DEFAULT_ADVISOR.advise(colors, garment_type, profile)
}

/// Names and hexes from a profile color list, for exact matching.
#[derive(Debug, Default)]
struct ColorPreferences {
    names: HashSet<String>,
    hexes: HashSet<String>,
}

impl ColorPreferences {
    fn new(entries: &[String]) -> Self {
        let mut prefs = Self::default();
        for entry in sanitize_list(entries) {
            if let Ok(srgb) = entry.parse::<Srgb>() {
                prefs.hexes.insert(srgb.to_hex());
            }
            prefs.names.insert(entry.to_lowercase());
        }
        prefs
    }

    fn matches(&self, swatch: &ColorSwatch) -> bool {
        self.names.contains(&swatch.name.to_lowercase()) || self.hexes.contains(&swatch.hex)
    }
}

/// A pairing under consideration, before text is attached.
#[derive(Debug)]
struct Candidate {
    kind: PairingKind,
    accents: Vec<ColorSwatch>,
    score: u32,
    favorites: Vec<String>,
}

impl Candidate {
    /// Base weight of the relation plus style and favorite bonuses.
    fn score(&self, styles: &StyleTable, style_tags: &[String]) -> u32 {
        let base = match self.kind {
            PairingKind::Contrast => 8,
            PairingKind::Harmony => 6 + self.accents.len() as u32,
            PairingKind::Neutral => 5,
        };
        let favorite = if self.favorites.is_empty() {
            0
        } else {
            FAVORITE_BONUS
        };
        base + styles.bonus(self.kind, style_tags) + favorite
    }
}

/// Color advice engine holding its lookup tables.
#[derive(Debug, Clone, Default)]
pub struct ColorAdvisor {
    palette: NamedPalette,
    styles: StyleTable,
}

impl ColorAdvisor {
    pub fn new(palette: NamedPalette, styles: StyleTable) -> Self {
        Self { palette, styles }
    }

    /// Build an advisor from configuration.
    ///
    /// Invalid extra palette entries are skipped with a warning.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut palette = NamedPalette::builtin();
        for color in &config.palette {
            match palette.clone().with_colors(vec![color.clone()]) {
                Ok(extended) => palette = extended,
                Err(e) => tracing::warn!(name = %color.name, %e, "Skipping palette entry"),
            }
        }

        let styles = StyleTable::builtin().with_affinities(
            config
                .style_affinities
                .iter()
                .map(|(descriptor, kind)| (descriptor.as_str(), *kind)),
        );

        tracing::debug!(
            colors = palette.len(),
            styles = styles.len(),
            "Color advisor ready"
        );
        Self::new(palette, styles)
    }

    pub fn palette(&self) -> &NamedPalette {
        &self.palette
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Canonical swatch for an input color: uppercase hex, and the
    /// caller's name or the nearest table name.
    pub fn resolve_swatch(&self, input: &ColorSwatch) -> ColorSwatch {
        let hex = normalize_hex(&input.hex);
        let name = sanitize_text(&input.name);
        if !name.is_empty() {
            return ColorSwatch::new(name, hex);
        }
        let srgb = hex.parse::<Srgb>().unwrap_or(Srgb::new(0.0, 0.0, 0.0));
        let nearest = self.palette.find_nearest(srgb, None);
        ColorSwatch::new(nearest.name.clone(), hex)
    }

    /// Build personalized advice for a garment.
    pub fn advise(
        &self,
        colors: &[ColorSwatch],
        garment_type: Option<&str>,
        profile: Option<&UserStyleProfile>,
    ) -> ColorAdvice {
        let garment = normalize_garment(garment_type);

        let Some(first) = colors.first() else {
            return ColorAdvice {
                base_color: None,
                summary: phrasing::FALLBACK_SUMMARY.to_string(),
                pairings: Vec::new(),
            };
        };

        let default_profile = UserStyleProfile::default();
        let profile = profile.unwrap_or(&default_profile);

        let base = self.resolve_swatch(first);
        let base_srgb = base
            .hex
            .parse::<Srgb>()
            .unwrap_or_else(|_| Srgb::new(0.0, 0.0, 0.0));

        let dislikes = ColorPreferences::new(&profile.disliked_colors);
        let favorites = ColorPreferences::new(&profile.favorite_colors);
        let style_tags = sanitize_list(&profile.style_preferences);

        let mut candidates = self.candidates(&base, Hsl::from(base_srgb), &dislikes);
        let considered = candidates.len();

        for candidate in &mut candidates {
            candidate.favorites = candidate
                .accents
                .iter()
                .filter(|a| favorites.matches(a))
                .map(|a| a.name.clone())
                .collect();
            candidate.score = candidate.score(&self.styles, &style_tags);
        }

        // Stable: equal scores keep contrast, harmony, neutral order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates.truncate(MAX_PAIRINGS);

        let style = style_tags.first().map(|s| s.to_lowercase());
        let gender = gender_clause(profile.gender.as_deref());
        let tone = tone_word(profile.age);

        let pairings: Vec<ColorPairing> = candidates
            .into_iter()
            .map(|candidate| {
                let ctx = RationaleContext {
                    base_name: &base.name,
                    tone,
                    style: style.as_deref(),
                    gender,
                    favorite: !candidate.favorites.is_empty(),
                };
                ColorPairing {
                    key: candidate.kind,
                    title: phrasing::title(candidate.kind).to_string(),
                    rationale: phrasing::rationale(candidate.kind, &ctx),
                    highlight: (!candidate.favorites.is_empty()).then(|| {
                        format!(
                            "Features your favorite {}",
                            phrasing::join_names(&candidate.favorites)
                        )
                    }),
                    colors: candidate.accents,
                }
            })
            .collect();

        tracing::debug!(
            base = %base.hex,
            garment = %garment,
            considered,
            selected = pairings.len(),
            "Built color advice"
        );

        ColorAdvice {
            summary: phrasing::summary(&garment, &pairings),
            base_color: Some(base),
            pairings,
        }
    }

    /// Accent candidates per relation, with dislikes, the base itself and
    /// duplicates removed. Relations left without accents are dropped.
    fn candidates(
        &self,
        base: &ColorSwatch,
        base_hsl: Hsl,
        dislikes: &ColorPreferences,
    ) -> Vec<Candidate> {
        let rich = rich_palette(base_hsl);
        let targets: [(PairingKind, ColorFamily, Vec<Srgb>); 3] = [
            (
                PairingKind::Contrast,
                ColorFamily::Chromatic,
                vec![rich.complementary],
            ),
            (
                PairingKind::Harmony,
                ColorFamily::Chromatic,
                rich.analogous.to_vec(),
            ),
            (PairingKind::Neutral, ColorFamily::Neutral, rich.neutrals),
        ];

        targets
            .into_iter()
            .filter_map(|(kind, family, points)| {
                let mut seen = HashSet::new();
                let accents: Vec<ColorSwatch> = points
                    .into_iter()
                    .map(|p| ColorSwatch::from(self.palette.find_nearest(p, Some(family))))
                    .filter(|a| !a.same_color(base))
                    .filter(|a| !dislikes.matches(a))
                    .filter(|a| seen.insert(a.key()))
                    .collect();

                (!accents.is_empty()).then_some(Candidate {
                    kind,
                    accents,
                    score: 0,
                    favorites: Vec::new(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_harmony::FALLBACK_HEX;
    use pretty_assertions::assert_eq;

    fn navy() -> Vec<ColorSwatch> {
        vec![ColorSwatch::new("Navy", "#1f2937")]
    }

    fn profile() -> UserStyleProfile {
        UserStyleProfile {
            age: Some(25),
            favorite_colors: vec!["gold".to_string()],
            ..Default::default()
        }
    }

    fn accent_names(advice: &ColorAdvice) -> Vec<String> {
        advice
            .pairings
            .iter()
            .flat_map(|p| p.colors.iter().map(|c| c.name.clone()))
            .collect()
    }

    #[test]
    fn test_empty_colors_fallback() {
        let advice = build_personalized_color_advice(&[], Some("bottom"), None);
        assert_eq!(advice.base_color, None);
        assert_eq!(advice.summary, phrasing::FALLBACK_SUMMARY);
        assert!(advice.summary.starts_with("Try pairing this piece with easy neutrals"));
        assert!(advice.pairings.is_empty());
    }

    #[test]
    fn test_navy_top_example() {
        let advice = build_personalized_color_advice(&navy(), Some("top"), Some(&profile()));
        assert_eq!(
            advice.base_color,
            Some(ColorSwatch::new("Navy", "#1F2937"))
        );
        assert!(!advice.pairings.is_empty());
        assert!(advice.pairings.len() <= MAX_PAIRINGS);
        assert!(advice.summary.contains("this top"));
        // Young adult profile
        assert!(advice.pairings.iter().all(|p| p.rationale.contains("fresh")));
    }

    #[test]
    fn test_default_ranking_is_contrast_then_harmony() {
        let advice = build_personalized_color_advice(&navy(), None, None);
        let kinds: Vec<PairingKind> = advice.pairings.iter().map(|p| p.key).collect();
        assert_eq!(kinds[0], PairingKind::Contrast);
        assert_eq!(advice.pairings.len(), 2);
    }

    #[test]
    fn test_contrast_accent_follows_complementary_hue() {
        let advice = build_personalized_color_advice(&navy(), None, None);
        let contrast = &advice.pairings[0];
        assert_eq!(contrast.key, PairingKind::Contrast);
        let accent: Srgb = contrast.colors[0].hex.parse().unwrap();
        let hue = Hsl::from(accent).h;
        // Navy sits at ~215°, so its complement is warm (~35°)
        assert!((10.0..60.0).contains(&hue), "complement hue {hue}");
    }

    #[test]
    fn test_base_never_suggested_as_accent() {
        let advice = build_personalized_color_advice(&navy(), None, None);
        assert!(!accent_names(&advice).iter().any(|n| n.eq_ignore_ascii_case("navy")));
    }

    #[test]
    fn test_invalid_hex_coerced_to_black() {
        let colors = vec![ColorSwatch::new("", "not-a-color")];
        let advice = build_personalized_color_advice(&colors, None, None);
        let base = advice.base_color.unwrap();
        assert_eq!(base.hex, FALLBACK_HEX);
        assert_eq!(base.name, "Black");
    }

    #[test]
    fn test_blank_name_resolved_from_table() {
        let colors = vec![ColorSwatch::new("  ", "#d4af37")];
        let advice = build_personalized_color_advice(&colors, None, None);
        assert_eq!(advice.base_color, Some(ColorSwatch::new("Gold", "#D4AF37")));
    }

    #[test]
    fn test_disliked_complement_drops_contrast() {
        let baseline = build_personalized_color_advice(&navy(), None, None);
        let contrast = baseline
            .pairings
            .iter()
            .find(|p| p.key == PairingKind::Contrast)
            .expect("baseline has a contrast pairing");
        assert_eq!(contrast.colors.len(), 1);
        let disliked = contrast.colors[0].name.to_uppercase();

        let profile = UserStyleProfile {
            disliked_colors: vec![disliked.clone()],
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), None, Some(&profile));

        assert!(advice.pairings.iter().all(|p| p.key != PairingKind::Contrast));
        assert!(!advice.pairings.is_empty(), "other relations still considered");
        assert!(!accent_names(&advice)
            .iter()
            .any(|n| n.eq_ignore_ascii_case(&disliked)));
    }

    #[test]
    fn test_disliked_name_with_zero_width_char() {
        let baseline = build_personalized_color_advice(&navy(), None, None);
        let name = baseline.pairings[0].colors[0].name.clone();
        let mut chars = name.chars();
        let first = chars.next().unwrap();
        let hidden = format!("{first}\u{200B}{}", chars.as_str());

        let profile = UserStyleProfile {
            disliked_colors: vec![hidden],
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), None, Some(&profile));
        assert!(!accent_names(&advice).contains(&name));
    }

    #[test]
    fn test_disliked_by_hex() {
        let baseline = build_personalized_color_advice(&navy(), None, None);
        let target = baseline.pairings[0].colors[0].clone();

        let profile = UserStyleProfile {
            disliked_colors: vec![target.hex.to_lowercase()],
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), None, Some(&profile));
        assert!(advice
            .pairings
            .iter()
            .all(|p| p.colors.iter().all(|c| c.hex != target.hex)));
    }

    #[test]
    fn test_favorite_sets_highlight_and_summary() {
        let baseline = build_personalized_color_advice(&navy(), None, None);
        let favorite = baseline.pairings[1].colors[0].name.clone();

        let profile = UserStyleProfile {
            favorite_colors: vec![favorite.to_lowercase()],
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), None, Some(&profile));

        let featured = advice
            .pairings
            .iter()
            .find(|p| p.colors.iter().any(|c| c.name == favorite))
            .expect("favorite stays selected");
        assert!(featured.highlight.as_deref().unwrap().contains(&favorite));
        assert!(advice.summary.contains("favorite"));
        // The bonus lifts the favorite's pairing to the top
        assert_eq!(advice.pairings[0].key, featured.key);
    }

    fn candidate(kind: PairingKind, accents: usize) -> Candidate {
        Candidate {
            kind,
            accents: vec![ColorSwatch::new("Sage", "#9CAF88"); accents],
            score: 0,
            favorites: Vec::new(),
        }
    }

    #[test]
    fn test_base_scores() {
        let styles = StyleTable::builtin();
        assert_eq!(candidate(PairingKind::Contrast, 1).score(&styles, &[]), 8);
        assert_eq!(candidate(PairingKind::Harmony, 2).score(&styles, &[]), 8);
        assert_eq!(candidate(PairingKind::Harmony, 1).score(&styles, &[]), 7);
        assert_eq!(candidate(PairingKind::Neutral, 2).score(&styles, &[]), 5);
    }

    #[test]
    fn test_style_and_favorite_bonuses() {
        let styles = StyleTable::builtin();
        let tags: Vec<String> = ["tailored", "elegant", "business", "preppy"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // Capped at three tags
        assert_eq!(candidate(PairingKind::Neutral, 2).score(&styles, &tags), 8);
        assert_eq!(candidate(PairingKind::Contrast, 1).score(&styles, &tags), 8);

        let mut favored = candidate(PairingKind::Neutral, 2);
        favored.favorites = vec!["Sage".into(), "Sage".into()];
        assert_eq!(favored.score(&styles, &[]), 5 + FAVORITE_BONUS);
    }

    #[test]
    fn test_style_descriptor_in_rationale() {
        let profile = UserStyleProfile {
            style_preferences: vec!["Streetwear".into(), "bold".into()],
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), None, Some(&profile));
        assert_eq!(advice.pairings[0].key, PairingKind::Contrast);
        assert!(advice.pairings[0].rationale.contains("streetwear"));
    }

    #[test]
    fn test_tone_and_gender_flavor_rationale() {
        let profile = UserStyleProfile {
            age: Some(55),
            gender: Some("female".into()),
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), None, Some(&profile));
        for pairing in &advice.pairings {
            assert!(pairing.rationale.contains("refined"));
            assert!(pairing.rationale.contains("womenswear"));
        }
    }

    #[test]
    fn test_all_accents_disliked_falls_back_with_base() {
        let everything: Vec<String> = NamedPalette::builtin()
            .colors()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let profile = UserStyleProfile {
            disliked_colors: everything,
            ..Default::default()
        };
        let advice = build_personalized_color_advice(&navy(), Some("top"), Some(&profile));
        assert!(advice.pairings.is_empty());
        assert!(advice.base_color.is_some());
        assert_eq!(advice.summary, phrasing::FALLBACK_SUMMARY);
    }

    #[test]
    fn test_deterministic() {
        let p = profile();
        let a = build_personalized_color_advice(&navy(), Some("top"), Some(&p));
        let b = build_personalized_color_advice(&navy(), Some("top"), Some(&p));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_no_duplicate_swatches_in_pairing() {
        for hex in ["#1f2937", "#808080", "#ffffff", "#c8102e", "#f4c2c2", "#008080"] {
            let colors = vec![ColorSwatch::new("", hex)];
            let advice = build_personalized_color_advice(&colors, None, None);
            assert!(advice.pairings.len() <= MAX_PAIRINGS);
            for pairing in &advice.pairings {
                let keys: HashSet<String> = pairing.colors.iter().map(|c| c.key()).collect();
                assert_eq!(keys.len(), pairing.colors.len(), "{hex}: {pairing:?}");
            }
        }
    }

    #[test]
    fn test_from_config_extends_tables() {
        let config = AppConfig::parse(
            "palette:\n  - { name: Oat, hex: \"#DCCFB8\", family: neutral }\n  - { name: Gold, hex: \"#FFD700\", family: chromatic }\nstyle_affinities:\n  cottagecore: neutral\n",
        );
        let advisor = ColorAdvisor::from_config(&config);
        assert!(advisor.palette().get("oat").is_some());
        // Duplicate of a built-in name is skipped, original kept
        assert_eq!(advisor.palette().get("gold").unwrap().hex, "#D4AF37");
        assert_eq!(
            advisor.styles().affinity("cottagecore"),
            Some(PairingKind::Neutral)
        );
    }
}
