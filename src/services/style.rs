//! Profile-derived flavoring: tone words, gender clauses, style affinities.

use crate::models::PairingKind;

/// Tone used when the profile has no age.
pub const DEFAULT_TONE: &str = "fresh";

/// Cap on the style affinity bonus a single pairing can earn.
pub const MAX_STYLE_BONUS: u32 = 3;

const BUILTIN_AFFINITIES: &[(&str, PairingKind)] = &[
    ("streetwear", PairingKind::Contrast),
    ("edgy", PairingKind::Contrast),
    ("bold", PairingKind::Contrast),
    ("sporty", PairingKind::Contrast),
    ("minimal", PairingKind::Harmony),
    ("classic", PairingKind::Harmony),
    ("romantic", PairingKind::Harmony),
    ("boho", PairingKind::Harmony),
    ("tailored", PairingKind::Neutral),
    ("elegant", PairingKind::Neutral),
    ("business", PairingKind::Neutral),
    ("preppy", PairingKind::Neutral),
];

/// Age-derived adjective used in rationale text.
pub fn tone_word(age: Option<u32>) -> &'static str {
    match age {
        None => DEFAULT_TONE,
        Some(a) if a < 21 => "playful",
        Some(a) if a < 34 => "fresh",
        Some(a) if a < 50 => "polished",
        Some(_) => "refined",
    }
}

/// Optional clause appended to a rationale for the user's stated gender.
pub fn gender_clause(gender: Option<&str>) -> Option<&'static str> {
    let gender = gender?.trim().to_lowercase();
    match gender.as_str() {
        "male" | "man" | "men" | "m" => Some("easy to wear with menswear staples"),
        "female" | "woman" | "women" | "f" => Some("flattering with womenswear silhouettes"),
        "non-binary" | "nonbinary" | "androgynous" | "genderfluid" => {
            Some("keeping the look fluid")
        }
        _ => None,
    }
}

/// Mapping from style descriptors to the pairing relation they favor.
///
/// Descriptors match style tags by substring, so "minimalist" counts as
/// "minimal". Entries are checked in table order.
#[derive(Debug, Clone)]
pub struct StyleTable {
    entries: Vec<(String, PairingKind)>,
}

impl StyleTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_AFFINITIES
                .iter()
                .map(|&(d, k)| (d.to_string(), k))
                .collect(),
        }
    }

    /// Add or replace descriptors.
    pub fn with_affinities<I, S>(mut self, affinities: I) -> Self
    where
        I: IntoIterator<Item = (S, PairingKind)>,
        S: AsRef<str>,
    {
        for (descriptor, kind) in affinities {
            let descriptor = descriptor.as_ref().trim().to_lowercase();
            if descriptor.is_empty() {
                continue;
            }
            match self.entries.iter_mut().find(|(d, _)| *d == descriptor) {
                Some(entry) => entry.1 = kind,
                None => self.entries.push((descriptor, kind)),
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Relation favored by one style tag, if any descriptor matches.
    pub fn affinity(&self, tag: &str) -> Option<PairingKind> {
        let tag = tag.to_lowercase();
        self.entries
            .iter()
            .find(|(descriptor, _)| tag.contains(descriptor.as_str()))
            .map(|(_, kind)| *kind)
    }

    /// Number of tags favoring `kind`, capped at [`MAX_STYLE_BONUS`].
    pub fn bonus(&self, kind: PairingKind, tags: &[String]) -> u32 {
        let hits = tags
            .iter()
            .filter(|tag| self.affinity(tag) == Some(kind))
            .count() as u32;
        hits.min(MAX_STYLE_BONUS)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
