//! Garment type normalization for advice phrasing.

use super::sanitize::sanitize_text;

/// Used when no garment type is known.
pub const GENERIC_GARMENT: &str = "piece";

// Checked in order; the first category with a matching keyword wins.
const CATEGORIES: &[(&str, &[&str])] = &[
    ("dress", &["dress", "gown", "jumpsuit", "romper"]),
    ("outer layer", &["jacket", "coat", "blazer", "parka", "trench", "cardigan", "vest", "outer"]),
    ("footwear", &["shoe", "sneaker", "boot", "sandal", "heel", "loafer", "trainer", "footwear"]),
    ("bottom", &["jean", "pant", "trouser", "short", "skirt", "legging", "chino", "jogger", "bottom"]),
    ("top", &["shirt", "tee", "top", "blouse", "sweater", "hoodie", "tank", "polo", "knit", "jumper", "crop"]),
    ("accessory", &["bag", "hat", "cap", "scarf", "belt", "jewel", "necklace", "watch", "sunglass", "accessor"]),
];

/// Map a free-text garment type to a coarse category.
///
/// Unknown garments pass through (sanitized) so the summary still reads
/// naturally; missing or blank input becomes [`GENERIC_GARMENT`].
///
/// ```
/// use zmoda::services::normalize_garment;
/// assert_eq!(normalize_garment(Some("Cropped T-Shirt")), "top");
/// assert_eq!(normalize_garment(Some("kimono")), "kimono");
/// assert_eq!(normalize_garment(None), "piece");
/// ```
pub fn normalize_garment(garment_type: Option<&str>) -> String {
    let clean = garment_type.map(sanitize_text).unwrap_or_default();
    if clean.is_empty() {
        return GENERIC_GARMENT.to_string();
    }

    let lower = clean.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| category.to_string())
        .unwrap_or(clean)
}
