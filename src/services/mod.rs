pub mod advisor;
pub mod garment;
pub mod phrasing;
pub mod sanitize;
pub mod style;

pub use advisor::{build_personalized_color_advice, ColorAdvisor, FAVORITE_BONUS, MAX_PAIRINGS};
pub use garment::{normalize_garment, GENERIC_GARMENT};
pub use sanitize::{sanitize_list, sanitize_text, MAX_LABEL_CHARS};
pub use style::{gender_clause, tone_word, StyleTable, DEFAULT_TONE, MAX_STYLE_BONUS};
