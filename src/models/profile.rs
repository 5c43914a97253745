use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Optional style profile of the user asking for advice.
///
/// Every field is optional; missing data simply removes the matching
/// personalization from the advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStyleProfile {
    pub age: Option<u32>,
    pub gender: Option<String>,
    /// Color names or hex values the user likes
    pub favorite_colors: Vec<String>,
    /// Color names or hex values that must never be suggested
    pub disliked_colors: Vec<String>,
    /// Free-text style tags, e.g. "streetwear", "minimal"
    pub style_preferences: Vec<String>,
}
