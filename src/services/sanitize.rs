//! Free-text cleanup for user-supplied labels.

use regex::Regex;
use std::sync::LazyLock;

/// Longest label kept from user input, in characters.
pub const MAX_LABEL_CHARS: usize = 64;

// Control characters separate words; format characters such as zero-width
// spaces are dropped so "Na\u{200B}vy" stays "Navy".
static CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Cc}").expect("static regex"));
static FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Cf}").expect("static regex"));

/// Strip invisible characters, collapse whitespace and truncate.
///
/// ```
/// use zmoda::services::sanitize_text;
/// assert_eq!(sanitize_text("  dark \n\t denim\u{200B} "), "dark denim");
/// ```
pub fn sanitize_text(input: &str) -> String {
    let visible = FORMAT.replace_all(input, "");
    let visible = CONTROL.replace_all(&visible, " ");
    let collapsed = visible.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(MAX_LABEL_CHARS).collect::<String>().trim_end().to_string()
}

/// Sanitize each entry, dropping the ones left empty.
pub fn sanitize_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| sanitize_text(s))
        .filter(|s| !s.is_empty())
        .collect()
}
