//! Rationale and summary text for color advice.

use crate::models::{ColorPairing, PairingKind};

/// Summary used when there is nothing to pair.
pub const FALLBACK_SUMMARY: &str =
    "Try pairing this piece with easy neutrals like white, black, or beige for a clean, balanced look.";

/// Inputs that flavor a rationale sentence.
#[derive(Debug, Clone, Copy)]
pub struct RationaleContext<'a> {
    pub base_name: &'a str,
    pub tone: &'a str,
    pub style: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub favorite: bool,
}

pub fn title(kind: PairingKind) -> &'static str {
    match kind {
        PairingKind::Contrast => "Bold contrast",
        PairingKind::Harmony => "Tonal harmony",
        PairingKind::Neutral => "Neutral balance",
    }
}

/// One sentence explaining why a pairing works.
///
/// ```
/// use zmoda::models::PairingKind;
/// use zmoda::services::phrasing::{rationale, RationaleContext};
///
/// let ctx = RationaleContext {
///     base_name: "Navy",
///     tone: "fresh",
///     style: None,
///     gender: None,
///     favorite: false,
/// };
/// assert_eq!(
///     rationale(PairingKind::Contrast, &ctx),
///     "Opposite hues on the color wheel give Navy a fresh contrast."
/// );
/// ```
pub fn rationale(kind: PairingKind, ctx: &RationaleContext<'_>) -> String {
    let base = ctx.base_name;
    let tone = ctx.tone;
    let mut text = match kind {
        PairingKind::Contrast => {
            format!("Opposite hues on the color wheel give {base} a {tone} contrast")
        }
        PairingKind::Harmony => format!("Neighboring hues keep {base} {tone} and cohesive"),
        PairingKind::Neutral => format!("Quiet neutrals let {base} lead with a {tone} finish"),
    };

    if let Some(style) = ctx.style {
        text.push_str(&format!(" that suits your {style} style"));
    }
    if let Some(clause) = ctx.gender {
        text.push_str(", ");
        text.push_str(clause);
    }
    if ctx.favorite {
        text.push_str(", and it brings in one of your favorite colors");
    }
    text.push('.');
    text
}

/// "A", "A and B", "A, B, and C"
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [a, b] => format!("{} and {}", a.as_ref(), b.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Turn a rationale sentence into a clause that can follow "because".
fn as_clause(rationale: &str) -> String {
    let trimmed = rationale.trim().trim_end_matches('.');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compose the advice summary from the selected pairings.
pub fn summary(garment: &str, pairings: &[ColorPairing]) -> String {
    let mut sentences = Vec::with_capacity(2);
    for (i, pairing) in pairings.iter().take(2).enumerate() {
        let names: Vec<&str> = pairing.colors.iter().map(|c| c.name.as_str()).collect();
        let accents = join_names(&names);
        let clause = as_clause(&pairing.rationale);
        if i == 0 {
            sentences.push(format!(
                "Try pairing this {garment} with {accents} because {clause}."
            ));
        } else {
            sentences.push(format!("Or pairing it with {accents} because {clause}."));
        }
    }

    if sentences.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        sentences.join(" ")
    }
}
