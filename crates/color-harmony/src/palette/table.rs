//! Built-in fashion color names.
//!
//! Chromatic entries are spread around the wheel at wearable saturation so
//! that any rotated hue has a reasonable name to snap to. Neutrals cover
//! the grey axis plus the earth tones stylists treat as neutral.

use super::named::ColorFamily::{self, Chromatic, Neutral};

pub(super) const BUILTIN: &[(&str, [u8; 3], ColorFamily)] = &[
    // Reds and pinks
    ("Red", [0xC8, 0x10, 0x2E], Chromatic),
    ("Crimson", [0xDC, 0x14, 0x3C], Chromatic),
    ("Burgundy", [0x80, 0x00, 0x20], Chromatic),
    ("Coral", [0xFF, 0x7F, 0x50], Chromatic),
    ("Blush Pink", [0xF4, 0xC2, 0xC2], Chromatic),
    ("Hot Pink", [0xFF, 0x69, 0xB4], Chromatic),
    ("Fuchsia", [0xC7, 0x15, 0x85], Chromatic),
    ("Mauve", [0x91, 0x5F, 0x6D], Chromatic),
    // Oranges and yellows
    ("Rust", [0xB7, 0x41, 0x0E], Chromatic),
    ("Ochre", [0xCC, 0x77, 0x22], Chromatic),
    ("Terracotta", [0xE2, 0x72, 0x5B], Chromatic),
    ("Burnt Orange", [0xCC, 0x55, 0x00], Chromatic),
    ("Orange", [0xFF, 0x8C, 0x00], Chromatic),
    ("Mustard", [0xE1, 0xAD, 0x01], Chromatic),
    ("Gold", [0xD4, 0xAF, 0x37], Chromatic),
    ("Yellow", [0xFA, 0xDA, 0x5E], Chromatic),
    // Greens
    ("Olive", [0x80, 0x80, 0x00], Chromatic),
    ("Olive Drab", [0x6B, 0x8E, 0x23], Chromatic),
    ("Lime", [0x32, 0xCD, 0x32], Chromatic),
    ("Sage", [0x9C, 0xAF, 0x88], Chromatic),
    ("Mint", [0x98, 0xFF, 0x98], Chromatic),
    ("Emerald", [0x50, 0xC8, 0x78], Chromatic),
    ("Forest Green", [0x22, 0x8B, 0x22], Chromatic),
    // Blues
    ("Teal", [0x00, 0x80, 0x80], Chromatic),
    ("Turquoise", [0x40, 0xE0, 0xD0], Chromatic),
    ("Powder Blue", [0xB0, 0xE0, 0xE6], Chromatic),
    ("Sky Blue", [0x87, 0xCE, 0xEB], Chromatic),
    ("Denim", [0x15, 0x60, 0xBD], Chromatic),
    ("Cobalt", [0x00, 0x47, 0xAB], Chromatic),
    ("Royal Blue", [0x41, 0x69, 0xE1], Chromatic),
    ("Navy", [0x1B, 0x2A, 0x4A], Chromatic),
    // Purples
    ("Indigo", [0x4B, 0x00, 0x82], Chromatic),
    ("Purple", [0x80, 0x00, 0x80], Chromatic),
    ("Plum", [0x8E, 0x45, 0x85], Chromatic),
    ("Lavender", [0xB5, 0x7E, 0xDC], Chromatic),
    ("Magenta", [0xFF, 0x00, 0xFF], Chromatic),
    // Neutrals
    ("Black", [0x00, 0x00, 0x00], Neutral),
    ("Charcoal", [0x36, 0x45, 0x4F], Neutral),
    ("Gray", [0x80, 0x80, 0x80], Neutral),
    ("Light Gray", [0xD3, 0xD3, 0xD3], Neutral),
    ("White", [0xFF, 0xFF, 0xFF], Neutral),
    ("Ivory", [0xFF, 0xFF, 0xF0], Neutral),
    ("Cream", [0xFF, 0xFD, 0xD0], Neutral),
    ("Beige", [0xF5, 0xF5, 0xDC], Neutral),
    ("Tan", [0xD2, 0xB4, 0x8C], Neutral),
    ("Khaki", [0xC3, 0xB0, 0x91], Neutral),
    ("Camel", [0xC1, 0x9A, 0x6B], Neutral),
    ("Taupe", [0x48, 0x3C, 0x32], Neutral),
    ("Brown", [0x8B, 0x45, 0x13], Neutral),
    ("Chocolate", [0x5C, 0x3A, 0x21], Neutral),
];
