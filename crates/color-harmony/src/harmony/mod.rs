//! Color-wheel relations
//!
//! - [`matching_colors`]: the textbook relations at the base's own
//!   saturation and lightness.
//! - [`rich_palette`]: the same relations pushed into a wearable range,
//!   plus neutral companions picked by the base's lightness.

mod wheel;

pub use wheel::{
    matching_colors, rich_palette, MatchingColors, RichPalette, ACHROMATIC_ANCHOR_HUE,
    ANALOGOUS_OFFSET, COMPLEMENTARY_OFFSET,
};
