pub mod advice;
pub mod colors;

pub use advice::{handle_color_advice, AdviceRequest, __path_handle_color_advice};
pub use colors::{
    handle_matching_colors, handle_palette, MatchingRequest, MatchingResponse, PaletteColor,
    PaletteResponse, __path_handle_matching_colors, __path_handle_palette,
};
