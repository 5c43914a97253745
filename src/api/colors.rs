use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use color_harmony::{matching_colors, ColorFamily, Hsl, NamedPalette, Srgb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::ColorSwatch;
use crate::services::ColorAdvisor;

/// Request body for color-wheel relations
#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchingRequest {
    /// Hex color (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`)
    pub hex: String,
}

/// Raw color-wheel relations of a color, each with its nearest name
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchingResponse {
    pub base: ColorSwatch,
    /// Hue rotated 180°
    pub complementary: ColorSwatch,
    /// Hues rotated -30° and +30°
    pub analogous: Vec<ColorSwatch>,
}

/// One entry of the named color table
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteColor {
    pub name: String,
    /// Uppercase `#RRGGBB`
    pub hex: String,
    /// "chromatic" or "neutral"
    pub family: String,
}

/// Named color table in use
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteResponse {
    pub colors: Vec<PaletteColor>,
}

fn named_swatch(palette: &NamedPalette, hsl: Hsl) -> ColorSwatch {
    let srgb = Srgb::from(hsl);
    let nearest = palette.find_nearest(srgb, None);
    ColorSwatch::new(nearest.name.clone(), srgb.to_hex())
}

/// Complementary and analogous colors of a hex color
///
/// Unlike the advice endpoint, invalid hex is rejected instead of coerced.
#[utoipa::path(
    post,
    path = "/api/colors/matching",
    request_body = MatchingRequest,
    responses(
        (status = 200, description = "Color-wheel relations", body = MatchingResponse),
        (status = 400, description = "Invalid hex color"),
    ),
    tag = "Colors"
)]
pub async fn handle_matching_colors(
    State(advisor): State<Arc<ColorAdvisor>>,
    payload: Result<Json<MatchingRequest>, JsonRejection>,
) -> Result<Json<MatchingResponse>, ApiError> {
    let Json(request) = payload?;
    let base: Srgb = request.hex.parse()?;

    let matching = matching_colors(Hsl::from(base));
    let palette = advisor.palette();

    tracing::debug!(hex = %base.to_hex(), hue = matching.base.h, "Matching colors requested");

    Ok(Json(MatchingResponse {
        base: ColorSwatch::new(palette.find_nearest(base, None).name.clone(), base.to_hex()),
        complementary: named_swatch(palette, matching.complementary),
        analogous: matching
            .analogous
            .iter()
            .map(|&hsl| named_swatch(palette, hsl))
            .collect(),
    }))
}

/// List the named color table
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Named colors", body = PaletteResponse),
    ),
    tag = "Colors"
)]
pub async fn handle_palette(State(advisor): State<Arc<ColorAdvisor>>) -> Json<PaletteResponse> {
    let colors = advisor
        .palette()
        .colors()
        .iter()
        .map(|c| PaletteColor {
            name: c.name.clone(),
            hex: c.hex.clone(),
            family: match c.family {
                ColorFamily::Chromatic => "chromatic".to_string(),
                ColorFamily::Neutral => "neutral".to_string(),
            },
        })
        .collect();

    Json(PaletteResponse { colors })
}
