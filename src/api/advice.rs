use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{ColorAdvice, ColorSwatch, UserStyleProfile};
use crate::services::ColorAdvisor;

/// Most colors accepted per request.
pub const MAX_COLORS: usize = 16;

/// Most entries accepted in each profile list.
pub const MAX_PROFILE_ENTRIES: usize = 32;

/// Request body for color advice
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    /// Dominant garment colors; the first one is the base
    #[serde(default)]
    pub colors: Vec<ColorSwatch>,
    /// Free-text garment type (e.g. "denim jacket")
    #[serde(default)]
    pub garment_type: Option<String>,
    /// Optional style profile of the shopper
    #[serde(default)]
    pub profile: Option<UserStyleProfile>,
}

impl AdviceRequest {
    /// Reject oversized inputs before any work is done.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.colors.len() > MAX_COLORS {
            return Err(ApiError::InvalidRequest(format!(
                "at most {MAX_COLORS} colors are accepted, got {}",
                self.colors.len()
            )));
        }

        if let Some(ref profile) = self.profile {
            let lists = [
                ("favoriteColors", &profile.favorite_colors),
                ("dislikedColors", &profile.disliked_colors),
                ("stylePreferences", &profile.style_preferences),
            ];
            for (field, list) in lists {
                if list.len() > MAX_PROFILE_ENTRIES {
                    return Err(ApiError::InvalidRequest(format!(
                        "{field} accepts at most {MAX_PROFILE_ENTRIES} entries, got {}",
                        list.len()
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Build personalized color pairing advice
///
/// The first color is treated as the garment's base color. Pairings are
/// ranked by relation, the shopper's style tags and favorite colors;
/// disliked colors are never suggested.
#[utoipa::path(
    post,
    path = "/api/color-advice",
    request_body = AdviceRequest,
    responses(
        (status = 200, description = "Advice built", body = ColorAdvice),
        (status = 400, description = "Malformed or oversized request"),
    ),
    tag = "Advice"
)]
pub async fn handle_color_advice(
    State(advisor): State<Arc<ColorAdvisor>>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<ColorAdvice>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!(
        colors = request.colors.len(),
        garment_type = ?request.garment_type,
        has_profile = request.profile.is_some(),
        "Color advice requested"
    );

    let advice = advisor.advise(
        &request.colors,
        request.garment_type.as_deref(),
        request.profile.as_ref(),
    );

    Ok(Json(advice))
}
