use crate::constants::DEFAULT_RECOMMEND_LIMIT;
use crate::error::{AppError, Result};
use crate::services::recommend::{self, SpotFoodItem};
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SpotFoodRequest {
    pub traveler_id: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_RECOMMEND_LIMIT
}

#[derive(Debug, Serialize)]
pub struct SpotFoodResponse {
    pub items: Vec<SpotFoodItem>,
}

/// POST /recommendations/spots
/// Top-rated spots each paired with one nearby restaurant. The traveler id
/// is accepted for parity with the personalized endpoint but unused here.
pub async fn recommend_spots(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpotFoodRequest>,
) -> Result<Json<SpotFoodResponse>> {
    validate_limit(request.limit)?;

    let items = recommend::recommend_spot_with_restaurant(&state.db_pool, request.limit).await?;
    Ok(Json(SpotFoodResponse { items }))
}

/// POST /recommendations/personal
/// Same pairing, preferring restaurants that match the traveler's stored
/// food preference.
pub async fn recommend_personal(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpotFoodRequest>,
) -> Result<Json<SpotFoodResponse>> {
    validate_limit(request.limit)?;

    let items =
        recommend::recommend_for_traveler(&state.db_pool, request.traveler_id, request.limit)
            .await?;
    Ok(Json(SpotFoodResponse { items }))
}

fn validate_limit(limit: i64) -> Result<()> {
    if (1..=100).contains(&limit) {
        Ok(())
    } else {
        Err(AppError::InvalidRequest(
            "limit must be between 1 and 100".to_string(),
        ))
    }
}
