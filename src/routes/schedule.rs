use crate::error::Result;
use crate::models::{Pacing, ScheduleStep, WeatherMode};
use crate::services::planner::BothSchedules;
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub traveler_id: i64,
    pub weather: WeatherMode,
    /// Request-level pacing; a value stored on the profile overrides it
    #[serde(default)]
    pub pacing: Option<Pacing>,
}

#[derive(Debug, Deserialize)]
pub struct BothSchedulesRequest {
    pub traveler_id: i64,
    #[serde(default)]
    pub pacing: Option<Pacing>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SaveAllRequest {
    #[serde(default)]
    pub pacing: Option<Pacing>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub inserted: u64,
}

/// POST /schedules/generate
/// Weather-aware itinerary for one traveler. Unknown travelers and empty
/// candidate pools yield an empty list, not an error.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<Vec<ScheduleStep>>> {
    tracing::info!(
        traveler_id = request.traveler_id,
        weather = %request.weather,
        "Schedule generation request"
    );

    let steps = state
        .planner
        .generate_schedule(request.traveler_id, request.weather, request.pacing)
        .await?;

    Ok(Json(steps))
}

/// POST /schedules/generate-both
/// Itineraries for both weather modes in one call.
pub async fn generate_both(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BothSchedulesRequest>,
) -> Result<Json<BothSchedules>> {
    let schedules = state
        .planner
        .generate_both(request.traveler_id, request.pacing)
        .await?;

    Ok(Json(schedules))
}

/// POST /schedules/save
/// Generate one itinerary and replace the stored schedule for that
/// (traveler, weather) pair.
pub async fn save(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<SaveResponse>> {
    let inserted = state
        .planner
        .generate_and_save(request.traveler_id, request.weather, request.pacing)
        .await?;

    tracing::info!(
        traveler_id = request.traveler_id,
        weather = %request.weather,
        inserted,
        "Schedule saved"
    );

    Ok(Json(SaveResponse { inserted }))
}

/// POST /schedules/save-all
/// Regenerate and persist schedules for every traveler under both weather
/// modes.
pub async fn save_all(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveAllRequest>,
) -> Result<Json<SaveResponse>> {
    let inserted = state.planner.save_all_travelers(request.pacing).await?;
    Ok(Json(SaveResponse { inserted }))
}
