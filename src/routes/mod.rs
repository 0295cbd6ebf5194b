pub mod debug;
pub mod recommend;
pub mod schedule;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/recommendations/spots",
            post(recommend::recommend_spots),
        )
        .route(
            "/recommendations/personal",
            post(recommend::recommend_personal),
        )
        .route("/schedules/generate", post(schedule::generate))
        .route("/schedules/generate-both", post(schedule::generate_both))
        .route("/schedules/save", post(schedule::save))
        .route("/schedules/save-all", post(schedule::save_all))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
