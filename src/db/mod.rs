use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

mod edge_queries;
mod profile_queries;
mod restaurant_queries;
mod schedule_queries;
mod spot_queries;

pub mod candidate_repository;

/// Re-export all query functions under `queries`
pub mod queries {
    pub use super::edge_queries::*;
    pub use super::profile_queries::*;
    pub use super::restaurant_queries::*;
    pub use super::schedule_queries::*;
    pub use super::spot_queries::*;
}

pub use candidate_repository::{
    CandidateRepository, PgCandidateRepository, PgScheduleStore, ScheduleStore,
};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
