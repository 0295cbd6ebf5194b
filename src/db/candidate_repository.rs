use crate::error::Result;
use crate::models::{RestaurantPlace, ScheduleStep, Spot, TravelerProfile, WeatherMode};
use async_trait::async_trait;
use sqlx::PgPool;

/// Read-only lookups the itinerary engine needs: profiles, weather-filtered
/// spot pools, proximity-graph neighbors, eatery selection, and distance
/// resolution over precomputed edges with a geometric fallback.
///
/// The planner only sees this trait, so tests drive it with an in-memory
/// implementation.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn profile_of(&self, traveler_id: i64) -> Result<Option<TravelerProfile>>;

    async fn traveler_ids(&self) -> Result<Vec<i64>>;

    async fn spots_for_weather(&self, mode: WeatherMode) -> Result<Vec<Spot>>;

    async fn neighbors_of(
        &self,
        base_spot_id: i64,
        exclude_ids: &[i64],
        mode: WeatherMode,
        limit: i64,
    ) -> Result<Vec<Spot>>;

    async fn meal_for(
        &self,
        spot_id: i64,
        preferred_food: Option<&str>,
        exclude_ids: &[i64],
    ) -> Result<Option<RestaurantPlace>>;

    async fn cafe_for(&self, spot_id: i64, exclude_ids: &[i64])
        -> Result<Option<RestaurantPlace>>;

    async fn spot_to_spot_distance(&self, spot_id_1: i64, spot_id_2: i64) -> Result<Option<f64>>;

    async fn spot_to_restaurant_distance(
        &self,
        spot_id: i64,
        restaurant_id: i64,
    ) -> Result<Option<f64>>;

    async fn restaurant_to_restaurant_distance(
        &self,
        restaurant_id_1: i64,
        restaurant_id_2: i64,
    ) -> Result<Option<f64>>;
}

/// Write side of the engine: the delete-then-insert schedule replacement.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn replace_schedule(
        &self,
        traveler_id: i64,
        mode: WeatherMode,
        steps: &[ScheduleStep],
    ) -> Result<u64>;
}

pub struct PgCandidateRepository {
    pool: PgPool,
    min_rating: f64,
}

impl PgCandidateRepository {
    pub fn new(pool: PgPool, min_rating: f64) -> Self {
        Self { pool, min_rating }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn profile_of(&self, traveler_id: i64) -> Result<Option<TravelerProfile>> {
        Ok(super::profile_queries::profile_by_id(&self.pool, traveler_id).await?)
    }

    async fn traveler_ids(&self) -> Result<Vec<i64>> {
        Ok(super::profile_queries::all_traveler_ids(&self.pool).await?)
    }

    async fn spots_for_weather(&self, mode: WeatherMode) -> Result<Vec<Spot>> {
        Ok(super::spot_queries::spots_for_weather(&self.pool, mode, self.min_rating).await?)
    }

    async fn neighbors_of(
        &self,
        base_spot_id: i64,
        exclude_ids: &[i64],
        mode: WeatherMode,
        limit: i64,
    ) -> Result<Vec<Spot>> {
        Ok(super::spot_queries::neighbor_spots(
            &self.pool,
            base_spot_id,
            exclude_ids,
            mode,
            self.min_rating,
            limit,
        )
        .await?)
    }

    async fn meal_for(
        &self,
        spot_id: i64,
        preferred_food: Option<&str>,
        exclude_ids: &[i64],
    ) -> Result<Option<RestaurantPlace>> {
        Ok(
            super::restaurant_queries::meal_for_spot(&self.pool, spot_id, preferred_food, exclude_ids)
                .await?,
        )
    }

    async fn cafe_for(
        &self,
        spot_id: i64,
        exclude_ids: &[i64],
    ) -> Result<Option<RestaurantPlace>> {
        Ok(super::restaurant_queries::cafe_for_spot(&self.pool, spot_id, exclude_ids).await?)
    }

    async fn spot_to_spot_distance(&self, spot_id_1: i64, spot_id_2: i64) -> Result<Option<f64>> {
        Ok(super::edge_queries::spot_to_spot_distance(&self.pool, spot_id_1, spot_id_2).await?)
    }

    async fn spot_to_restaurant_distance(
        &self,
        spot_id: i64,
        restaurant_id: i64,
    ) -> Result<Option<f64>> {
        Ok(
            super::edge_queries::spot_to_restaurant_distance(&self.pool, spot_id, restaurant_id)
                .await?,
        )
    }

    async fn restaurant_to_restaurant_distance(
        &self,
        restaurant_id_1: i64,
        restaurant_id_2: i64,
    ) -> Result<Option<f64>> {
        Ok(super::edge_queries::restaurant_to_restaurant_distance(
            &self.pool,
            restaurant_id_1,
            restaurant_id_2,
        )
        .await?)
    }
}

pub struct PgScheduleStore {
    pool: PgPool,
}

impl PgScheduleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn replace_schedule(
        &self,
        traveler_id: i64,
        mode: WeatherMode,
        steps: &[ScheduleStep],
    ) -> Result<u64> {
        Ok(super::schedule_queries::replace_schedule(&self.pool, traveler_id, mode, steps).await?)
    }
}
