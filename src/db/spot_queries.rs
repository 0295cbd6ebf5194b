use crate::models::{Coordinates, IndoorOutdoor, Spot, WeatherMode};
use sqlx::PgPool;

/// Weather-filtered candidate pool: rating floor plus indoor/outdoor filter,
/// best-rated first.
pub async fn spots_for_weather(
    pool: &PgPool,
    mode: WeatherMode,
    min_rating: f64,
) -> Result<Vec<Spot>, sqlx::Error> {
    let classes = allowed_class_labels(mode);

    let rows = sqlx::query_as::<_, SpotRow>(
        "SELECT id, name, category, rating, indoor_outdoor, lat, lon, review_count
         FROM tour_spots
         WHERE rating BETWEEN $1 AND 5.0
           AND indoor_outdoor = ANY($2)
         ORDER BY rating DESC, review_count DESC",
    )
    .bind(min_rating)
    .bind(&classes)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SpotRow::into_spot).collect())
}

/// Spots connected to `base_spot_id` through the spot-proximity graph,
/// under the same weather/rating rule as the main pool. Closest edges break
/// rating ties.
pub async fn neighbor_spots(
    pool: &PgPool,
    base_spot_id: i64,
    exclude_ids: &[i64],
    mode: WeatherMode,
    min_rating: f64,
    limit: i64,
) -> Result<Vec<Spot>, sqlx::Error> {
    let classes = allowed_class_labels(mode);

    let rows = sqlx::query_as::<_, NeighborRow>(
        "SELECT s.id, s.name, s.category, s.rating, s.indoor_outdoor,
                s.lat, s.lon, s.review_count, m.distance_km
         FROM spot_spot_map AS m
         JOIN tour_spots AS s ON s.id = m.spot_id_2
         WHERE m.spot_id_1 = $1
           AND s.rating BETWEEN $2 AND 5.0
           AND s.indoor_outdoor = ANY($3)
           AND NOT (s.id = ANY($4))
         ORDER BY s.rating DESC, s.review_count DESC, m.distance_km ASC
         LIMIT $5",
    )
    .bind(base_spot_id)
    .bind(min_rating)
    .bind(&classes)
    .bind(exclude_ids)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| row.spot.into_spot()).collect())
}

pub async fn spot_by_id(pool: &PgPool, spot_id: i64) -> Result<Option<Spot>, sqlx::Error> {
    let row = sqlx::query_as::<_, SpotRow>(
        "SELECT id, name, category, rating, indoor_outdoor, lat, lon, review_count
         FROM tour_spots
         WHERE id = $1",
    )
    .bind(spot_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(SpotRow::into_spot))
}

/// Highest-rated spots regardless of weather, for the simple recommenders.
pub async fn top_spots(pool: &PgPool, limit: i64) -> Result<Vec<Spot>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SpotRow>(
        "SELECT id, name, category, rating, indoor_outdoor, lat, lon, review_count
         FROM tour_spots
         ORDER BY rating DESC, review_count DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SpotRow::into_spot).collect())
}

fn allowed_class_labels(mode: WeatherMode) -> Vec<String> {
    mode.allowed_classes()
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[derive(sqlx::FromRow)]
struct SpotRow {
    id: i64,
    name: String,
    category: Option<String>,
    rating: f64,
    indoor_outdoor: String,
    lat: f64,
    lon: f64,
    review_count: i64,
}

#[derive(sqlx::FromRow)]
struct NeighborRow {
    #[sqlx(flatten)]
    spot: SpotRow,
    #[allow(dead_code)]
    distance_km: Option<f64>,
}

impl SpotRow {
    fn into_spot(self) -> Spot {
        let indoor_outdoor = self.indoor_outdoor.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid indoor/outdoor label '{}' for spot '{}' (id: {}), defaulting to Mixed",
                self.indoor_outdoor,
                self.name,
                self.id
            );
            IndoorOutdoor::Mixed
        });

        let coordinates = Coordinates::new(self.lat, self.lon).unwrap_or_else(|e| {
            tracing::error!(
                "Invalid coordinates for spot '{}' (id: {}): {}. Using fallback.",
                self.name,
                self.id,
                e
            );
            Coordinates { lat: 0.0, lon: 0.0 }
        });

        Spot {
            id: self.id,
            name: self.name,
            category: self.category.unwrap_or_default(),
            rating: self.rating,
            indoor_outdoor,
            coordinates,
            review_count: self.review_count,
        }
    }
}
