use crate::models::{ScheduleStep, StepKind, WeatherMode};
use sqlx::PgPool;
use time::{Duration, OffsetDateTime};

/// Replace the stored schedule for one (traveler, weather) pair.
///
/// Delete and insert run inside one transaction so readers never observe a
/// partially replaced schedule and concurrent saves for the same key
/// serialize at the database. Day N maps to `today + (N - 1)` days; a
/// missing leg distance is stored as 0.0, present ones rounded to two
/// decimals. Returns the number of rows inserted.
///
/// An empty itinerary is a no-op: prior rows are kept and 0 is returned.
pub async fn replace_schedule(
    pool: &PgPool,
    traveler_id: i64,
    mode: WeatherMode,
    steps: &[ScheduleStep],
) -> Result<u64, sqlx::Error> {
    if steps.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM travel_schedules WHERE traveler_id = $1 AND weather = $2")
        .bind(traveler_id)
        .bind(mode.to_string())
        .execute(&mut *tx)
        .await?;

    let base_date = OffsetDateTime::now_utc().date();
    let mut inserted = 0u64;

    for step in steps {
        let visit_date = base_date + Duration::days(i64::from(step.day.saturating_sub(1)));

        let place_id = match step.kind {
            StepKind::Spot => step.spot_id,
            StepKind::Meal | StepKind::Cafe => None,
        };
        let restaurant_id = match step.kind {
            StepKind::Meal | StepKind::Cafe => step.restaurant_id,
            StepKind::Spot => None,
        };

        let distance = step
            .distance_km
            .map(|d| (d * 100.0).round() / 100.0)
            .unwrap_or(0.0);

        sqlx::query(
            "INSERT INTO travel_schedules
                 (traveler_id, place_id, restaurant_id, visit_order, visit_date, weather, distance)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(traveler_id)
        .bind(place_id)
        .bind(restaurant_id)
        .bind(step.order as i32)
        .bind(visit_date)
        .bind(mode.to_string())
        .bind(distance)
        .execute(&mut *tx)
        .await?;

        inserted += 1;
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Row count for one (traveler, weather) pair, used by health checks and
/// tests.
pub async fn schedule_row_count(
    pool: &PgPool,
    traveler_id: i64,
    mode: WeatherMode,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM travel_schedules WHERE traveler_id = $1 AND weather = $2",
    )
    .bind(traveler_id)
    .bind(mode.to_string())
    .fetch_one(pool)
    .await
}
