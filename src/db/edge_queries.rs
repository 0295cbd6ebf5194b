use sqlx::PgPool;

use super::restaurant_queries::restaurant_by_id;
use super::spot_queries::spot_by_id;

/// Spot-to-restaurant travel distance: the precomputed proximity edge when
/// one exists, otherwise great-circle from coordinates. None when either
/// entity is missing.
pub async fn spot_to_restaurant_distance(
    pool: &PgPool,
    spot_id: i64,
    restaurant_id: i64,
) -> Result<Option<f64>, sqlx::Error> {
    let edge: Option<Option<f64>> = sqlx::query_scalar(
        "SELECT distance_km FROM spot_restaurant_map
         WHERE spot_id = $1 AND restaurant_id = $2",
    )
    .bind(spot_id)
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await?;

    if let Some(Some(distance)) = edge {
        return Ok(Some(distance));
    }

    let (Some(spot), Some(restaurant)) = (
        spot_by_id(pool, spot_id).await?,
        restaurant_by_id(pool, restaurant_id).await?,
    ) else {
        return Ok(None);
    };

    Ok(Some(spot.coordinates.distance_to(&restaurant.coordinates)))
}

/// Spot-to-spot travel distance: the proximity edge in either direction
/// when one exists, otherwise great-circle from coordinates.
pub async fn spot_to_spot_distance(
    pool: &PgPool,
    spot_id_1: i64,
    spot_id_2: i64,
) -> Result<Option<f64>, sqlx::Error> {
    if spot_id_1 == spot_id_2 {
        return Ok(Some(0.0));
    }

    let edge: Option<Option<f64>> = sqlx::query_scalar(
        "SELECT distance_km FROM spot_spot_map
         WHERE (spot_id_1 = $1 AND spot_id_2 = $2)
            OR (spot_id_1 = $2 AND spot_id_2 = $1)
         LIMIT 1",
    )
    .bind(spot_id_1)
    .bind(spot_id_2)
    .fetch_optional(pool)
    .await?;

    if let Some(Some(distance)) = edge {
        return Ok(Some(distance));
    }

    let (Some(first), Some(second)) = (
        spot_by_id(pool, spot_id_1).await?,
        spot_by_id(pool, spot_id_2).await?,
    ) else {
        return Ok(None);
    };

    Ok(Some(first.coordinates.distance_to(&second.coordinates)))
}

/// Restaurant-to-restaurant travel distance. No edge table covers this
/// pairing, so it is always great-circle.
pub async fn restaurant_to_restaurant_distance(
    pool: &PgPool,
    restaurant_id_1: i64,
    restaurant_id_2: i64,
) -> Result<Option<f64>, sqlx::Error> {
    if restaurant_id_1 == restaurant_id_2 {
        return Ok(Some(0.0));
    }

    let (Some(first), Some(second)) = (
        restaurant_by_id(pool, restaurant_id_1).await?,
        restaurant_by_id(pool, restaurant_id_2).await?,
    ) else {
        return Ok(None);
    };

    Ok(Some(first.coordinates.distance_to(&second.coordinates)))
}
