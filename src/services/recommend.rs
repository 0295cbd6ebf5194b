use crate::db::queries;
use crate::error::Result;
use crate::models::profile::food_keywords;
use serde::Serialize;
use sqlx::PgPool;

/// One top-rated spot paired with the best restaurant nearby.
#[derive(Debug, Serialize)]
pub struct SpotFoodItem {
    pub spot_id: i64,
    pub spot_name: String,
    pub spot_rating: f64,
    pub restaurant_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub restaurant_rating: Option<f64>,
    pub distance_km: Option<f64>,
}

/// Top-rated spots, each with its best nearby restaurant. No weather or
/// personalization involved.
pub async fn recommend_spot_with_restaurant(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<SpotFoodItem>> {
    pair_spots_with_restaurants(pool, limit, &[]).await
}

/// Same pairing, but restaurants matching the traveler's stored food
/// preference are tried first.
pub async fn recommend_for_traveler(
    pool: &PgPool,
    traveler_id: i64,
    limit: i64,
) -> Result<Vec<SpotFoodItem>> {
    let preferred_food = queries::profile_by_id(pool, traveler_id)
        .await?
        .and_then(|p| p.preferred_food);
    let keywords = food_keywords(preferred_food.as_deref());

    pair_spots_with_restaurants(pool, limit, keywords).await
}

async fn pair_spots_with_restaurants(
    pool: &PgPool,
    limit: i64,
    keywords: &[&str],
) -> Result<Vec<SpotFoodItem>> {
    let spots = queries::top_spots(pool, limit).await?;
    let mut items = Vec::with_capacity(spots.len());

    for spot in spots {
        let hit = queries::nearest_restaurant(pool, spot.id, keywords).await?;

        let item = match hit {
            Some(hit) => SpotFoodItem {
                spot_id: spot.id,
                spot_name: spot.name,
                spot_rating: spot.rating,
                restaurant_id: Some(hit.place.id),
                restaurant_name: Some(hit.place.name),
                restaurant_rating: Some(hit.place.rating),
                distance_km: hit.distance_km,
            },
            None => SpotFoodItem {
                spot_id: spot.id,
                spot_name: spot.name,
                spot_rating: spot.rating,
                restaurant_id: None,
                restaurant_name: None,
                restaurant_rating: None,
                distance_km: None,
            },
        };
        items.push(item);
    }

    Ok(items)
}
