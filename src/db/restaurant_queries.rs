use crate::models::profile::{food_keywords, CAFE_KEYWORDS};
use crate::models::{BizType, Coordinates, RestaurantPlace};
use sqlx::PgPool;

/// One meal restaurant (일반음식점) linked to the given spot: the traveler's
/// food-preference keywords first, then any linked meal restaurant.
pub async fn meal_for_spot(
    pool: &PgPool,
    spot_id: i64,
    preferred_food: Option<&str>,
    exclude_ids: &[i64],
) -> Result<Option<RestaurantPlace>, sqlx::Error> {
    let keywords = food_keywords(preferred_food);

    if !keywords.is_empty() {
        if let Some(hit) =
            linked_restaurant(pool, spot_id, Some(BizType::GeneralEatery), keywords, exclude_ids)
                .await?
        {
            return Ok(Some(hit.place));
        }
    }

    Ok(
        linked_restaurant(pool, spot_id, Some(BizType::GeneralEatery), &[], exclude_ids)
            .await?
            .map(|hit| hit.place),
    )
}

/// One cafe (휴게음식점) linked to the given spot: cafe/coffee keywords
/// first, then any linked rest-eatery.
pub async fn cafe_for_spot(
    pool: &PgPool,
    spot_id: i64,
    exclude_ids: &[i64],
) -> Result<Option<RestaurantPlace>, sqlx::Error> {
    if let Some(hit) = linked_restaurant(
        pool,
        spot_id,
        Some(BizType::RestEatery),
        CAFE_KEYWORDS,
        exclude_ids,
    )
    .await?
    {
        return Ok(Some(hit.place));
    }

    Ok(
        linked_restaurant(pool, spot_id, Some(BizType::RestEatery), &[], exclude_ids)
            .await?
            .map(|hit| hit.place),
    )
}

/// Best restaurant of any business type linked to a spot, with its edge
/// distance, for the simple top-N recommenders. Keyword tier first.
pub async fn nearest_restaurant(
    pool: &PgPool,
    spot_id: i64,
    keywords: &[&str],
) -> Result<Option<RestaurantHit>, sqlx::Error> {
    if !keywords.is_empty() {
        if let Some(hit) = linked_restaurant(pool, spot_id, None, keywords, &[]).await? {
            return Ok(Some(hit));
        }
    }

    linked_restaurant(pool, spot_id, None, &[], &[]).await
}

pub async fn restaurant_by_id(
    pool: &PgPool,
    restaurant_id: i64,
) -> Result<Option<RestaurantPlace>, sqlx::Error> {
    let row = sqlx::query_as::<_, RestaurantRow>(
        "SELECT id, name, biz_type, biz_type_detail, rating, lat, lon,
                NULL::float8 AS distance_km
         FROM restaurants
         WHERE id = $1",
    )
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into_hit().place))
}

/// A restaurant picked near a spot, together with the proximity-edge
/// distance when the mapping carries one.
pub struct RestaurantHit {
    pub place: RestaurantPlace,
    pub distance_km: Option<f64>,
}

/// Top restaurant linked to `spot_id` through the spot-restaurant map,
/// ordered by rating then edge distance. Keywords are ORed LIKE patterns
/// against the detail category; an empty slice disables the filter.
async fn linked_restaurant(
    pool: &PgPool,
    spot_id: i64,
    biz_type: Option<BizType>,
    keywords: &[&str],
    exclude_ids: &[i64],
) -> Result<Option<RestaurantHit>, sqlx::Error> {
    let biz_clause = if biz_type.is_some() {
        "AND r.biz_type = $3"
    } else {
        ""
    };
    let keyword_param = if biz_type.is_some() { "$4" } else { "$3" };
    let keyword_clause = if keywords.is_empty() {
        String::new()
    } else {
        format!("AND r.biz_type_detail LIKE ANY({keyword_param})")
    };

    let sql = format!(
        "SELECT r.id, r.name, r.biz_type, r.biz_type_detail, r.rating,
                r.lat, r.lon, m.distance_km
         FROM spot_restaurant_map AS m
         JOIN restaurants AS r ON r.id = m.restaurant_id
         WHERE m.spot_id = $1
           AND NOT (r.id = ANY($2))
           {biz_clause}
           {keyword_clause}
         ORDER BY r.rating DESC, m.distance_km ASC
         LIMIT 1"
    );

    let mut query = sqlx::query_as::<_, RestaurantRow>(&sql)
        .bind(spot_id)
        .bind(exclude_ids);

    if let Some(biz) = biz_type {
        query = query.bind(biz.to_string());
    }
    if !keywords.is_empty() {
        let patterns: Vec<String> = keywords.iter().map(|kw| format!("%{}%", kw)).collect();
        query = query.bind(patterns);
    }

    let row = query.fetch_optional(pool).await?;
    Ok(row.map(RestaurantRow::into_hit))
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    biz_type: String,
    biz_type_detail: Option<String>,
    rating: f64,
    lat: f64,
    lon: f64,
    distance_km: Option<f64>,
}

impl RestaurantRow {
    fn into_hit(self) -> RestaurantHit {
        let biz_type = self.biz_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid business type '{}' for restaurant '{}' (id: {}), defaulting to GeneralEatery",
                self.biz_type,
                self.name,
                self.id
            );
            BizType::GeneralEatery
        });

        let coordinates = Coordinates::new(self.lat, self.lon).unwrap_or_else(|e| {
            tracing::error!(
                "Invalid coordinates for restaurant '{}' (id: {}): {}. Using fallback.",
                self.name,
                self.id,
                e
            );
            Coordinates { lat: 0.0, lon: 0.0 }
        });

        RestaurantHit {
            place: RestaurantPlace {
                id: self.id,
                name: self.name,
                biz_type,
                biz_type_detail: self.biz_type_detail,
                rating: self.rating,
                coordinates,
            },
            distance_km: self.distance_km,
        }
    }
}
