use crate::models::TravelerProfile;
use sqlx::PgPool;

pub async fn profile_by_id(
    pool: &PgPool,
    traveler_id: i64,
) -> Result<Option<TravelerProfile>, sqlx::Error> {
    sqlx::query_as::<_, TravelerProfileRow>(
        "SELECT traveler_id, duration, preferred_style, preferred_food, schedule_preference
         FROM traveler_profiles
         WHERE traveler_id = $1",
    )
    .bind(traveler_id)
    .fetch_optional(pool)
    .await
    .map(|row| row.map(TravelerProfileRow::into_profile))
}

pub async fn all_traveler_ids(pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT traveler_id FROM traveler_profiles ORDER BY traveler_id")
        .fetch_all(pool)
        .await
}

#[derive(sqlx::FromRow)]
struct TravelerProfileRow {
    traveler_id: i64,
    duration: Option<String>,
    preferred_style: Option<String>,
    preferred_food: Option<String>,
    schedule_preference: Option<String>,
}

impl TravelerProfileRow {
    fn into_profile(self) -> TravelerProfile {
        TravelerProfile {
            traveler_id: self.traveler_id,
            duration: self.duration,
            preferred_style: self.preferred_style,
            preferred_food: self.preferred_food,
            schedule_preference: self.schedule_preference,
        }
    }
}
