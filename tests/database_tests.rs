use jejuplan::db::queries;
use jejuplan::models::{ScheduleStep, StepKind, WeatherMode};
use serial_test::serial;

mod common;

async fn seed_seogwipo(pool: &sqlx::PgPool) {
    common::insert_spot(pool, 1, "천지연폭포", "자연 > 폭포", 4.8, "실외", 33.2447, 126.5544, 5000)
        .await;
    common::insert_spot(pool, 2, "정방폭포", "자연 > 폭포", 4.6, "실외", 33.2449, 126.5706, 3000)
        .await;
    common::insert_spot(pool, 3, "테디베어뮤지엄", "문화 > 박물관", 4.4, "실내", 33.2502, 126.4105, 2000)
        .await;
    common::insert_spot(pool, 4, "카멜리아힐", "자연 > 공원", 4.2, "복합", 33.2897, 126.3688, 1500)
        .await;
    common::insert_spot(pool, 5, "동네쉼터", "휴양 > 쉼터", 2.9, "실외", 33.2500, 126.5600, 40)
        .await;

    common::insert_restaurant(pool, 101, "서귀포횟집", "일반음식점", "해산물 > 횟집", 4.2, 33.2450, 126.5550)
        .await;
    common::insert_restaurant(pool, 102, "제주비빔밥", "일반음식점", "한식 > 비빔밥", 4.6, 33.2452, 126.5552)
        .await;
    common::insert_restaurant(pool, 103, "카페한라", "휴게음식점", "카페 / 디저트", 4.3, 33.2455, 126.5556)
        .await;
    common::insert_restaurant(pool, 104, "티하우스", "휴게음식점", "전통찻집", 3.8, 33.2457, 126.5558)
        .await;

    for restaurant_id in [101, 102, 103, 104] {
        common::link_spot_restaurant(pool, 1, restaurant_id, Some(0.4 + restaurant_id as f64 * 0.01))
            .await;
    }

    common::link_spots(pool, 1, 2, Some(1.2)).await;
    common::link_spots(pool, 1, 3, Some(15.3)).await;

    common::insert_profile(
        pool,
        7,
        Some("2박 3일"),
        Some("자연 선호"),
        Some("해산물 위주 음식"),
        Some("빼곡한 일정 선호"),
    )
    .await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_rainy_pool_excludes_outdoor_and_low_ratings() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    let spots = queries::spots_for_weather(&pool, WeatherMode::Rainy, 3.5)
        .await
        .unwrap();

    let names: Vec<&str> = spots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["테디베어뮤지엄", "카멜리아힐"],
        "Rainy pool should hold indoor/mixed spots above the rating floor, best first"
    );

    let all = queries::spots_for_weather(&pool, WeatherMode::NotRainy, 3.5)
        .await
        .unwrap();
    assert_eq!(all.len(), 4, "The 2.9-rated spot stays excluded even when not rainy");
    assert_eq!(all[0].name, "천지연폭포");

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_neighbor_lookup_respects_exclusions_and_weather() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    let neighbors = queries::neighbor_spots(&pool, 1, &[], WeatherMode::NotRainy, 3.5, 50)
        .await
        .unwrap();
    let names: Vec<&str> = neighbors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["정방폭포", "테디베어뮤지엄"]);

    // Already-visited spots drop out
    let neighbors = queries::neighbor_spots(&pool, 1, &[2], WeatherMode::NotRainy, 3.5, 50)
        .await
        .unwrap();
    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors[0].name, "테디베어뮤지엄");

    // Rain filters the outdoor neighbor
    let neighbors = queries::neighbor_spots(&pool, 1, &[], WeatherMode::Rainy, 3.5, 50)
        .await
        .unwrap();
    let names: Vec<&str> = neighbors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["테디베어뮤지엄"]);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_meal_keyword_tier_beats_higher_rated_fallback() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    // 제주비빔밥 is the best-rated linked meal place, but the seafood
    // preference selects the keyword tier first
    let meal = queries::meal_for_spot(&pool, 1, Some("해산물 위주 음식"), &[])
        .await
        .unwrap()
        .expect("a meal restaurant should be linked");
    assert_eq!(meal.name, "서귀포횟집");

    // With the seafood place excluded, the fallback tier takes over
    let meal = queries::meal_for_spot(&pool, 1, Some("해산물 위주 음식"), &[101])
        .await
        .unwrap()
        .expect("fallback tier should still match");
    assert_eq!(meal.name, "제주비빔밥");

    // No preference goes straight to the best-rated linked meal place
    let meal = queries::meal_for_spot(&pool, 1, None, &[]).await.unwrap().unwrap();
    assert_eq!(meal.name, "제주비빔밥");

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_cafe_keyword_tier_then_any_rest_eatery() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    let cafe = queries::cafe_for_spot(&pool, 1, &[]).await.unwrap().unwrap();
    assert_eq!(cafe.name, "카페한라");

    // Keyword tier exhausted: the plain rest-eatery tier still answers
    let cafe = queries::cafe_for_spot(&pool, 1, &[103]).await.unwrap().unwrap();
    assert_eq!(cafe.name, "티하우스");

    // Spot with no linked eateries yields nothing
    let cafe = queries::cafe_for_spot(&pool, 2, &[]).await.unwrap();
    assert!(cafe.is_none());

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_distance_prefers_stored_edge_over_geometry() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    // Stored edge, looked up in either direction
    let d = queries::spot_to_spot_distance(&pool, 1, 2).await.unwrap();
    assert_eq!(d, Some(1.2));
    let d = queries::spot_to_spot_distance(&pool, 2, 1).await.unwrap();
    assert_eq!(d, Some(1.2));

    // No edge between spots 2 and 3: falls back to great-circle
    let d = queries::spot_to_spot_distance(&pool, 2, 3)
        .await
        .unwrap()
        .expect("geometric fallback");
    assert!(d > 10.0 && d < 20.0, "got {}", d);

    // Same spot is zero, missing spot is None
    assert_eq!(queries::spot_to_spot_distance(&pool, 1, 1).await.unwrap(), Some(0.0));
    assert_eq!(queries::spot_to_spot_distance(&pool, 1, 999).await.unwrap(), None);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_replace_schedule_is_transactional_and_idempotent() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    let steps = vec![
        ScheduleStep {
            day: 1,
            order: 1,
            kind: StepKind::Spot,
            spot_id: Some(1),
            restaurant_id: None,
            name: "천지연폭포".to_string(),
            rating: 4.8,
            distance_km: None,
        },
        ScheduleStep {
            day: 1,
            order: 2,
            kind: StepKind::Meal,
            spot_id: None,
            restaurant_id: Some(101),
            name: "서귀포횟집".to_string(),
            rating: 4.2,
            distance_km: Some(0.456),
        },
        ScheduleStep {
            day: 2,
            order: 1,
            kind: StepKind::Spot,
            spot_id: Some(2),
            restaurant_id: None,
            name: "정방폭포".to_string(),
            rating: 4.6,
            distance_km: None,
        },
    ];

    let inserted = queries::replace_schedule(&pool, 7, WeatherMode::NotRainy, &steps)
        .await
        .unwrap();
    assert_eq!(inserted, 3);

    // Saving again replaces rather than accumulates
    let inserted = queries::replace_schedule(&pool, 7, WeatherMode::NotRainy, &steps)
        .await
        .unwrap();
    assert_eq!(inserted, 3);
    let count = queries::schedule_row_count(&pool, 7, WeatherMode::NotRainy)
        .await
        .unwrap();
    assert_eq!(count, 3);

    // Distances are rounded to two decimals, missing ones stored as zero
    let distances: Vec<f64> = sqlx::query_scalar(
        "SELECT distance FROM travel_schedules
         WHERE traveler_id = 7 AND weather = 'not_rainy'
         ORDER BY visit_date, visit_order",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(distances, vec![0.0, 0.46, 0.0]);

    // An empty itinerary is a no-op that keeps the stored rows
    let inserted = queries::replace_schedule(&pool, 7, WeatherMode::NotRainy, &[])
        .await
        .unwrap();
    assert_eq!(inserted, 0);
    let count = queries::schedule_row_count(&pool, 7, WeatherMode::NotRainy)
        .await
        .unwrap();
    assert_eq!(count, 3);

    // The other weather key is untouched throughout
    let count = queries::schedule_row_count(&pool, 7, WeatherMode::Rainy)
        .await
        .unwrap();
    assert_eq!(count, 0);

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_profile_round_trip() {
    let pool = common::setup_test_db().await;
    common::cleanup_test_db(&pool).await;
    seed_seogwipo(&pool).await;

    let profile = queries::profile_by_id(&pool, 7)
        .await
        .unwrap()
        .expect("seeded profile");
    assert_eq!(profile.duration.as_deref(), Some("2박 3일"));
    assert_eq!(profile.day_count(), 2);

    assert!(queries::profile_by_id(&pool, 999).await.unwrap().is_none());

    let ids = queries::all_traveler_ids(&pool).await.unwrap();
    assert_eq!(ids, vec![7]);

    common::cleanup_test_db(&pool).await;
}
