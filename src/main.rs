use axum::Router;
use jejuplan::config::Config;
use jejuplan::db::{PgCandidateRepository, PgScheduleStore};
use jejuplan::services::planner::SchedulePlanner;
use jejuplan::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jejuplan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting jejuplan API server");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = jejuplan::db::create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize the itinerary engine
    let repo = Arc::new(PgCandidateRepository::new(
        db_pool.clone(),
        config.planner.min_spot_rating,
    ));
    let store = Arc::new(PgScheduleStore::new(db_pool.clone()));
    let planner = SchedulePlanner::new(repo, store, config.planner.clone());

    // Create application state
    let state = Arc::new(AppState { db_pool, planner });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", jejuplan::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
