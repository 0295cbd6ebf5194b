//! Stable application-wide constants.
//!
//! Values here are structural defaults and algorithm parameters. Anything
//! that benefits from runtime tuning lives in [`Config`](crate::config::Config)
//! with these as env-var fallbacks.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Candidate filtering ---

/// Minimum rating for a tourist spot to enter the candidate pool.
/// Overridden by `MIN_SPOT_RATING`.
pub const DEFAULT_MIN_SPOT_RATING: f64 = 3.5;

/// Maximum neighbor candidates fetched per proximity lookup.
/// Overridden by `NEIGHBOR_LIMIT`.
pub const DEFAULT_NEIGHBOR_LIMIT: i64 = 50;

/// Default result count for the simple top-N recommenders.
pub const DEFAULT_RECOMMEND_LIMIT: i64 = 5;

// --- Persistence ---

/// Decimal places kept when a leg distance is written to storage.
pub const STORED_DISTANCE_DECIMALS: i32 = 2;
