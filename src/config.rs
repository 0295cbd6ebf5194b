use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Rating floor for the weather-filtered spot candidate pool
    pub min_spot_rating: f64,

    /// Cap on neighbor candidates fetched per spot-proximity lookup
    pub neighbor_limit: i64,

    /// Optional fixed RNG seed. When set, itinerary generation becomes
    /// reproducible; when absent each call draws from entropy.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_spot_rating: DEFAULT_MIN_SPOT_RATING,
            neighbor_limit: DEFAULT_NEIGHBOR_LIMIT,
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let min_spot_rating: f64 = env::var("MIN_SPOT_RATING")
            .unwrap_or_else(|_| defaults.min_spot_rating.to_string())
            .parse()
            .map_err(|_| "Invalid MIN_SPOT_RATING")?;

        if !(0.0..=5.0).contains(&min_spot_rating) {
            return Err("MIN_SPOT_RATING must be between 0.0 and 5.0".to_string());
        }

        let neighbor_limit: i64 = env::var("NEIGHBOR_LIMIT")
            .unwrap_or_else(|_| defaults.neighbor_limit.to_string())
            .parse()
            .map_err(|_| "Invalid NEIGHBOR_LIMIT")?;

        if neighbor_limit <= 0 {
            return Err("NEIGHBOR_LIMIT must be positive".to_string());
        }

        let seed = match env::var("PLANNER_SEED") {
            Ok(raw) => Some(raw.parse().map_err(|_| "Invalid PLANNER_SEED")?),
            Err(_) => None,
        };

        Ok(Self {
            min_spot_rating,
            neighbor_limit,
            seed,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            planner: PlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
