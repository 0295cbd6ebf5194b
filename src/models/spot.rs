use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indoor/outdoor classification of a tourist spot, stored in the database
/// as the Korean source labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IndoorOutdoor {
    Indoor,
    Outdoor,
    Mixed,
}

impl fmt::Display for IndoorOutdoor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IndoorOutdoor::Indoor => "실내",
            IndoorOutdoor::Outdoor => "실외",
            IndoorOutdoor::Mixed => "복합",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for IndoorOutdoor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "실내" => Ok(IndoorOutdoor::Indoor),
            "실외" => Ok(IndoorOutdoor::Outdoor),
            "복합" => Ok(IndoorOutdoor::Mixed),
            _ => Err(format!("Invalid indoor/outdoor label: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub id: i64,
    pub name: String,
    /// Free-text category, e.g. "자연 > 폭포" or "문화 > 박물관"
    pub category: String,
    /// Rating from 0.0 to 5.0
    pub rating: f64,
    pub indoor_outdoor: IndoorOutdoor,
    pub coordinates: Coordinates,
    pub review_count: i64,
}
