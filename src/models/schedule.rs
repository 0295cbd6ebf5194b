use crate::models::spot::IndoorOutdoor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary trip-planning weather parameter. Rainy trips restrict the spot
/// pool to indoor and mixed venues.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherMode {
    NotRainy,
    Rainy,
}

impl WeatherMode {
    pub const BOTH: [WeatherMode; 2] = [WeatherMode::NotRainy, WeatherMode::Rainy];

    /// Indoor/outdoor classes a spot may have under this weather mode.
    pub fn allowed_classes(&self) -> &'static [IndoorOutdoor] {
        match self {
            WeatherMode::Rainy => &[IndoorOutdoor::Indoor, IndoorOutdoor::Mixed],
            WeatherMode::NotRainy => &[
                IndoorOutdoor::Indoor,
                IndoorOutdoor::Outdoor,
                IndoorOutdoor::Mixed,
            ],
        }
    }
}

impl fmt::Display for WeatherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeatherMode::NotRainy => "not_rainy",
            WeatherMode::Rainy => "rainy",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for WeatherMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_rainy" => Ok(WeatherMode::NotRainy),
            "rainy" => Ok(WeatherMode::Rainy),
            _ => Err(format!(
                "Invalid weather mode: {}. Use 'rainy' or 'not_rainy'",
                s
            )),
        }
    }
}

/// Pacing preference selecting the per-day step pattern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Packed,
    #[default]
    Relaxed,
}

impl Pacing {
    /// Interpret a pacing preference text. Accepts both the API-level
    /// "packed"/"relaxed" values and the Korean profile phrasing.
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("빼곡") || lowered.contains("packed") {
            Pacing::Packed
        } else {
            Pacing::Relaxed
        }
    }

    /// Fixed step pattern one day of this pacing walks through.
    pub fn pattern(&self) -> &'static [StepKind] {
        match self {
            Pacing::Packed => &[
                StepKind::Spot,
                StepKind::Meal,
                StepKind::Cafe,
                StepKind::Spot,
                StepKind::Spot,
                StepKind::Meal,
                StepKind::Spot,
            ],
            Pacing::Relaxed => &[
                StepKind::Spot,
                StepKind::Meal,
                StepKind::Cafe,
                StepKind::Spot,
                StepKind::Meal,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Spot,
    Meal,
    Cafe,
}

/// Place reference carried by a schedule step, with meal and cafe steps
/// unified as eateries for distance dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceRef {
    Spot(i64),
    Eatery(i64),
}

/// One visit in a generated itinerary. `day` and `order` are both 1-based;
/// exactly one of `spot_id` / `restaurant_id` is set depending on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStep {
    pub day: u32,
    pub order: u32,
    pub kind: StepKind,
    pub spot_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub name: String,
    pub rating: f64,
    /// Travel distance from the preceding step of the same day, in km.
    /// None for the first step of a day.
    pub distance_km: Option<f64>,
}

impl ScheduleStep {
    pub fn place_ref(&self) -> Option<PlaceRef> {
        match self.kind {
            StepKind::Spot => self.spot_id.map(PlaceRef::Spot),
            StepKind::Meal | StepKind::Cafe => self.restaurant_id.map(PlaceRef::Eatery),
        }
    }
}
