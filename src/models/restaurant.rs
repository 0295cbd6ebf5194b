use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business-type classification: meal restaurants vs. cafes/snack places.
/// Stored in the database as the Korean licensing labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BizType {
    /// 일반음식점 - full meal restaurants
    GeneralEatery,
    /// 휴게음식점 - cafes, tea houses, snack bars
    RestEatery,
}

impl fmt::Display for BizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BizType::GeneralEatery => "일반음식점",
            BizType::RestEatery => "휴게음식점",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BizType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "일반음식점" => Ok(BizType::GeneralEatery),
            "휴게음식점" => Ok(BizType::RestEatery),
            _ => Err(format!("Invalid business type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantPlace {
    pub id: i64,
    pub name: String,
    pub biz_type: BizType,
    /// Free-text detail category, e.g. "해산물 전문" or "카페 / 디저트"
    pub biz_type_detail: Option<String>,
    pub rating: f64,
    pub coordinates: Coordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biz_type_parsing() {
        assert_eq!("일반음식점".parse::<BizType>().unwrap(), BizType::GeneralEatery);
        assert_eq!("휴게음식점".parse::<BizType>().unwrap(), BizType::RestEatery);
        assert!("noodle bar".parse::<BizType>().is_err());
    }
}
