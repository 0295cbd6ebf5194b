use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lon
            ));
        }
        Ok(Coordinates { lat, lon })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(33.2541, 126.5601).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lon
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let jungmun = Coordinates::new(33.2452, 126.4122).unwrap();
        assert_eq!(jungmun.distance_to(&jungmun), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let seogwipo = Coordinates::new(33.2541, 126.5601).unwrap();
        let jeju_city = Coordinates::new(33.4996, 126.5312).unwrap();

        let there = seogwipo.distance_to(&jeju_city);
        let back = jeju_city.distance_to(&seogwipo);
        assert!((there - back).abs() < 1e-12);
    }

    #[test]
    fn test_known_distance() {
        // Seogwipo city hall to Jeju city hall is roughly 27-28 km
        let seogwipo = Coordinates::new(33.2541, 126.5601).unwrap();
        let jeju_city = Coordinates::new(33.4996, 126.5312).unwrap();

        let distance = seogwipo.distance_to(&jeju_city);
        assert!((distance - 27.4).abs() < 1.5, "got {}", distance);
    }
}
