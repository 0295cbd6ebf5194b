use serde::{Deserialize, Serialize};

/// Stored traveler preferences. All preference fields are free text entered
/// during onboarding; they are interpreted heuristically, never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    pub traveler_id: i64,
    /// Trip duration text, e.g. "2박 3일"
    pub duration: Option<String>,
    /// Stylistic preference text, e.g. "자연 선호"
    pub preferred_style: Option<String>,
    /// Food preference text, e.g. "해산물 위주 음식"
    pub preferred_food: Option<String>,
    /// Pacing preference text, e.g. "빼곡한 일정 선호"
    pub schedule_preference: Option<String>,
}

impl TravelerProfile {
    /// Number of itinerary days implied by the duration text.
    ///
    /// "2박 3일" plans 2 days, "3박 4일" plans 3 days; anything else falls
    /// back to a single day. The "4일" check wins when both markers appear.
    pub fn day_count(&self) -> u32 {
        let duration = self.duration.as_deref().unwrap_or("");
        if duration.contains("4일") {
            3
        } else if duration.contains("3일") {
            2
        } else {
            1
        }
    }
}

/// Detail-category keywords implied by a food preference text.
///
/// The mapping is intentionally small and literal; unrecognized preferences
/// yield no keywords, which disables the preference tier entirely.
pub fn food_keywords(preferred_food: Option<&str>) -> &'static [&'static str] {
    let Some(pref) = preferred_food else {
        return &[];
    };

    if pref.contains("한식") {
        &["한식"]
    } else if pref.contains("일식") {
        &["일식"]
    } else if pref.contains("중식") {
        &["중식"]
    } else if pref.contains("해산물") {
        &["해산물", "횟집", "생선"]
    } else if pref.contains("카페") {
        &["카페", "커피"]
    } else {
        &[]
    }
}

/// Keywords used for cafe selection regardless of the traveler's food
/// preference.
pub const CAFE_KEYWORDS: &[&str] = &["카페", "커피"];

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_duration(duration: Option<&str>) -> TravelerProfile {
        TravelerProfile {
            traveler_id: 1,
            duration: duration.map(str::to_string),
            preferred_style: None,
            preferred_food: None,
            schedule_preference: None,
        }
    }

    #[test]
    fn test_day_count_from_duration() {
        assert_eq!(profile_with_duration(Some("2박 3일")).day_count(), 2);
        assert_eq!(profile_with_duration(Some("3박 4일")).day_count(), 3);
        assert_eq!(profile_with_duration(Some("당일치기")).day_count(), 1);
        assert_eq!(profile_with_duration(Some("")).day_count(), 1);
        assert_eq!(profile_with_duration(None).day_count(), 1);
    }

    #[test]
    fn test_food_keywords() {
        assert_eq!(food_keywords(Some("한식 위주 음식")), &["한식"]);
        assert_eq!(
            food_keywords(Some("해산물 위주 음식")),
            &["해산물", "횟집", "생선"]
        );
        assert_eq!(food_keywords(Some("해산물 선호")), &["해산물", "횟집", "생선"]);
        assert_eq!(food_keywords(Some("카페 위주")), &["카페", "커피"]);
        assert!(food_keywords(Some("아무거나")).is_empty());
        assert!(food_keywords(None).is_empty());
    }
}
