use crate::models::Spot;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Style group resolved from a traveler's stylistic preference text.
/// First matching marker wins; no marker disables style filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleGroup {
    Culture,
    Nature,
    Activity,
    Relaxation,
}

impl StyleGroup {
    pub fn resolve(style_pref: Option<&str>) -> Option<StyleGroup> {
        let pref = style_pref?;
        if pref.contains("문화") {
            Some(StyleGroup::Culture)
        } else if pref.contains("자연") {
            Some(StyleGroup::Nature)
        } else if pref.contains("액티비티") || pref.contains("체험") {
            Some(StyleGroup::Activity)
        } else if pref.contains("휴양") || pref.contains("휴식") {
            Some(StyleGroup::Relaxation)
        } else {
            None
        }
    }

    /// Keywords likely to appear in a matching spot's category text.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            StyleGroup::Culture => &["문화", "역사", "박물관", "전시", "유적", "전통", "예술"],
            StyleGroup::Nature => &[
                "자연", "산", "계곡", "바다", "해변", "오름", "숲", "공원", "폭포",
            ],
            StyleGroup::Activity => &[
                "체험", "레저", "액티비티", "카트", "서핑", "승마", "스포츠",
            ],
            StyleGroup::Relaxation => &["휴양", "스파", "온천", "리조트", "펜션"],
        }
    }

    /// Case-insensitive substring match against a spot's category text.
    pub fn matches(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.keywords()
            .iter()
            .any(|kw| category.contains(&kw.to_lowercase()))
    }
}

/// Choose the next tourist spot for an itinerary step.
///
/// `neighbor_pool` holds proximity-graph candidates around the day's most
/// recent spot; pass an empty slice for the day's first spot. Both pools are
/// assumed already weather-filtered. Priority tiers, first non-empty wins:
///
/// 1. neighbors matching the style group
/// 2. neighbors, any
/// 3. global pool matching the style group
/// 4. global pool, any
///
/// Ties inside the winning tier break by uniform random choice through the
/// injected `rng`. Pure: marking the result as used is the caller's job.
pub fn choose_next_spot<'a, R: Rng + ?Sized>(
    global_pool: &'a [Spot],
    neighbor_pool: &'a [Spot],
    used_spot_ids: &HashSet<i64>,
    style_pref: Option<&str>,
    rng: &mut R,
) -> Option<&'a Spot> {
    let style = StyleGroup::resolve(style_pref);

    let usable = |pool: &'a [Spot]| -> Vec<&'a Spot> {
        pool.iter().filter(|s| !used_spot_ids.contains(&s.id)).collect()
    };

    for tier in [usable(neighbor_pool), usable(global_pool)] {
        if tier.is_empty() {
            continue;
        }

        if let Some(group) = style {
            let styled: Vec<&Spot> = tier
                .iter()
                .copied()
                .filter(|s| group.matches(&s.category))
                .collect();
            if !styled.is_empty() {
                return styled.choose(rng).copied();
            }
        }

        return tier.choose(rng).copied();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, IndoorOutdoor};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spot(id: i64, category: &str) -> Spot {
        Spot {
            id,
            name: format!("spot-{}", id),
            category: category.to_string(),
            rating: 4.0,
            indoor_outdoor: IndoorOutdoor::Mixed,
            coordinates: Coordinates { lat: 33.25, lon: 126.56 },
            review_count: 100,
        }
    }

    #[test]
    fn test_style_resolution() {
        assert_eq!(StyleGroup::resolve(Some("자연 선호")), Some(StyleGroup::Nature));
        assert_eq!(
            StyleGroup::resolve(Some("문화 탐방 위주")),
            Some(StyleGroup::Culture)
        );
        assert_eq!(
            StyleGroup::resolve(Some("체험 활동 좋아함")),
            Some(StyleGroup::Activity)
        );
        assert_eq!(
            StyleGroup::resolve(Some("휴식이 필요해요")),
            Some(StyleGroup::Relaxation)
        );
        assert_eq!(StyleGroup::resolve(Some("맛집 투어")), None);
        assert_eq!(StyleGroup::resolve(None), None);
    }

    #[test]
    fn test_style_match_is_substring_on_category() {
        assert!(StyleGroup::Nature.matches("자연 > 폭포"));
        assert!(StyleGroup::Culture.matches("역사 유적지"));
        assert!(!StyleGroup::Nature.matches("테마파크"));
    }

    #[test]
    fn test_neighbors_win_over_global() {
        let global = vec![spot(1, "자연 > 오름"), spot(2, "문화 > 박물관")];
        let neighbors = vec![spot(3, "문화 > 전시관")];
        let mut rng = StdRng::seed_from_u64(0);

        // Style prefers nature, but the neighbor tier (no nature match there)
        // still wins over any global candidate.
        let chosen = choose_next_spot(&global, &neighbors, &HashSet::new(), Some("자연 선호"), &mut rng);
        assert_eq!(chosen.unwrap().id, 3);
    }

    #[test]
    fn test_style_tier_wins_within_pool() {
        let global = vec![spot(1, "자연 > 오름"), spot(2, "문화 > 박물관")];
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..20 {
            let chosen =
                choose_next_spot(&global, &[], &HashSet::new(), Some("자연 선호"), &mut rng);
            assert_eq!(chosen.unwrap().id, 1);
        }
    }

    #[test]
    fn test_no_style_marker_disables_filter() {
        let global = vec![spot(1, "자연 > 오름"), spot(2, "문화 > 박물관")];
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = HashSet::new();
        for _ in 0..50 {
            let chosen = choose_next_spot(&global, &[], &HashSet::new(), Some("아무거나"), &mut rng);
            seen.insert(chosen.unwrap().id);
        }
        // Without a style group both candidates stay eligible
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_used_ids_are_excluded() {
        let global = vec![spot(1, "자연 > 오름"), spot(2, "자연 > 해변")];
        let used: HashSet<i64> = [1].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        let chosen = choose_next_spot(&global, &[], &used, Some("자연"), &mut rng);
        assert_eq!(chosen.unwrap().id, 2);
    }

    #[test]
    fn test_exhausted_pools_yield_none() {
        let global = vec![spot(1, "자연 > 오름")];
        let used: HashSet<i64> = [1].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(choose_next_spot(&global, &[], &used, None, &mut rng).is_none());
        assert!(choose_next_spot(&[], &[], &HashSet::new(), None, &mut rng).is_none());
    }

    #[test]
    fn test_used_neighbor_falls_back_to_global() {
        let global = vec![spot(1, "문화 > 박물관"), spot(2, "자연 > 숲")];
        let neighbors = vec![spot(1, "문화 > 박물관")];
        let used: HashSet<i64> = [1].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(0);

        let chosen = choose_next_spot(&global, &neighbors, &used, None, &mut rng);
        assert_eq!(chosen.unwrap().id, 2);
    }
}
