use crate::config::PlannerConfig;
use crate::db::{CandidateRepository, ScheduleStore};
use crate::error::Result;
use crate::models::{Pacing, PlaceRef, ScheduleStep, StepKind, WeatherMode};
use crate::services::selection::choose_next_spot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Schedules for both weather modes, generated in one call.
#[derive(Debug, Serialize)]
pub struct BothSchedules {
    pub not_rainy: Vec<ScheduleStep>,
    pub rainy: Vec<ScheduleStep>,
}

/// Itinerary-generation engine.
///
/// Walks a fixed per-day step pattern, picks spots through the tiered
/// selection policy and eateries through the repository's two-tier queries,
/// tracks trip-wide used-id sets, and fills per-day leg distances once a
/// day is complete. Unknown travelers and empty candidate pools produce an
/// empty itinerary, never an error.
pub struct SchedulePlanner {
    repo: Arc<dyn CandidateRepository>,
    store: Arc<dyn ScheduleStore>,
    config: PlannerConfig,
}

impl SchedulePlanner {
    pub fn new(
        repo: Arc<dyn CandidateRepository>,
        store: Arc<dyn ScheduleStore>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    /// RNG for one generation call. A configured seed makes output
    /// reproducible; the default is fresh entropy, so repeated calls with
    /// identical inputs may legitimately differ.
    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub async fn generate_schedule(
        &self,
        traveler_id: i64,
        mode: WeatherMode,
        pacing: Option<Pacing>,
    ) -> Result<Vec<ScheduleStep>> {
        let mut rng = self.rng();
        self.generate_schedule_with_rng(traveler_id, mode, pacing, &mut rng)
            .await
    }

    /// Generation with an injected RNG, used by tests to fix a seed.
    pub async fn generate_schedule_with_rng(
        &self,
        traveler_id: i64,
        mode: WeatherMode,
        pacing: Option<Pacing>,
        rng: &mut (impl Rng + Send),
    ) -> Result<Vec<ScheduleStep>> {
        let Some(profile) = self.repo.profile_of(traveler_id).await? else {
            tracing::info!(
                "No profile for traveler {}, returning empty itinerary",
                traveler_id
            );
            return Ok(Vec::new());
        };

        // A pacing value stored on the profile wins over the request value
        let effective_pacing = profile
            .schedule_preference
            .as_deref()
            .map(Pacing::from_text)
            .or(pacing)
            .unwrap_or_default();
        let pattern = effective_pacing.pattern();
        let days = profile.day_count();

        let pool = self.repo.spots_for_weather(mode).await?;
        if pool.is_empty() {
            tracing::info!(
                "No {} candidates above the rating floor, returning empty itinerary",
                mode
            );
            return Ok(Vec::new());
        }

        let style_pref = profile.preferred_style.as_deref();
        let food_pref = profile.preferred_food.as_deref();

        tracing::debug!(
            traveler_id,
            %mode,
            days,
            pacing = ?effective_pacing,
            pool_size = pool.len(),
            "Generating itinerary"
        );

        let mut itinerary: Vec<ScheduleStep> = Vec::new();
        let mut used_spot_ids: HashSet<i64> = HashSet::new();
        let mut used_restaurant_ids: HashSet<i64> = HashSet::new();

        for day in 1..=days {
            let mut day_steps: Vec<ScheduleStep> = Vec::new();

            'pattern: for (idx, kind) in pattern.iter().enumerate() {
                let order = (idx + 1) as u32;

                match kind {
                    StepKind::Spot => {
                        let base_spot_id = last_spot_id(&day_steps);
                        let neighbors = match base_spot_id {
                            Some(base) => {
                                let exclude: Vec<i64> = used_spot_ids.iter().copied().collect();
                                self.repo
                                    .neighbors_of(base, &exclude, mode, self.config.neighbor_limit)
                                    .await?
                            }
                            None => Vec::new(),
                        };

                        let Some(chosen) =
                            choose_next_spot(&pool, &neighbors, &used_spot_ids, style_pref, rng)
                                .cloned()
                        else {
                            tracing::debug!(day, "Spot candidates exhausted, ending day early");
                            break 'pattern;
                        };

                        used_spot_ids.insert(chosen.id);
                        day_steps.push(ScheduleStep {
                            day,
                            order,
                            kind: StepKind::Spot,
                            spot_id: Some(chosen.id),
                            restaurant_id: None,
                            name: chosen.name,
                            rating: chosen.rating,
                            distance_km: None,
                        });
                    }
                    StepKind::Meal | StepKind::Cafe => {
                        // Eatery steps anchor to the day's most recent spot;
                        // without one the step is skipped, not placeholdered
                        let Some(anchor) = last_spot_id(&day_steps) else {
                            continue;
                        };

                        let exclude: Vec<i64> = used_restaurant_ids.iter().copied().collect();
                        let found = match kind {
                            StepKind::Meal => {
                                self.repo.meal_for(anchor, food_pref, &exclude).await?
                            }
                            _ => self.repo.cafe_for(anchor, &exclude).await?,
                        };

                        let Some(place) = found else {
                            tracing::debug!(day, order, ?kind, "No eligible eatery, skipping step");
                            continue;
                        };

                        used_restaurant_ids.insert(place.id);
                        day_steps.push(ScheduleStep {
                            day,
                            order,
                            kind: *kind,
                            spot_id: None,
                            restaurant_id: Some(place.id),
                            name: place.name,
                            rating: place.rating,
                            distance_km: None,
                        });
                    }
                }
            }

            if !day_steps.is_empty() {
                self.fill_day_distances(&mut day_steps).await?;
                itinerary.extend(day_steps);
            }
        }

        Ok(itinerary)
    }

    pub async fn generate_both(
        &self,
        traveler_id: i64,
        pacing: Option<Pacing>,
    ) -> Result<BothSchedules> {
        Ok(BothSchedules {
            not_rainy: self
                .generate_schedule(traveler_id, WeatherMode::NotRainy, pacing)
                .await?,
            rainy: self
                .generate_schedule(traveler_id, WeatherMode::Rainy, pacing)
                .await?,
        })
    }

    pub async fn save_schedule(
        &self,
        traveler_id: i64,
        mode: WeatherMode,
        steps: &[ScheduleStep],
    ) -> Result<u64> {
        self.store.replace_schedule(traveler_id, mode, steps).await
    }

    /// Generate and persist one schedule; returns the inserted row count.
    pub async fn generate_and_save(
        &self,
        traveler_id: i64,
        mode: WeatherMode,
        pacing: Option<Pacing>,
    ) -> Result<u64> {
        let steps = self.generate_schedule(traveler_id, mode, pacing).await?;
        self.save_schedule(traveler_id, mode, &steps).await
    }

    /// Generate and persist schedules for every known traveler under both
    /// weather modes; returns the total inserted row count.
    pub async fn save_all_travelers(&self, pacing: Option<Pacing>) -> Result<u64> {
        let mut total = 0u64;
        for traveler_id in self.repo.traveler_ids().await? {
            for mode in WeatherMode::BOTH {
                total += self.generate_and_save(traveler_id, mode, pacing).await?;
            }
        }
        tracing::info!("Saved {} schedule rows across all travelers", total);
        Ok(total)
    }

    /// Fill leg distances for one completed day, in step order. The first
    /// step keeps a null distance; legs never cross day boundaries.
    async fn fill_day_distances(&self, day_steps: &mut [ScheduleStep]) -> Result<()> {
        day_steps.sort_by_key(|s| s.order);

        let mut prev: Option<PlaceRef> = None;
        for step in day_steps.iter_mut() {
            let current = step.place_ref();
            step.distance_km = match (prev, current) {
                (Some(from), Some(to)) => self.leg_distance(from, to).await?,
                _ => None,
            };
            prev = current;
        }
        Ok(())
    }

    /// Four-pairing distance dispatch, with meals and cafes unified as
    /// eateries. An unresolvable pairing (missing entity row) stays None.
    async fn leg_distance(&self, from: PlaceRef, to: PlaceRef) -> Result<Option<f64>> {
        match (from, to) {
            (PlaceRef::Spot(a), PlaceRef::Spot(b)) => self.repo.spot_to_spot_distance(a, b).await,
            (PlaceRef::Spot(s), PlaceRef::Eatery(r)) => {
                self.repo.spot_to_restaurant_distance(s, r).await
            }
            // eatery -> spot reuses the spot -> restaurant edge; values are
            // assumed symmetric
            (PlaceRef::Eatery(r), PlaceRef::Spot(s)) => {
                self.repo.spot_to_restaurant_distance(s, r).await
            }
            (PlaceRef::Eatery(a), PlaceRef::Eatery(b)) => {
                self.repo.restaurant_to_restaurant_distance(a, b).await
            }
        }
    }
}

fn last_spot_id(day_steps: &[ScheduleStep]) -> Option<i64> {
    day_steps
        .iter()
        .rev()
        .find(|s| s.kind == StepKind::Spot)
        .and_then(|s| s.spot_id)
}
