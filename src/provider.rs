use crate::heatmap::iso_date;
use crate::models::{ActivityRecord, ActivityResponse, ActivityStore};
use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand the heatmap its (date, count) pairs.
pub trait ActivityProvider {
    fn records(&self, today: NaiveDate) -> Vec<ActivityRecord>;
}

impl ActivityProvider for ActivityStore {
    fn records(&self, _today: NaiveDate) -> Vec<ActivityRecord> {
        self.days
            .iter()
            .map(|(date, counts)| ActivityRecord::new(date.clone(), counts.total()))
            .collect()
    }
}

impl ActivityProvider for ActivityResponse {
    fn records(&self, _today: NaiveDate) -> Vec<ActivityRecord> {
        self.days
            .iter()
            .map(|day| ActivityRecord::new(day.date.clone(), day.total))
            .collect()
    }
}

impl ActivityProvider for [ActivityRecord] {
    fn records(&self, _today: NaiveDate) -> Vec<ActivityRecord> {
        self.to_vec()
    }
}

const DEMO_DAYS: i64 = 365;
const DEMO_DENSITY: f64 = 0.35;

/// Placeholder data for when no real activity is available.
///
/// Roughly a third of the trailing year gets a count between 1 and 6.
/// The seed is fixed at construction, so one provider yields the same set for a given day.
#[derive(Debug, Clone, Copy)]
pub struct DemoProvider {
    seed: u64,
}

impl DemoProvider {
    /// Draws a random seed when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed: seed.unwrap_or_else(rand::random),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ActivityProvider for DemoProvider {
    fn records(&self, today: NaiveDate) -> Vec<ActivityRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed ^ today.num_days_from_ce() as u64);

        (0..DEMO_DAYS)
            .filter_map(|offset| {
                if !rng.gen_bool(DEMO_DENSITY) {
                    return None;
                }
                let date = today - Duration::days(offset);
                Some(ActivityRecord::new(iso_date(date), rng.gen_range(1..=6)))
            })
            .collect()
    }
}
