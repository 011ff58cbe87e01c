use crate::errors::AppError;
use crate::heatmap::{iso_date, parse_iso_date};
use crate::models::{ActivityDay, ActivityRange, ActivityResponse, ActivityStore, ActivityUpsert};
use chrono::{Duration, Local, NaiveDate};

pub fn build_activity_response(range: ActivityRange, store: &ActivityStore) -> ActivityResponse {
    build_activity_response_at(Local::now().date_naive(), range, store)
}

/// Every day of `range` ending at `today`, oldest first, zero-filled where nothing was stored.
pub fn build_activity_response_at(
    today: NaiveDate,
    range: ActivityRange,
    store: &ActivityStore,
) -> ActivityResponse {
    let start = range_start(today, range);
    let mut days = Vec::with_capacity(range.span_days() as usize);

    let mut date = start;
    while date <= today {
        let counts = store.days.get(&iso_date(date)).copied().unwrap_or_default();
        days.push(ActivityDay {
            date: iso_date(date),
            total: counts.total(),
            leetcode: Some(counts.leetcode),
            github: Some(counts.github),
        });
        date += Duration::days(1);
    }

    ActivityResponse { range, days }
}

pub fn range_start(today: NaiveDate, range: ActivityRange) -> NaiveDate {
    today - Duration::days(range.span_days() - 1)
}

/// Unknown or missing ranges fall back to a year, and the response reports `1y`
/// rather than echoing the unrecognized value.
pub fn resolve_range(raw: Option<&str>) -> ActivityRange {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

/// Overwrites the provided sub-counts for a day, leaving the others untouched.
pub fn apply_upsert(store: &mut ActivityStore, upsert: &ActivityUpsert) -> Result<ActivityDay, AppError> {
    let date = parse_iso_date(&upsert.date)
        .ok_or_else(|| AppError::bad_request("date must be formatted as YYYY-MM-DD"))?;
    let key = iso_date(date);

    let entry = store.days.entry(key.clone()).or_default();
    if let Some(leetcode) = upsert.leetcode {
        entry.leetcode = leetcode;
    }
    if let Some(github) = upsert.github {
        entry.github = github;
    }

    Ok(ActivityDay {
        date: key,
        total: entry.total(),
        leetcode: Some(entry.leetcode),
        github: Some(entry.github),
    })
}
