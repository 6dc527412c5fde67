use chrono::{Duration, NaiveTime};

use crate::models::event::Event;
use crate::models::settings::DropPolicy;
use crate::utils::date::{add_clamped, hour_start, one_hour_after};

use super::StoreError;

/// Highest numeric id among `events`; non-numeric ids are ignored.
pub(crate) fn max_numeric_id(events: &[Event]) -> i64 {
    events
        .iter()
        .filter_map(|event| event.id.parse::<i64>().ok())
        .max()
        .unwrap_or(0)
}

/// Pick the next id: the clock reading in milliseconds, bumped past anything
/// already issued or already present in `events`.
///
/// Loaded ids near `i64::MAX` cannot be bumped past. The search then starts
/// from the clock and wraps to 0 rather than overflowing.
pub(crate) fn next_id(now_millis: i64, last_issued: i64, events: &[Event]) -> i64 {
    let mut candidate = last_issued
        .checked_add(1)
        .map_or(now_millis, |after_last| now_millis.max(after_last));
    while events.iter().any(|event| event.id == candidate.to_string()) {
        candidate = candidate.checked_add(1).unwrap_or(0);
    }
    candidate
}

/// Start and end of a drop on the `hour` row.
pub(crate) fn drop_times(
    hour: u32,
    original_duration: Duration,
    policy: DropPolicy,
) -> Result<(NaiveTime, NaiveTime), StoreError> {
    let start = hour_start(hour).ok_or(StoreError::InvalidHour(hour))?;
    let end = match policy {
        DropPolicy::OneHour => one_hour_after(start),
        DropPolicy::PreserveDuration if original_duration > Duration::zero() => {
            add_clamped(start, original_duration)
        }
        DropPolicy::PreserveDuration => one_hour_after(start),
    };
    Ok((start, end))
}
