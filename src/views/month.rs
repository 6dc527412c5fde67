use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::utils::week_start;
use super::Cell;
use crate::models::event::Event;
use crate::utils::date::{first_of_month, last_of_month};

/// Full Sunday-first weeks covering the month of `reference`.
pub(super) fn month_cells<'a>(
    reference: NaiveDate,
    events: &[&'a Event],
    visible_per_day: usize,
) -> Vec<Cell<'a>> {
    let (grid_start, grid_end) = month_grid_bounds(reference);

    let mut by_date: HashMap<NaiveDate, Vec<&'a Event>> = HashMap::new();
    for &event in events {
        if event.date >= grid_start && event.date <= grid_end {
            by_date.entry(event.date).or_default().push(event);
        }
    }

    grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .map(|day| {
            let mut day_events = by_date.remove(&day).unwrap_or_default();
            day_events.sort_by_key(|event| event.start_time);
            let in_month = day.month() == reference.month() && day.year() == reference.year();
            Cell::new(day, None, in_month, day_events, visible_per_day)
        })
        .collect()
}

/// First and last date shown for the month of `reference`.
pub(super) fn month_grid_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(first_of_month(reference));
    let end = week_start(last_of_month(reference)) + Duration::days(6);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_bounds_span_whole_weeks() {
        let (start, end) = month_grid_bounds(date(2024, 12, 25));
        assert_eq!(start, date(2024, 12, 1));
        assert_eq!(end, date(2025, 1, 4));
        assert_eq!((end - start).num_days() + 1, 35);
    }

    #[test]
    fn test_year_boundary_flags() {
        let cells = month_cells(date(2025, 1, 10), &[], 3);
        // January 2025 starts on a Wednesday.
        assert_eq!(cells[0].date, date(2024, 12, 29));
        assert!(!cells[0].in_reference_month);
        assert!(cells[3].in_reference_month);
    }
}
