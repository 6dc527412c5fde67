use std::collections::HashMap;

use chrono::NaiveDate;

use super::Cell;
use crate::models::event::Event;
use crate::models::ui::HourWindow;
use crate::utils::date::placement_hour;

/// One cell per (day, hour) in `window`, day by day.
pub(super) fn hour_cells<'a>(
    days: &[NaiveDate],
    window: HourWindow,
    events: &[&'a Event],
) -> Vec<Cell<'a>> {
    let mut by_slot: HashMap<(NaiveDate, u32), Vec<&'a Event>> = HashMap::new();
    for &event in events {
        let hour = placement_hour(event.start_time);
        if days.contains(&event.date) && window.contains(hour) {
            by_slot.entry((event.date, hour)).or_default().push(event);
        }
    }

    let mut cells = Vec::with_capacity(days.len() * window.hours().count());
    for day in days {
        for hour in window.hours() {
            let mut slot_events = by_slot.remove(&(*day, hour)).unwrap_or_default();
            slot_events.sort_by_key(|event| event.start_time);
            cells.push(Cell::new(*day, Some(hour), true, slot_events, usize::MAX));
        }
    }
    cells
}
