//! Grid projection for the calendar views.
//!
//! [`project`] turns a view mode, a reference date and a list of events into
//! the cells a renderer draws: one cell per day for the month view, one cell
//! per (day, hour) for the week and day views. Everything here is pure; the
//! drag state machine in [`drag`] is the only part that touches the store.

use chrono::{Datelike, NaiveDate};

use crate::models::event::Event;
use crate::models::ui::{HourWindow, ViewType};

pub mod drag;
pub mod header;
mod month;
pub mod navigation;
mod time_grid;
pub mod utils;

pub use drag::DragState;
pub use header::header_text;
pub use navigation::navigate;
pub use utils::{mini_month, week_start};

/// Events listed in a month cell before the overflow count kicks in.
pub const MONTH_VISIBLE_EVENTS: usize = 3;

/// Knobs for [`project_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Hour rows of the week view. The day view always shows 24.
    pub week_hours: HourWindow,
    pub visible_per_day: usize,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            week_hours: HourWindow::Business,
            visible_per_day: MONTH_VISIBLE_EVENTS,
        }
    }
}

/// One date bucket, or one (date, hour) bucket in the time grids.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    pub date: NaiveDate,
    /// `Some` for hour rows in the week and day views.
    pub hour: Option<u32>,
    /// False for the leading/trailing days of adjacent months.
    pub in_reference_month: bool,
    events: Vec<&'a Event>,
    visible_limit: usize,
}

impl<'a> Cell<'a> {
    pub(crate) fn new(
        date: NaiveDate,
        hour: Option<u32>,
        in_reference_month: bool,
        events: Vec<&'a Event>,
        visible_limit: usize,
    ) -> Self {
        Self {
            date,
            hour,
            in_reference_month,
            events,
            visible_limit,
        }
    }

    /// Every event placed in this cell, ordered by start time.
    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    /// The events a renderer lists; at most the visible limit.
    pub fn visible_events(&self) -> &[&'a Event] {
        let shown = self.events.len().min(self.visible_limit);
        &self.events[..shown]
    }

    /// How many events were left out of [`Cell::visible_events`] ("+N more").
    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(self.visible_limit)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// Cells for one rendered view, in display order.
///
/// Month cells run row by row (Sunday first). Time-grid cells run column by
/// column: all hours of the first day, then the next day.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub view: ViewType,
    pub reference: NaiveDate,
    cells: Vec<Cell<'a>>,
}

impl<'a> Projection<'a> {
    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }

    /// First displayed date.
    pub fn start(&self) -> NaiveDate {
        self.cells.first().map(|c| c.date).unwrap_or(self.reference)
    }

    /// Last displayed date.
    pub fn end(&self) -> NaiveDate {
        self.cells.last().map(|c| c.date).unwrap_or(self.reference)
    }

    /// Cell for `date` (and `hour` in the time grids).
    pub fn cell_at(&self, date: NaiveDate, hour: Option<u32>) -> Option<&Cell<'a>> {
        self.cells
            .iter()
            .find(|cell| cell.date == date && cell.hour == hour)
    }

    /// Month rows of seven days. Time grids are returned as one chunk per day.
    pub fn weeks(&self) -> Vec<&[Cell<'a>]> {
        let chunk = match self.view {
            ViewType::Month => 7,
            _ => self.cells_per_day().max(1),
        };
        self.cells.chunks(chunk).collect()
    }

    /// Every placed event, flattened in cell order. Each event appears once.
    pub fn events(&self) -> Vec<&'a Event> {
        self.cells
            .iter()
            .flat_map(|cell| cell.events.iter().copied())
            .collect()
    }

    fn cells_per_day(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| cell.date == self.start())
            .count()
    }
}

/// Project events onto the grid of `view` around `reference`, with the default
/// 08:00-20:00 week window and three visible events per month cell.
pub fn project<'a>(view: ViewType, reference: NaiveDate, events: &'a [Event]) -> Projection<'a> {
    let events: Vec<&Event> = events.iter().collect();
    project_with(view, reference, &events, &ProjectionOptions::default())
}

/// Project pre-filtered events with explicit options.
///
/// An event lands in a cell when its date equals the cell date and, for hour
/// rows, its start hour equals the row hour (minutes are truncated). Events
/// outside the displayed range or hour window are not placed.
pub fn project_with<'a>(
    view: ViewType,
    reference: NaiveDate,
    events: &[&'a Event],
    options: &ProjectionOptions,
) -> Projection<'a> {
    let cells = match view {
        ViewType::Month => month::month_cells(reference, events, options.visible_per_day),
        ViewType::Week => {
            let start = week_start(reference);
            let days: Vec<NaiveDate> = start.iter_days().take(7).collect();
            time_grid::hour_cells(&days, options.week_hours, events)
        }
        ViewType::Day => time_grid::hour_cells(&[reference], HourWindow::FullDay, events),
    };

    log::trace!(
        "Projected {} view for {}-{:02}: {} cells",
        view,
        reference.year(),
        reference.month(),
        cells.len()
    );

    Projection {
        view,
        reference,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventDraft, EventType};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, day: NaiveDate, hour: u32, minute: u32) -> Event {
        EventDraft::new(
            format!("event {}", id),
            day,
            NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        )
        .event_type(EventType::Work)
        .into_event(id.to_string())
    }

    #[test]
    fn test_day_view_places_event_in_start_hour() {
        let events = vec![event("standup", date(2024, 3, 15), 9, 0)];

        let projection = project(ViewType::Day, date(2024, 3, 15), &events);
        assert_eq!(projection.cells().len(), 24);
        let nine = projection.cell_at(date(2024, 3, 15), Some(9)).unwrap();
        assert_eq!(nine.events().len(), 1);
        assert_eq!(nine.events()[0].id, "standup");
        assert_eq!(projection.events().len(), 1);

        let next_day = project(ViewType::Day, date(2024, 3, 16), &events);
        assert!(next_day.events().is_empty());
    }

    #[test]
    fn test_sub_hour_start_truncates_to_hour_row() {
        let events = vec![event("late", date(2024, 3, 15), 9, 45)];
        let projection = project(ViewType::Day, date(2024, 3, 15), &events);
        assert_eq!(
            projection.cell_at(date(2024, 3, 15), Some(9)).unwrap().events().len(),
            1
        );
        assert!(projection.cell_at(date(2024, 3, 15), Some(10)).unwrap().is_empty());
    }

    #[test]
    fn test_week_view_business_hours() {
        // 2024-03-15 is a Friday; its week starts Sunday 2024-03-10.
        let events = vec![
            event("early", date(2024, 3, 11), 7, 0),
            event("monday", date(2024, 3, 11), 8, 0),
            event("saturday", date(2024, 3, 16), 20, 30),
            event("next week", date(2024, 3, 17), 10, 0),
        ];
        let projection = project(ViewType::Week, date(2024, 3, 15), &events);

        assert_eq!(projection.cells().len(), 7 * 13);
        assert_eq!(projection.start(), date(2024, 3, 10));
        assert_eq!(projection.end(), date(2024, 3, 16));

        let placed: Vec<&str> = projection.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(placed, vec!["monday", "saturday"]);
    }

    #[test]
    fn test_week_view_full_day_window() {
        let events = vec![event("early", date(2024, 3, 11), 7, 0)];
        let refs: Vec<&Event> = events.iter().collect();
        let options = ProjectionOptions {
            week_hours: HourWindow::FullDay,
            ..Default::default()
        };
        let projection = project_with(ViewType::Week, date(2024, 3, 15), &refs, &options);
        assert_eq!(projection.cells().len(), 7 * 24);
        assert_eq!(projection.events().len(), 1);
        assert_eq!(projection.weeks().len(), 7);
    }

    #[test]
    fn test_month_view_includes_adjacent_days() {
        // March 2024: Friday the 1st through Sunday the 31st.
        let projection = project(ViewType::Month, date(2024, 3, 15), &[]);
        assert_eq!(projection.start(), date(2024, 2, 25));
        assert_eq!(projection.end(), date(2024, 4, 6));
        assert_eq!(projection.cells().len(), 42);
        assert_eq!(projection.weeks().len(), 6);
        assert!(!projection.cells()[0].in_reference_month);
        assert!(projection.cell_at(date(2024, 3, 1), None).unwrap().in_reference_month);
    }

    #[test]
    fn test_month_view_exact_four_weeks() {
        // February 2026 starts on a Sunday and has 28 days.
        let projection = project(ViewType::Month, date(2026, 2, 10), &[]);
        assert_eq!(projection.cells().len(), 28);
        assert_eq!(projection.start(), date(2026, 2, 1));
        assert_eq!(projection.end(), date(2026, 2, 28));
    }

    #[test]
    fn test_month_cell_overflow() {
        let day = date(2024, 3, 15);
        let events: Vec<Event> = (0..5)
            .map(|i| event(&i.to_string(), day, 8 + i, 0))
            .collect();
        let projection = project(ViewType::Month, day, &events);
        let cell = projection.cell_at(day, None).unwrap();

        assert_eq!(cell.events().len(), 5);
        assert_eq!(cell.visible_events().len(), 3);
        assert_eq!(cell.overflow(), 2);
        assert!(cell.is_today(day));
    }

    #[test]
    fn test_month_cell_orders_by_start_time() {
        let day = date(2024, 3, 15);
        let events = vec![event("late", day, 17, 0), event("early", day, 8, 0)];
        let projection = project(ViewType::Month, day, &events);
        let ids: Vec<&str> = projection
            .cell_at(day, None)
            .unwrap()
            .events()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn test_month_view_adjacent_month_events_are_placed() {
        let events = vec![
            event("feb", date(2024, 2, 26), 9, 0),
            event("apr", date(2024, 4, 6), 9, 0),
            event("outside", date(2024, 4, 7), 9, 0),
        ];
        let projection = project(ViewType::Month, date(2024, 3, 1), &events);
        let placed: Vec<&str> = projection.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(placed, vec!["feb", "apr"]);
    }
}
