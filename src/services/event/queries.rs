use chrono::NaiveDate;

use super::EventStore;
use crate::models::event::{Event, EventType};

impl EventStore {
    /// Every event in insertion order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events on `date`, ordered by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.date == date)
            .collect();
        events.sort_by_key(|event| event.start_time);
        events
    }

    /// Events dated within `start..=end`, ordered by date then start time.
    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .collect();
        events.sort_by_key(|event| (event.date, event.start_time));
        events
    }

    /// Search events by title or description.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        self.events
            .iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&query)
                    || event
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect()
    }
}

/// Keep only events whose type is in `types`. An empty filter keeps everything.
pub fn filter_events_by_type<'a>(events: &'a [Event], types: &[EventType]) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| types.is_empty() || types.contains(&event.event_type))
        .collect()
}
