// Test fixtures - reusable test data
// Provides consistent dates and event drafts across the integration tests

#![allow(dead_code)]

use calendar_grid::models::event::{EventDraft, EventType};
use chrono::{NaiveDate, NaiveTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 15 2024
    pub fn standup_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2024 (New Year's Eve)
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample event drafts for testing
pub mod drafts {
    use super::*;

    /// Standup on March 15 2024, 09:00-10:00, work
    pub fn standup() -> EventDraft {
        EventDraft::new("Standup", dates::standup_day(), dates::at(9, 0))
            .end(dates::at(10, 0))
            .event_type(EventType::Work)
    }

    /// Family dinner the next evening, 19:00-21:30
    pub fn dinner() -> EventDraft {
        EventDraft::new(
            "Dinner, with \"grandma\"",
            dates::standup_day().succ_opt().unwrap(),
            dates::at(19, 0),
        )
        .end(dates::at(21, 30))
        .event_type(EventType::Family)
        .description("Bring dessert")
    }

    /// Party running up to midnight on New Year's Eve
    pub fn party() -> EventDraft {
        EventDraft::new("Party", dates::new_years_eve_2024(), dates::at(22, 0))
            .event_type(EventType::Personal)
    }
}
