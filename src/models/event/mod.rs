// Event module
// Calendar event record, drafts for creation and patches for editing

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::date::{default_block, format_time};

/// Kind of event. Drives the accent color in every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Personal,
    Work,
    Family,
    /// Unknown type names read back as `Default`.
    #[default]
    #[serde(other)]
    Default,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Default,
        EventType::Meeting,
        EventType::Personal,
        EventType::Work,
        EventType::Family,
    ];

    /// Stable lowercase name used in storage, exports and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Default => "default",
            EventType::Meeting => "meeting",
            EventType::Personal => "personal",
            EventType::Work => "work",
            EventType::Family => "family",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Default => "Default",
            EventType::Meeting => "Meeting",
            EventType::Personal => "Personal",
            EventType::Work => "Work",
            EventType::Family => "Family",
        }
    }

    /// Accent color (hex) for cells showing this type.
    pub fn color(&self) -> &'static str {
        match self {
            EventType::Default => "#6B7280",
            EventType::Meeting => "#16A34A",
            EventType::Personal => "#EA580C",
            EventType::Work => "#2563EB",
            EventType::Family => "#DB2777",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| format!("Unknown event type '{}'", s))
    }
}

/// Calendar event as stored in the `calendar-events` slot.
///
/// Dates carry no time zone; start and end are local times of day on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "crate::utils::date::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::utils::date::hhmm")]
    pub end_time: NaiveTime,
    #[serde(rename = "type", alias = "eventType", default)]
    pub event_type: EventType,
    #[serde(default)]
    pub description: Option<String>,
}

impl Event {
    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end_time <= self.start_time {
            return Err(format!(
                "Event end time {} must be after start time {}",
                format_time(self.end_time),
                format_time(self.start_time)
            ));
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }

    /// `HH:MM - HH:MM`, as shown under the title in time-grid cells.
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            format_time(self.start_time),
            format_time(self.end_time)
        )
    }
}

/// Ids were written as numbers by older builds; accept both.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Input for creating an event. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Defaults to one hour after `start_time`.
    pub end_time: Option<NaiveTime>,
    pub event_type: EventType,
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            start_time,
            end_time: None,
            event_type: EventType::Default,
            description: None,
        }
    }

    pub fn end(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event with the given id. Validation is left to the caller.
    ///
    /// Without an explicit end the event lasts one hour, clamped to 23:59. A
    /// start at 23:59 or later moves back to 23:58 so the block stays non-empty.
    pub fn into_event(self, id: String) -> Event {
        let (start_time, end_time) = match self.end_time {
            Some(end_time) => (self.start_time, end_time),
            None => default_block(self.start_time),
        };
        Event {
            id,
            title: self.title,
            date: self.date,
            start_time,
            end_time,
            event_type: self.event_type,
            description: self.description,
        }
    }
}

/// Partial update. `None` leaves a field untouched; `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub event_type: Option<EventType>,
    pub description: Option<Option<String>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }

    /// Return a copy of `event` with the patch applied.
    pub fn apply_to(&self, event: &Event) -> Event {
        let mut patched = event.clone();
        if let Some(title) = &self.title {
            patched.title = title.clone();
        }
        if let Some(date) = self.date {
            patched.date = date;
        }
        if let Some(start) = self.start_time {
            patched.start_time = start;
        }
        if let Some(end) = self.end_time {
            patched.end_time = end;
        }
        if let Some(event_type) = self.event_type {
            patched.event_type = event_type;
        }
        if let Some(description) = &self.description {
            patched.description = description.clone();
        }
        patched
    }
}
