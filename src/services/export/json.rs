use anyhow::{Context, Result};

use crate::models::event::Event;

/// Pretty-printed array in the same record shape as the events slot.
pub(super) fn to_json(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events).context("Failed to serialize events to JSON")
}
