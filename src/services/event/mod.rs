//! Calendar event store entry point.
//! Owns the in-memory event list and mirrors it to a storage slot after every
//! change. Operations are split across focused submodules.

use chrono::Local;

use crate::models::event::Event;
use crate::services::storage::{load_records, save_records, SlotStorage, EVENTS_SLOT};

pub mod crud;
mod error;
pub mod queries;
mod shared;

pub use error::StoreError;
pub use queries::filter_events_by_type;

/// Source of creation timestamps (milliseconds) for new ids.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    Local::now().timestamp_millis()
}

/// Ordered, in-memory collection of events backed by a storage slot.
///
/// Persistence is best effort: a failed write is logged and the in-memory
/// state still advances.
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    storage: Box<dyn SlotStorage>,
    slot: String,
    last_issued_id: i64,
    clock: Clock,
}

impl EventStore {
    /// Load the store from the default events slot.
    pub fn open(storage: Box<dyn SlotStorage>) -> Self {
        Self::open_slot(storage, EVENTS_SLOT)
    }

    /// Load the store from a named slot. Absent or malformed data gives an empty store.
    pub fn open_slot(storage: Box<dyn SlotStorage>, slot: &str) -> Self {
        let events: Vec<Event> = load_records(storage.as_ref(), slot);
        log::info!("Loaded {} events from slot '{}'", events.len(), slot);
        let last_issued_id = shared::max_numeric_id(&events);
        Self {
            events,
            storage,
            slot: slot.to_string(),
            last_issued_id,
            clock: system_clock,
        }
    }

    /// Replace the id clock, mainly for deterministic tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn issue_id(&mut self) -> String {
        let id = shared::next_id((self.clock)(), self.last_issued_id, &self.events);
        self.last_issued_id = id;
        id.to_string()
    }

    /// Write the whole collection to the slot.
    pub(crate) fn persist(&mut self) {
        if !save_records(self.storage.as_mut(), &self.slot, &self.events) {
            log::warn!(
                "Event changes kept in memory only; slot '{}' was not updated",
                self.slot
            );
        }
    }

    pub(crate) fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
