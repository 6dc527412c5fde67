use chrono::NaiveDate;

use super::shared::drop_times;
use super::{EventStore, StoreError};
use crate::models::event::{Event, EventDraft, EventPatch};
use crate::models::settings::DropPolicy;

impl EventStore {
    /// Create an event from a draft with a fresh unique id.
    pub fn add(&mut self, draft: EventDraft) -> Result<Event, StoreError> {
        let id = self.issue_id();
        let event = draft.into_event(id);
        event.validate().map_err(StoreError::Validation)?;

        log::debug!("Adding event {} '{}' on {}", event.id, event.title, event.date);
        self.events.push(event.clone());
        self.persist();
        Ok(event)
    }

    /// Apply a patch to the event with `id`.
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> Result<Event, StoreError> {
        let index = self.position(id)?;
        let updated = patch.apply_to(&self.events[index]);
        updated.validate().map_err(StoreError::Validation)?;

        log::debug!("Updating event {}", id);
        self.events[index] = updated.clone();
        self.persist();
        Ok(updated)
    }

    /// Remove the event with `id` and return it.
    pub fn remove(&mut self, id: &str) -> Result<Event, StoreError> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);

        log::debug!("Removed event {} '{}'", removed.id, removed.title);
        self.persist();
        Ok(removed)
    }

    /// Move an event to `new_date` at `new_hour:00`, lasting exactly one hour.
    /// The previous duration is discarded. Applying it twice changes nothing more.
    pub fn reschedule(
        &mut self,
        id: &str,
        new_date: NaiveDate,
        new_hour: u32,
    ) -> Result<Event, StoreError> {
        self.reschedule_with(id, new_date, new_hour, DropPolicy::OneHour)
    }

    /// Like [`EventStore::reschedule`], with the end time chosen by `policy`.
    pub fn reschedule_with(
        &mut self,
        id: &str,
        new_date: NaiveDate,
        new_hour: u32,
        policy: DropPolicy,
    ) -> Result<Event, StoreError> {
        let index = self.position(id)?;
        let (start, end) = drop_times(new_hour, self.events[index].duration(), policy)?;

        let event = &mut self.events[index];
        event.date = new_date;
        event.start_time = start;
        event.end_time = end;
        let moved = event.clone();

        log::debug!("Rescheduled event {} to {} {}", id, new_date, moved.time_range_label());
        self.persist();
        Ok(moved)
    }

    /// Move an event to another day keeping its times (drop on a month cell).
    pub fn move_to_date(&mut self, id: &str, new_date: NaiveDate) -> Result<Event, StoreError> {
        let index = self.position(id)?;
        self.events[index].date = new_date;
        let moved = self.events[index].clone();

        log::debug!("Moved event {} to {}", id, new_date);
        self.persist();
        Ok(moved)
    }
}
