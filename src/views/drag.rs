//! Drag-and-drop rescheduling.
//!
//! The caller owns a [`DragState`] and passes it through its event handlers;
//! nothing is kept in ambient UI state.

use chrono::{NaiveDate, NaiveTime};

use crate::models::event::Event;
use crate::models::settings::DropPolicy;
use crate::services::event::{EventStore, StoreError};
use crate::utils::date::format_time;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        event_id: String,
        origin_date: NaiveDate,
        origin_start: NaiveTime,
    },
}

impl DragState {
    /// Pick up `event`. Replaces whatever was held before.
    pub fn begin(&mut self, event: &Event) {
        log::debug!("Drag started for event {}", event.id);
        *self = DragState::Dragging {
            event_id: event.id.clone(),
            origin_date: event.date,
            origin_start: event.start_time,
        };
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Id of the held event, if any.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            DragState::Dragging { event_id, .. } => Some(event_id),
            DragState::Idle => None,
        }
    }

    /// Drop on an hour cell. Always returns to idle.
    ///
    /// Dropping while idle is a no-op (`Ok(None)`). If the held event was
    /// removed in the meantime the drop fails with `NotFound`.
    pub fn drop_on(
        &mut self,
        store: &mut EventStore,
        date: NaiveDate,
        hour: u32,
        policy: DropPolicy,
    ) -> Result<Option<Event>, StoreError> {
        let Some(event_id) = self.take() else {
            return Ok(None);
        };
        store
            .reschedule_with(&event_id, date, hour, policy)
            .map(Some)
    }

    /// Drop on a month cell: the date changes, the times stay.
    pub fn drop_on_day(
        &mut self,
        store: &mut EventStore,
        date: NaiveDate,
    ) -> Result<Option<Event>, StoreError> {
        let Some(event_id) = self.take() else {
            return Ok(None);
        };
        store.move_to_date(&event_id, date).map(Some)
    }

    /// Where the held event sat when the drag began.
    pub fn origin(&self) -> Option<(NaiveDate, NaiveTime)> {
        match self {
            DragState::Dragging {
                origin_date,
                origin_start,
                ..
            } => Some((*origin_date, *origin_start)),
            DragState::Idle => None,
        }
    }

    /// Abandon the drag (pointer left every drop target, escape pressed).
    pub fn cancel(&mut self) {
        if let (Some(event_id), Some((date, start))) = (self.event_id(), self.origin()) {
            log::debug!(
                "Drag cancelled, event {} stays at {} {}",
                event_id,
                date,
                format_time(start)
            );
        }
        self.take();
    }

    fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DragState::Dragging { event_id, .. } => Some(event_id),
            DragState::Idle => None,
        }
    }
}
