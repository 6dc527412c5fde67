use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use super::SlotStorage;

/// In-process slot storage.
///
/// Clones share the same slots, so two stores built from clones of one
/// `MemoryStorage` behave like two browser tabs on the same origin: the last
/// writer wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw text.
    pub fn with_slot(self, slot: &str, data: impl Into<String>) -> Self {
        self.slots.borrow_mut().insert(slot.to_string(), data.into());
        self
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write(&mut self, slot: &str, data: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), data.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slots() {
        let mut first = MemoryStorage::new();
        let second = first.clone();
        first.write("a", "[1]").unwrap();
        assert_eq!(second.read("a").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_with_slot_seeds_data() {
        let storage = MemoryStorage::new().with_slot("tasks", "[]");
        assert_eq!(storage.read("tasks").unwrap().as_deref(), Some("[]"));
        assert!(storage.read("other").unwrap().is_none());
    }
}
