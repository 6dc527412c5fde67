//! Read-only access to the saved task list.

use crate::models::task::SavedTask;
use crate::services::storage::{load_records, SlotStorage, TASKS_SLOT};

/// Saved tasks as loaded at startup. There is no mutation path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedTaskList {
    tasks: Vec<SavedTask>,
}

impl SavedTaskList {
    pub fn load(storage: &dyn SlotStorage) -> Self {
        let tasks: Vec<SavedTask> = load_records(storage, TASKS_SLOT);
        log::info!("Loaded {} saved tasks", tasks.len());
        Self { tasks }
    }

    pub fn tasks(&self) -> &[SavedTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;

    #[test]
    fn test_load_tasks() {
        let storage = MemoryStorage::new().with_slot(
            TASKS_SLOT,
            r#"[{"id":"1","title":"Water plants"},{"id":2,"title":"Pay rent"}]"#,
        );
        let list = SavedTaskList::load(&storage);
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[1].id, "2");
    }

    #[test]
    fn test_missing_or_broken_slot_is_empty() {
        assert!(SavedTaskList::load(&MemoryStorage::new()).is_empty());
        let broken = MemoryStorage::new().with_slot(TASKS_SLOT, "{");
        assert!(SavedTaskList::load(&broken).is_empty());
    }
}
