// Service module exports

pub mod event;
pub mod export;
pub mod settings;
pub mod storage;
pub mod task;
