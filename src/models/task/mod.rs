//! Saved task model.
//!
//! Saved tasks are shown as a checklist next to the calendar. They are read
//! from the `saved-tasks` slot and never written back.

use serde::{Deserialize, Deserializer, Serialize};

/// A saved task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTask {
    #[serde(deserialize_with = "deserialize_task_id")]
    pub id: String,
    pub title: String,
}

fn deserialize_task_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "task id must be a string or number, got {}",
            other
        ))),
    }
}
