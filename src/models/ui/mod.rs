// UI models module
// View modes and grid options shared by the projector, settings and CLI

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Calendar view mode. Sets grid granularity and navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Day => "day",
            ViewType::Week => "week",
            ViewType::Month => "month",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewType::Day),
            "week" => Ok(ViewType::Week),
            "month" => Ok(ViewType::Month),
            other => Err(format!("Unknown view '{}' (expected month, week or day)", other)),
        }
    }
}

/// Hour rows shown in the week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourWindow {
    /// 08:00 through 20:00, 13 rows.
    #[default]
    Business,
    /// All 24 hours.
    FullDay,
}

impl HourWindow {
    pub fn first_hour(&self) -> u32 {
        match self {
            HourWindow::Business => 8,
            HourWindow::FullDay => 0,
        }
    }

    pub fn last_hour(&self) -> u32 {
        match self {
            HourWindow::Business => 20,
            HourWindow::FullDay => 23,
        }
    }

    pub fn hours(&self) -> std::ops::RangeInclusive<u32> {
        self.first_hour()..=self.last_hour()
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.hours().contains(&hour)
    }
}

/// Navigation step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}
