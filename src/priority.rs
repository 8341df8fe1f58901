// Task priority levels and their static weight/color table

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Priority tag carried by every task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Display color associated with a priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityColor {
    Red,
    Orange,
    Green,
}

/// One row of the priority table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityLevel {
    pub priority: Priority,
    /// Sort weight, higher sorts first
    pub weight: u8,
    pub color: PriorityColor,
}

/// The single definition of weights and colors, ordered from highest to lowest weight
pub const PRIORITY_TABLE: [PriorityLevel; 3] = [
    PriorityLevel {
        priority: Priority::High,
        weight: 3,
        color: PriorityColor::Red,
    },
    PriorityLevel {
        priority: Priority::Medium,
        weight: 2,
        color: PriorityColor::Orange,
    },
    PriorityLevel {
        priority: Priority::Low,
        weight: 1,
        color: PriorityColor::Green,
    },
];

impl Priority {
    /// All priorities, highest first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Row of the priority table for this priority
    pub fn level(self) -> &'static PriorityLevel {
        match self {
            Priority::High => &PRIORITY_TABLE[0],
            Priority::Medium => &PRIORITY_TABLE[1],
            Priority::Low => &PRIORITY_TABLE[2],
        }
    }

    pub fn weight(self) -> u8 {
        self.level().weight
    }

    pub fn color(self) -> PriorityColor {
        self.level().color
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(eyre!("Unknown priority: {} (expected high, medium or low)", other)),
        }
    }
}
