//! Error types for availability-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid event #{index}: end {end} is before start {start}")]
    InvalidEvent {
        index: usize,
        start: String,
        end: String,
    },

    #[error("Duplicate family member id: {0}")]
    DuplicateMember(String),

    #[error("Query needs {requested} slots, limit is {limit}")]
    TooManySlots { requested: usize, limit: usize },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
