use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SleepHoursError {
    #[error("sleepHours must be between 0 and 24, got {0}")]
    OutOfRange(f64),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WaterIntakeError {
    #[error("waterIntake must be a non-negative number, got {0}")]
    Negative(f64),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoodError {
    #[error("mood is required")]
    Empty,

    #[error("mood too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for health entry operations
#[derive(Debug, Clone, Error)]
pub enum EntryError {
    #[error("Invalid sleep hours: {0}")]
    InvalidSleepHours(#[from] SleepHoursError),

    #[error("Invalid water intake: {0}")]
    InvalidWaterIntake(#[from] WaterIntakeError),

    #[error("Invalid mood: {0}")]
    InvalidMood(#[from] MoodError),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
