use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entry::errors::MoodError;
use crate::domain::entry::errors::SleepHoursError;
use crate::domain::entry::errors::WaterIntakeError;
use crate::domain::user::models::UserId;

/// One day's health record submitted by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthEntry {
    pub id: EntryId,
    pub owner: UserId,
    pub sleep_hours: SleepHours,
    pub water_intake: WaterIntake,
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hours slept, within a single day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepHours(f64);

impl SleepHours {
    const MAX: f64 = 24.0;

    pub fn new(hours: f64) -> Result<Self, SleepHoursError> {
        if hours.is_finite() && (0.0..=Self::MAX).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(SleepHoursError::OutOfRange(hours))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Water drunk, in cups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterIntake(f64);

impl WaterIntake {
    pub fn new(cups: f64) -> Result<Self, WaterIntakeError> {
        if cups.is_finite() && cups >= 0.0 {
            Ok(Self(cups))
        } else {
            Err(WaterIntakeError::Negative(cups))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Free-form mood description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mood(String);

impl Mood {
    const MAX_LENGTH: usize = 64;

    pub fn new(mood: String) -> Result<Self, MoodError> {
        let mood = mood.trim().to_string();
        let length = mood.chars().count();

        if length == 0 {
            Err(MoodError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(MoodError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(mood))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to record a new health entry
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitEntryCommand {
    pub sleep_hours: SleepHours,
    pub water_intake: WaterIntake,
    pub mood: Mood,
}

impl SubmitEntryCommand {
    pub fn new(sleep_hours: SleepHours, water_intake: WaterIntake, mood: Mood) -> Self {
        Self {
            sleep_hours,
            water_intake,
            mood,
        }
    }
}
