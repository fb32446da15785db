use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("malformed time {0:?}, expected H:MM")]
    Format(String),
    #[error("invalid event {course}: {reason}")]
    Validation {
        course: String,
        reason: ValidationReason,
    },
    #[error("unknown day {0:?}")]
    UnknownDay(String),
    #[error("schedule has no events")]
    EmptySchedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    EndNotAfterStart,
    NoDays,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::EndNotAfterStart => write!(f, "end time must be after start time"),
            ValidationReason::NoDays => write!(f, "event must meet on at least one day"),
        }
    }
}

impl ScheduleError {
    pub(crate) fn validation(course: &str, reason: ValidationReason) -> Self {
        ScheduleError::Validation {
            course: course.to_string(),
            reason,
        }
    }

    /// Stable machine-readable code, used by the HTTP driver.
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleError::Format(_) => "FORMAT",
            ScheduleError::Validation { .. } => "VALIDATION",
            ScheduleError::UnknownDay(_) => "UNKNOWN_DAY",
            ScheduleError::EmptySchedule => "EMPTY_SCHEDULE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_course() {
        let err = ScheduleError::validation("CS 101", ValidationReason::NoDays);
        assert_eq!(
            err.to_string(),
            "invalid event CS 101: event must meet on at least one day"
        );
        assert_eq!(err.code(), "VALIDATION");
    }
}
