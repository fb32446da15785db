use std::fmt;
use std::str::FromStr;

use num::Integer;

use crate::error::{Result, ScheduleError};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Minutes since local midnight, always in `0..1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u16);

impl Time {
    pub const MIDNIGHT: Time = Time(0);

    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || ScheduleError::Format(text.to_string());

        let mut parts = text.trim().split(':');
        let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let hour = parse_digits(hour).ok_or_else(malformed)?;
        let minute = parse_digits(minute).ok_or_else(malformed)?;
        if hour >= 24 || minute >= 60 {
            return Err(malformed());
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn from_hour_minute(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn to_absolute_minutes(self) -> u16 {
        self.0
    }

    pub fn hour_minute(self) -> (u16, u16) {
        self.0.div_mod_floor(&60)
    }

    /// Hour on a 12-hour clock: 0 and 12 both display as 12, 13..23 as 1..11.
    pub fn to_12_hour(self) -> (u16, u16) {
        let (hour, minute) = self.hour_minute();
        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        (hour, minute)
    }

    pub fn format_12_hour(self) -> String {
        let (hour, minute) = self.to_12_hour();
        format!("{hour}:{minute:02}")
    }

    #[must_use]
    pub fn floor_to(self, step: u16) -> Time {
        let (_, remainder) = self.0.div_mod_floor(&step);
        Time(self.0 - remainder)
    }

    pub fn minutes_since(self, earlier: Time) -> u16 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn is_between_inclusive(self, lo: Time, hi: Time) -> bool {
        lo <= self && self <= hi
    }
}

fn parse_digits(part: &str) -> Option<u16> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Time {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Time::parse(s)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = self.hour_minute();
        write!(f, "{hour}:{minute:02}")
    }
}
