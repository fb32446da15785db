use std::fmt;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError, ValidationReason};
use crate::palette::Color;
use crate::time::Time;
use crate::weekday::parse_weekday;

/// One event as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub course: String,
    pub section: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: String,
    pub end: String,
    pub room: String,
    pub days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub course: String,
    pub section: String,
    pub kind: String,
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    info: EventInfo,
    start: Time,
    end: Time,
    days: Vec<Weekday>,
    color: Color,
}

impl Event {
    pub fn new(
        info: EventInfo,
        start: Time,
        end: Time,
        days: impl IntoIterator<Item = Weekday>,
        color: Color,
    ) -> Result<Self> {
        if end <= start {
            return Err(ScheduleError::validation(
                &info.course,
                ValidationReason::EndNotAfterStart,
            ));
        }

        let mut unique = Vec::new();
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        if unique.is_empty() {
            return Err(ScheduleError::validation(
                &info.course,
                ValidationReason::NoDays,
            ));
        }

        Ok(Self {
            info,
            start,
            end,
            days: unique,
            color,
        })
    }

    pub fn from_record(record: EventRecord, color: Color) -> Result<Self> {
        let start = Time::parse(&record.start)?;
        let end = Time::parse(&record.end)?;
        let days = record
            .days
            .iter()
            .map(|name| parse_weekday(name))
            .collect::<Result<Vec<_>>>()?;
        let info = EventInfo {
            course: record.course,
            section: record.section,
            kind: record.kind,
            room: record.room,
        };
        Event::new(info, start, end, days, color)
    }

    pub fn info(&self) -> &EventInfo {
        &self.info
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn occurs_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes_since(self.start)
    }

    /// Three lines: course, capitalized type, room.
    pub fn formatted_label(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.info.course,
            capitalize(&self.info.kind),
            self.info.room
        )
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {} to {} ({} minutes).",
            self.info.course,
            self.info.kind,
            self.start,
            self.end,
            self.duration_minutes()
        )
    }
}
