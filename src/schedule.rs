use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::day_axis::active_days;
use crate::error::{Result, ScheduleError};
use crate::event::{Event, EventRecord};
use crate::palette::Palette;
use crate::time::Time;
use crate::time_axis::breakpoints;
use crate::weekday::DayOrder;

/// Input document: `{"events": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleFile {
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleOptions {
    pub palette: Palette,
    pub order: DayOrder,
}

#[derive(Debug, Clone)]
pub struct Schedule {
    events: Vec<Event>,
    order: DayOrder,
}

impl Schedule {
    /// Builds every event, colouring the `i`-th one with `palette.color_for(i)`.
    /// Fails on the first invalid record; no events are kept in that case.
    pub fn new(records: Vec<EventRecord>, options: &ScheduleOptions) -> Result<Self> {
        if records.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        let events = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Event::from_record(record, options.palette.color_for(i)))
            .collect::<Result<Vec<_>>>()?;
        debug!(events = events.len(), "built schedule");
        Ok(Self {
            events,
            order: options.order,
        })
    }

    pub fn from_file(file: ScheduleFile, options: &ScheduleOptions) -> Result<Self> {
        Self::new(file.events, options)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn order(&self) -> DayOrder {
        self.order
    }

    pub fn active_days(&self) -> Vec<Weekday> {
        active_days(&self.events, self.order).unwrap_or_default()
    }

    pub fn time_breakpoints(&self) -> Vec<Time> {
        breakpoints(&self.events).unwrap_or_default()
    }

    pub fn events_on(&self, day: Weekday) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.occurs_on(day)).collect();
        events.sort_by_key(|e| e.start());
        events
    }

    pub fn busiest_day_count(&self) -> usize {
        self.active_days()
            .into_iter()
            .map(|day| self.events_on(day).len())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ValidationReason;
    use crate::event::tests::record;
    use crate::palette::Color;

    fn options(palette: Vec<Color>) -> ScheduleOptions {
        ScheduleOptions {
            palette: Palette::new(palette).unwrap(),
            order: DayOrder::default(),
        }
    }

    #[test]
    fn test_colors_assigned_in_input_order() {
        let records = vec![
            record("A", "14:00", "15:00", &["Monday"]),
            record("B", "9:00", "10:00", &["Tuesday"]),
            record("C", "11:00", "12:00", &["Monday"]),
        ];
        let schedule = Schedule::new(records, &options(vec![Color::RED, Color::BLACK])).unwrap();
        let colors: Vec<(&str, Color)> = schedule
            .events()
            .iter()
            .map(|e| (e.info().course.as_str(), e.color()))
            .collect();
        assert_eq!(
            colors,
            vec![("A", Color::RED), ("B", Color::BLACK), ("C", Color::RED)]
        );
    }

    #[test]
    fn test_empty_schedule() {
        let err = Schedule::new(Vec::new(), &ScheduleOptions::default()).unwrap_err();
        assert_eq!(err, ScheduleError::EmptySchedule);
    }

    #[test]
    fn test_invalid_record_fails_whole_schedule() {
        let records = vec![
            record("A", "9:00", "10:00", &["Monday"]),
            record("B", "11:00", "10:00", &["Monday"]),
        ];
        let err = Schedule::new(records, &ScheduleOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Validation {
                course: "B".to_string(),
                reason: ValidationReason::EndNotAfterStart,
            }
        );
    }

    #[test]
    fn test_derived_views() {
        let records = vec![
            record("A", "14:00", "15:00", &["Wednesday", "Monday"]),
            record("B", "9:00", "10:00", &["Monday"]),
        ];
        let schedule = Schedule::new(records, &ScheduleOptions::default()).unwrap();
        assert_eq!(schedule.active_days(), vec![Weekday::Monday, Weekday::Wednesday]);
        assert_eq!(schedule.time_breakpoints().len(), 6);

        let monday: Vec<&str> = schedule
            .events_on(Weekday::Monday)
            .iter()
            .map(|e| e.info().course.as_str())
            .collect();
        assert_eq!(monday, vec!["B", "A"]);
        assert!(schedule.events_on(Weekday::Friday).is_empty());
        assert_eq!(schedule.busiest_day_count(), 2);

        // Insertion order is untouched by the per-day sort.
        assert_eq!(schedule.events()[0].info().course, "A");
    }

    #[test]
    fn test_from_json_file() {
        let json = r#"{"events": [
            {"course": "PHYS 121", "section": "001", "type": "LEC", "start": "8:30", "end": "9:20", "room": "PHY 150", "days": ["Monday", "Wednesday", "Friday"]}
        ]}"#;
        let file: ScheduleFile = serde_json::from_str(json).unwrap();
        let schedule = Schedule::from_file(file, &ScheduleOptions::default()).unwrap();
        assert_eq!(schedule.events().len(), 1);
        assert_eq!(schedule.active_days().len(), 3);
    }
}
