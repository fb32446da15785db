use jiff::civil::Weekday;
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::event::Event;
use crate::layout::Metrics;
use crate::weekday::DayOrder;

pub fn active_days(events: &[Event], order: DayOrder) -> Result<Vec<Weekday>> {
    if events.is_empty() {
        return Err(ScheduleError::EmptySchedule);
    }
    let mut days: Vec<Weekday> = Vec::new();
    for day in events.iter().flat_map(|event| event.days()) {
        if !days.contains(day) {
            days.push(*day);
        }
    }
    order.sort(&mut days);
    Ok(days)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayAxis {
    days: Vec<Weekday>,
    gutter_width: f32,
    column_width: f32,
}

impl DayAxis {
    pub fn new(events: &[Event], order: DayOrder, metrics: &Metrics) -> Result<Self> {
        let days = active_days(events, order)?;
        debug!(columns = days.len(), "built day axis");
        Ok(Self {
            days,
            gutter_width: metrics.gutter_width,
            column_width: metrics.column_width,
        })
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn column(&self, day: Weekday) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }

    pub fn x(&self, day: Weekday) -> Option<f32> {
        self.column(day).map(|column| self.column_x(column))
    }

    pub fn column_x(&self, column: usize) -> f32 {
        self.gutter_width + self.column_width * column as f32
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    pub fn gutter_width(&self) -> f32 {
        self.gutter_width
    }

    pub fn width(&self) -> f32 {
        self.column_x(self.days.len())
    }
}
