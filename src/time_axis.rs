use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::event::Event;
use crate::layout::Metrics;
use crate::time::Time;

pub const SLOT_MINUTES: u16 = 30;

// A mark is kept when its row touches an event: floor30(start) <= mark <= end.
pub fn breakpoints(events: &[Event]) -> Result<Vec<Time>> {
    let global_start = events
        .iter()
        .map(Event::start)
        .min()
        .ok_or(ScheduleError::EmptySchedule)?;
    let global_end = events
        .iter()
        .map(Event::end)
        .max()
        .ok_or(ScheduleError::EmptySchedule)?;

    let grid_start = global_start.floor_to(SLOT_MINUTES).to_absolute_minutes();
    let grid_end = global_end.floor_to(SLOT_MINUTES).to_absolute_minutes() + 2 * SLOT_MINUTES;

    let marks = (grid_start..grid_end)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(Time::from_minutes)
        .filter(|mark| {
            events.iter().any(|event| {
                mark.is_between_inclusive(event.start().floor_to(SLOT_MINUTES), event.end())
            })
        })
        .collect();
    Ok(marks)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    breakpoints: Vec<Time>,
    header_height: f32,
    row_height: f32,
    bottom_padding: f32,
}

impl TimeAxis {
    pub fn new(events: &[Event], metrics: &Metrics) -> Result<Self> {
        let breakpoints = breakpoints(events)?;
        debug!(rows = breakpoints.len(), "built time axis");
        Ok(Self {
            breakpoints,
            header_height: metrics.header_height,
            row_height: metrics.row_height,
            bottom_padding: metrics.bottom_padding,
        })
    }

    pub fn breakpoints(&self) -> &[Time] {
        &self.breakpoints
    }

    // Before the first mark clamps to the first row; in a gap or past the end the
    // in-row offset saturates at one row.
    pub fn y(&self, time: Time) -> f32 {
        let covered = self.breakpoints.partition_point(|mark| *mark <= time);
        let Some(row) = covered.checked_sub(1) else {
            return self.header_height;
        };
        let minutes_into_row = time.minutes_since(self.breakpoints[row]).min(SLOT_MINUTES);
        self.header_height
            + row as f32 * self.row_height
            + self.row_height * minutes_into_row as f32 / SLOT_MINUTES as f32
    }

    pub fn height(&self) -> f32 {
        self.header_height + self.row_height * self.breakpoints.len() as f32 + self.bottom_padding
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::Weekday;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::event::EventInfo;
    use crate::palette::Color;

    fn t(text: &str) -> Time {
        Time::parse(text).unwrap()
    }

    fn event(start: &str, end: &str) -> Event {
        let info = EventInfo {
            course: "CS 241".to_string(),
            section: "001".to_string(),
            kind: "LEC".to_string(),
            room: "MC 2065".to_string(),
        };
        Event::new(info, t(start), t(end), [Weekday::Monday], Color::BLACK).unwrap()
    }

    fn metrics() -> Metrics {
        Metrics {
            header_height: 30.0,
            row_height: 40.0,
            bottom_padding: 10.0,
            ..Metrics::default()
        }
    }

    #[test]
    fn test_empty_schedule() {
        assert_eq!(breakpoints(&[]), Err(ScheduleError::EmptySchedule));
        assert_eq!(
            TimeAxis::new(&[], &metrics()),
            Err(ScheduleError::EmptySchedule)
        );
    }

    #[test]
    fn test_single_event() {
        let axis = TimeAxis::new(&[event("9:00", "10:00")], &metrics()).unwrap();
        assert_eq!(axis.breakpoints(), &[t("9:00"), t("9:30"), t("10:00")]);
        assert!(axis.y(t("9:00")) < axis.y(t("9:30")));
        assert!(axis.y(t("9:30")) < axis.y(t("10:00")));
        assert_eq!(axis.y(t("9:00")), 30.0);
        assert_eq!(axis.y(t("10:00")), 110.0);
        assert_eq!(axis.height(), 30.0 + 3.0 * 40.0 + 10.0);
    }

    #[test]
    fn test_idle_gap_is_compressed() {
        let events = [event("9:00", "10:00"), event("14:00", "15:00")];
        let marks = breakpoints(&events).unwrap();
        assert_eq!(
            marks,
            vec![t("9:00"), t("9:30"), t("10:00"), t("14:00"), t("14:30"), t("15:00")]
        );
        assert!(marks.iter().all(|mark| *mark <= t("10:00") || *mark >= t("14:00")));

        let axis = TimeAxis::new(&events, &metrics()).unwrap();
        assert_eq!(axis.y(t("14:00")), 30.0 + 3.0 * 40.0);
    }

    #[test]
    fn test_off_grid_event_interpolates() {
        let axis = TimeAxis::new(&[event("9:15", "10:45")], &metrics()).unwrap();
        assert_eq!(
            axis.breakpoints(),
            &[t("9:00"), t("9:30"), t("10:00"), t("10:30")]
        );
        let row_9 = axis.y(t("9:00"));
        let row_930 = axis.y(t("9:30"));
        let start = axis.y(t("9:15"));
        assert!(row_9 < start && start < row_930);
        assert_eq!(start - row_9, 20.0);
        assert_eq!(axis.y(t("10:45")), 30.0 + 3.0 * 40.0 + 20.0);
    }

    #[test]
    fn test_out_of_domain_clamps() {
        let events = [event("9:00", "10:00"), event("14:00", "15:00")];
        let axis = TimeAxis::new(&events, &metrics()).unwrap();
        assert_eq!(axis.y(t("7:00")), axis.y(t("9:00")));
        // 12:00 sits in the gap: saturates at the bottom of the 10:00 row.
        assert_eq!(axis.y(t("12:00")), axis.y(t("14:00")));
        assert_eq!(axis.y(t("23:00")), 30.0 + 6.0 * 40.0);
    }

    #[test]
    fn test_late_event_stays_in_day() {
        let marks = breakpoints(&[event("23:00", "23:59")]).unwrap();
        assert_eq!(marks, vec![t("23:00"), t("23:30")]);
    }

    fn arb_event() -> impl Strategy<Value = Event> {
        (0u16..1380, 1u16..240).prop_map(|(start, length)| {
            let end = (start + length).min(1439);
            let start = Time::from_minutes(start).unwrap();
            let end = Time::from_minutes(end).unwrap();
            let info = EventInfo {
                course: "X".to_string(),
                section: "1".to_string(),
                kind: "LEC".to_string(),
                room: "R".to_string(),
            };
            Event::new(info, start, end, [Weekday::Friday], Color::BLACK).unwrap()
        })
    }

    proptest! {
        #[test]
        fn test_y_is_non_decreasing(events in prop::collection::vec(arb_event(), 1..6), a in 0u16..1440, b in 0u16..1440) {
            let axis = TimeAxis::new(&events, &metrics()).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = Time::from_minutes(lo).unwrap();
            let hi = Time::from_minutes(hi).unwrap();
            prop_assert!(axis.y(lo) <= axis.y(hi));
        }

        #[test]
        fn test_breakpoints_touch_an_event(events in prop::collection::vec(arb_event(), 1..6)) {
            let marks = breakpoints(&events).unwrap();
            prop_assert!(!marks.is_empty());
            prop_assert!(marks.windows(2).all(|w| w[0] < w[1]));
            for mark in &marks {
                let row_end = mark.to_absolute_minutes() + SLOT_MINUTES;
                let touches = events
                    .iter()
                    .any(|e| e.start().to_absolute_minutes() < row_end && *mark <= e.end());
                prop_assert!(touches, "mark {} touches no event", mark);
            }
            for event in &events {
                prop_assert!(marks.contains(&event.start().floor_to(SLOT_MINUTES)));
                prop_assert!(marks.contains(&event.end().floor_to(SLOT_MINUTES)));
            }
        }
    }
}
