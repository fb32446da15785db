use jiff::civil::Weekday;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{Result, ScheduleError};

const NAMES: [(Weekday, &str); 7] = [
    (Weekday::Monday, "Monday"),
    (Weekday::Tuesday, "Tuesday"),
    (Weekday::Wednesday, "Wednesday"),
    (Weekday::Thursday, "Thursday"),
    (Weekday::Friday, "Friday"),
    (Weekday::Saturday, "Saturday"),
    (Weekday::Sunday, "Sunday"),
];

pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let trimmed = name.trim();
    NAMES
        .iter()
        .find(|(_, candidate)| candidate.eq_ignore_ascii_case(trimmed))
        .map(|(day, _)| *day)
        .ok_or_else(|| ScheduleError::UnknownDay(name.to_string()))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    NAMES[day.to_monday_zero_offset() as usize].1
}

/// Fixed left-to-right ordering of weekdays, starting at `week_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOrder {
    pub week_start: Weekday,
}

impl Default for DayOrder {
    fn default() -> Self {
        Self {
            week_start: Weekday::Monday,
        }
    }
}

impl DayOrder {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn index(self, day: Weekday) -> usize {
        let offset = day.to_monday_zero_offset() - self.week_start.to_monday_zero_offset();
        offset.rem_euclid(7) as usize
    }

    pub fn sort(self, days: &mut [Weekday]) {
        days.sort_by_key(|day| self.index(*day));
    }
}

pub fn serialize_weekday<S>(day: &Weekday, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(weekday_name(*day))
}

pub fn deserialize_weekday<'de, D>(deserializer: D) -> std::result::Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;
    parse_weekday(&string).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Monday);
        assert_eq!(parse_weekday("sunday").unwrap(), Weekday::Sunday);
        assert_eq!(parse_weekday(" FRIDAY ").unwrap(), Weekday::Friday);
        assert_eq!(
            parse_weekday("Funday"),
            Err(ScheduleError::UnknownDay("Funday".to_string()))
        );
        assert_eq!(
            parse_weekday("Mon"),
            Err(ScheduleError::UnknownDay("Mon".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for (day, name) in NAMES {
            assert_eq!(weekday_name(day), name);
            assert_eq!(parse_weekday(name).unwrap(), day);
        }
    }

    #[test]
    fn test_day_order_monday_first() {
        let order = DayOrder::default();
        assert_eq!(order.index(Weekday::Monday), 0);
        assert_eq!(order.index(Weekday::Sunday), 6);

        let mut days = vec![Weekday::Friday, Weekday::Monday, Weekday::Wednesday];
        order.sort(&mut days);
        assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
    }

    #[test]
    fn test_day_order_sunday_first() {
        let order = DayOrder::new(Weekday::Sunday);
        assert_eq!(order.index(Weekday::Sunday), 0);
        assert_eq!(order.index(Weekday::Monday), 1);
        assert_eq!(order.index(Weekday::Saturday), 6);

        let mut days = vec![Weekday::Monday, Weekday::Saturday, Weekday::Sunday];
        order.sort(&mut days);
        assert_eq!(days, vec![Weekday::Sunday, Weekday::Monday, Weekday::Saturday]);
    }
}
