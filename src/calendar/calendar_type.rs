use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::Weekday::{self, Friday, Monday, Saturday, Sunday};

/// Calendar system used to lay out the month view
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum CalendarType {
    Gregorian,
    #[default]
    Hebrew,
    Islamic,
    Iso8601,
}

impl CalendarType {
    pub(crate) fn first_weekday(self) -> Weekday {
        match self {
            CalendarType::Gregorian | CalendarType::Hebrew => Sunday,
            CalendarType::Islamic => Saturday,
            CalendarType::Iso8601 => Monday,
        }
    }

    /// Days drawn in the calendar's default weekend style
    pub(crate) fn is_weekend(self, wd: Weekday) -> bool {
        match self {
            CalendarType::Gregorian | CalendarType::Iso8601 => matches!(wd, Saturday | Sunday),
            CalendarType::Hebrew | CalendarType::Islamic => matches!(wd, Friday | Saturday),
        }
    }

    /// Weekdays in column order
    pub(crate) fn weekdays(self) -> [Weekday; 7] {
        let first = self.first_weekday();
        [0, 1, 2, 3, 4, 5, 6].map(|n| first.nth_next(n))
    }

    /// Column in which `wd` is drawn
    pub(crate) fn column(self, wd: Weekday) -> u8 {
        (7 + wd.number_days_from_sunday() - self.first_weekday().number_days_from_sunday()) % 7
    }

    fn as_str(self) -> &'static str {
        match self {
            CalendarType::Gregorian => "gregorian",
            CalendarType::Hebrew => "hebrew",
            CalendarType::Islamic => "islamic",
            CalendarType::Iso8601 => "iso8601",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = ParseCalendarTypeError;

    fn from_str(s: &str) -> Result<CalendarType, ParseCalendarTypeError> {
        match s.to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarType::Gregorian),
            "hebrew" => Ok(CalendarType::Hebrew),
            "islamic" => Ok(CalendarType::Islamic),
            "iso8601" | "iso-8601" => Ok(CalendarType::Iso8601),
            _ => Err(ParseCalendarTypeError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown calendar type {0:?}; expected one of gregorian, hebrew, islamic, iso8601")]
pub(crate) struct ParseCalendarTypeError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use time::Weekday::*;

    #[test]
    fn test_parse() {
        assert_eq!("hebrew".parse::<CalendarType>(), Ok(CalendarType::Hebrew));
        assert_eq!("ISO8601".parse::<CalendarType>(), Ok(CalendarType::Iso8601));
        assert_eq!("iso-8601".parse::<CalendarType>(), Ok(CalendarType::Iso8601));
        assert_eq!("Gregorian".parse::<CalendarType>(), Ok(CalendarType::Gregorian));
        assert!("julian".parse::<CalendarType>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for ct in [
            CalendarType::Gregorian,
            CalendarType::Hebrew,
            CalendarType::Islamic,
            CalendarType::Iso8601,
        ] {
            assert_eq!(ct.to_string().parse::<CalendarType>(), Ok(ct));
        }
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(
            CalendarType::Hebrew.weekdays(),
            [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]
        );
        assert_eq!(
            CalendarType::Iso8601.weekdays(),
            [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday]
        );
        assert_eq!(
            CalendarType::Islamic.weekdays(),
            [Saturday, Sunday, Monday, Tuesday, Wednesday, Thursday, Friday]
        );
    }

    #[test]
    fn test_column() {
        assert_eq!(CalendarType::Gregorian.column(Sunday), 0);
        assert_eq!(CalendarType::Gregorian.column(Saturday), 6);
        assert_eq!(CalendarType::Iso8601.column(Sunday), 6);
        assert_eq!(CalendarType::Iso8601.column(Monday), 0);
        assert_eq!(CalendarType::Islamic.column(Friday), 6);
    }

    #[test]
    fn test_weekend() {
        assert!(CalendarType::Hebrew.is_weekend(Friday));
        assert!(!CalendarType::Hebrew.is_weekend(Sunday));
        assert!(CalendarType::Gregorian.is_weekend(Sunday));
        assert!(!CalendarType::Gregorian.is_weekend(Friday));
    }
}
