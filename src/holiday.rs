use crate::kst::to_kst;
use time::{
    Date,
    Month::{self, December, January, July, May, October},
    OffsetDateTime,
};

/// Holidays highlighted on the calendar.  Rules are consulted in order and
/// the first match wins.
pub(crate) static HOLIDAYS: &[HolidayRule] = &[
    HolidayRule::Recurring {
        month: January,
        day: 1,
        name: "New Year's Day",
    },
    HolidayRule::Recurring {
        month: July,
        day: 4,
        name: "Independence Day",
    },
    HolidayRule::Recurring {
        month: December,
        day: 25,
        name: "Christmas Day",
    },
    HolidayRule::Dated {
        year: 2024,
        month: May,
        day: 1,
        name: "Labour Day (2024)",
    },
    HolidayRule::Dated {
        year: 2024,
        month: October,
        day: 9,
        name: "National Holiday (2024)",
    },
];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum HolidayRule {
    /// Observed on the same month & day every year
    Recurring {
        month: Month,
        day: u8,
        name: &'static str,
    },
    /// Observed on a single date
    Dated {
        year: i32,
        month: Month,
        day: u8,
        name: &'static str,
    },
}

impl HolidayRule {
    pub(crate) fn name(&self) -> &'static str {
        match *self {
            HolidayRule::Recurring { name, .. } | HolidayRule::Dated { name, .. } => name,
        }
    }

    pub(crate) fn matches(&self, date: Date) -> bool {
        match *self {
            HolidayRule::Recurring { month, day, .. } => {
                date.month() == month && date.day() == day
            }
            HolidayRule::Dated {
                year, month, day, ..
            } => date.year() == year && date.month() == month && date.day() == day,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct HolidayCalendar {
    rules: &'static [HolidayRule],
}

impl HolidayCalendar {
    pub(crate) fn new(rules: &'static [HolidayRule]) -> HolidayCalendar {
        HolidayCalendar { rules }
    }

    /// Returns the first rule observed on the UTC+9 date of `instant`
    pub(crate) fn holiday_on(&self, instant: OffsetDateTime) -> Option<&'static HolidayRule> {
        let date = to_kst(instant).date();
        self.rules.iter().find(|rule| rule.matches(date))
    }

    pub(crate) fn is_holiday(&self, instant: OffsetDateTime) -> bool {
        self.holiday_on(instant).is_some()
    }
}

impl Default for HolidayCalendar {
    fn default() -> HolidayCalendar {
        HolidayCalendar::new(HOLIDAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    fn kst_noon(date: Date) -> OffsetDateTime {
        date.midnight().assume_offset(offset!(+9)) + time::Duration::hours(12)
    }

    #[test]
    fn test_recurring_holidays_every_year() {
        let cal = HolidayCalendar::default();
        for year in [1999, 2023, 2024, 2025, 2100] {
            for (month, day) in [(January, 1), (July, 4), (December, 25)] {
                let d = Date::from_calendar_date(year, month, day).unwrap();
                assert!(cal.is_holiday(kst_noon(d)), "{d} should be a holiday");
            }
        }
    }

    #[test]
    fn test_dated_holidays_only_in_their_year() {
        let cal = HolidayCalendar::default();
        assert!(cal.is_holiday(kst_noon(date!(2024 - 05 - 01))));
        assert!(cal.is_holiday(kst_noon(date!(2024 - 10 - 09))));
        assert!(!cal.is_holiday(kst_noon(date!(2023 - 05 - 01))));
        assert!(!cal.is_holiday(kst_noon(date!(2023 - 10 - 09))));
        assert!(!cal.is_holiday(kst_noon(date!(2025 - 05 - 01))));
    }

    #[test]
    fn test_ordinary_day() {
        let cal = HolidayCalendar::default();
        assert_eq!(cal.holiday_on(kst_noon(date!(2024 - 03 - 14))), None);
    }

    #[test]
    fn test_holiday_name() {
        let cal = HolidayCalendar::default();
        let rule = cal.holiday_on(kst_noon(date!(2024 - 10 - 09))).unwrap();
        assert_eq!(rule.name(), "National Holiday (2024)");
        let rule = cal.holiday_on(kst_noon(date!(2031 - 07 - 04))).unwrap();
        assert_eq!(rule.name(), "Independence Day");
    }

    #[test]
    fn test_classified_by_kst_date() {
        let cal = HolidayCalendar::default();
        // 2024-12-24 20:00 in New York is already Christmas in Seoul
        assert!(cal.is_holiday(datetime!(2024-12-24 20:00 -05:00)));
        // 2024-12-25 23:00 in London is already the 26th in Seoul
        assert!(!cal.is_holiday(datetime!(2024-12-25 23:00 UTC)));
    }

    #[test]
    fn test_first_match_wins() {
        static RULES: &[HolidayRule] = &[
            HolidayRule::Dated {
                year: 2030,
                month: January,
                day: 1,
                name: "first",
            },
            HolidayRule::Recurring {
                month: January,
                day: 1,
                name: "second",
            },
        ];
        let cal = HolidayCalendar::new(RULES);
        let rule = cal.holiday_on(kst_noon(date!(2030 - 01 - 01))).unwrap();
        assert_eq!(rule.name(), "first");
        let rule = cal.holiday_on(kst_noon(date!(2031 - 01 - 01))).unwrap();
        assert_eq!(rule.name(), "second");
    }
}
