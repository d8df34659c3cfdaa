use crate::calendar::{TileDecorator, View};
use crate::format::format_month_year;
use crate::holiday::{HolidayCalendar, HolidayRule};
use crate::kst::{cell_instant, to_kst};
use std::fmt;
use time::{Date, OffsetDateTime, UtcOffset, Weekday};

/// Presentation hint attached to a calendar tile
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum TileClass {
    Holiday,
    Sunday,
    Saturday,
}

impl TileClass {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TileClass::Holiday => "holiday",
            TileClass::Sunday => "sunday",
            TileClass::Saturday => "saturday",
        }
    }
}

impl fmt::Display for TileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the tile beginning at `instant`.  Holidays take precedence
/// over weekends; the weekday is that of the UTC+9 date.
pub(crate) fn tile_class(
    holidays: &HolidayCalendar,
    instant: OffsetDateTime,
) -> Option<TileClass> {
    if holidays.is_holiday(instant) {
        return Some(TileClass::Holiday);
    }
    match to_kst(instant).weekday() {
        Weekday::Sunday => Some(TileClass::Sunday),
        Weekday::Saturday => Some(TileClass::Saturday),
        _ => None,
    }
}

/// Month view tiles show the bare day of month; other views keep the
/// calendar's own labels.
pub(crate) fn tile_content(date: Date, view: View) -> Option<String> {
    (view == View::Month).then(|| date.day().to_string())
}

/// Decorates calendar tiles with holiday & weekend classes as observed at
/// UTC+9, given the UTC offset of the machine the calendar is displayed on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct HolidayDecorator {
    holidays: HolidayCalendar,
    host_offset: UtcOffset,
}

impl HolidayDecorator {
    pub(crate) fn new(holidays: HolidayCalendar, host_offset: UtcOffset) -> HolidayDecorator {
        HolidayDecorator {
            holidays,
            host_offset,
        }
    }

    pub(crate) fn holiday_on(&self, date: Date) -> Option<&'static HolidayRule> {
        self.holidays.holiday_on(cell_instant(date, self.host_offset))
    }
}

impl TileDecorator for HolidayDecorator {
    fn tile_class(&self, date: Date) -> Option<TileClass> {
        tile_class(&self.holidays, cell_instant(date, self.host_offset))
    }

    fn tile_content(&self, date: Date, view: View) -> Option<String> {
        tile_content(date, view)
    }

    fn format_month_year(&self, date: Date) -> String {
        format_month_year(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, offset};

    fn classify(date: Date) -> Option<TileClass> {
        HolidayDecorator::new(HolidayCalendar::default(), offset!(+9)).tile_class(date)
    }

    #[test]
    fn test_holiday_beats_saturday() {
        assert_eq!(date!(2021 - 12 - 25).weekday(), Weekday::Saturday);
        assert_eq!(classify(date!(2021 - 12 - 25)), Some(TileClass::Holiday));
    }

    #[test]
    fn test_holiday_beats_sunday() {
        assert_eq!(date!(2023 - 01 - 01).weekday(), Weekday::Sunday);
        assert_eq!(classify(date!(2023 - 01 - 01)), Some(TileClass::Holiday));
    }

    #[test]
    fn test_weekends() {
        assert_eq!(classify(date!(2024 - 05 - 05)), Some(TileClass::Sunday));
        assert_eq!(classify(date!(2024 - 05 - 04)), Some(TileClass::Saturday));
        assert_eq!(classify(date!(2023 - 05 - 06)), Some(TileClass::Saturday));
    }

    #[test]
    fn test_plain_weekday() {
        assert_eq!(classify(date!(2024 - 05 - 02)), None);
        // Not a holiday outside of 2024
        assert_eq!(classify(date!(2023 - 05 - 01)), None);
    }

    #[test]
    fn test_dated_holidays() {
        assert_eq!(classify(date!(2024 - 05 - 01)), Some(TileClass::Holiday));
        assert_eq!(classify(date!(2024 - 10 - 09)), Some(TileClass::Holiday));
        assert_eq!(classify(date!(2023 - 10 - 09)), None);
    }

    #[test]
    fn test_independent_of_host_offset_west_of_kst() {
        for host in [offset!(UTC), offset!(-5), offset!(-11), offset!(+5:30)] {
            let deco = HolidayDecorator::new(HolidayCalendar::default(), host);
            assert_eq!(deco.tile_class(date!(2024 - 07 - 04)), Some(TileClass::Holiday));
            assert_eq!(deco.tile_class(date!(2024 - 07 - 06)), Some(TileClass::Saturday));
            assert_eq!(deco.tile_class(date!(2024 - 07 - 08)), None);
        }
    }

    #[test]
    fn test_host_east_of_kst_reads_previous_day() {
        let deco = HolidayDecorator::new(HolidayCalendar::default(), offset!(+10));
        // Local midnight of Jan 2 is still Jan 1 at UTC+9
        assert_eq!(deco.tile_class(date!(2024 - 01 - 02)), Some(TileClass::Holiday));
        // Local midnight of Monday 2024-05-06 is Sunday at UTC+9
        assert_eq!(deco.tile_class(date!(2024 - 05 - 06)), Some(TileClass::Sunday));
    }

    #[test]
    fn test_class_names() {
        assert_eq!(TileClass::Holiday.to_string(), "holiday");
        assert_eq!(TileClass::Sunday.as_str(), "sunday");
        assert_eq!(TileClass::Saturday.as_str(), "saturday");
    }

    #[test]
    fn test_tile_content() {
        assert_eq!(tile_content(date!(2024 - 05 - 07), View::Month).as_deref(), Some("7"));
        assert_eq!(tile_content(date!(2024 - 05 - 31), View::Month).as_deref(), Some("31"));
        assert_eq!(tile_content(date!(2024 - 05 - 07), View::Year), None);
        assert_eq!(tile_content(date!(2024 - 05 - 07), View::Decade), None);
        assert_eq!(tile_content(date!(2024 - 05 - 07), View::Century), None);
    }

    #[test]
    fn test_holiday_name_lookup() {
        let deco = HolidayDecorator::new(HolidayCalendar::default(), offset!(-8));
        assert_eq!(
            deco.holiday_on(date!(2024 - 05 - 01)).map(HolidayRule::name),
            Some("Labour Day (2024)")
        );
        assert_eq!(deco.holiday_on(date!(2024 - 05 - 02)), None);
    }

    #[test]
    fn test_header() {
        let deco = HolidayDecorator::new(HolidayCalendar::default(), offset!(+9));
        assert_eq!(deco.format_month_year(date!(2024 - 05 - 17)), "2024.5");
    }
}
