use time::{macros::offset, Date, OffsetDateTime, UtcOffset};

/// Korea Standard Time: UTC+9 all year round
pub(crate) const KST: UtcOffset = offset!(+9);

/// Returns `instant` as observed at UTC+9.  All date classification reads
/// calendar fields from the result of this function so that it does not
/// depend on the zone of the machine running the calendar.
pub(crate) fn to_kst(instant: OffsetDateTime) -> OffsetDateTime {
    instant.to_offset(KST)
}

/// The instant at which a calendar tile's date begins on the host clock,
/// i.e., local midnight at the host's UTC offset
pub(crate) fn cell_instant(date: Date, host: UtcOffset) -> OffsetDateTime {
    date.midnight().assume_offset(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};
    use time::{Duration, Weekday};

    #[test]
    fn test_same_fields_as_utc_plus_540_minutes() {
        for instant in [
            datetime!(2023-12-31 14:59:59 UTC),
            datetime!(2023-12-31 15:00 UTC),
            datetime!(2024-02-28 20:30 -05:00),
            datetime!(2024-07-04 00:00 +10:00),
        ] {
            let shifted = instant.to_offset(UtcOffset::UTC) + Duration::minutes(540);
            let kst = to_kst(instant);
            assert_eq!(kst.date(), shifted.date(), "date of {instant}");
            assert_eq!(kst.time(), shifted.time(), "time of {instant}");
        }
    }

    #[test]
    fn test_crosses_new_year() {
        let kst = to_kst(datetime!(2023-12-31 16:00 UTC));
        assert_eq!(kst.date(), date!(2024 - 01 - 01));
        assert_eq!(kst.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_cell_instant_is_local_midnight() {
        let instant = cell_instant(date!(2024 - 05 - 01), offset!(-7));
        assert_eq!(instant, datetime!(2024-05-01 07:00 UTC));
        assert_eq!(to_kst(instant).date(), date!(2024 - 05 - 01));
    }

    #[test]
    fn test_cell_instant_east_of_kst_falls_on_previous_day() {
        let instant = cell_instant(date!(2024 - 01 - 02), offset!(+10));
        assert_eq!(to_kst(instant).date(), date!(2024 - 01 - 01));
    }
}
