use crate::selection::Selection;
use time::Date;

pub(crate) const NO_SELECTION: &str = "No date selected";

/// Navigation label for a month: `2024.5`
pub(crate) fn format_month_year(date: Date) -> String {
    format!("{}.{}", date.year(), u8::from(date.month()))
}

/// `2024-01-02`, read from the date's own calendar fields
pub(crate) fn format_date(date: Date) -> String {
    format!(
        "{}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub(crate) fn describe_selection(selection: Option<Selection>) -> String {
    match selection {
        None => String::from(NO_SELECTION),
        Some(Selection::Single(date)) => format_date(date),
        Some(Selection::Range { start, end }) => {
            format!("{} ~ {}", format_date(start), format_date(end))
        }
    }
}

pub(crate) fn format_year(year: i32) -> String {
    year.to_string()
}

/// Label for a span of years, e.g., `2021 - 2030`
pub(crate) fn format_year_span(first: i32, last: i32) -> String {
    format!("{first} - {last}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_month_year() {
        assert_eq!(format_month_year(date!(2024 - 05 - 01)), "2024.5");
        assert_eq!(format_month_year(date!(2024 - 12 - 31)), "2024.12");
        let early = Date::from_calendar_date(999, time::Month::January, 15).unwrap();
        assert_eq!(format_month_year(early), "999.1");
    }

    #[test]
    fn test_date_zero_padded() {
        assert_eq!(format_date(date!(2024 - 01 - 02)), "2024-01-02");
        assert_eq!(format_date(date!(2024 - 11 - 30)), "2024-11-30");
    }

    #[test]
    fn test_describe_selection() {
        assert_eq!(describe_selection(None), "No date selected");
        assert_eq!(
            describe_selection(Some(Selection::Single(date!(2024 - 01 - 02)))),
            "2024-01-02"
        );
        assert_eq!(
            describe_selection(Some(Selection::range(
                date!(2024 - 10 - 09),
                date!(2024 - 09 - 30)
            ))),
            "2024-09-30 ~ 2024-10-09"
        );
    }

    #[test]
    fn test_year_labels() {
        assert_eq!(format_year(2024), "2024");
        assert_eq!(format_year_span(2021, 2030), "2021 - 2030");
    }
}
