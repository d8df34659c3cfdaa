use super::{CalendarType, View};
use crate::format::{format_year, format_year_span};
use std::iter::successors;
use time::{Date, Duration, Month};

pub(super) const DAYS_IN_WEEK: usize = 7;

/// Number of tiles per row in the year, decade, & century views
pub(super) const TILES_PER_ROW: u16 = 3;

/// First year of the decade containing `year`; decades run from 1 to 10
pub(super) fn decade_start(year: i32) -> i32 {
    year - (year - 1).rem_euclid(10)
}

/// First year of the century containing `year`; centuries run from 1 to 100
pub(super) fn century_start(year: i32) -> i32 {
    year - (year - 1).rem_euclid(100)
}

pub(super) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

pub(super) fn first_of_year(year: i32) -> Option<Date> {
    Date::from_calendar_date(year, Month::January, 1).ok()
}

/// Moves `date` by `months` months, clamping the day to the length of the
/// target month
pub(super) fn add_months(date: Date, months: i32) -> Option<Date> {
    let index = date
        .year()
        .checked_mul(12)?
        .checked_add(i32::from(u8::from(date.month())) - 1)?
        .checked_add(months)?;
    let year = index.div_euclid(12);
    let month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;
    let day = (28..=date.day())
        .rev()
        .find(|&d| Date::from_calendar_date(year, month, d).is_ok())
        .unwrap_or(date.day());
    Date::from_calendar_date(year, month, day).ok()
}

/// One row of the month view, in column order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Week([Date; DAYS_IN_WEEK]);

impl Week {
    pub(super) fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }

    pub(super) fn last(&self) -> Date {
        self.0[DAYS_IN_WEEK - 1]
    }
}

/// Returns the whole weeks covering the month containing `date`, including
/// days of the neighboring months that share those weeks
pub(super) fn month_weeks(date: Date, calendar_type: CalendarType) -> Vec<Week> {
    let first = first_of_month(date);
    let lead = calendar_type.column(first.weekday());
    let Some(start) = first.checked_sub(Duration::days(i64::from(lead))) else {
        return Vec::new();
    };
    let month = first.month();
    let mut weeks = Vec::new();
    let mut days = iter_days_from(start);
    loop {
        let mut week = [start; DAYS_IN_WEEK];
        for slot in &mut week {
            match days.next() {
                Some(d) => *slot = d,
                None => return weeks,
            }
        }
        let week = Week(week);
        let done = week.last().month() != month || is_last_day_of_month(week.last());
        weeks.push(week);
        if done {
            return weeks;
        }
    }
}

/// First days of the tiles shown on a page of a view other than the month
/// view, in reading order
pub(super) fn period_tiles(date: Date, view: View) -> Vec<Date> {
    match view {
        View::Month => Vec::new(),
        View::Year => (1..=12u8)
            .filter_map(|m| Month::try_from(m).ok())
            .filter_map(|m| Date::from_calendar_date(date.year(), m, 1).ok())
            .collect(),
        View::Decade => {
            let start = decade_start(date.year());
            (start..start + 10).filter_map(first_of_year).collect()
        }
        View::Century => {
            let start = century_start(date.year());
            (0..10)
                .filter_map(|i| first_of_year(start + i * 10))
                .collect()
        }
    }
}

/// The calendar's own label for a tile, used when the decorator supplies no
/// content
pub(super) fn default_label(date: Date, view: View) -> String {
    match view {
        View::Month => ordinal(date.day()),
        View::Year => date.month().to_string(),
        View::Decade => format_year(date.year()),
        View::Century => format_year_span(date.year(), date.year() + 9),
    }
}

/// Navigation label for the views whose label the decorator does not
/// provide
pub(super) fn period_label(date: Date, view: View) -> Option<String> {
    match view {
        View::Month => None,
        View::Year => Some(format_year(date.year())),
        View::Decade => {
            let start = decade_start(date.year());
            Some(format_year_span(start, start + 9))
        }
        View::Century => {
            let start = century_start(date.year());
            Some(format_year_span(start, start + 99))
        }
    }
}

fn ordinal(day: u8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

pub(super) fn is_last_day_of_month(date: Date) -> bool {
    match date.next_day() {
        Some(tomorrow) => date.month() != tomorrow.month(),
        None => true,
    }
}

fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}
