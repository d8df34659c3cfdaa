use super::grid::{
    add_months, decade_start, first_of_month, first_of_year, month_weeks, period_tiles, Week,
    TILES_PER_ROW,
};
use super::{CalendarType, View};
use thiserror::Error;
use time::{macros::date, Date, Duration};

/// Earliest date the cursor may rest on
const MIN_DATE: Date = date!(0002 - 01 - 01);

/// Latest date the cursor may rest on
const MAX_DATE: Date = date!(9998 - 12 - 31);

/// The page of the calendar currently on screen: which view is shown and
/// where the cursor is.  The page itself is the month, year, decade, or
/// century containing the cursor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Page {
    today: Date,
    active: Date,
    view: View,
    calendar_type: CalendarType,
}

impl Page {
    pub(crate) fn new(today: Date, calendar_type: CalendarType) -> Self {
        Page {
            today,
            active: clamp(today),
            view: View::Month,
            calendar_type,
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.active = clamp(date);
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn active(&self) -> Date {
        self.active
    }

    pub(crate) fn view(&self) -> View {
        self.view
    }

    pub(super) fn calendar_type(&self) -> CalendarType {
        self.calendar_type
    }

    pub(super) fn weeks(&self) -> Vec<Week> {
        month_weeks(self.active, self.calendar_type)
    }

    pub(super) fn tiles(&self) -> Vec<Date> {
        period_tiles(self.active, self.view)
    }

    pub(crate) fn next_tile(&mut self) -> Result<(), OutOfRangeError> {
        self.shift(self.tile_step(), 1)
    }

    pub(crate) fn previous_tile(&mut self) -> Result<(), OutOfRangeError> {
        self.shift(self.tile_step(), -1)
    }

    pub(crate) fn next_row(&mut self) -> Result<(), OutOfRangeError> {
        self.shift(self.tile_step(), self.row_len())
    }

    pub(crate) fn previous_row(&mut self) -> Result<(), OutOfRangeError> {
        self.shift(self.tile_step(), -self.row_len())
    }

    pub(crate) fn next_page(&mut self) -> Result<(), OutOfRangeError> {
        self.shift(self.page_step(), 1)
    }

    pub(crate) fn previous_page(&mut self) -> Result<(), OutOfRangeError> {
        self.shift(self.page_step(), -1)
    }

    pub(crate) fn next_double_page(&mut self) -> Result<(), OutOfRangeError> {
        let step = self.double_page_step().ok_or(OutOfRangeError)?;
        self.shift(step, 1)
    }

    pub(crate) fn previous_double_page(&mut self) -> Result<(), OutOfRangeError> {
        let step = self.double_page_step().ok_or(OutOfRangeError)?;
        self.shift(step, -1)
    }

    /// Switches to the next coarser view, moving the cursor to the first
    /// day of the tile containing it
    pub(crate) fn drill_up(&mut self) -> Result<(), OutOfRangeError> {
        let view = self.view.up().ok_or(OutOfRangeError)?;
        self.active = clamp(tile_start(self.active, view)?);
        self.view = view;
        Ok(())
    }

    pub(crate) fn drill_down(&mut self) -> Result<(), OutOfRangeError> {
        self.view = self.view.down().ok_or(OutOfRangeError)?;
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.jump_to_date(self.today);
    }

    /// Shows the month containing `date` with the cursor on `date`
    pub(crate) fn jump_to_date(&mut self, date: Date) {
        self.view = View::Month;
        self.active = clamp(date);
    }

    fn tile_step(&self) -> Step {
        match self.view {
            View::Month => Step::Days(1),
            View::Year => Step::Months(1),
            View::Decade => Step::Months(12),
            View::Century => Step::Months(120),
        }
    }

    fn row_len(&self) -> i32 {
        match self.view {
            View::Month => 7,
            _ => i32::from(TILES_PER_ROW),
        }
    }

    fn page_step(&self) -> Step {
        match self.view {
            View::Month => Step::Months(1),
            View::Year => Step::Months(12),
            View::Decade => Step::Months(120),
            View::Century => Step::Months(1200),
        }
    }

    fn double_page_step(&self) -> Option<Step> {
        match self.view {
            View::Month => Some(Step::Months(12)),
            View::Year => Some(Step::Months(120)),
            View::Decade => Some(Step::Months(1200)),
            View::Century => None,
        }
    }

    fn shift(&mut self, step: Step, times: i32) -> Result<(), OutOfRangeError> {
        let active = match step {
            Step::Days(n) => self
                .active
                .checked_add(Duration::days(n * i64::from(times))),
            Step::Months(n) => add_months(self.active, n * times),
        }
        .filter(|d| (MIN_DATE..=MAX_DATE).contains(d))
        .ok_or(OutOfRangeError)?;
        self.active = tile_start(active, self.view)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    Days(i64),
    Months(i32),
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("date is outside of the calendar's range")]
pub(crate) struct OutOfRangeError;

/// First day of the tile of `view` that contains `date`
fn tile_start(date: Date, view: View) -> Result<Date, OutOfRangeError> {
    match view {
        View::Month => Ok(date),
        View::Year => Ok(first_of_month(date)),
        View::Decade => first_of_year(date.year()).ok_or(OutOfRangeError),
        View::Century => first_of_year(decade_start(date.year())).ok_or(OutOfRangeError),
    }
}

fn clamp(date: Date) -> Date {
    date.clamp(MIN_DATE, MAX_DATE)
}
