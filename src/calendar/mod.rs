mod calendar_type;
mod grid;
mod page;
mod widget;
pub(crate) use self::calendar_type::CalendarType;
pub(crate) use self::page::{OutOfRangeError, Page};
pub(crate) use self::widget::{Calendar, CALENDAR_HEIGHT};
use crate::decorate::TileClass;
use time::Date;

/// Hooks through which the calendar lets its owner decorate tiles.  `date`
/// is always the first day covered by the tile in question.
pub(crate) trait TileDecorator {
    /// Presentation class for the tile, if any
    fn tile_class(&self, date: Date) -> Option<TileClass>;

    /// Custom text to show in place of the tile's default label
    fn tile_content(&self, date: Date, view: View) -> Option<String> {
        let _ = (date, view);
        None
    }

    /// Navigation label for a page of the month view
    fn format_month_year(&self, date: Date) -> String {
        format!("{} {}", date.month(), date.year())
    }
}

impl<T: TileDecorator + ?Sized> TileDecorator for &T {
    fn tile_class(&self, date: Date) -> Option<TileClass> {
        (**self).tile_class(date)
    }

    fn tile_content(&self, date: Date, view: View) -> Option<String> {
        (**self).tile_content(date, view)
    }

    fn format_month_year(&self, date: Date) -> String {
        (**self).format_month_year(date)
    }
}

/// Granularity of the page being shown
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum View {
    /// Days of one month
    Month,
    /// Months of one year
    Year,
    /// Years of one decade
    Decade,
    /// Decades of one century
    Century,
}

impl View {
    pub(crate) fn up(self) -> Option<View> {
        match self {
            View::Month => Some(View::Year),
            View::Year => Some(View::Decade),
            View::Decade => Some(View::Century),
            View::Century => None,
        }
    }

    pub(crate) fn down(self) -> Option<View> {
        match self {
            View::Month => None,
            View::Year => Some(View::Month),
            View::Decade => Some(View::Year),
            View::Century => Some(View::Decade),
        }
    }
}
