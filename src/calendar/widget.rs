use super::grid::{default_label, period_label, TILES_PER_ROW};
use super::page::Page;
use super::{TileDecorator, View};
use crate::selection::SelectionState;
use crate::theme::{
    tile, tile_class_style, BASE_STYLE, NAVIGATION_STYLE, WEEKDAY_STYLE, WEEKEND_STYLE,
};
use ratatui::{
    layout::{Flex, Layout},
    prelude::*,
    widgets::*,
};
use std::iter::zip;
use time::{Date, Weekday};

/// Width of the calendar in columns
const MAIN_WIDTH: u16 = 42;

/// Number of columns per day of week in the month view
const DAY_WIDTH: u16 = MAIN_WIDTH / 7;

/// Number of columns per tile in the other views
const PERIOD_TILE_WIDTH: u16 = MAIN_WIDTH / TILES_PER_ROW;

/// Number of lines taken up by the navigation row, its rule, and the
/// weekday header
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each row of tiles
const ROW_LINES: u16 = 2;

/// Most rows of tiles any view needs
const MAX_ROWS: u16 = 6;

/// Lines needed to show every row of the tallest page
pub(crate) const CALENDAR_HEIGHT: u16 = HEADER_LINES + MAX_ROWS * ROW_LINES - 1;

const ACS_HLINE: char = '─';

/// The calendar grid.  Tiles are classified & labelled by the decorator;
/// the page passed as state decides what is shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<'a, D> {
    decorator: D,
    selection: &'a SelectionState,
}

impl<'a, D: TileDecorator> Calendar<'a, D> {
    pub(crate) fn new(decorator: D, selection: &'a SelectionState) -> Self {
        Calendar {
            decorator,
            selection,
        }
    }

    fn navigation_line(&self, page: &Page) -> String {
        let label = match page.view() {
            View::Month => self.decorator.format_month_year(page.active()),
            view => period_label(page.active(), view).unwrap_or_default(),
        };
        let (prev, next) = if page.view() == View::Century {
            ("   ‹", "›   ")
        } else {
            ("«  ‹", "›  »")
        };
        let width = usize::from(MAIN_WIDTH) - 8;
        format!("{prev}{label:^width$}{next}")
    }

    fn tile_label(&self, date: Date, view: View) -> String {
        self.decorator
            .tile_content(date, view)
            .unwrap_or_else(|| default_label(date, view))
    }

    fn tile_style(&self, date: Date, page: &Page) -> Style {
        let view = page.view();
        let weekend = view == View::Month && page.calendar_type().is_weekend(date.weekday());
        let mut style = match self.decorator.tile_class(date) {
            Some(class) => tile_class_style(class),
            None if weekend => WEEKEND_STYLE,
            None => BASE_STYLE,
        };
        if view == View::Month {
            if date.month() != page.active().month() {
                style = style.add_modifier(tile::NEIGHBORING_MONTH);
            }
            if date == page.today() {
                style = style.add_modifier(tile::TODAY);
            }
            if self.selection.highlights(date) {
                style = style.add_modifier(tile::SELECTED);
            }
        }
        style
    }
}

impl<D: TileDecorator> StatefulWidget for Calendar<'_, D> {
    type State = Page;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([MAIN_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(0, 0, self.navigation_line(state), Some(NAVIGATION_STYLE));
        canvas.hline(1, 0, ACS_HLINE, MAIN_WIDTH);
        let active = state.active();
        match state.view() {
            View::Month => {
                let header = state
                    .calendar_type()
                    .weekdays()
                    .map(|wd| format!("{:^1$}", short_name(wd), usize::from(DAY_WIDTH)))
                    .concat();
                canvas.mvprint(2, 0, header, Some(WEEKDAY_STYLE));
                for (row, week) in zip(0u16.., state.weeks()) {
                    for (col, date) in zip(0u16.., week.days()) {
                        let label = self.tile_label(date, View::Month);
                        canvas.draw_tile(
                            row,
                            col * DAY_WIDTH,
                            tile_text(&label, DAY_WIDTH, date == active, true),
                            self.tile_style(date, state),
                        );
                    }
                }
            }
            view => {
                for (i, date) in zip(0u16.., state.tiles()) {
                    let label = self.tile_label(date, view);
                    canvas.draw_tile(
                        i / TILES_PER_ROW,
                        (i % TILES_PER_ROW) * PERIOD_TILE_WIDTH,
                        tile_text(&label, PERIOD_TILE_WIDTH, date == active, false),
                        self.tile_style(date, state),
                    );
                }
            }
        }
    }
}

/// Pads a tile's label to the tile's width, bracketing it if the cursor is
/// on the tile
fn tile_text(label: &str, width: u16, is_active: bool, right_align: bool) -> String {
    let inner = usize::from(width.saturating_sub(2));
    let (open, close) = if is_active { ('[', ']') } else { (' ', ' ') };
    if right_align {
        format!("{open}{label:>inner$}{close}")
    } else {
        format!("{open}{label:^inner$}{close}")
    }
}

fn short_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_tile(&mut self, row: u16, x: u16, text: String, style: Style) {
        self.mvprint(HEADER_LINES + row * ROW_LINES, x, text, Some(style));
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
