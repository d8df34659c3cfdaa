use crate::calendar::{Calendar, OutOfRangeError, Page, View, CALENDAR_HEIGHT};
use crate::decorate::HolidayDecorator;
use crate::format::{describe_selection, format_date};
use crate::help::Help;
use crate::selection::{SelectMode, Selection, SelectionState};
use crate::theme::{BASE_STYLE, HOLIDAY_STYLE, STATUS_LABEL_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    page: Page,
    selection: SelectionState,
    decorator: HolidayDecorator,
    state: AppState,
}

impl App {
    pub(crate) fn new(page: Page, decorator: HolidayDecorator, mode: SelectMode) -> App {
        let selection = SelectionState::new(mode, Some(Selection::Single(page.today())));
        App {
            page,
            selection,
            decorator,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => moved(self.page.previous_tile()),
                KeyCode::Char('l') | KeyCode::Right => moved(self.page.next_tile()),
                KeyCode::Char('k') | KeyCode::Up => moved(self.page.previous_row()),
                KeyCode::Char('j') | KeyCode::Down => moved(self.page.next_row()),
                KeyCode::Char('w') | KeyCode::PageUp => moved(self.page.previous_page()),
                KeyCode::Char('z') | KeyCode::PageDown => moved(self.page.next_page()),
                KeyCode::Char('[') => moved(self.page.previous_double_page()),
                KeyCode::Char(']') => moved(self.page.next_double_page()),
                KeyCode::Enter | KeyCode::Char(' ') => self.choose(),
                KeyCode::Char('-') | KeyCode::Backspace => {
                    let r = moved(self.page.drill_up());
                    debug!(view = ?self.page.view(), "zoomed out");
                    r
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.page.jump_to_today();
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    /// Selects the date under the cursor in the month view, or zooms in on
    /// the tile under the cursor in the other views
    fn choose(&mut self) -> bool {
        if self.page.view() == View::Month {
            let date = self.page.active();
            if self.selection.select(date) {
                debug!(selection = ?self.selection.value(), "selection changed");
            } else {
                debug!(start = %format_date(date), "range started");
            }
            true
        } else {
            let r = moved(self.page.drill_down());
            debug!(view = ?self.page.view(), "zoomed in");
            r
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn status_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("Selected Date:", STATUS_LABEL_STYLE),
            Span::styled(" ", BASE_STYLE),
            Span::styled(describe_selection(self.selection.value()), BASE_STYLE),
        ];
        if let Some(start) = self.selection.pending_start() {
            spans.push(Span::styled(
                format!(" (new range from {})", format_date(start)),
                BASE_STYLE,
            ));
        }
        Line::from(spans).centered()
    }

    fn holiday_line(&self) -> Line<'static> {
        match self.decorator.holiday_on(self.page.active()) {
            Some(rule) if self.page.view() == View::Month => {
                Line::styled(rule.name(), HOLIDAY_STYLE).centered()
            }
            _ => Line::default(),
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [_, cal_area, _, status_area, note_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(CALENDAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        Calendar::new(&self.decorator, &self.selection).render(cal_area, buf, &mut self.page);
        self.status_line().render(status_area, buf);
        self.holiday_line().render(note_area, buf);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}

fn moved(r: Result<(), OutOfRangeError>) -> bool {
    match r {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "move rejected");
            false
        }
    }
}
