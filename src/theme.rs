use crate::decorate::TileClass;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const HOLIDAY_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const SUNDAY_STYLE: Style = Style::new().fg(Color::Red).bg(Color::Black);

pub(crate) const SATURDAY_STYLE: Style = Style::new().fg(Color::LightBlue).bg(Color::Black);

/// Weekend days of the calendar system that the decorator left unclassified
pub(crate) const WEEKEND_STYLE: Style = Style::new().fg(Color::Magenta).bg(Color::Black);

pub(crate) const NAVIGATION_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const STATUS_LABEL_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) fn tile_class_style(class: TileClass) -> Style {
    match class {
        TileClass::Holiday => HOLIDAY_STYLE,
        TileClass::Sunday => SUNDAY_STYLE,
        TileClass::Saturday => SATURDAY_STYLE,
    }
}

pub(crate) mod tile {
    use super::*;

    pub(crate) const NEIGHBORING_MONTH: Modifier = Modifier::DIM;

    pub(crate) const TODAY: Modifier = Modifier::UNDERLINED;

    pub(crate) const SELECTED: Modifier = Modifier::REVERSED;
}
