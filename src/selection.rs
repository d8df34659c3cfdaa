use time::Date;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Selection {
    Single(Date),
    // Invariant: start <= end
    Range { start: Date, end: Date },
}

impl Selection {
    pub(crate) fn range(a: Date, b: Date) -> Selection {
        Selection::Range {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        match *self {
            Selection::Single(d) => d == date,
            Selection::Range { start, end } => (start..=end).contains(&date),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum SelectMode {
    #[default]
    Single,
    Range,
}

/// The selected date (or range) of the calendar together with whatever is
/// needed to pick it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SelectionState {
    mode: SelectMode,
    value: Option<Selection>,
    pending_start: Option<Date>,
}

impl SelectionState {
    pub(crate) fn new(mode: SelectMode, value: Option<Selection>) -> SelectionState {
        SelectionState {
            mode,
            value,
            pending_start: None,
        }
    }

    pub(crate) fn value(&self) -> Option<Selection> {
        self.value
    }

    /// Start of a range that is still waiting for its other end
    pub(crate) fn pending_start(&self) -> Option<Date> {
        self.pending_start
    }

    /// Handles the user choosing `date`.  Returns `true` if the selected
    /// value was replaced.
    pub(crate) fn select(&mut self, date: Date) -> bool {
        match self.mode {
            SelectMode::Single => {
                self.value = Some(Selection::Single(date));
                true
            }
            SelectMode::Range => match self.pending_start.take() {
                Some(start) => {
                    self.value = Some(Selection::range(start, date));
                    true
                }
                None => {
                    self.pending_start = Some(date);
                    false
                }
            },
        }
    }

    /// Whether `date` should be drawn as selected
    pub(crate) fn highlights(&self, date: Date) -> bool {
        match self.pending_start {
            Some(start) => start == date,
            None => self.value.is_some_and(|sel| sel.contains(date)),
        }
    }
}
