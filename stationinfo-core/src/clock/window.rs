//! Departure window selection
//!
//! The window's top row is the first departure strictly after the current
//! minute. The store is sorted, so this is a binary search.

use crate::timetable::{DepartureRecord, TimetableStore};

/// What to show once the last departure of the day has left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndOfDayPolicy {
    /// Keep the last departure at the top and stop scrolling
    #[default]
    ClampToLast,
    /// Show the first departure of the next day
    WrapToFirst,
}

/// Outcome of a window recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// Index of the next departure after the current minute
    Upcoming(usize),
    /// No departure left today; index chosen by the end-of-day policy
    EndOfDay(usize),
}

impl Selection {
    /// Top row index
    pub fn index(&self) -> usize {
        match *self {
            Selection::Upcoming(index) | Selection::EndOfDay(index) => index,
        }
    }

    pub fn is_end_of_day(&self) -> bool {
        matches!(self, Selection::EndOfDay(_))
    }
}

/// Index of the first departure with `minute_of_day >= minute + 1`
pub fn first_departure_after(store: &TimetableStore, minute: u16) -> Option<usize> {
    let index = store
        .as_slice()
        .partition_point(|record| record.minute_of_day() <= minute);
    (index < store.len()).then_some(index)
}

/// Select the top row for `minute`
pub fn select(store: &TimetableStore, minute: u16, policy: EndOfDayPolicy) -> Selection {
    match first_departure_after(store, minute) {
        Some(index) => Selection::Upcoming(index),
        None => match policy {
            EndOfDayPolicy::ClampToLast => Selection::EndOfDay(store.last_index()),
            EndOfDayPolicy::WrapToFirst => Selection::EndOfDay(0),
        },
    }
}

/// Scroll position of the board
#[derive(Debug, Clone)]
pub struct DepartureWindow {
    selection: Selection,
    policy: EndOfDayPolicy,
    visible_rows: usize,
}

impl DepartureWindow {
    /// Create a window showing `visible_rows` departures
    pub fn new(policy: EndOfDayPolicy, visible_rows: usize) -> Self {
        Self {
            selection: Selection::Upcoming(0),
            policy,
            visible_rows: visible_rows.max(1),
        }
    }

    /// Recompute the top row for the current minute
    ///
    /// Runs in the main loop only, never from the tick source.
    pub fn recompute(&mut self, store: &TimetableStore, minute: u16) -> Selection {
        self.selection = select(store, minute, self.policy);
        self.selection
    }

    /// Index of the topmost visible departure
    pub fn top_index(&self) -> usize {
        self.selection.index()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Departures currently on the board, top row first
    pub fn visible<'a>(&self, store: &'a TimetableStore) -> &'a [DepartureRecord] {
        let rows = store.as_slice();
        let start = self.top_index().min(rows.len());
        let end = start.saturating_add(self.visible_rows).min(rows.len());
        &rows[start..end]
    }
}
