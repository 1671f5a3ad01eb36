//! Departure board rendering
//!
//! Layout on the 26x8 character grid:
//!
//! ```text
//! Abfahrt              09:30
//! 09:45 4 RB88 Bonn
//! 10:03 1 RB89 Aachen
//! ...
//!
//! Keine Verspatungen
//! ```

use core::fmt::Write;

use heapless::String;
use stationinfo_core::clock::DepartureWindow;
use stationinfo_core::timetable::{split_minute_of_day, DepartureRecord, MessageId, TimetableStore};

use crate::backend::Tone;
use crate::screen::{Screen, LINE_LEN, SCREEN_ROWS};

/// Row holding the status message
pub const STATUS_ROW: usize = SCREEN_ROWS - 1;

/// First departure row, below the header
const FIRST_DEPARTURE_ROW: usize = 1;

/// Format a minute of day as `HH:MM`
pub fn format_clock(minute: u16) -> String<5> {
    let (hours, minutes) = split_minute_of_day(minute);
    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}", hours, minutes);
    out
}

/// Format a departure as `HH:MM P Message`, truncated to the line length
pub fn format_departure(record: &DepartureRecord) -> String<LINE_LEN> {
    let mut line: String<LINE_LEN> = String::new();
    let _ = line.push_str(&format_clock(record.minute_of_day()));
    let _ = write!(line, " {} ", record.platform());
    for ch in record.message().text().chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

/// Screen renderer for the departure board
pub struct BoardRenderer {
    screen: Screen,
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Get the screen buffer for sending to a backend
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Render the power-on screen
    pub fn render_boot(&mut self, data_version: u8) {
        self.screen.clear();

        let mut version: String<LINE_LEN> = String::new();
        let _ = write!(version, "  Fahrplan v{}", data_version);

        self.screen.set_line(3, "  StationInfo", Tone::Header);
        self.screen.set_line(4, &version, Tone::Departure);
    }

    /// Render a fatal configuration error
    pub fn render_error(&mut self, message: &str) {
        self.screen.clear();
        self.screen.set_line(0, "Konfigurationsfehler", Tone::Alert);
        self.screen.set_line(2, message, Tone::Alert);
    }

    /// Render the departure board
    ///
    /// # Arguments
    /// - `store`: Station timetable
    /// - `window`: Window already recomputed for `minute`
    /// - `minute`: Current fast clock minute, shown in the header
    pub fn render_board(&mut self, store: &TimetableStore, window: &DepartureWindow, minute: u16) {
        self.screen.clear();

        let mut header: String<LINE_LEN> = String::new();
        let _ = header.push_str(MessageId::HEADER.text());
        let clock = format_clock(minute);
        while header.len() < LINE_LEN - clock.len() {
            let _ = header.push(' ');
        }
        let _ = header.push_str(&clock);
        self.screen.set_line(0, &header, Tone::Header);

        for (offset, record) in window.visible(store).iter().enumerate() {
            let row = FIRST_DEPARTURE_ROW + offset;
            if row >= STATUS_ROW {
                break;
            }
            let tone = if record.message().is_notice() {
                Tone::Alert
            } else {
                Tone::Departure
            };
            self.screen.set_line(row, &format_departure(record), tone);
        }

        let (status, tone) = if window.selection().is_end_of_day() {
            (MessageId::NO_SERVICE, Tone::Alert)
        } else {
            (MessageId::NO_DELAYS, Tone::Status)
        };
        self.screen.set_line(STATUS_ROW, status.text(), tone);
    }
}
