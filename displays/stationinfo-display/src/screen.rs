//! Screen buffer types
//!
//! Provides a character-based screen buffer for the departure board.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError, Tone};

/// Number of character rows (80 px TFT height, 10 px font)
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns (160 px TFT width, 6 px font)
pub const SCREEN_COLS: usize = 26;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Holds one line of text and one tone per row and can be rendered to any
/// `DisplayBackend` implementation.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Colour class per row
    tones: [Tone; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            tones: [Tone::Departure; SCREEN_ROWS],
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.tones = [Tone::Departure; SCREEN_ROWS];
        self.dirty = true;
    }

    /// Set the content and tone of a row, truncating to the line length
    pub fn set_line(&mut self, row: usize, text: &str, tone: Tone) {
        if row < SCREEN_ROWS {
            let line = &mut self.lines[row];
            line.clear();
            for ch in text.chars() {
                if line.push(ch).is_err() {
                    break;
                }
            }
            self.tones[row] = tone;
            self.dirty = true;
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Get the tone of a specific row
    pub fn tone(&self, row: usize) -> Option<Tone> {
        self.tones.get(row).copied()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Draw every non-empty row to `backend` and flush
    ///
    /// The screen is only marked clean when the whole frame was sent.
    pub fn render_to<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        backend.clear()?;
        for (row, (line, tone)) in self.lines.iter().zip(self.tones.iter()).enumerate() {
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line.as_str(), *tone)?;
            }
        }
        backend.flush()?;

        self.mark_clean();
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use heapless::Vec;

    /// Backend that records draw calls
    pub(crate) struct RecordingBackend {
        pub ready: bool,
        pub fail_draw: bool,
        pub clears: usize,
        pub flushes: usize,
        pub drawn: Vec<(u8, String<LINE_LEN>, Tone), SCREEN_ROWS>,
    }

    impl RecordingBackend {
        pub fn new() -> Self {
            Self {
                ready: true,
                fail_draw: false,
                clears: 0,
                flushes: 0,
                drawn: Vec::new(),
            }
        }
    }

    impl DisplayBackend for RecordingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            self.drawn.clear();
            Ok(())
        }

        fn draw_text(&mut self, row: u8, _col: u8, text: &str, tone: Tone) -> Result<(), DisplayError> {
            if self.fail_draw {
                return Err(DisplayError::Communication);
            }
            let mut line = String::new();
            let _ = line.push_str(text);
            let _ = self.drawn.push((row, line, tone));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (SCREEN_COLS as u8, SCREEN_ROWS as u8)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_set_line_truncates() {
        let mut screen = Screen::new();
        screen.set_line(1, "0123456789012345678901234567890", Tone::Departure);
        assert_eq!(screen.get_line(1).unwrap().len(), LINE_LEN);

        // Rows past the end are ignored
        screen.set_line(SCREEN_ROWS, "lost", Tone::Alert);
        assert!(screen.get_line(SCREEN_ROWS).is_none());
    }

    #[test]
    fn test_render_skips_empty_rows() {
        let mut screen = Screen::new();
        screen.set_line(0, "Abfahrt", Tone::Header);
        screen.set_line(7, "Keine Verspatungen", Tone::Status);

        let mut backend = RecordingBackend::new();
        screen.render_to(&mut backend).unwrap();

        assert_eq!(backend.clears, 1);
        assert_eq!(backend.flushes, 1);
        assert_eq!(backend.drawn.len(), 2);
        assert_eq!(backend.drawn[0].0, 0);
        assert_eq!(backend.drawn[0].2, Tone::Header);
        assert_eq!(backend.drawn[1].0, 7);
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_render_errors_keep_screen_dirty() {
        let mut screen = Screen::new();
        screen.set_line(0, "Abfahrt", Tone::Header);

        let mut backend = RecordingBackend::new();
        backend.ready = false;
        assert_eq!(
            screen.render_to(&mut backend),
            Err(DisplayError::NotInitialized)
        );

        backend.ready = true;
        backend.fail_draw = true;
        assert_eq!(
            screen.render_to(&mut backend),
            Err(DisplayError::Communication)
        );
        assert!(screen.is_dirty());
        assert_eq!(backend.flushes, 0);
    }
}
