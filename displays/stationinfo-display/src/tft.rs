//! Character-grid backend for RGB565 pixel displays
//!
//! Draws the screen with a 6x10 mono font, so an 160x80 TFT in landscape
//! gives 26 columns by 8 rows. Works with any `embedded-graphics` draw
//! target, e.g. a `mipidsi` display.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{DisplayBackend, DisplayError, Tone};

/// Character cell width in pixels
const CHAR_WIDTH: u32 = 6;

/// Character cell height in pixels
const CHAR_HEIGHT: u32 = 10;

/// Colour for each tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub header: Rgb565,
    pub departure: Rgb565,
    pub status: Rgb565,
    pub alert: Rgb565,
}

impl Palette {
    /// Station board colours: yellow header, white rows, green/red status
    pub const STATION: Self = Self {
        background: Rgb565::BLACK,
        header: Rgb565::YELLOW,
        departure: Rgb565::WHITE,
        status: Rgb565::GREEN,
        alert: Rgb565::RED,
    };

    pub fn color(&self, tone: Tone) -> Rgb565 {
        match tone {
            Tone::Header => self.header,
            Tone::Departure => self.departure,
            Tone::Status => self.status,
            Tone::Alert => self.alert,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STATION
    }
}

/// `DisplayBackend` over an `embedded-graphics` draw target
pub struct TftBackend<D> {
    target: D,
    palette: Palette,
}

impl<D> TftBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D, palette: Palette) -> Self {
        Self { target, palette }
    }

    /// Access the underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }
}

impl<D> DisplayBackend for TftBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(self.palette.background)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str, tone: Tone) -> Result<(), DisplayError> {
        let (cols, rows) = self.dimensions();
        if row >= rows || col >= cols {
            return Err(DisplayError::InvalidCoordinates);
        }

        let origin = self.target.bounding_box().top_left;
        let position = origin
            + Point::new(
                (col as u32 * CHAR_WIDTH) as i32,
                (row as u32 * CHAR_HEIGHT) as i32,
            );
        let style = MonoTextStyle::new(&FONT_6X10, self.palette.color(tone));

        Text::with_baseline(text, position, style, Baseline::Top)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // Pixels are written straight to the panel
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        let size = self.target.bounding_box().size;
        (
            (size.width / CHAR_WIDTH).min(u8::MAX as u32) as u8,
            (size.height / CHAR_HEIGHT).min(u8::MAX as u32) as u8,
        )
    }

    fn is_ready(&self) -> bool {
        true
    }
}
