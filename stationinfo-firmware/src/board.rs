//! Board wiring and compiled-in configuration
//!
//! The 0.96" TFT is an ST7735S, 80x160 pixels, used in landscape. The
//! panel has inverted colours; mipidsi inverts them back.
//!
//! | Signal | RP2040 pin |
//! |--------|------------|
//! | SCK    | GPIO10 (SPI1) |
//! | MOSI   | GPIO11 (SPI1) |
//! | CS     | GPIO9      |
//! | DC     | GPIO8      |
//! | RST    | GPIO12     |

use stationinfo_core::config::BoardConfig;

/// Board configuration (edit and rebuild to customise)
pub const BOARD_CONFIG: BoardConfig = BoardConfig::new();

/// TFT SPI clock
pub const TFT_SPI_HZ: u32 = 16_000_000;

/// Panel size in portrait orientation
pub const TFT_WIDTH: u16 = 80;
pub const TFT_HEIGHT: u16 = 160;

/// Offset of the visible area in ST7735 RAM
pub const TFT_OFFSET_X: u16 = 26;
pub const TFT_OFFSET_Y: u16 = 1;

/// How often the main loop polls the fast clock
pub const POLL_INTERVAL_MS: u64 = 50;
