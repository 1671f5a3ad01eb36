//! StationInfo - Departure Board Firmware
//!
//! Simulated train-station departure board for RP2040 boards with a small
//! ST7735 TFT. A fast clock runs through a compiled-in timetable and the
//! board always shows the next departures.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration, Ticker};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use {defmt_rtt as _, panic_probe as _};

use stationinfo_core::clock::DepartureWindow;
use stationinfo_core::timetable::{self, TimetableStore, DATA_VERSION};
use stationinfo_core::ConfigError;
use stationinfo_display::{BoardRenderer, DisplayBackend, Palette, TftBackend};

use crate::board::{
    BOARD_CONFIG, POLL_INTERVAL_MS, TFT_HEIGHT, TFT_OFFSET_X, TFT_OFFSET_Y, TFT_SPI_HZ, TFT_WIDTH,
};
use crate::tasks::FAST_CLOCK;

mod board;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("StationInfo firmware starting...");
    info!("Timetable data version {}", DATA_VERSION);

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup SPI1 for the TFT (write only, no MISO)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = TFT_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    let cs = Output::new(p.PIN_9, Level::High);
    let dc = Output::new(p.PIN_8, Level::Low);
    let rst = Output::new(p.PIN_12, Level::High);

    let spi_device = ExclusiveDevice::new(spi, cs, Delay).unwrap();
    let mut di_buffer = [0u8; 512];
    let di = SpiInterface::new(spi_device, dc, &mut di_buffer);

    let tft = match Builder::new(ST7735s, di)
        .display_size(TFT_WIDTH, TFT_HEIGHT)
        .display_offset(TFT_OFFSET_X, TFT_OFFSET_Y)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .reset_pin(rst)
        .init(&mut Delay)
    {
        Ok(display) => display,
        Err(e) => defmt::panic!("TFT init failed: {}", Debug2Format(&e)),
    };

    let mut backend = TftBackend::new(tft, Palette::STATION);
    let mut renderer = BoardRenderer::new();
    info!("TFT initialized");

    renderer.render_boot(DATA_VERSION);
    if let Err(e) = renderer.screen_mut().render_to(&mut backend) {
        warn!("Boot screen failed: {}", e);
    }

    // Configuration errors are fatal: nothing to show without a timetable
    if let Err(e) = BOARD_CONFIG.validate() {
        halt(e, &mut renderer, &mut backend);
    }
    let store = match timetable::build() {
        Ok(store) => store,
        Err(e) => halt(e, &mut renderer, &mut backend),
    };
    info!(
        "Timetable loaded: {} of {} departures",
        store.len(),
        store.capacity()
    );

    spawner
        .spawn(tasks::tick_task(BOARD_CONFIG.tick_interval_ms))
        .unwrap();

    info!(
        "Tick task spawned, one simulated minute every {} ms",
        BOARD_CONFIG.real_ms_per_minute()
    );

    run_board(&store, &mut renderer, &mut backend).await
}

/// Main loop: wait for fast clock minutes and redraw the board
async fn run_board<B: DisplayBackend>(
    store: &TimetableStore,
    renderer: &mut BoardRenderer,
    backend: &mut B,
) -> ! {
    let mut window = DepartureWindow::new(
        BOARD_CONFIG.end_of_day,
        BOARD_CONFIG.visible_rows as usize,
    );
    let mut poll = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    refresh(FAST_CLOCK.current_minute(), store, &mut window, renderer, backend);

    loop {
        if let Some(minute) = FAST_CLOCK.take_pending() {
            refresh(minute, store, &mut window, renderer, backend);
        }
        poll.next().await;
    }
}

/// Recompute the window for `minute` and redraw
fn refresh<B: DisplayBackend>(
    minute: u16,
    store: &TimetableStore,
    window: &mut DepartureWindow,
    renderer: &mut BoardRenderer,
    backend: &mut B,
) {
    let previous = window.selection();
    let selection = window.recompute(store, minute);
    debug!("Minute {}: {}", minute, selection);

    if selection.is_end_of_day() && !previous.is_end_of_day() {
        info!("Last departure of the day has left");
    } else if previous.is_end_of_day() && !selection.is_end_of_day() {
        info!("New day, first departure at top");
    }

    renderer.render_board(store, window, minute);
    if let Err(e) = renderer.screen_mut().render_to(backend) {
        // Dropped frame; the next minute redraws everything
        warn!("Display update failed: {}", e);
    }
}

/// Report a configuration error and stop before the main loop
fn halt<B: DisplayBackend>(error: ConfigError, renderer: &mut BoardRenderer, backend: &mut B) -> ! {
    error!("Configuration error: {} ({})", error.description(), error);

    renderer.render_error(error.description());
    renderer.screen_mut().render_to(backend).ok();

    loop {
        cortex_m::asm::wfi();
    }
}
