//! Windowed entry point: wires a [`Driver`] into the host event loop.

use std::error::Error;
use std::time::Instant;

use engine::app::{run_app, AppConfig, EventApp};
use winit::event::VirtualKeyCode;

use crate::board::Board;
use crate::driver::Driver;
use crate::settings::DriverSettings;

pub const WINDOW_TITLE: &str = "Gridfall";

struct DriverApp<B: Board> {
    driver: Driver<B>,
}

impl<B: Board> EventApp for DriverApp<B> {
    fn init(&mut self, frame: &mut [u8]) {
        self.driver.init_surface(frame);
    }

    fn on_frame(&mut self, now: Instant, frame: &mut [u8]) {
        self.driver.on_frame(now, frame);
    }

    fn on_key_pressed(&mut self, key: VirtualKeyCode, frame: &mut [u8]) {
        self.driver.on_key(key, frame);
    }
}

/// Open a window sized to the board and run until the window closes.
/// The board implementation is supplied by the caller.
pub fn run<B: Board + 'static>(board: B, settings: DriverSettings) -> Result<(), Box<dyn Error>> {
    let settings = settings.sanitized();
    let driver = Driver::new(board, &settings, Instant::now());
    let config = AppConfig {
        title: WINDOW_TITLE.to_string(),
        surface_size: driver.surface_size(),
        vsync: Some(settings.vsync),
    };
    run_app(config, DriverApp { driver })
}
