//! Frame-driven orchestration of board, clock, and renderer.

use std::time::Instant;

use engine::graphics::{CpuRenderer, Renderer2d};
use engine::surface::SurfaceSize;

use crate::board::Board;
use crate::clock::TickClock;
use crate::input::{dispatch, map_key};
use crate::render::{self, Geometry};
use crate::settings::DriverSettings;
use crate::view::BoardView;
use winit::event::VirtualKeyCode;

/// Owns the board and drives it from host callbacks.
///
/// The driver only touches raw RGBA frames, so the same code path runs under
/// a window and in headless tests.
pub struct Driver<B: Board> {
    board: B,
    geometry: Geometry,
    clock: TickClock,
}

impl<B: Board> Driver<B> {
    pub fn new(board: B, settings: &DriverSettings, now: Instant) -> Self {
        let geometry = Geometry::new(board.width(), board.height(), settings.cell_size);
        Self {
            board,
            geometry,
            clock: TickClock::new(settings.tick_interval, now),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.geometry.surface_width(), self.geometry.surface_height())
    }

    /// One-time surface setup: background and the static lattice. Cell
    /// squares stay untouched until the first tick or keypress repaints them.
    pub fn init_surface(&self, frame: &mut [u8]) {
        let mut gfx = CpuRenderer::new(frame, self.surface_size());
        gfx.clear(render::background_color());
        render::draw_grid(&mut gfx, self.geometry);
    }

    /// One scheduling opportunity. Advances the simulation and repaints the
    /// cells only when the tick gate fires; the line-count strip is refreshed
    /// every time. Returns whether a tick fired.
    pub fn on_frame(&mut self, now: Instant, frame: &mut [u8]) -> bool {
        let mut gfx = CpuRenderer::new(frame, self.surface_size());

        let ticked = self.clock.poll(now);
        if ticked {
            self.board.tick();
            let view = BoardView::capture(&self.board);
            render::draw_cells(&mut gfx, self.geometry, &view);
        }

        render::draw_line_count(&mut gfx, self.geometry, self.board.line_count());
        ticked
    }

    /// Handle one key press. A recognized key makes exactly one board call
    /// and is always followed by a full cell repaint, whether or not the
    /// board accepted the move. Unrecognized keys have no effect at all.
    /// Returns whether the key was recognized.
    pub fn on_key(&mut self, key: VirtualKeyCode, frame: &mut [u8]) -> bool {
        let Some(input) = map_key(key) else {
            return false;
        };
        dispatch(input, &mut self.board);

        let mut gfx = CpuRenderer::new(frame, self.surface_size());
        let view = BoardView::capture(&self.board);
        render::draw_cells(&mut gfx, self.geometry, &view);
        true
    }
}
