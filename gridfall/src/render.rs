//! Grid lattice and cell rendering.
//!
//! The lattice is static for the whole session and painted exactly once; the
//! cell squares sit in the gaps between the lines and are repainted whole on
//! every redraw, so the lines never need restoring.

use engine::graphics::{Color, Renderer2d};
use engine::ui::Rect;

use crate::board::Cell;
use crate::view::BoardView;

/// Default cell edge length in pixels, matching the original frontend.
pub const DEFAULT_CELL_SIZE: u32 = 15;

/// Height of the line-count strip under the lattice.
pub const HUD_HEIGHT: u32 = 20;
const HUD_TEXT_INSET: u32 = 4;

const COLOR_GRID: Color = [0xCC, 0xCC, 0xCC, 0xFF];
const COLOR_BACKGROUND: Color = [0x00, 0x00, 0x00, 0xFF];
const COLOR_ONE: Color = [0xFF, 0x00, 0x00, 0xFF];
const COLOR_TWO: Color = [0x00, 0xFF, 0x00, 0xFF];
const COLOR_THREE: Color = [0x00, 0x00, 0xFF, 0xFF];
const COLOR_HUD_TEXT: Color = [0xCC, 0xCC, 0xCC, 0xFF];

pub fn grid_color() -> Color {
    COLOR_GRID
}

pub fn background_color() -> Color {
    COLOR_BACKGROUND
}

/// Fixed color mapping, checked in the priority order of the external
/// encoding: Color1, Color2, Color3, then everything else as background.
pub fn color_for_cell(cell: Cell) -> Color {
    match cell {
        Cell::Color1 => COLOR_ONE,
        Cell::Color2 => COLOR_TWO,
        Cell::Color3 => COLOR_THREE,
        Cell::Empty => COLOR_BACKGROUND,
    }
}

/// Session-fixed render geometry, computed once from the board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    board_width: u32,
    board_height: u32,
    cell_size: u32,
}

impl Geometry {
    pub fn new(board_width: u32, board_height: u32, cell_size: u32) -> Self {
        Self {
            board_width,
            board_height,
            cell_size: cell_size.max(1),
        }
    }

    pub fn board_width(&self) -> u32 {
        self.board_width
    }

    pub fn board_height(&self) -> u32 {
        self.board_height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance between neighboring grid lines: one cell plus the line.
    pub fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Lattice width in pixels: `(cell+1)*width + 1`.
    pub fn lattice_width(&self) -> u32 {
        self.pitch() * self.board_width + 1
    }

    /// Lattice height in pixels: `(cell+1)*height + 1`.
    pub fn lattice_height(&self) -> u32 {
        self.pitch() * self.board_height + 1
    }

    /// Full surface width including the HUD strip (same as the lattice).
    pub fn surface_width(&self) -> u32 {
        self.lattice_width()
    }

    /// Full surface height: lattice plus the line-count strip below it.
    pub fn surface_height(&self) -> u32 {
        self.lattice_height() + HUD_HEIGHT
    }

    /// Top-left pixel of the cell square at `(row, col)`.
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.pitch() + 1, row * self.pitch() + 1)
    }
}

/// Paint the static lattice: `width+1` vertical and `height+1` horizontal
/// one-pixel lines at `cell+1` spacing. Called exactly once, at startup;
/// cells repaint only the squares between the lines afterwards.
pub fn draw_grid(gfx: &mut dyn Renderer2d, geo: Geometry) {
    let pitch = geo.pitch();
    for i in 0..=geo.board_width() {
        gfx.fill_rect(Rect::new(i * pitch, 0, 1, geo.lattice_height()), COLOR_GRID);
    }
    for j in 0..=geo.board_height() {
        gfx.fill_rect(Rect::new(0, j * pitch, geo.lattice_width(), 1), COLOR_GRID);
    }
}

/// Repaint every cell square from a freshly captured view.
pub fn draw_cells(gfx: &mut dyn Renderer2d, geo: Geometry, view: &BoardView) {
    for row in 0..geo.board_height() {
        for col in 0..geo.board_width() {
            let (x, y) = geo.cell_origin(row, col);
            let color = color_for_cell(view.cell(row, col));
            gfx.fill_rect(Rect::new(x, y, geo.cell_size(), geo.cell_size()), color);
        }
    }
}

/// Refresh the line-count strip under the lattice.
///
/// The "00" in the prefix is cosmetic, carried over verbatim from the
/// original display — the count is not zero-padded.
pub fn draw_line_count(gfx: &mut dyn Renderer2d, geo: Geometry, line_count: u32) {
    let strip = Rect::new(0, geo.lattice_height(), geo.surface_width(), HUD_HEIGHT);
    gfx.fill_rect(strip, COLOR_BACKGROUND);

    let text = format!("LINES - 00{line_count}");
    gfx.draw_text(
        HUD_TEXT_INSET,
        geo.lattice_height() + HUD_TEXT_INSET,
        &text,
        COLOR_HUD_TEXT,
    );
}
