//! Ephemeral, per-draw snapshots of the board's cell buffer.

use crate::board::{Board, Cell};

/// A read-only snapshot of the board's cells.
///
/// Captured fresh for every redraw and thrown away afterwards. Never reuse a
/// view across board mutations: the board's backing storage is only valid for
/// the call that produced it.
#[derive(Debug, Clone)]
pub struct BoardView {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl BoardView {
    pub fn capture<B: Board + ?Sized>(board: &B) -> Self {
        let width = board.width();
        let height = board.height();
        let cells = board.cells();
        debug_assert_eq!(
            cells.len(),
            (width as usize) * (height as usize),
            "board returned a mismatched cell buffer"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major linear index for `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Decoded cell at `(row, col)`. Out-of-range reads paint as empty
    /// instead of faulting, mirroring how the renderers clip.
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        if row >= self.height || col >= self.width {
            return Cell::Empty;
        }
        self.cells
            .get(self.index(row, col))
            .copied()
            .map(Cell::from_byte)
            .unwrap_or(Cell::Empty)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
