//! The external board capability surface.
//!
//! The entire game-state machine (spawning, collision, rotation legality,
//! line clears, scoring) lives behind [`Board`]. This crate only drives it
//! and paints what it reports.

/// One grid cell's color/occupancy code, one byte in the board's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Color1,
    Color2,
    Color3,
}

impl Cell {
    /// Decode one raw byte, checked in the numeric order of the external
    /// encoding (first match wins). Anything unrecognized paints as empty.
    pub fn from_byte(byte: u8) -> Self {
        if byte == 1 {
            Cell::Color1
        } else if byte == 2 {
            Cell::Color2
        } else if byte == 3 {
            Cell::Color3
        } else {
            Cell::Empty
        }
    }
}

/// The opaque, externally implemented falling-block state machine.
///
/// None of the mutating calls report success or failure to the driver; the
/// contract is mutate-then-redraw regardless of effect. Every call is assumed
/// to succeed — a failing board takes the whole session down with it.
pub trait Board {
    /// Grid width in cells. Fixed for the board's lifetime.
    fn width(&self) -> u32;

    /// Grid height in cells. Fixed for the board's lifetime.
    fn height(&self) -> u32;

    /// Current cell bytes, row-major, length `width()*height()`.
    ///
    /// Returns a fresh copy on every call. Callers must not hold one across
    /// any other board call: the implementation may reallocate or rewrite its
    /// backing storage between calls.
    fn cells(&self) -> Vec<u8>;

    /// Advance the simulation exactly one discrete step. May lock the falling
    /// piece, spawn a new one, clear lines, or end the game — the board
    /// decides, and does not say which.
    fn tick(&mut self);

    /// Monotonically non-decreasing count of cleared lines.
    fn line_count(&self) -> u32;

    fn attempt_move_block_left(&mut self);
    fn attempt_move_block_right(&mut self);
    fn attempt_move_block_down(&mut self);
    fn attempt_rotate_clockwise(&mut self);
    fn attempt_rotate_counterclockwise(&mut self);
}
