#![allow(dead_code)]

use std::cell::Cell as StdCell;

use gridfall::board::Board;

/// Every board call the driver can make, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Tick,
    MoveLeft,
    MoveRight,
    MoveDown,
    RotateCw,
    RotateCcw,
}

/// Test double that records every call and hands out scripted cell buffers.
pub struct ScriptedBoard {
    width: u32,
    height: u32,
    pub cells: Vec<u8>,
    pub line_count: u32,
    pub calls: Vec<Call>,
    /// Number of times `cells()` was snapshotted.
    pub snapshots: StdCell<usize>,
}

impl ScriptedBoard {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0u8; (width * height) as usize],
            line_count: 0,
            calls: Vec::new(),
            snapshots: StdCell::new(0),
        }
    }
}

impl Board for ScriptedBoard {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> Vec<u8> {
        self.snapshots.set(self.snapshots.get() + 1);
        self.cells.clone()
    }

    fn tick(&mut self) {
        self.calls.push(Call::Tick);
    }

    fn line_count(&self) -> u32 {
        self.line_count
    }

    fn attempt_move_block_left(&mut self) {
        self.calls.push(Call::MoveLeft);
    }

    fn attempt_move_block_right(&mut self) {
        self.calls.push(Call::MoveRight);
    }

    fn attempt_move_block_down(&mut self) {
        self.calls.push(Call::MoveDown);
    }

    fn attempt_rotate_clockwise(&mut self) {
        self.calls.push(Call::RotateCw);
    }

    fn attempt_rotate_counterclockwise(&mut self) {
        self.calls.push(Call::RotateCcw);
    }
}
