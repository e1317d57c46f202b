//! Keyboard dispatch: five recognized keys, five board mutations.

use winit::event::VirtualKeyCode;

use crate::board::Board;

/// The five recognized gameplay inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
}

/// Key bindings carried over from the original frontend: arrows move,
/// X rotates clockwise, Z counterclockwise. Every other key is ignored
/// with no side effect at all.
pub fn map_key(key: VirtualKeyCode) -> Option<GameInput> {
    match key {
        VirtualKeyCode::Left => Some(GameInput::MoveLeft),
        VirtualKeyCode::Right => Some(GameInput::MoveRight),
        VirtualKeyCode::Down => Some(GameInput::SoftDrop),
        VirtualKeyCode::X => Some(GameInput::RotateCw),
        VirtualKeyCode::Z => Some(GameInput::RotateCcw),
        _ => None,
    }
}

/// Forward one input to the board: exactly one call per input. Whether the
/// attempt moved anything is not observable here — the caller repaints the
/// cells unconditionally afterwards.
pub fn dispatch<B: Board + ?Sized>(input: GameInput, board: &mut B) {
    match input {
        GameInput::MoveLeft => board.attempt_move_block_left(),
        GameInput::MoveRight => board.attempt_move_block_right(),
        GameInput::SoftDrop => board.attempt_move_block_down(),
        GameInput::RotateCw => board.attempt_rotate_clockwise(),
        GameInput::RotateCcw => board.attempt_rotate_counterclockwise(),
    }
}
