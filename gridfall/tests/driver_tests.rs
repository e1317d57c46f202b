//! Behavioral checks of the driver: tick gating, key dispatch, and the
//! one-call-one-repaint contract.

mod common;

use std::time::{Duration, Instant};

use common::{Call, ScriptedBoard};
use engine::surface::RgbaBufferSurface;
use gridfall::driver::Driver;
use gridfall::settings::DriverSettings;
use winit::event::VirtualKeyCode;

fn new_session(board: ScriptedBoard) -> (Driver<ScriptedBoard>, RgbaBufferSurface, Instant) {
    let t0 = Instant::now();
    let driver = Driver::new(board, &DriverSettings::default(), t0);
    let mut surface = RgbaBufferSurface::new(driver.surface_size());
    driver.init_surface(surface.frame_mut());
    (driver, surface, t0)
}

#[test]
fn each_recognized_key_makes_exactly_one_board_call() {
    let cases = [
        (VirtualKeyCode::Left, Call::MoveLeft),
        (VirtualKeyCode::Right, Call::MoveRight),
        (VirtualKeyCode::Down, Call::MoveDown),
        (VirtualKeyCode::X, Call::RotateCw),
        (VirtualKeyCode::Z, Call::RotateCcw),
    ];
    for (key, expected) in cases {
        let (mut driver, mut surface, _) = new_session(ScriptedBoard::new(10, 20));
        assert!(driver.on_key(key, surface.frame_mut()));
        assert_eq!(driver.board().calls, vec![expected]);
        // The repaint captures exactly one fresh snapshot.
        assert_eq!(driver.board().snapshots.get(), 1);
    }
}

#[test]
fn unrecognized_keys_have_no_side_effects() {
    let (mut driver, mut surface, _) = new_session(ScriptedBoard::new(10, 20));
    let before = surface.frame().to_vec();

    for key in [
        VirtualKeyCode::Up,
        VirtualKeyCode::Space,
        VirtualKeyCode::Return,
        VirtualKeyCode::A,
        VirtualKeyCode::Escape,
    ] {
        assert!(!driver.on_key(key, surface.frame_mut()));
    }

    assert!(driver.board().calls.is_empty());
    assert_eq!(driver.board().snapshots.get(), 0);
    assert_eq!(surface.frame(), before.as_slice());
}

#[test]
fn keys_repaint_even_when_the_board_rejects_the_move() {
    // The scripted board never moves anything; the repaint happens anyway.
    let mut board = ScriptedBoard::new(10, 20);
    board.cells[0] = 1;
    let (mut driver, mut surface, _) = new_session(board);

    assert!(driver.on_key(VirtualKeyCode::Left, surface.frame_mut()));
    // Red square at the origin cell proves the repaint ran.
    assert_eq!(surface.pixel(1, 1), Some([0xFF, 0x00, 0x00, 0xFF]));
}

#[test]
fn the_tick_gate_is_strictly_greater_than_the_interval() {
    let (mut driver, mut surface, t0) = new_session(ScriptedBoard::new(10, 20));

    assert!(!driver.on_frame(t0 + Duration::from_millis(750), surface.frame_mut()));
    assert!(!driver.on_frame(t0 + Duration::from_millis(800), surface.frame_mut()));
    assert!(driver.board().calls.is_empty());

    assert!(driver.on_frame(t0 + Duration::from_millis(801), surface.frame_mut()));
    assert_eq!(driver.board().calls, vec![Call::Tick]);
    assert_eq!(driver.board().snapshots.get(), 1);
}

#[test]
fn tick_reference_resets_to_the_evaluation_moment() {
    let (mut driver, mut surface, t0) = new_session(ScriptedBoard::new(10, 20));

    // First opportunity lands late; the next window is measured from it.
    assert!(driver.on_frame(t0 + Duration::from_millis(850), surface.frame_mut()));
    assert!(!driver.on_frame(t0 + Duration::from_millis(1650), surface.frame_mut()));
    assert!(driver.on_frame(t0 + Duration::from_millis(1651), surface.frame_mut()));
    assert_eq!(driver.board().calls, vec![Call::Tick, Call::Tick]);
}

#[test]
fn frames_without_a_tick_do_not_touch_the_board_cells() {
    let (mut driver, mut surface, t0) = new_session(ScriptedBoard::new(10, 20));

    for ms in [1u64, 100, 400, 799] {
        assert!(!driver.on_frame(t0 + Duration::from_millis(ms), surface.frame_mut()));
    }
    assert!(driver.board().calls.is_empty());
    assert_eq!(driver.board().snapshots.get(), 0);
}

#[test]
fn ticks_repaint_from_a_snapshot_taken_after_the_advance() {
    let (mut driver, mut surface, t0) = new_session(ScriptedBoard::new(10, 20));

    driver.board_mut().cells[5] = 2;
    assert!(driver.on_frame(t0 + Duration::from_millis(801), surface.frame_mut()));

    // The post-tick state is what gets painted.
    assert_eq!(surface.pixel(81, 1), Some([0x00, 0xFF, 0x00, 0xFF]));
}

#[test]
fn a_custom_interval_moves_the_gate() {
    let board = ScriptedBoard::new(10, 20);
    let settings = DriverSettings {
        tick_interval: Duration::from_millis(100),
        ..DriverSettings::default()
    };
    let t0 = Instant::now();
    let mut driver = Driver::new(board, &settings, t0);
    let mut surface = RgbaBufferSurface::new(driver.surface_size());
    driver.init_surface(surface.frame_mut());

    assert!(!driver.on_frame(t0 + Duration::from_millis(100), surface.frame_mut()));
    assert!(driver.on_frame(t0 + Duration::from_millis(101), surface.frame_mut()));
}
