//! Drives full drags through the dispatcher and checks what the sheet
//! decides on release.

use sheetkit_testing::robot_assertions::{assert_non_increasing, assert_single_action};
use sheetkit_testing::{GestureRobot, HostCall, RecordingHost};
use sheetkit_ui::{BottomSheet, ContentTransform, PointerSource, SheetAction, SheetHost};

const VIEWPORT: f32 = 1000.0;

fn open_sheet() -> (RecordingHost, BottomSheet<RecordingHost>) {
    let host = RecordingHost::open_on(VIEWPORT);
    let sheet = BottomSheet::new(host.clone());
    (host, sheet)
}

#[test]
fn slow_drag_past_half_viewport_closes() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    // 600px over 3s: 200px/s, below the fast threshold.
    robot.press(0.0).drag_by(600.0, 6, 3_000).release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::Close, "distance close");
    assert!(!host.is_open());
    assert_eq!(host.count(&HostCall::SetOpen(false)), 1);
}

#[test]
fn short_fast_flick_down_closes() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    // 100px in 100ms: 1000px/s.
    robot.press(200.0).drag_by(100.0, 2, 100).release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::Close, "velocity close");
    assert!(!host.is_open());
}

#[test]
fn slow_short_drag_snaps_back() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(200.0, 4, 2_000).release(0);
    let actions = robot.flush(&mut sheet);
    robot.settle(&mut sheet);

    assert_single_action(&actions, SheetAction::SnapBack, "snap back");
    assert!(host.is_open());
    assert_eq!(host.count(&HostCall::SetOpen(true)), 0);
    assert_eq!(host.count(&HostCall::SetOpen(false)), 0);
    assert_eq!(host.content().transform, Some(ContentTransform::Neutral));
}

#[test]
fn drag_ending_exactly_on_threshold_snaps_back() {
    let (_host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(500.0, 5, 5_000).release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::SnapBack, "threshold is exclusive");
}

#[test]
fn fast_upward_flick_reopens_closed_sheet() {
    let host = RecordingHost::new(VIEWPORT, false);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(500.0).drag_by(-200.0, 2, 100).release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::Reopen, "upward flick");
    assert!(host.is_open());
    assert_eq!(host.count(&HostCall::SetOpen(true)), 1);
}

#[test]
fn slow_upward_drag_snaps_back() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(500.0).drag_by(-300.0, 3, 3_000).release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::SnapBack, "slow upward");
    assert!(host.is_open());
}

#[test]
fn upward_drag_is_damped_and_clamped() {
    let (host, mut sheet) = open_sheet();
    host.clear_calls();
    let mut robot = GestureRobot::new();

    // -50 * 0.1 = -5, then -200 * 0.1 = -20 clamped to -10.
    robot
        .press(500.0)
        .move_to(450.0, 50)
        .move_to(300.0, 50);
    robot.flush(&mut sheet);

    assert_eq!(
        host.content_transforms(),
        vec![
            ContentTransform::TranslateY(-5.0),
            ContentTransform::TranslateY(-10.0)
        ]
    );
    assert_eq!(host.overlay().opacity, Some(1.0));
}

#[test]
fn overlay_fades_as_content_moves_down() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(500.0, 5, 5_000);
    robot.flush(&mut sheet);

    let opacities = host.overlay_opacities();
    let during_drag = &opacities[1..];
    assert_eq!(during_drag.len(), 5);
    assert_non_increasing(during_drag, "overlay while dragging down");
    assert_eq!(during_drag.last().copied(), Some(0.0));
    assert_eq!(
        host.content().transform,
        Some(ContentTransform::TranslateY(500.0))
    );
}

#[test]
fn leaving_content_area_ends_drag_like_release() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(600.0, 6, 3_000).leave(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::Close, "leave");
    assert!(!sheet.session().is_active());
    assert!(!host.listeners_attached());
}

#[test]
fn press_without_move_restores_sheet() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(300.0).release(120);
    let actions = robot.flush(&mut sheet);
    robot.settle(&mut sheet);

    assert_single_action(&actions, SheetAction::SnapBack, "tap");
    assert!(host.is_open());
    assert!(sheet.session().is_empty());
    assert_eq!(host.content().transform, Some(ContentTransform::Neutral));
}

#[test]
fn stray_move_and_release_are_ignored() {
    let (host, mut sheet) = open_sheet();
    host.clear_calls();
    let mut robot = GestureRobot::new();

    robot.move_to(400.0, 16).release(16);
    let actions = robot.flush(&mut sheet);

    assert!(actions.is_empty());
    assert!(host.calls().is_empty());
    assert!(sheet.next_deadline().is_none());
}

#[test]
fn threshold_follows_current_viewport_height() {
    let (host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(300.0, 3, 3_000);
    robot.flush(&mut sheet);
    host.set_viewport_height(400.0);
    robot.release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::Close, "resized viewport");
}

#[test]
fn touch_drag_behaves_like_mouse_drag() {
    let (_host, mut sheet) = open_sheet();
    let mut robot = GestureRobot::new().with_source(PointerSource::Touch);

    robot.press(0.0).drag_by(100.0, 4, 80).release(0);
    let actions = robot.flush(&mut sheet);

    assert_single_action(&actions, SheetAction::Close, "touch flick");
}
