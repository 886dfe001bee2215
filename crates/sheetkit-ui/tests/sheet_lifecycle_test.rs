//! Style, listener and visibility side effects across a sheet's lifetime.

use sheetkit_testing::robot_assertions::{assert_approx_eq, assert_translation_approx};
use sheetkit_testing::{GestureRobot, HostCall, RecordingHost};
use sheetkit_ui::{
    BottomSheet, ContentTransform, Layer, SheetConfig, SheetHost, StyleChange, Transition,
};

const VIEWPORT: f32 = 1000.0;

#[test]
fn mounting_open_sheet_locks_scroll_and_shows_overlay() {
    let host = RecordingHost::open_on(VIEWPORT);
    let sheet = BottomSheet::new(host.clone());

    assert!(host.scroll_locked());
    assert_eq!(host.overlay().opacity, Some(1.0));
    assert_eq!(
        host.overlay().transition,
        Some(Transition::Enabled(sheet.config().overlay_transition))
    );
    assert_eq!(host.content().transform, Some(ContentTransform::Neutral));
}

#[test]
fn mounting_closed_sheet_hides_overlay_without_locking() {
    let host = RecordingHost::new(VIEWPORT, false);
    let _sheet = BottomSheet::new(host.clone());

    assert!(!host.scroll_locked());
    assert_eq!(host.overlay().opacity, Some(0.0));
    assert_eq!(host.count(&HostCall::ScrollLocked(true)), 0);
}

#[test]
fn content_transition_is_off_only_while_dragging() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).move_to(120.0, 200);
    robot.flush(&mut sheet);
    assert_eq!(host.content().transition, Some(Transition::Disabled));
    assert!(!sheet.presentation().transition_enabled);
    assert_approx_eq(sheet.presentation().content_offset, 120.0, 0.001, "offset");

    robot.release(16);
    robot.flush(&mut sheet);
    assert_eq!(
        host.content().transition,
        Some(Transition::Enabled(sheet.config().content_transition))
    );
    assert!(sheet.presentation().transition_enabled);
}

#[test]
fn overlay_is_restored_immediately_on_release() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(400.0, 4, 4_000);
    robot.flush(&mut sheet);
    assert_approx_eq(host.overlay().opacity.unwrap_or(1.0), 0.2, 0.001, "faded");

    robot.release(0);
    robot.flush(&mut sheet);
    assert_eq!(host.overlay().opacity, Some(1.0));
}

#[test]
fn resting_transform_waits_for_reenable_delay() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::starting_at(1_000);

    robot.press(0.0).drag_by(150.0, 3, 1_500).release(5);
    robot.flush(&mut sheet);
    let released_at = robot.now();

    assert_eq!(sheet.next_deadline(), Some(released_at + 10));
    sheet.advance_to(released_at + 9);
    assert_translation_approx(host.content().transform, 150.0, 0.001, "before tick");

    sheet.advance_to(released_at + 10);
    assert_eq!(host.content().transform, Some(ContentTransform::Neutral));
    assert!(sheet.next_deadline().is_none());
}

#[test]
fn closing_drag_runs_visibility_effects_then_slides_off_screen() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(700.0, 7, 3_500).release(0);
    robot.flush(&mut sheet);
    assert!(host.scroll_locked(), "effects run after the flag is observed");

    host.clear_calls();
    robot.settle(&mut sheet);

    assert!(!host.scroll_locked());
    assert_eq!(host.overlay().opacity, Some(0.0));
    assert_eq!(
        host.content_transforms(),
        vec![ContentTransform::Neutral, ContentTransform::OffScreen]
    );
    assert_eq!(host.content().transform, Some(ContentTransform::OffScreen));
}

#[test]
fn press_inside_reenable_window_keeps_control_of_content() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).drag_by(600.0, 6, 3_000).release(0);
    robot.flush(&mut sheet);
    let released_at = robot.now();

    robot.press(0.0).move_to(3.0, 5);
    robot.flush(&mut sheet);
    assert!(!host.scroll_locked(), "close effects committed on press");
    assert!(sheet.next_deadline().is_none());

    sheet.advance_to(released_at + 10);

    assert!(sheet.session().is_active());
    assert_eq!(host.content().transition, Some(Transition::Disabled));
    assert_eq!(
        host.content().transform,
        Some(ContentTransform::TranslateY(3.0))
    );
    let off_screen = HostCall::Style(
        Layer::Content,
        StyleChange::Transform(ContentTransform::OffScreen),
    );
    assert_eq!(host.count(&off_screen), 0);
}

#[test]
fn reopening_flick_locks_scroll_again() {
    let host = RecordingHost::new(VIEWPORT, false);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(600.0).drag_by(-100.0, 2, 50).release(0);
    robot.flush(&mut sheet);
    robot.settle(&mut sheet);

    assert!(host.scroll_locked());
    assert_eq!(host.overlay().opacity, Some(1.0));
    assert_eq!(host.content().transform, Some(ContentTransform::Neutral));
}

#[test]
fn global_listeners_attach_and_detach_once_per_drag() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).move_to(10.0, 16).press(10.0).move_to(30.0, 16);
    robot.flush(&mut sheet);
    assert!(host.listeners_attached());
    assert!(sheet.listeners_attached());
    assert_eq!(host.count(&HostCall::AttachListeners), 1);

    robot.release(16).release(16);
    robot.flush(&mut sheet);
    assert!(!host.listeners_attached());
    assert_eq!(host.count(&HostCall::DetachListeners), 1);

    robot.press(0.0).move_to(10.0, 16).release(16);
    robot.flush(&mut sheet);
    assert_eq!(host.count(&HostCall::AttachListeners), 2);
    assert_eq!(host.count(&HostCall::DetachListeners), 2);
}

#[test]
fn dropping_sheet_mid_drag_releases_everything() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).move_to(50.0, 16);
    robot.flush(&mut sheet);
    drop(sheet);

    assert!(!host.listeners_attached());
    assert!(!host.scroll_locked());
    assert_eq!(host.count(&HostCall::DetachListeners), 1);
}

#[test]
fn explicit_teardown_is_not_repeated_on_drop() {
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::new(host.clone());
    let mut robot = GestureRobot::new();

    robot.press(0.0).move_to(50.0, 16);
    robot.flush(&mut sheet);
    sheet.teardown();
    sheet.teardown();
    drop(sheet);

    assert_eq!(host.count(&HostCall::DetachListeners), 1);
    assert_eq!(host.count(&HostCall::ScrollLocked(false)), 1);
}

#[test]
fn programmatic_open_and_close() {
    let host = RecordingHost::new(VIEWPORT, false);
    let mut sheet = BottomSheet::new(host.clone());

    sheet.set_open(true);
    assert!(host.is_open());
    assert!(host.scroll_locked());
    assert_eq!(host.overlay().opacity, Some(1.0));

    sheet.set_open(false);
    assert!(!host.is_open());
    assert!(!host.scroll_locked());
    assert_eq!(host.overlay().opacity, Some(0.0));
    assert_eq!(host.content().transform, Some(ContentTransform::Neutral));
}

#[test]
fn external_flag_change_is_observed_on_next_advance() {
    let host = RecordingHost::new(VIEWPORT, false);
    let mut sheet = BottomSheet::new(host.clone());

    host.set_open_externally(true);
    assert!(!host.scroll_locked());

    sheet.advance_to(0);
    assert!(host.scroll_locked());

    host.clear_calls();
    sheet.advance_to(100);
    assert!(host.calls().is_empty(), "no change, no effects");
}

#[test]
fn custom_config_changes_delay_and_transitions() {
    let config = SheetConfig::default().with_transition_reenable_delay(40);
    let host = RecordingHost::open_on(VIEWPORT);
    let mut sheet = BottomSheet::with_config(host.clone(), config);
    let mut robot = GestureRobot::new();

    robot.press(0.0).move_to(20.0, 500).release(0);
    robot.flush(&mut sheet);

    assert_eq!(sheet.next_deadline(), Some(540));
    assert!(host
        .calls()
        .contains(&HostCall::Style(
            Layer::Content,
            StyleChange::Transition(Transition::Disabled)
        )));
}
