use crate::{classify, ContentTransform, SheetAction, SheetConfig};
use sheetkit_foundation::{DragDirection, GestureResult};

const VIEWPORT: f32 = 700.0;

fn result(direction: DragDirection, net: f32, distance: f32, seconds: f32) -> GestureResult {
    GestureResult {
        net_displacement: net,
        average_velocity: if seconds > 0.0 { distance / seconds } else { 0.0 },
        direction,
        accumulated_distance: distance,
        elapsed_seconds: seconds,
    }
}

fn decide(result: GestureResult) -> SheetAction {
    classify(&result, VIEWPORT, &SheetConfig::default())
}

#[test]
fn long_downward_drag_closes_regardless_of_velocity() {
    // threshold is 350 for a 700px viewport
    let slow = result(DragDirection::Down, 400.0, 400.0, 10.0);
    assert_eq!(slow.average_velocity, 40.0);
    assert_eq!(decide(slow), SheetAction::Close);
}

#[test]
fn fast_short_downward_drag_closes() {
    let flick = result(DragDirection::Down, 100.0, 600.0, 1.0);
    assert_eq!(flick.average_velocity, 600.0);
    assert_eq!(decide(flick), SheetAction::Close);
}

#[test]
fn slow_short_downward_drag_snaps_back() {
    assert_eq!(
        decide(result(DragDirection::Down, 200.0, 200.0, 1.0)),
        SheetAction::SnapBack
    );
}

#[test]
fn distance_exactly_at_threshold_does_not_close() {
    assert_eq!(
        decide(result(DragDirection::Down, 350.0, 350.0, 1.0)),
        SheetAction::SnapBack
    );
}

#[test]
fn velocity_exactly_at_bound_is_not_fast() {
    assert_eq!(
        decide(result(DragDirection::Down, 100.0, 500.0, 1.0)),
        SheetAction::SnapBack
    );
    assert_eq!(
        decide(result(DragDirection::Up, -50.0, 500.0, 1.0)),
        SheetAction::SnapBack
    );
}

#[test]
fn upward_drag_never_reopens_without_speed() {
    for net in [-1.0, -50.0, -5_000.0] {
        for distance in [0.0, 100.0, 499.0, 500.0] {
            assert_eq!(
                decide(result(DragDirection::Up, net, distance, 1.0)),
                SheetAction::SnapBack,
                "net={net} distance={distance}"
            );
        }
    }
}

#[test]
fn fast_upward_drag_reopens() {
    assert_eq!(
        decide(result(DragDirection::Up, -50.0, 600.0, 1.0)),
        SheetAction::Reopen
    );
}

#[test]
fn zero_elapsed_time_snaps_back() {
    let instant = result(DragDirection::Down, 100.0, 100.0, 0.0);
    assert_eq!(instant.average_velocity, 0.0);
    assert_eq!(decide(instant), SheetAction::SnapBack);
}

#[test]
fn direction_none_snaps_back() {
    assert_eq!(
        decide(result(DragDirection::None, 900.0, 900.0, 0.1)),
        SheetAction::SnapBack
    );
}

#[test]
fn configured_thresholds_are_respected() {
    let config = SheetConfig::default()
        .with_close_distance_fraction(0.25)
        .with_fast_gesture_velocity(2_000.0);
    let drag = result(DragDirection::Down, 200.0, 600.0, 1.0);
    assert_eq!(classify(&drag, VIEWPORT, &config), SheetAction::Close);

    let flick = result(DragDirection::Down, 100.0, 600.0, 1.0);
    assert_eq!(classify(&flick, VIEWPORT, &config), SheetAction::SnapBack);
}

#[test]
fn actions_map_to_visibility_and_resting_transform() {
    assert_eq!(SheetAction::Close.requested_visibility(), Some(false));
    assert_eq!(SheetAction::Reopen.requested_visibility(), Some(true));
    assert_eq!(SheetAction::SnapBack.requested_visibility(), None);

    assert_eq!(
        SheetAction::Close.resting_transform(),
        ContentTransform::OffScreen
    );
    assert_eq!(
        SheetAction::Reopen.resting_transform(),
        ContentTransform::Neutral
    );
    assert_eq!(
        SheetAction::SnapBack.resting_transform(),
        ContentTransform::Neutral
    );
}
