//! Assertion helpers for sheet tests.

use sheetkit_ui::{ContentTransform, SheetAction};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a transform is a pixel translation close to `expected`.
pub fn assert_translation_approx(
    actual: Option<ContentTransform>,
    expected: f32,
    tolerance: f32,
    msg: &str,
) {
    match actual {
        Some(ContentTransform::TranslateY(px)) => assert_approx_eq(px, expected, tolerance, msg),
        other => panic!("{}: expected translateY({}px), got {:?}", msg, expected, other),
    }
}

/// Assert that exactly one decision was made and that it is `expected`.
pub fn assert_single_action(actions: &[SheetAction], expected: SheetAction, msg: &str) {
    assert_eq!(
        actions,
        &[expected],
        "{}: expected a single {:?}, got {:?}",
        msg,
        expected,
        actions
    );
}

/// Assert that every value in `values` is at most the one before it.
pub fn assert_non_increasing(values: &[f32], msg: &str) {
    for pair in values.windows(2) {
        assert!(
            pair[1] <= pair[0],
            "{}: {} rose to {} in {:?}",
            msg,
            pair[0],
            pair[1],
            values
        );
    }
}
