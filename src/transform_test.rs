use super::*;

// =============================================================
// normalize_rotation — truncate toward zero, clamp to [−90, 180]
// =============================================================

#[test]
fn truncates_toward_zero() {
    assert_eq!(normalize_rotation(45.9), 45);
    assert_eq!(normalize_rotation(-0.5), 0);
    assert_eq!(normalize_rotation(-89.9), -89);
    assert_eq!(normalize_rotation(90.1), 90);
}

#[test]
fn clamps_above_180() {
    assert_eq!(normalize_rotation(270.0), 180);
    assert_eq!(normalize_rotation(1000.0), 180);
}

#[test]
fn clamps_below_minus_90() {
    assert_eq!(normalize_rotation(-120.0), -90);
    assert_eq!(normalize_rotation(-180.0), -90);
}

#[test]
fn passes_in_range_values() {
    assert_eq!(normalize_rotation(0.0), 0);
    assert_eq!(normalize_rotation(-90.0), -90);
    assert_eq!(normalize_rotation(90.0), 90);
    assert_eq!(normalize_rotation(180.0), 180);
}

// =============================================================
// rotation_plan
// =============================================================

#[test]
fn unrecognized_angle_passes_through() {
    // Known edge-case policy: a 45° request is silently ignored.
    assert_eq!(rotation_plan(45.0, 300, 150), None);
    assert_eq!(rotation_plan(30.0, 300, 150), None);
    assert_eq!(rotation_plan(0.0, 300, 150), None);
}

#[test]
fn counter_clockwise_quarter_turn_swaps_dimensions() {
    let plan = rotation_plan(-90.0, 300, 150).unwrap();
    assert_eq!(plan.width, 150);
    assert_eq!(plan.height, 300);
    assert_eq!(plan.radians, (-90.0f64).to_radians());
    assert_eq!((plan.dx, plan.dy), (-300.0, 0.0));
}

#[test]
fn clockwise_quarter_turn_swaps_dimensions() {
    let plan = rotation_plan(90.0, 300, 150).unwrap();
    assert_eq!(plan.width, 150);
    assert_eq!(plan.height, 300);
    assert_eq!((plan.dx, plan.dy), (0.0, -150.0));
}

#[test]
fn half_turn_keeps_dimensions() {
    let plan = rotation_plan(180.0, 300, 150).unwrap();
    assert_eq!(plan.width, 300);
    assert_eq!(plan.height, 150);
    assert_eq!((plan.dx, plan.dy), (-300.0, -150.0));
}

#[test]
fn out_of_range_angle_clamps_to_half_turn() {
    // 270 clamps to 180 and becomes a half-turn rotation.
    let plan = rotation_plan(270.0, 300, 150).unwrap();
    assert_eq!(plan, rotation_plan(180.0, 300, 150).unwrap());
}

#[test]
fn fractional_angle_truncates_before_matching() {
    // 90.7 truncates to 90 — handled.
    assert!(rotation_plan(90.7, 300, 150).is_some());
    // 89.9 truncates to 89 — unhandled, passes through.
    assert_eq!(rotation_plan(89.9, 300, 150), None);
}

// =============================================================
// resize_target
// =============================================================

#[test]
fn identity_when_targets_match_current() {
    assert_eq!(resize_target(Some(300), Some(150), 300, 150), None);
}

#[test]
fn identity_when_targets_omitted() {
    assert_eq!(resize_target(None, None, 300, 150), None);
}

#[test]
fn identity_when_one_target_defaults_to_current() {
    assert_eq!(resize_target(Some(300), None, 300, 150), None);
    assert_eq!(resize_target(None, Some(150), 300, 150), None);
}

#[test]
fn resizes_when_either_dimension_differs() {
    assert_eq!(resize_target(Some(600), Some(150), 300, 150), Some((600, 150)));
    assert_eq!(resize_target(Some(300), Some(75), 300, 150), Some((300, 75)));
    assert_eq!(resize_target(Some(50), Some(50), 300, 150), Some((50, 50)));
}

#[test]
fn omitted_dimension_defaults_while_other_resizes() {
    assert_eq!(resize_target(Some(600), None, 300, 150), Some((600, 150)));
}
