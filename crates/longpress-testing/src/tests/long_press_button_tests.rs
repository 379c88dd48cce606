use super::*;

use crate::robot_assertions::assert_decisions;
use longpress_foundation::{ArbiterPhase, Decision, DistancePolicy, GestureConfig, PressStrategy};
use longpress_ui::{LongPressButton, DEFAULT_ACTION_NAME, DEFAULT_LONG_PRESS_ACTION_LABEL};
use longpress_ui_graphics::Point;
use std::time::Duration;

fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_tap() {
    let mut robot = ButtonRobot::default();

    robot.tap();
    robot.assert_counts(1, 0);

    robot.tap();
    robot.assert_counts(2, 0);
}

#[test]
fn test_long_press() {
    let mut robot = ButtonRobot::default();

    robot.press_for(millis(600));
    robot.assert_counts(0, 1);

    robot.press_for(millis(600));
    robot.assert_counts(0, 2);
}

#[test]
fn test_too_short_long_press() {
    let mut robot = ButtonRobot::default();

    robot.press_for(millis(400));
    robot.assert_counts(1, 0);
}

#[test]
fn test_very_long_press() {
    let mut robot = ButtonRobot::default();

    robot.press_for(millis(1_100));
    robot.assert_counts(0, 1);
}

#[test]
fn test_mixed_tap_and_long_press() {
    let mut robot = ButtonRobot::default();

    robot.tap();
    robot.assert_counts(1, 0);
    robot.press_for(millis(600));
    robot.assert_counts(1, 1);
    robot.press_for(millis(600));
    robot.assert_counts(1, 2);
    robot.tap();
    robot.assert_counts(2, 2);

    assert_decisions(
        &robot.decisions(),
        &[
            Decision::Tap,
            Decision::LongPress,
            Decision::LongPress,
            Decision::Tap,
        ],
        "mixed sequence",
    );
}

#[test]
fn long_press_fires_when_duration_elapses_not_on_release() {
    let mut robot = ButtonRobot::default();

    robot.press_down();
    robot.advance(millis(499));
    robot.assert_counts(0, 0);
    robot.advance(millis(1));
    robot.assert_counts(0, 1);
    assert_eq!(robot.phase(), ArbiterPhase::Matured);

    robot.advance(millis(5_000));
    robot.release();
    robot.assert_counts(0, 1);
}

#[test]
fn press_held_exactly_minimum_duration_is_a_long_press() {
    let mut robot = ButtonRobot::default();

    robot.press_for(millis(500));
    robot.assert_counts(0, 1);
}

#[test]
fn interleaved_taps_and_long_presses_preserve_order() {
    let mut robot = ButtonRobot::default();
    let script = [false, true, false, false, true, true, false, true];

    let mut expected = Vec::new();
    for long in script {
        if long {
            robot.press_for(millis(650));
            expected.push(Decision::LongPress);
        } else {
            robot.tap();
            expected.push(Decision::Tap);
        }
    }

    robot.assert_counts(4, 4);
    assert_decisions(&robot.decisions(), &expected, "interleaved sequence");
}

#[test]
fn overlapping_press_cancels_the_previous_session() {
    let mut robot = ButtonRobot::default();

    robot.press_down();
    robot.hold(millis(400));
    robot.press_down_with_new_pointer();
    robot.hold(millis(400));
    robot.assert_counts(0, 0);

    robot.release();
    robot.assert_counts(1, 0);
    assert_decisions(&robot.decisions(), &[Decision::Tap], "superseded press");
}

#[test]
fn cancelled_press_before_threshold_counts_as_tap() {
    let mut robot = ButtonRobot::default();

    robot.press_down();
    robot.hold(millis(100));
    robot.cancel();
    robot.hold(millis(1_000));
    robot.assert_counts(1, 0);
}

#[test]
fn moving_beyond_distance_is_only_tracked_by_default() {
    let mut robot = ButtonRobot::default();

    robot.press_down_at(Point::new(10.0, 10.0));
    robot.move_to(Point::new(40.0, 10.0));
    robot.hold(millis(600));
    robot.release();
    robot.assert_counts(0, 1);
}

#[test]
fn fail_long_press_policy_taps_after_drifting() {
    let builder = LongPressButton::builder(SAMPLE_BUTTON_TITLE.to_string())
        .distance_policy(DistancePolicy::FailLongPress);
    let mut robot = ButtonRobot::from_builder(builder).expect("valid config");

    robot.press_down_at(Point::new(10.0, 10.0));
    robot.move_to(Point::new(10.0, 25.0));
    robot.hold(millis(600));
    robot.release();
    robot.assert_counts(1, 0);
}

#[test]
fn custom_thresholds_from_sample_sliders() {
    let config = GestureConfig::new(2.5, 120.0).expect("valid config");
    let mut robot = ButtonRobot::new(config);

    robot.press_for(millis(2_400));
    robot.assert_counts(1, 0);
    robot.press_down_at(Point::ZERO);
    robot.move_to(Point::new(100.0, 0.0));
    robot.hold(millis(2_500));
    robot.release();
    robot.assert_counts(1, 1);
}

#[test]
fn zero_minimum_duration_always_long_presses() {
    let config = GestureConfig::new(0.0, 10.0).expect("valid config");
    let mut robot = ButtonRobot::new(config);

    robot.tap();
    robot.press_down();
    robot.release();
    robot.assert_counts(0, 2);
}

#[test]
fn accessibility_actions_route_to_callbacks() {
    let mut robot = ButtonRobot::default();

    assert!(robot.perform_accessibility_action(DEFAULT_ACTION_NAME));
    assert!(robot.perform_accessibility_action(DEFAULT_LONG_PRESS_ACTION_LABEL));
    assert!(!robot.perform_accessibility_action("Share"));
    robot.assert_counts(1, 1);

    let semantics = robot.button().semantics();
    assert_eq!(semantics.label.as_deref(), Some(SAMPLE_BUTTON_TITLE));
}

#[test]
fn native_recognizer_host_keeps_one_callback_per_press() {
    let builder = LongPressButton::builder(SAMPLE_BUTTON_TITLE.to_string())
        .strategy(PressStrategy::ExclusiveRecognizers);
    let mut robot = ButtonRobot::from_builder(builder).expect("valid config");

    robot.press_down();
    robot.hold(millis(600));
    robot.button_mut().recognizer_succeeded(Decision::LongPress);
    robot.release();
    robot.button_mut().recognizer_succeeded(Decision::Tap);

    robot.press_down();
    robot.release();
    robot.button_mut().recognizer_succeeded(Decision::Tap);

    robot.assert_counts(1, 1);
}

#[test]
fn labels_match_sample_screen_text() {
    let mut robot = ButtonRobot::default();
    robot.tap();
    assert_eq!(robot.tap_count_label(), "Taps: 1");
    assert_eq!(robot.long_press_label(), "Long presses: 0");
}

#[test]
fn robot_clock_moves_only_when_asked() {
    let mut robot = ButtonRobot::default();
    assert_eq!(robot.now_nanos(), 0);
    robot.press_for(millis(250));
    assert_eq!(robot.now_nanos(), 250_000_000);
}

#[test]
#[should_panic(expected = "tap count")]
fn assert_counts_reports_mismatch() {
    let robot = ButtonRobot::default();
    robot.assert_counts(1, 0);
}
