use crate::nodes::input::gestures::{
    ArbiterPhase, Decision, DecisionSink, ExclusiveGestureArbiter, GestureConfig, PressArbiter,
    PressInput, PressStrategy,
};
use longpress_core::Runtime;
use longpress_ui_graphics::Point;
use std::cell::RefCell;
use std::rc::Rc;

fn arbiter() -> (ExclusiveGestureArbiter, Rc<RefCell<Vec<Decision>>>) {
    let decisions = Rc::new(RefCell::new(Vec::new()));
    let sink: DecisionSink = {
        let decisions = Rc::clone(&decisions);
        Rc::new(move |decision: Decision| decisions.borrow_mut().push(decision))
    };
    (ExclusiveGestureArbiter::new(sink), decisions)
}

#[test]
fn first_recognizer_wins() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::Down(Point::ZERO));
    arbiter.handle(PressInput::Up);
    arbiter.handle(PressInput::Recognized(Decision::Tap));
    arbiter.handle(PressInput::Recognized(Decision::LongPress));

    assert_eq!(decisions.borrow().as_slice(), &[Decision::Tap]);
    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);
}

#[test]
fn long_press_waits_for_release_then_suppresses_tap() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::Down(Point::ZERO));
    arbiter.handle(PressInput::Recognized(Decision::LongPress));
    assert_eq!(arbiter.phase(), ArbiterPhase::Matured);

    arbiter.handle(PressInput::Up);
    arbiter.handle(PressInput::Recognized(Decision::Tap));

    assert_eq!(decisions.borrow().as_slice(), &[Decision::LongPress]);
    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);
}

#[test]
fn simultaneous_successes_resolve_by_priority() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle_batch(&[
        PressInput::Down(Point::ZERO),
        PressInput::Recognized(Decision::Tap),
        PressInput::Recognized(Decision::LongPress),
        PressInput::Up,
    ]);
    assert_eq!(decisions.borrow().as_slice(), &[Decision::LongPress]);
}

#[test]
fn custom_priority_is_respected() {
    let (arbiter, decisions) = arbiter();
    let mut arbiter = arbiter.with_priority(&[Decision::Tap, Decision::LongPress]);
    arbiter.handle_batch(&[
        PressInput::Down(Point::ZERO),
        PressInput::Recognized(Decision::LongPress),
        PressInput::Recognized(Decision::Tap),
    ]);
    assert_eq!(decisions.borrow().as_slice(), &[Decision::Tap]);
}

#[test]
fn recognition_outside_lifecycle_is_dropped() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::Recognized(Decision::Tap));
    assert!(decisions.borrow().is_empty());
}

#[test]
fn cancel_closes_lifecycle_without_decision() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::PressingChanged(true));
    arbiter.handle(PressInput::Cancel);
    arbiter.handle(PressInput::Recognized(Decision::Tap));
    assert!(decisions.borrow().is_empty());
}

#[test]
fn new_press_supersedes_open_lifecycle() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::Down(Point::ZERO));
    arbiter.handle(PressInput::Down(Point::new(2.0, 2.0)));
    arbiter.handle(PressInput::PressingChanged(false));
    arbiter.handle(PressInput::Recognized(Decision::Tap));
    arbiter.handle(PressInput::Recognized(Decision::Tap));
    assert_eq!(decisions.borrow().as_slice(), &[Decision::Tap]);
}

#[test]
fn sequence_yields_one_decision_per_lifecycle() {
    let (mut arbiter, decisions) = arbiter();
    for decision in [
        Decision::Tap,
        Decision::LongPress,
        Decision::LongPress,
        Decision::Tap,
    ] {
        arbiter.handle(PressInput::Down(Point::ZERO));
        arbiter.handle(PressInput::Recognized(decision));
        arbiter.handle(PressInput::Up);
    }
    assert_eq!(
        decisions.borrow().as_slice(),
        &[
            Decision::Tap,
            Decision::LongPress,
            Decision::LongPress,
            Decision::Tap
        ]
    );
}

#[test]
fn strategy_builds_exclusive_arbiter_without_timers() {
    let runtime = Runtime::manual();
    let decisions = Rc::new(RefCell::new(Vec::new()));
    let sink: DecisionSink = {
        let decisions = Rc::clone(&decisions);
        Rc::new(move |decision: Decision| decisions.borrow_mut().push(decision))
    };
    let mut arbiter = PressStrategy::ExclusiveRecognizers.create_arbiter(
        runtime.handle(),
        GestureConfig::default(),
        sink,
    );
    arbiter.handle(PressInput::Down(Point::ZERO));
    assert!(!runtime.handle().has_pending_timers());
    arbiter.handle(PressInput::Recognized(Decision::LongPress));
    arbiter.reset();
    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);
    assert_eq!(decisions.borrow().as_slice(), &[Decision::LongPress]);
}

#[test]
fn release_without_recognition_reports_idle_but_accepts_late_tap() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::Down(Point::ZERO));
    assert_eq!(arbiter.phase(), ArbiterPhase::Pressing);

    arbiter.handle(PressInput::Up);
    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);

    arbiter.handle(PressInput::Recognized(Decision::Tap));
    assert_eq!(decisions.borrow().as_slice(), &[Decision::Tap]);
    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);
}

#[test]
fn release_after_both_recognizers_fail_leaves_nothing_pending() {
    let (mut arbiter, decisions) = arbiter();
    arbiter.handle(PressInput::Down(Point::ZERO));
    arbiter.handle(PressInput::Up);
    arbiter.handle(PressInput::Down(Point::ZERO));
    arbiter.handle(PressInput::Up);

    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);
    assert!(decisions.borrow().is_empty());
}
