//! Robot-style driver for a single long press button.
//!
//! The robot owns a manual-clock runtime, so every press is deterministic:
//! time only moves while the robot holds or advances.
//!
//! # Example
//!
//! ```
//! use longpress_testing::ButtonRobot;
//! use std::time::Duration;
//!
//! let mut robot = ButtonRobot::default();
//! robot.tap();
//! robot.press_for(Duration::from_millis(600));
//! robot.assert_counts(1, 1);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use longpress_core::Runtime;
use longpress_foundation::{ArbiterPhase, Decision, GestureConfig, PointerEvent, PointerId};
use longpress_ui::{LongPressButton, LongPressButtonBuilder, LongPressButtonError};
use longpress_ui_graphics::Point;

use crate::robot_assertions::assert_has_label;

/// One frame at 60 FPS.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

pub const SAMPLE_BUTTON_TITLE: &str = "Tap or long press me";

/// Tap and long-press tallies plus the order in which they arrived.
#[derive(Clone, Default)]
pub struct SampleCounters {
    taps: Rc<Cell<u32>>,
    long_presses: Rc<Cell<u32>>,
    decisions: Rc<RefCell<Vec<Decision>>>,
}

impl SampleCounters {
    fn tap_action(&self) -> impl Fn() + 'static {
        let counters = self.clone();
        move || {
            counters.taps.set(counters.taps.get() + 1);
            counters.decisions.borrow_mut().push(Decision::Tap);
        }
    }

    fn long_press_action(&self) -> impl Fn() + 'static {
        let counters = self.clone();
        move || {
            counters.long_presses.set(counters.long_presses.get() + 1);
            counters.decisions.borrow_mut().push(Decision::LongPress);
        }
    }
}

pub struct ButtonRobot {
    runtime: Runtime,
    button: LongPressButton<String>,
    counters: SampleCounters,
    position: Point,
    pointer: PointerId,
}

impl ButtonRobot {
    pub fn new(config: GestureConfig) -> Self {
        let runtime = Runtime::manual();
        let counters = SampleCounters::default();
        let button = LongPressButton::new(
            runtime.handle(),
            SAMPLE_BUTTON_TITLE.to_string(),
            config,
            counters.tap_action(),
            counters.long_press_action(),
        );
        Self::assemble(runtime, button, counters)
    }

    /// Builds the robot's button from a configured builder.
    pub fn from_builder(
        builder: LongPressButtonBuilder<String>,
    ) -> Result<Self, LongPressButtonError> {
        let runtime = Runtime::manual();
        let counters = SampleCounters::default();
        let button = builder.build(
            runtime.handle(),
            counters.tap_action(),
            counters.long_press_action(),
        )?;
        Ok(Self::assemble(runtime, button, counters))
    }

    fn assemble(runtime: Runtime, button: LongPressButton<String>, counters: SampleCounters) -> Self {
        Self {
            runtime,
            button,
            counters,
            position: Point::new(10.0, 10.0),
            pointer: 0,
        }
    }

    pub fn button(&self) -> &LongPressButton<String> {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut LongPressButton<String> {
        &mut self.button
    }

    /// Nanoseconds on the robot's clock.
    pub fn now_nanos(&self) -> u64 {
        self.runtime.handle().now_nanos()
    }

    /// A quick press released after a single frame.
    pub fn tap(&mut self) {
        self.press_for(FRAME_INTERVAL);
    }

    /// Presses, holds for exactly `duration`, then releases.
    pub fn press_for(&mut self, duration: Duration) {
        self.press_down();
        self.hold(duration);
        self.release();
    }

    pub fn press_down(&mut self) {
        self.press_down_at(self.position);
    }

    pub fn press_down_at(&mut self, position: Point) {
        self.position = position;
        let event = PointerEvent::down(position).with_id(self.pointer);
        self.button.on_pointer_event(&event);
    }

    /// Starts a press with a different pointer id than the previous one.
    pub fn press_down_with_new_pointer(&mut self) {
        self.pointer += 1;
        self.press_down();
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
        let event = PointerEvent::moved(position).with_id(self.pointer);
        self.button.on_pointer_event(&event);
    }

    pub fn release(&mut self) {
        let event = PointerEvent::up(self.position).with_id(self.pointer);
        self.button.on_pointer_event(&event);
    }

    pub fn cancel(&mut self) {
        let event = PointerEvent::cancel(self.position).with_id(self.pointer);
        self.button.on_pointer_event(&event);
    }

    /// Moves the clock forward in frame-sized steps, draining timers each frame.
    pub fn hold(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let step = remaining.min(FRAME_INTERVAL);
            self.runtime.handle().advance_by(step);
            remaining -= step;
        }
    }

    /// Moves the clock forward in a single jump.
    pub fn advance(&mut self, duration: Duration) {
        self.runtime.handle().advance_by(duration);
    }

    pub fn perform_accessibility_action(&mut self, name: &str) -> bool {
        self.button.perform_accessibility_action(name)
    }

    pub fn phase(&self) -> ArbiterPhase {
        self.button.phase()
    }

    pub fn taps(&self) -> u32 {
        self.counters.taps.get()
    }

    pub fn long_presses(&self) -> u32 {
        self.counters.long_presses.get()
    }

    pub fn decisions(&self) -> Vec<Decision> {
        self.counters.decisions.borrow().clone()
    }

    pub fn tap_count_label(&self) -> String {
        format!("Taps: {}", self.taps())
    }

    pub fn long_press_label(&self) -> String {
        format!("Long presses: {}", self.long_presses())
    }

    /// Checks both counters the way the sample screen would display them.
    pub fn assert_counts(&self, taps: u32, long_presses: u32) {
        log::debug!(
            "asserting taps={taps} long_presses={long_presses} (have {:?})",
            self.decisions()
        );
        assert_has_label(
            &self.tap_count_label(),
            &format!("Taps: {taps}"),
            "tap count",
        );
        assert_has_label(
            &self.long_press_label(),
            &format!("Long presses: {long_presses}"),
            "long press count",
        );
    }
}

impl Default for ButtonRobot {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
