//! Timer-driven tap/long-press arbiter.
//!
//! State machine:
//!
//! ```text
//! Idle --down--> Pressing --timer--> Matured --up/cancel--> Idle
//!                   |                                (no callback)
//!                   +--up/cancel--> Idle (tap)
//! any --down--> Pressing (previous session dropped silently)
//! ```
//!
//! Every session gets a fresh generation number. The timer callback holds only
//! a weak reference to the arbiter state plus the generation it was armed for,
//! so a callback belonging to a superseded or finished session is a no-op even
//! if it somehow outlives its cancellation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use longpress_core::{duration_to_nanos, RuntimeHandle};
use longpress_ui_graphics::Point;

use super::arbiter::{ArbiterPhase, PressArbiter, PressInput};
use super::config::{DistancePolicy, GestureConfig};
use super::decision::{Decision, DecisionSink};
use super::session::PressSession;

#[derive(Default)]
struct ArbiterState {
    phase: ArbiterPhase,
    session: Option<PressSession>,
    generation: u64,
}

pub struct LongPressArbiter {
    runtime: RuntimeHandle,
    config: GestureConfig,
    sink: DecisionSink,
    state: Rc<RefCell<ArbiterState>>,
}

impl LongPressArbiter {
    pub fn new(runtime: RuntimeHandle, config: GestureConfig, sink: DecisionSink) -> Self {
        Self {
            runtime,
            config,
            sink,
            state: Rc::new(RefCell::new(ArbiterState::default())),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Origin of the active session, if any.
    pub fn origin(&self) -> Option<Point> {
        self.state.borrow().session.as_ref().map(PressSession::origin)
    }

    pub fn did_exceed_distance(&self) -> bool {
        self.state
            .borrow()
            .session
            .as_ref()
            .map(PressSession::did_exceed_distance)
            .unwrap_or(false)
    }

    pub fn is_timer_pending(&self) -> bool {
        self.state
            .borrow()
            .session
            .as_ref()
            .map(PressSession::is_timer_pending)
            .unwrap_or(false)
    }

    pub fn press_down(&mut self, origin: Point) {
        let now = self.runtime.now_nanos();
        let generation = {
            let mut state = self.state.borrow_mut();
            if let Some(mut stale) = state.session.take() {
                stale.cancel_timer();
                log::debug!(
                    "press session {} superseded by a new press",
                    stale.generation()
                );
            }
            state.generation = state.generation.wrapping_add(1);
            state.phase = ArbiterPhase::Pressing;
            state.session = Some(PressSession::new(origin, now, state.generation));
            state.generation
        };

        let weak = Rc::downgrade(&self.state);
        let sink = Rc::clone(&self.sink);
        let timer = self
            .runtime
            .timer_clock()
            .after(self.config.minimum_duration(), move |time| {
                if mature(&weak, generation) {
                    log::debug!("long press matured at {time}ns (session {generation})");
                    sink(Decision::LongPress);
                }
            });

        if let Some(session) = self.state.borrow_mut().session.as_mut() {
            session.arm(timer);
        }
        log::trace!("press session {generation} started at {origin:?}");
    }

    pub fn press_move(&mut self, position: Point) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let phase = state.phase;
        let Some(session) = state.session.as_mut() else {
            return;
        };
        if !session.track_move(position, self.config.maximum_distance()) {
            return;
        }
        log::trace!(
            "press session {} moved beyond {}",
            session.generation(),
            self.config.maximum_distance()
        );
        if phase != ArbiterPhase::Pressing {
            return;
        }
        match self.config.distance_policy() {
            DistancePolicy::Track => {}
            DistancePolicy::FailLongPress => session.disarm(),
            DistancePolicy::CancelPress => {
                session.cancel_timer();
                log::debug!("press session {} abandoned", session.generation());
                state.session = None;
                state.phase = ArbiterPhase::Idle;
            }
        }
    }

    pub fn press_up(&mut self) {
        self.finish("released");
    }

    pub fn press_cancel(&mut self) {
        self.finish("cancelled");
    }

    pub fn set_pressing(&mut self, pressing: bool) {
        let phase = self.state.borrow().phase;
        match (pressing, phase) {
            (true, ArbiterPhase::Idle) => self.press_down(Point::ZERO),
            (false, ArbiterPhase::Pressing | ArbiterPhase::Matured) => self.press_up(),
            _ => {}
        }
    }

    fn finish(&mut self, reason: &str) {
        let now = self.runtime.now_nanos();
        let minimum = duration_to_nanos(self.config.minimum_duration());
        let decision = {
            let mut state = self.state.borrow_mut();
            let phase = std::mem::take(&mut state.phase);
            match (phase, state.session.take()) {
                (ArbiterPhase::Pressing, Some(mut session)) => {
                    session.cancel_timer();
                    let matured = session.can_mature() && session.elapsed_nanos(now) >= minimum;
                    log::trace!("press session {} {reason}", session.generation());
                    Some(if matured {
                        Decision::LongPress
                    } else {
                        Decision::Tap
                    })
                }
                (ArbiterPhase::Matured, Some(session)) => {
                    log::trace!(
                        "press session {} {reason} after long press",
                        session.generation()
                    );
                    None
                }
                _ => None,
            }
        };
        if let Some(decision) = decision {
            log::debug!("press {reason}: {decision:?}");
            (self.sink)(decision);
        }
    }
}

/// Moves a still-current session into `Matured`. Returns false for stale timers.
fn mature(state: &Weak<RefCell<ArbiterState>>, generation: u64) -> bool {
    let Some(state) = state.upgrade() else {
        return false;
    };
    let mut guard = state.borrow_mut();
    let state = &mut *guard;
    if state.generation != generation || state.phase != ArbiterPhase::Pressing {
        return false;
    }
    match state.session.as_mut() {
        Some(session) if session.can_mature() => {
            session.cancel_timer();
            state.phase = ArbiterPhase::Matured;
            true
        }
        _ => false,
    }
}

impl PressArbiter for LongPressArbiter {
    fn handle(&mut self, input: PressInput) {
        match input {
            PressInput::Down(origin) => self.press_down(origin),
            PressInput::Move(position) => self.press_move(position),
            PressInput::Up => self.press_up(),
            PressInput::Cancel => self.press_cancel(),
            PressInput::PressingChanged(pressing) => self.set_pressing(pressing),
            PressInput::Recognized(decision) => {
                log::trace!("ignoring recognizer result {decision:?} in timer-driven arbiter");
            }
        }
    }

    fn phase(&self) -> ArbiterPhase {
        self.state.borrow().phase
    }

    fn reset(&mut self) {
        let mut state = self.state.borrow_mut();
        if let Some(mut session) = state.session.take() {
            session.cancel_timer();
        }
        state.generation = state.generation.wrapping_add(1);
        state.phase = ArbiterPhase::Idle;
    }
}
