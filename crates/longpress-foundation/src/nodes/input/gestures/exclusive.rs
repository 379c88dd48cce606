//! Arbiter for hosts with native, mutually exclusive recognizers.
//!
//! The host runs its own long-press recognizer (duration and distance enforced
//! by the platform) and its own tap recognizer. This arbiter only guarantees
//! that the first success in a lifecycle wins and everything after it is
//! suppressed until the next press-down. A cancelled press fails both
//! recognizers, so it closes the lifecycle without a decision.

use smallvec::{smallvec, SmallVec};

use super::arbiter::{ArbiterPhase, PressArbiter, PressInput};
use super::decision::{Decision, DecisionSink};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Lifecycle {
    #[default]
    Closed,
    Open {
        released: bool,
    },
    LongPressed,
}

pub struct ExclusiveGestureArbiter {
    sink: DecisionSink,
    priority: SmallVec<[Decision; 2]>,
    lifecycle: Lifecycle,
}

impl ExclusiveGestureArbiter {
    /// Long press outranks tap when both report success together.
    pub fn new(sink: DecisionSink) -> Self {
        Self {
            sink,
            priority: smallvec![Decision::LongPress, Decision::Tap],
            lifecycle: Lifecycle::Closed,
        }
    }

    pub fn with_priority(mut self, priority: &[Decision]) -> Self {
        self.priority = priority.iter().copied().collect();
        self
    }

    fn rank(&self, decision: Decision) -> usize {
        self.priority
            .iter()
            .position(|candidate| *candidate == decision)
            .unwrap_or(usize::MAX)
    }

    fn recognize(&mut self, decision: Decision) {
        let Lifecycle::Open { released } = self.lifecycle else {
            log::trace!("suppressing {decision:?}: no open press lifecycle");
            return;
        };
        self.lifecycle = match decision {
            Decision::LongPress if !released => Lifecycle::LongPressed,
            _ => Lifecycle::Closed,
        };
        log::debug!("recognizer won: {decision:?}");
        (self.sink)(decision);
    }

    fn flush(&mut self, pending: &mut SmallVec<[Decision; 2]>) {
        let winner = pending
            .drain(..)
            .min_by_key(|decision| self.rank(*decision));
        if let Some(decision) = winner {
            self.recognize(decision);
        }
    }
}

impl PressArbiter for ExclusiveGestureArbiter {
    fn handle(&mut self, input: PressInput) {
        match input {
            PressInput::Down(_) | PressInput::PressingChanged(true) => {
                if self.lifecycle != Lifecycle::Closed {
                    log::debug!("press lifecycle superseded by a new press");
                }
                self.lifecycle = Lifecycle::Open { released: false };
            }
            PressInput::Move(_) => {}
            PressInput::Up | PressInput::PressingChanged(false) => {
                self.lifecycle = match self.lifecycle {
                    Lifecycle::Open { .. } => Lifecycle::Open { released: true },
                    _ => Lifecycle::Closed,
                };
            }
            PressInput::Cancel => self.lifecycle = Lifecycle::Closed,
            PressInput::Recognized(decision) => self.recognize(decision),
        }
    }

    /// Runs of consecutive recognitions are treated as simultaneous and
    /// resolved by priority before the next non-recognition input.
    fn handle_batch(&mut self, inputs: &[PressInput]) {
        let mut pending: SmallVec<[Decision; 2]> = SmallVec::new();
        for input in inputs {
            match input {
                PressInput::Recognized(decision) => pending.push(*decision),
                other => {
                    self.flush(&mut pending);
                    self.handle(*other);
                }
            }
        }
        self.flush(&mut pending);
    }

    fn phase(&self) -> ArbiterPhase {
        match self.lifecycle {
            // Released but undecided: the pointer is up, a late recognition
            // may still arrive and is accepted.
            Lifecycle::Closed | Lifecycle::Open { released: true } => ArbiterPhase::Idle,
            Lifecycle::Open { released: false } => ArbiterPhase::Pressing,
            Lifecycle::LongPressed => ArbiterPhase::Matured,
        }
    }

    fn reset(&mut self) {
        self.lifecycle = Lifecycle::Closed;
    }
}
