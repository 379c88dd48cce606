use longpress_ui_graphics::Point;

use super::decision::Decision;
use crate::nodes::input::types::{PointerEvent, PointerEventKind};

/// One press-lifecycle signal from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressInput {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
    /// Edge-only hosts report whether the region is currently pressed.
    PressingChanged(bool),
    /// A host recognizer finished successfully.
    Recognized(Decision),
}

impl PressInput {
    pub fn from_pointer(event: &PointerEvent) -> Self {
        match event.kind {
            PointerEventKind::Down => PressInput::Down(event.position),
            PointerEventKind::Move => PressInput::Move(event.position),
            PointerEventKind::Up => PressInput::Up,
            PointerEventKind::Cancel => PressInput::Cancel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArbiterPhase {
    #[default]
    Idle,
    /// A press is down and no decision has been made yet.
    Pressing,
    /// The long press already fired; waiting for the release.
    Matured,
}

/// Strategy seam between a control and the way its host reports gestures.
pub trait PressArbiter {
    fn handle(&mut self, input: PressInput);

    fn handle_batch(&mut self, inputs: &[PressInput]) {
        for input in inputs {
            self.handle(*input);
        }
    }

    fn phase(&self) -> ArbiterPhase;

    /// Drops any session without emitting a decision.
    fn reset(&mut self);
}
