use longpress_core::RuntimeHandle;

use super::arbiter::PressArbiter;
use super::config::GestureConfig;
use super::decision::DecisionSink;
use super::exclusive::ExclusiveGestureArbiter;
use super::long_press::LongPressArbiter;

/// How the host reports press gestures to a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressStrategy {
    /// Raw press events or `is_pressing` edges; the control times the press.
    #[default]
    Polling,
    /// Host-side exclusive tap and long-press recognizers.
    ExclusiveRecognizers,
}

impl PressStrategy {
    pub fn create_arbiter(
        self,
        runtime: RuntimeHandle,
        config: GestureConfig,
        sink: DecisionSink,
    ) -> Box<dyn PressArbiter> {
        match self {
            PressStrategy::Polling => Box::new(LongPressArbiter::new(runtime, config, sink)),
            PressStrategy::ExclusiveRecognizers => Box::new(ExclusiveGestureArbiter::new(sink)),
        }
    }
}
