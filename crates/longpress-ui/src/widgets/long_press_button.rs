//! A control that initiates an action on tap or on long press.

use std::rc::Rc;
use std::time::Duration;

use longpress_core::RuntimeHandle;
use longpress_foundation::{
    ArbiterPhase, Decision, DecisionSink, DistancePolicy, GestureConfig, PointerDispatcher,
    PointerEvent, PointerEventKind, PointerId, PressArbiter, PressInput, PressStrategy,
};

use crate::error::LongPressButtonError;
use crate::label::ButtonLabel;
use crate::semantics::{
    SemanticsConfiguration, DEFAULT_ACTION_NAME, DEFAULT_LONG_PRESS_ACTION_LABEL,
};

/// Button that fires `action` on a tap and `long_press_action` once a press
/// has been held for the configured minimum duration.
///
/// Exactly one of the two callbacks fires for each press that is released.
/// The long press fires as soon as the duration elapses, not on release.
pub struct LongPressButton<L = String> {
    label: L,
    config: GestureConfig,
    strategy: PressStrategy,
    long_press_accessibility_label: String,
    action: Rc<dyn Fn()>,
    long_press_action: Rc<dyn Fn()>,
    /// Named actions exposed to assistive technology. Built once so that
    /// [`semantics`](LongPressButton::semantics) and
    /// [`perform_accessibility_action`](LongPressButton::perform_accessibility_action)
    /// resolve names identically.
    actions: SemanticsConfiguration,
    arbiter: Box<dyn PressArbiter>,
    active_pointer: Option<PointerId>,
}

impl<L> LongPressButton<L> {
    /// Creates a button with a caller-provided label and the polling strategy.
    pub fn new(
        runtime: RuntimeHandle,
        label: L,
        config: GestureConfig,
        action: impl Fn() + 'static,
        long_press_action: impl Fn() + 'static,
    ) -> Self {
        Self::assemble(
            runtime,
            label,
            config,
            PressStrategy::default(),
            DEFAULT_LONG_PRESS_ACTION_LABEL.to_string(),
            Rc::new(action),
            Rc::new(long_press_action),
        )
    }

    pub fn builder(label: L) -> LongPressButtonBuilder<L> {
        LongPressButtonBuilder::new(label)
    }

    fn assemble(
        runtime: RuntimeHandle,
        label: L,
        config: GestureConfig,
        strategy: PressStrategy,
        long_press_accessibility_label: String,
        action: Rc<dyn Fn()>,
        long_press_action: Rc<dyn Fn()>,
    ) -> Self {
        let sink: DecisionSink = {
            let action = Rc::clone(&action);
            let long_press_action = Rc::clone(&long_press_action);
            Rc::new(move |decision: Decision| match decision {
                Decision::Tap => action(),
                Decision::LongPress => long_press_action(),
            })
        };
        let arbiter = strategy.create_arbiter(runtime, config, sink);
        let mut actions = SemanticsConfiguration::new();
        actions.is_clickable = true;
        actions.add_action(DEFAULT_ACTION_NAME, Rc::clone(&action));
        actions.add_action(
            long_press_accessibility_label.clone(),
            Rc::clone(&long_press_action),
        );
        Self {
            label,
            config,
            strategy,
            long_press_accessibility_label,
            action,
            long_press_action,
            actions,
            arbiter,
            active_pointer: None,
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn strategy(&self) -> PressStrategy {
        self.strategy
    }

    pub fn long_press_accessibility_label(&self) -> &str {
        &self.long_press_accessibility_label
    }

    pub fn phase(&self) -> ArbiterPhase {
        self.arbiter.phase()
    }

    pub fn is_pressed(&self) -> bool {
        self.arbiter.phase() != ArbiterPhase::Idle
    }

    /// Routes one pointer event into the gesture arbiter.
    ///
    /// Only one pointer is tracked. An unconsumed down from any pointer
    /// replaces the current press; a down another handler already consumed
    /// is ignored in every phase, as are other events from non-active
    /// pointers. Returns whether the event was handled (and consumed).
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return false;
                }
                if let Some(previous) = self.active_pointer.replace(event.id) {
                    log::trace!("pointer {} replaces pointer {previous}", event.id);
                }
            }
            PointerEventKind::Move | PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.active_pointer != Some(event.id) {
                    return false;
                }
                if event.kind != PointerEventKind::Move {
                    self.active_pointer = None;
                }
            }
        }
        self.arbiter.handle(PressInput::from_pointer(event));
        event.consume();
        true
    }

    /// Drains queued host events into this button in arrival order.
    pub fn dispatch(&mut self, dispatcher: &mut PointerDispatcher) {
        dispatcher.drain(|event| {
            self.on_pointer_event(event);
        });
    }

    /// For hosts that only report whether the region is pressed.
    pub fn set_pressing(&mut self, pressing: bool) {
        self.arbiter.handle(PressInput::PressingChanged(pressing));
    }

    /// For hosts with native recognizers: report which one succeeded.
    pub fn recognizer_succeeded(&mut self, decision: Decision) {
        self.arbiter.handle(PressInput::Recognized(decision));
    }

    /// Abandons any press in progress without firing a callback.
    pub fn reset(&mut self) {
        self.active_pointer = None;
        self.arbiter.reset();
    }

    pub fn perform_default_action(&self) {
        (self.action)();
    }

    pub fn perform_long_press_action(&self) {
        (self.long_press_action)();
    }

    /// Invokes an accessibility action by name, bypassing press timing.
    pub fn perform_accessibility_action(&self, name: &str) -> bool {
        let performed = self.actions.perform(name);
        if !performed {
            log::debug!("unknown accessibility action {name:?}");
        }
        performed
    }
}

impl<L: ButtonLabel> LongPressButton<L> {
    pub fn semantics(&self) -> SemanticsConfiguration {
        let mut config = self.actions.clone();
        config.label = self.label.accessibility_text();
        config
    }
}

impl LongPressButton<String> {
    /// Creates a button with a text label and default thresholds.
    pub fn text(
        runtime: RuntimeHandle,
        title: impl Into<String>,
        action: impl Fn() + 'static,
        long_press_action: impl Fn() + 'static,
    ) -> Self {
        Self::new(
            runtime,
            title.into(),
            GestureConfig::default(),
            action,
            long_press_action,
        )
    }
}

/// Named-option construction for [`LongPressButton`].
///
/// Thresholds and the alternative action label are validated in
/// [`build`](Self::build).
pub struct LongPressButtonBuilder<L> {
    label: L,
    minimum_duration: f64,
    maximum_distance: f32,
    distance_policy: DistancePolicy,
    strategy: PressStrategy,
    long_press_accessibility_label: Option<String>,
}

impl<L> LongPressButtonBuilder<L> {
    pub fn new(label: L) -> Self {
        let defaults = GestureConfig::default();
        Self {
            label,
            minimum_duration: defaults.minimum_duration().as_secs_f64(),
            maximum_distance: defaults.maximum_distance(),
            distance_policy: defaults.distance_policy(),
            strategy: PressStrategy::default(),
            long_press_accessibility_label: None,
        }
    }

    /// Seconds the press must be held to count as a long press.
    pub fn minimum_duration(mut self, seconds: f64) -> Self {
        self.minimum_duration = seconds;
        self
    }

    pub fn minimum_duration_of(self, duration: Duration) -> Self {
        self.minimum_duration(duration.as_secs_f64())
    }

    pub fn maximum_distance(mut self, distance: f32) -> Self {
        self.maximum_distance = distance;
        self
    }

    pub fn distance_policy(mut self, policy: DistancePolicy) -> Self {
        self.distance_policy = policy;
        self
    }

    pub fn strategy(mut self, strategy: PressStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn long_press_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.long_press_accessibility_label = Some(label.into());
        self
    }

    pub fn build(
        self,
        runtime: RuntimeHandle,
        action: impl Fn() + 'static,
        long_press_action: impl Fn() + 'static,
    ) -> Result<LongPressButton<L>, LongPressButtonError> {
        let config = GestureConfig::new(self.minimum_duration, self.maximum_distance)?
            .with_distance_policy(self.distance_policy);
        let accessibility_label = self
            .long_press_accessibility_label
            .unwrap_or_else(|| DEFAULT_LONG_PRESS_ACTION_LABEL.to_string());
        if accessibility_label == DEFAULT_ACTION_NAME {
            return Err(LongPressButtonError::ReservedActionName {
                name: accessibility_label,
            });
        }
        Ok(LongPressButton::assemble(
            runtime,
            self.label,
            config,
            self.strategy,
            accessibility_label,
            Rc::new(action),
            Rc::new(long_press_action),
        ))
    }
}
