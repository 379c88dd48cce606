use std::time::Duration;

use crate::runtime::{RuntimeHandle, TimerId};

#[derive(Clone)]
pub struct TimerClock {
    runtime: RuntimeHandle,
}

impl TimerClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    /// Schedules `callback` to run once `delay` has elapsed.
    ///
    /// The returned registration cancels the timer when cancelled or dropped.
    pub fn after(&self, delay: Duration, callback: impl FnOnce(u64) + 'static) -> TimerRegistration {
        match self.runtime.schedule_timer(delay, callback) {
            Some(id) => TimerRegistration::new(self.runtime.clone(), id),
            None => TimerRegistration::inactive(self.runtime.clone()),
        }
    }
}

pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(runtime: RuntimeHandle, id: TimerId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    /// Whether the callback is still waiting to run.
    pub fn is_active(&self) -> bool {
        self.id
            .map(|id| self.runtime.is_timer_pending(id))
            .unwrap_or(false)
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}
