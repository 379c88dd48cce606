use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::time::Duration;

use web_time::Instant;

use crate::duration_to_nanos;
use crate::timer_clock::TimerClock;

pub type TimerId = u64;

enum Clock {
    Monotonic(Instant),
    Manual(Cell<u64>),
}

impl Clock {
    fn now_nanos(&self) -> u64 {
        match self {
            Clock::Monotonic(epoch) => duration_to_nanos(epoch.elapsed()),
            Clock::Manual(now) => now.get(),
        }
    }
}

struct TimerEntry {
    id: TimerId,
    due_nanos: u64,
    callback: Box<dyn FnOnce(u64) + 'static>,
}

struct RuntimeInner {
    clock: Clock,
    timers: RefCell<VecDeque<TimerEntry>>,
    next_timer_id: Cell<TimerId>,
}

impl RuntimeInner {
    fn new(clock: Clock) -> Self {
        Self {
            clock,
            timers: RefCell::new(VecDeque::new()),
            next_timer_id: Cell::new(1),
        }
    }

    fn schedule_timer(&self, delay: Duration, callback: Box<dyn FnOnce(u64) + 'static>) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        let due_nanos = self
            .clock
            .now_nanos()
            .saturating_add(duration_to_nanos(delay));
        self.timers.borrow_mut().push_back(TimerEntry {
            id,
            due_nanos,
            callback,
        });
        log::trace!("timer {id} scheduled, due at {due_nanos}ns");
        id
    }

    fn cancel_timer(&self, id: TimerId) {
        let mut timers = self.timers.borrow_mut();
        if let Some(index) = timers.iter().position(|entry| entry.id == id) {
            timers.remove(index);
            log::trace!("timer {id} cancelled");
        }
    }

    fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.borrow().iter().any(|entry| entry.id == id)
    }

    /// Runs every timer that was registered before this call and is due.
    ///
    /// Entries are taken out one at a time so a callback cancelling a sibling
    /// that is also due prevents the sibling from running.
    fn drain_due_timers(&self) {
        let now = self.clock.now_nanos();
        let watermark = self.next_timer_id.get();
        loop {
            let entry = {
                let mut timers = self.timers.borrow_mut();
                let next = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due_nanos <= now && entry.id < watermark)
                    .min_by_key(|(_, entry)| (entry.due_nanos, entry.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => timers.remove(index),
                    None => None,
                }
            };
            let Some(entry) = entry else {
                break;
            };
            log::trace!("timer {} fired at {now}ns", entry.id);
            (entry.callback)(now);
        }
    }
}

/// Owner of the clock and timer queue.
///
/// Dropping the runtime makes every [`RuntimeHandle`] inert: scheduling
/// returns nothing and pending callbacks are discarded.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    /// Creates a runtime backed by the monotonic system clock.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(Clock::Monotonic(Instant::now()))),
        }
    }

    /// Creates a runtime whose clock starts at zero and only moves through
    /// [`RuntimeHandle::advance_by`].
    pub fn manual() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(Clock::Manual(Cell::new(0)))),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self.inner.clock, Clock::Manual(_))
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// Nanoseconds since the runtime was created. Zero once the runtime is gone.
    pub fn now_nanos(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.clock.now_nanos())
            .unwrap_or(0)
    }

    pub fn schedule_timer(
        &self,
        delay: Duration,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.schedule_timer(delay, Box::new(callback)))
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_timer(id);
        }
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_timer_pending(id))
            .unwrap_or(false)
    }

    pub fn has_pending_timers(&self) -> bool {
        self.pending_timer_count() > 0
    }

    pub fn pending_timer_count(&self) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.timers.borrow().len())
            .unwrap_or(0)
    }

    /// Fires all timers due at the current clock reading.
    ///
    /// Timers registered by a callback during the drain wait for the next one.
    pub fn drain_due_timers(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_due_timers();
        }
    }

    /// Moves a manual clock forward and drains due timers.
    pub fn advance_by(&self, delta: Duration) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        match &inner.clock {
            Clock::Manual(now) => now.set(now.get().saturating_add(duration_to_nanos(delta))),
            Clock::Monotonic(_) => {
                log::warn!("advance_by called on a monotonic runtime; draining without moving time");
            }
        }
        inner.drain_due_timers();
    }

    pub fn timer_clock(&self) -> TimerClock {
        TimerClock::new(self.clone())
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
