use longpress_core::TimerRegistration;
use longpress_ui_graphics::Point;

/// A candidate gesture between press-down and release.
pub struct PressSession {
    origin: Point,
    started_at_nanos: u64,
    generation: u64,
    did_exceed_distance: bool,
    can_mature: bool,
    timer: Option<TimerRegistration>,
}

impl PressSession {
    pub fn new(origin: Point, started_at_nanos: u64, generation: u64) -> Self {
        Self {
            origin,
            started_at_nanos,
            generation,
            did_exceed_distance: false,
            can_mature: true,
            timer: None,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn started_at_nanos(&self) -> u64 {
        self.started_at_nanos
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn did_exceed_distance(&self) -> bool {
        self.did_exceed_distance
    }

    pub fn can_mature(&self) -> bool {
        self.can_mature
    }

    pub fn elapsed_nanos(&self, now_nanos: u64) -> u64 {
        now_nanos.saturating_sub(self.started_at_nanos)
    }

    /// Updates the sticky overshoot flag. Returns true only on the move that
    /// first crosses `maximum_distance`.
    pub fn track_move(&mut self, position: Point, maximum_distance: f32) -> bool {
        if self.did_exceed_distance {
            return false;
        }
        self.did_exceed_distance = self.origin.distance_to(position) > maximum_distance;
        self.did_exceed_distance
    }

    pub fn arm(&mut self, timer: TimerRegistration) {
        self.cancel_timer();
        self.timer = Some(timer);
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer
            .as_ref()
            .map(TimerRegistration::is_active)
            .unwrap_or(false)
    }

    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// Cancels the timer and forbids a clock-based long press on release.
    pub fn disarm(&mut self) {
        self.cancel_timer();
        self.can_mature = false;
    }
}

impl std::fmt::Debug for PressSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressSession")
            .field("origin", &self.origin)
            .field("started_at_nanos", &self.started_at_nanos)
            .field("generation", &self.generation)
            .field("did_exceed_distance", &self.did_exceed_distance)
            .field("can_mature", &self.can_mature)
            .field("timer_pending", &self.is_timer_pending())
            .finish()
    }
}
