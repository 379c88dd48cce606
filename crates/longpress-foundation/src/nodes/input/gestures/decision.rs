use std::rc::Rc;

/// Outcome of one press lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Tap,
    LongPress,
}

/// Receives decisions from an arbiter. Called on the UI thread, never while
/// the arbiter holds a borrow of its own state.
pub type DecisionSink = Rc<dyn Fn(Decision)>;
