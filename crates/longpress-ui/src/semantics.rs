//! Accessibility description of a control.
//!
//! Assistive technology drivers read the label and invoke actions by name.
//! Actions call the control's callbacks directly, without any press timing.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Name of the primary (tap) action.
pub const DEFAULT_ACTION_NAME: &str = "activate";

/// Name of the alternative action when the caller does not provide one.
pub const DEFAULT_LONG_PRESS_ACTION_LABEL: &str = "Long press";

#[derive(Clone, Default)]
pub struct SemanticsConfiguration {
    pub is_clickable: bool,
    pub label: Option<String>,
    actions: IndexMap<String, Rc<dyn Fn()>>,
}

impl SemanticsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces an action. Insertion order is preserved.
    pub fn add_action(&mut self, name: impl Into<String>, handler: Rc<dyn Fn()>) {
        self.actions.insert(name.into(), handler);
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Invokes the named action. Returns false if there is no such action.
    pub fn perform(&self, name: &str) -> bool {
        match self.actions.get(name) {
            Some(handler) => {
                let handler = Rc::clone(handler);
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for SemanticsConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticsConfiguration")
            .field("is_clickable", &self.is_clickable)
            .field("label", &self.label)
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
