/// Content rendered inside a button.
///
/// The control never looks at its label beyond asking for text that
/// assistive technology can read out.
pub trait ButtonLabel {
    fn accessibility_text(&self) -> Option<String>;
}

impl ButtonLabel for String {
    fn accessibility_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ButtonLabel for &'static str {
    fn accessibility_text(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl ButtonLabel for () {
    fn accessibility_text(&self) -> Option<String> {
        None
    }
}
