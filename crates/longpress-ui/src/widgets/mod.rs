mod long_press_button;

pub use long_press_button::{LongPressButton, LongPressButtonBuilder};
