//! Assertion utilities for robot testing

use longpress_foundation::Decision;

/// Assert that a rendered label reads exactly as expected.
pub fn assert_has_label(actual: &str, expected: &str, msg: &str) {
    assert_eq!(actual, expected, "{}: label mismatch", msg);
}

/// Assert that the recorded decisions match the expected sequence.
pub fn assert_decisions(actual: &[Decision], expected: &[Decision], msg: &str) {
    assert_eq!(
        actual, expected,
        "{}: expected decisions {:?}, got {:?}",
        msg, expected, actual
    );
}
