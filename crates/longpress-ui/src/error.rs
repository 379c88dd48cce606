use std::fmt;

use longpress_foundation::GestureConfigError;

#[derive(Clone, Debug, PartialEq)]
pub enum LongPressButtonError {
    Config(GestureConfigError),
    /// The alternative action label collides with a name the control
    /// already registers, so one of the two actions would be unreachable.
    ReservedActionName { name: String },
}

impl fmt::Display for LongPressButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongPressButtonError::Config(err) => write!(f, "invalid gesture config: {err}"),
            LongPressButtonError::ReservedActionName { name } => {
                write!(f, "accessibility action name {name:?} is reserved")
            }
        }
    }
}

impl std::error::Error for LongPressButtonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LongPressButtonError::Config(err) => Some(err),
            LongPressButtonError::ReservedActionName { .. } => None,
        }
    }
}

impl From<GestureConfigError> for LongPressButtonError {
    fn from(err: GestureConfigError) -> Self {
        LongPressButtonError::Config(err)
    }
}
