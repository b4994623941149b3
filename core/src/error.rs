use std::fmt;

use thiserror::Error;

/// A numeric field of the dive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Depth,
    BottomTime,
    SurfaceIntervalHours,
    SurfaceIntervalMinutes,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Depth => "depth",
            FormField::BottomTime => "bottom time",
            FormField::SurfaceIntervalHours => "surface interval hours",
            FormField::SurfaceIntervalMinutes => "surface interval minutes",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for dive form input parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} is empty")]
    Empty { field: FormField },

    #[error("{field} is not a whole number: '{value}'")]
    InvalidNumber { field: FormField, value: String },
}

impl InputError {
    pub fn field(&self) -> FormField {
        match self {
            InputError::Empty { field } | InputError::InvalidNumber { field, .. } => *field,
        }
    }
}
