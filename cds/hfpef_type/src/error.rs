use thiserror::Error;

/// Errors raised at the form boundary when input is parsed strictly.
///
/// Lenient parsing never produces these; it drops the offending value
/// and logs a warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("field '{field}' expects a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("field '{field}' expects a yes/no flag, got '{value}'")]
    InvalidFlag { field: String, value: String },

    #[error("unknown field '{field}' for the {form} form")]
    UnknownField { form: &'static str, field: String },

    #[error("expected key=value, got '{0}'")]
    MalformedPair(String),
}

impl InputError {
    /// Name of the field the error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            InputError::InvalidNumber { field, .. }
            | InputError::InvalidFlag { field, .. }
            | InputError::UnknownField { field, .. } => Some(field),
            InputError::MalformedPair(_) => None,
        }
    }
}
