use std::fmt;

/// Result type for dashlist-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A textual value could not be parsed into the expected type
    InvalidValue { kind: &'static str, value: String },

    /// A query field name is not known to the list
    UnknownField { list: &'static str, field: String },
}

impl Error {
    pub fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidValue { kind, value } => write!(f, "Invalid {}: '{}'", kind, value),
            Error::UnknownField { list, field } => {
                write!(f, "Unknown field '{}' for {} list", field, list)
            }
        }
    }
}

impl std::error::Error for Error {}
