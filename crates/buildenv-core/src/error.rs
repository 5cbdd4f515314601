use std::io;
use thiserror::Error;

/// Result type for buildenv operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error type for building and validating environment configuration.
///
/// Construction errors always name the shape that raised them, so an error
/// coming out of a nested value (an environment variable, a registry
/// credential) can be traced back without being rewrapped on the way up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Missing required field \"{field}\" for \"{shape}\". The value cannot be null.")]
    MissingRequiredField {
        shape: &'static str,
        field: &'static str,
    },

    #[error("Invalid type for field \"{field}\" of \"{shape}\": expected {expected}")]
    InvalidFieldType {
        shape: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("Unknown value \"{value}\" for field \"{field}\" of \"{shape}\"")]
    UnknownEnumValue {
        shape: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Constraint violated for \"{shape}\": {message}")]
    ConstraintViolation {
        shape: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ModelError {
    /// Create a missing-field error
    pub fn missing(shape: &'static str, field: &'static str) -> Self {
        ModelError::MissingRequiredField { shape, field }
    }

    /// Create an invalid-type error
    pub fn invalid_type(shape: &'static str, field: &'static str, expected: &'static str) -> Self {
        ModelError::InvalidFieldType {
            shape,
            field,
            expected,
        }
    }

    /// Create an unknown enum value error
    pub fn unknown_enum<S: Into<String>>(shape: &'static str, field: &'static str, value: S) -> Self {
        ModelError::UnknownEnumValue {
            shape,
            field,
            value: value.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint<S: Into<String>>(shape: &'static str, message: S) -> Self {
        ModelError::ConstraintViolation {
            shape,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ModelError::Config(msg.into())
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        ModelError::Serialization(msg.into())
    }

    /// Field name carried by construction and validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ModelError::MissingRequiredField { field, .. }
            | ModelError::InvalidFieldType { field, .. }
            | ModelError::UnknownEnumValue { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Shape name carried by construction and validation errors
    pub fn shape(&self) -> Option<&'static str> {
        match self {
            ModelError::MissingRequiredField { shape, .. }
            | ModelError::InvalidFieldType { shape, .. }
            | ModelError::UnknownEnumValue { shape, .. }
            | ModelError::ConstraintViolation { shape, .. } => Some(shape),
            _ => None,
        }
    }
}

impl From<io::Error> for ModelError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ModelError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = ModelError::missing("ProjectEnvironment", "image");
        assert_eq!(
            err.to_string(),
            "Missing required field \"image\" for \"ProjectEnvironment\". The value cannot be null."
        );
        assert_eq!(err.field(), Some("image"));
        assert_eq!(err.shape(), Some("ProjectEnvironment"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ModelError = io_err.into();
        assert!(matches!(err, ModelError::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ModelError = json_err.into();
        assert!(matches!(err, ModelError::Serialization(_)));
        assert_eq!(err.field(), None);
    }
}
