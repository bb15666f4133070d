//! Error types for the parallax core.

/// Errors raised while building or tuning an effect.
///
/// Capability gaps (missing sensors, no transform support) are not errors;
/// they select a fallback path instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParallaxError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("config `{key}`: expected {expected}, found {found}")]
    ConfigType {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("config `{key}` out of range: {value}")]
    OutOfRange { key: String, value: f64 },

    #[error("unknown config key `{key}`")]
    UnknownKey { key: String },
}

/// Result alias using [`ParallaxError`].
pub type Result<T> = std::result::Result<T, ParallaxError>;

impl ParallaxError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    pub fn config_type(key: &str, expected: &'static str, found: impl ToString) -> Self {
        Self::ConfigType {
            key: key.to_string(),
            expected,
            found: found.to_string(),
        }
    }

    pub fn out_of_range(key: &str, value: f64) -> Self {
        Self::OutOfRange {
            key: key.to_string(),
            value,
        }
    }

    pub fn unknown_key(key: &str) -> Self {
        Self::UnknownKey {
            key: key.to_string(),
        }
    }
}
