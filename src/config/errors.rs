use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("Configuration error: {0} must be set")]
    Missing(&'static str),
    #[error("Configuration error: invalid value '{value}' for {key}")]
    Invalid {
        key: &'static str,
        value: String
    }
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: &str) -> Self {
        Self::Invalid {
            key,
            value: value.to_string()
        }
    }
}
