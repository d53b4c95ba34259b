use super::Error;

/// Error when process configuration is missing or invalid.
///
/// This occurs when:
/// - A required environment variable (e.g. the API key) is not set
/// - A service builder is finished without a required collaborator
#[derive(Debug)]
pub(super) struct ConfigError {
    message: Box<str>,
}

impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Config(ConfigError {
            message: message.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Config(_))
    }
}
