use super::Error;

/// Error when a read query is invalid.
///
/// This occurs when:
/// - A query cannot be rendered for the backend it targets (e.g. an empty
///   `in` list)
/// - A query has incorrect structure or arguments for the entity it reads
///
/// Absence of expected structure is not an invalid query; the typed
/// statement representation makes that unrepresentable.
#[derive(Debug)]
pub(super) struct InvalidQuery {
    message: Box<str>,
}

impl std::error::Error for InvalidQuery {}

impl core::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQuery(InvalidQuery {
            message: message.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an invalid query error.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidQuery(_))
    }
}
