use super::Error;

/// Error when a statement references an entity the schema does not define.
#[derive(Debug)]
pub(super) struct UnknownEntity {
    name: Box<str>,
}

impl std::error::Error for UnknownEntity {}

impl core::fmt::Display for UnknownEntity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown entity: {}", self.name)
    }
}

impl Error {
    /// Creates an unknown entity error.
    pub fn unknown_entity(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownEntity(UnknownEntity {
            name: name.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an unknown entity error.
    pub fn is_unknown_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownEntity(_))
    }
}
