use super::Error;

/// Error when a statement or schema definition references a field the
/// entity does not carry.
#[derive(Debug)]
pub(super) struct UnknownField {
    entity: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnknownField {}

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field: {}.{}", self.entity, self.field)
    }
}

impl Error {
    /// Creates an unknown field error.
    pub fn unknown_field(entity: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownField {
            entity: entity.into().into_boxed_str(),
            field: field.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
