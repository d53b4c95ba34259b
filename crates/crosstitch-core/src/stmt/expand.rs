use super::Returning;

/// A nested-expansion directive: request a related entity's fields nested
/// inside the primary entity's result.
#[derive(Debug, Clone, PartialEq)]
pub struct Expand {
    /// Name of the relation field on the source entity.
    pub relation: String,

    /// Projection requested for the related entity.
    pub returning: Returning,
}
