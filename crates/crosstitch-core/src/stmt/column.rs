use super::{Expand, Returning};

/// One entry in an explicit column list.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// A plain field reference, by name.
    Field(String),

    /// A nested-expansion directive naming a related entity.
    Expand(Expand),
}

impl Column {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// An expansion of `relation` returning all of the target's fields.
    pub fn expand(relation: impl Into<String>) -> Self {
        Self::Expand(Expand {
            relation: relation.into(),
            returning: Returning::Star,
        })
    }

    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_expand(&self) -> Option<&Expand> {
        match self {
            Self::Expand(expand) => Some(expand),
            _ => None,
        }
    }

    pub fn is_expand(&self) -> bool {
        matches!(self, Self::Expand(_))
    }
}

impl From<Expand> for Column {
    fn from(value: Expand) -> Self {
        Self::Expand(value)
    }
}
