use super::*;

/// References a field on the queried entity, by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub name: String,
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
