use super::{BelongsTo, EntityId};
use crate::stmt;
use std::fmt;

#[derive(Debug)]
pub struct Field {
    /// Uniquely identifies the field within the containing entity.
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// Primitive, virtual, or relation
    pub ty: FieldTy,

    /// True if the field can be null
    pub nullable: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub entity: EntityId,
    pub index: usize,
}

#[derive(Debug)]
pub enum FieldTy {
    /// A stored scalar field
    Primitive(stmt::Type),

    /// A response-only attribute; computed per read, never stored
    Virtual(stmt::Type),

    /// A relation to another entity, resolved through a foreign key
    BelongsTo(BelongsTo),
}

impl Field {
    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::BelongsTo(_))
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.ty, FieldTy::Virtual(_))
    }
}

impl FieldTy {
    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Self::BelongsTo(belongs_to) => Some(belongs_to),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldId({}/{})", self.entity.0, self.index)
    }
}
