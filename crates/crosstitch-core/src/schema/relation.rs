use super::{Entity, EntityId, Field, FieldId, FieldTy, Schema};

#[derive(Debug)]
pub struct BelongsTo {
    /// Entity being targeted by the relation
    pub target: EntityId,

    /// The primitive field on the source entity referencing the target's
    /// identifier.
    pub foreign_key: ForeignKey,
}

#[derive(Debug)]
pub struct ForeignKey {
    /// The field on the source entity acting as the foreign key
    pub field: FieldId,

    /// The identifier field on the target entity the FK maps to
    pub references: FieldId,
}

impl BelongsTo {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Entity {
        schema.entity(self.target)
    }
}

impl ForeignKey {
    pub fn field<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.field)
    }

    pub fn references<'a>(&self, schema: &'a Schema) -> &'a Field {
        schema.field(self.references)
    }
}

impl From<BelongsTo> for FieldTy {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
