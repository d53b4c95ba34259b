use super::{Field, FieldId, FieldTy, Schema};
use std::fmt;

#[derive(Debug)]
pub struct Entity {
    /// Uniquely identifies the entity within the schema
    pub id: EntityId,

    /// Name of the entity
    pub name: String,

    /// Which backend owns this entity
    pub location: Location,

    /// Storage collection name, when it differs from the entity name (e.g.
    /// the remote OData collection path).
    pub collection: Option<String>,

    /// Fields contained by the entity
    pub fields: Vec<Field>,
}

/// Which backend owns an entity.
///
/// This is the topology fact the query rewriter consults: an expansion of a
/// relation targeting a `Remote` entity cannot be served by the local store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Location {
    /// Stored locally; queried through the `Driver`.
    Local,

    /// Reachable only through the remote `Transport`.
    Remote,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntityId(pub usize);

impl Entity {
    pub fn is_remote(&self) -> bool {
        matches!(self.location, Location::Remote)
    }

    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(&self.name)
    }

    pub fn field(&self, id: impl Into<FieldId>) -> &Field {
        let field_id = id.into();
        assert_eq!(self.id, field_id.entity);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// True if any relation on this entity targets an entity owned by the
    /// other backend.
    pub fn has_cross_system_relation(&self, schema: &Schema) -> bool {
        self.fields.iter().any(|field| match &field.ty {
            FieldTy::BelongsTo(belongs_to) => {
                schema.entity(belongs_to.target).location != self.location
            }
            _ => false,
        })
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<&Entity> for EntityId {
    fn from(value: &Entity) -> Self {
        value.id
    }
}
