mod builder;
pub use builder::{Builder, EntityBuilder};

mod entity;
pub use entity::{Entity, EntityId, Location};

mod field;
pub use field::{Field, FieldId, FieldTy};

mod relation;
pub use relation::{BelongsTo, ForeignKey};

/// The entity catalog: which entities exist, which fields they carry, and
/// which backend owns each of them.
#[derive(Debug)]
pub struct Schema {
    pub entities: Vec<Entity>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn entity(&self, id: impl Into<EntityId>) -> &Entity {
        &self.entities[id.into().0]
    }

    pub fn entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    pub fn field(&self, id: FieldId) -> &Field {
        self.entity(id.entity).field(id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}
