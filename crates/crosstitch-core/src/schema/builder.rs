use super::{BelongsTo, Entity, EntityId, Field, FieldId, FieldTy, ForeignKey, Location, Schema};
use crate::{stmt, Error, Result};

/// Builds and validates a [`Schema`].
///
/// Relation targets and foreign-key references are declared by name and
/// resolved at build time; a dangling name fails the build.
#[derive(Debug, Default)]
pub struct Builder {
    entities: Vec<EntityBuilder>,
}

#[derive(Debug)]
pub struct EntityBuilder {
    name: String,
    location: Location,
    collection: Option<String>,
    fields: Vec<FieldDef>,
}

#[derive(Debug)]
enum FieldDef {
    Primitive {
        name: String,
        ty: stmt::Type,
    },
    Virtual {
        name: String,
        ty: stmt::Type,
    },
    BelongsTo {
        name: String,
        target: String,
        foreign_key: String,
        references: String,
    },
}

impl Builder {
    pub fn entity(mut self, entity: EntityBuilder) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut entities = Vec::with_capacity(self.entities.len());

        for (index, def) in self.entities.iter().enumerate() {
            entities.push(self.build_entity(def, EntityId(index))?);
        }

        self.resolve_references(&mut entities)?;

        Ok(Schema { entities })
    }

    fn build_entity(&self, def: &EntityBuilder, id: EntityId) -> Result<Entity> {
        let fields = def
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let field_id = FieldId { entity: id, index };

                Ok(match field {
                    FieldDef::Primitive { name, ty } => Field {
                        id: field_id,
                        name: name.clone(),
                        ty: FieldTy::Primitive(ty.clone()),
                        nullable: false,
                    },
                    FieldDef::Virtual { name, ty } => Field {
                        id: field_id,
                        name: name.clone(),
                        ty: FieldTy::Virtual(ty.clone()),
                        nullable: true,
                    },
                    FieldDef::BelongsTo {
                        name,
                        target,
                        foreign_key,
                        ..
                    } => {
                        let source = def
                            .fields
                            .iter()
                            .position(|field| {
                                matches!(field, FieldDef::Primitive { name, .. } if name == foreign_key)
                            })
                            .ok_or_else(|| Error::unknown_field(&def.name, foreign_key))?;

                        let target_id = self.entity_id_by_name(target)?;

                        Field {
                            id: field_id,
                            name: name.clone(),
                            ty: BelongsTo {
                                target: target_id,
                                foreign_key: ForeignKey {
                                    field: FieldId {
                                        entity: id,
                                        index: source,
                                    },
                                    // Resolved by `resolve_references` once
                                    // all entities exist.
                                    references: FieldId {
                                        entity: target_id,
                                        index: usize::MAX,
                                    },
                                },
                            }
                            .into(),
                            nullable: true,
                        }
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Entity {
            id,
            name: def.name.clone(),
            location: def.location,
            collection: def.collection.clone(),
            fields,
        })
    }

    /// Second pass: resolve the `references` side of every foreign key.
    fn resolve_references(&self, entities: &mut [Entity]) -> Result<()> {
        for (entity_index, def) in self.entities.iter().enumerate() {
            for (field_index, field_def) in def.fields.iter().enumerate() {
                let FieldDef::BelongsTo {
                    target, references, ..
                } = field_def
                else {
                    continue;
                };

                let target_id = self.entity_id_by_name(target)?;
                let references_index = self.entities[target_id.0]
                    .fields
                    .iter()
                    .position(|field| {
                        matches!(field, FieldDef::Primitive { name, .. } if name == references)
                    })
                    .ok_or_else(|| Error::unknown_field(target, references))?;

                let FieldTy::BelongsTo(belongs_to) =
                    &mut entities[entity_index].fields[field_index].ty
                else {
                    unreachable!()
                };
                belongs_to.foreign_key.references.index = references_index;
            }
        }
        Ok(())
    }

    fn entity_id_by_name(&self, name: &str) -> Result<EntityId> {
        self.entities
            .iter()
            .position(|entity| entity.name == name)
            .map(EntityId)
            .ok_or_else(|| Error::unknown_entity(name))
    }
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Location::Local,
            collection: None,
            fields: Vec::new(),
        }
    }

    /// Marks the entity as owned by the remote backend.
    pub fn remote(mut self) -> Self {
        self.location = Location::Remote;
        self
    }

    /// Sets the storage collection name.
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(name.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.fields.push(FieldDef::Primitive {
            name: name.into(),
            ty,
        });
        self
    }

    /// A response-only attribute; documents the contract, never stored.
    pub fn virtual_field(mut self, name: impl Into<String>, ty: stmt::Type) -> Self {
        self.fields.push(FieldDef::Virtual {
            name: name.into(),
            ty,
        });
        self
    }

    /// A relation resolved through `foreign_key` on this entity referencing
    /// `references` on the target.
    pub fn belongs_to(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        references: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldDef::BelongsTo {
            name: name.into(),
            target: target.into(),
            foreign_key: foreign_key.into(),
            references: references.into(),
        });
        self
    }
}
