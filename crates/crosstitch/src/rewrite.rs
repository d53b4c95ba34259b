use crosstitch_core::{
    schema::{EntityId, Schema},
    stmt,
};

/// Description of a stripped cross-system expansion, consumed by the
/// stitcher when it re-attaches the relation after the primary read.
#[derive(Debug, Clone, PartialEq)]
pub struct StrippedExpand {
    /// Relation field name on the source entity; also the attach point on
    /// each result row.
    pub relation: String,

    /// The remote entity being expanded.
    pub target: EntityId,

    /// Foreign-key field name on the source entity.
    pub foreign_key: String,

    /// Identifier field name on the target entity.
    pub references: String,
}

/// Removes a nested expansion the local store cannot serve, guaranteeing
/// the foreign-key column stays in the projection.
///
/// Expansions of relations whose target lives in the same backend are left
/// untouched; so is every query without an explicit column list (an
/// unprojected read already returns all fields, including the foreign key).
///
/// At most one cross-system expansion is expected per query; only the first
/// match is stripped.
pub fn strip_remote_expand(schema: &Schema, stmt: &mut stmt::Select) -> Option<StrippedExpand> {
    let entity = schema.entity(stmt.source);
    let columns = stmt.returning.as_columns_mut()?;

    let mut found = None;

    for (index, column) in columns.iter().enumerate() {
        let Some(expand) = column.as_expand() else {
            continue;
        };
        let Some(field) = entity.field_by_name(&expand.relation) else {
            continue;
        };
        let Some(belongs_to) = field.ty.as_belongs_to() else {
            continue;
        };
        if schema.entity(belongs_to.target).location == entity.location {
            continue;
        }

        found = Some((
            index,
            StrippedExpand {
                relation: expand.relation.clone(),
                target: belongs_to.target,
                foreign_key: belongs_to.foreign_key.field(schema).name.clone(),
                references: belongs_to.foreign_key.references(schema).name.clone(),
            },
        ));
        break;
    }

    let (index, stripped) = found?;
    columns.remove(index);

    // Make sure the join key will be returned
    let has_foreign_key = columns
        .iter()
        .any(|column| column.as_field() == Some(&stripped.foreign_key[..]));
    if !has_foreign_key {
        columns.push(stmt::Column::field(&stripped.foreign_key));
    }

    Some(stripped)
}
