use super::{Filter, Returning};
use crate::schema::EntityId;

/// A declarative read request against one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The entity being read.
    pub source: EntityId,

    /// The projection. `Returning::Star` when the caller gave no explicit
    /// column list.
    pub returning: Returning,

    /// Query filter
    pub filter: Filter,
}

impl Select {
    pub fn new(source: impl Into<EntityId>, filter: impl Into<Filter>) -> Self {
        Self {
            source: source.into(),
            returning: Returning::Star,
            filter: filter.into(),
        }
    }

    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        self.filter.add_filter(filter);
    }
}
