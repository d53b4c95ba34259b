mod builder;
pub use builder::Builder;

use crate::handler::{Chain, Request};

use crosstitch_core::{
    schema::{EntityId, Schema},
    stmt,
    transport::Headers,
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Mandatory read filters, keyed by the entity every read of which must
/// carry them. Applied both to direct reads of the entity and to the
/// stitcher's batched lookups against it.
pub(crate) type ReadFilters = IndexMap<EntityId, stmt::Expr>;

/// Shared state between all `Service` clones.
struct Shared {
    schema: Arc<Schema>,
    /// One handler chain per entity, indexed by `EntityId`.
    chains: Vec<Chain>,
}

/// The read gateway. Cloning is cheap; requests share no mutable state, so
/// concurrent reads need no coordination.
#[derive(Clone)]
pub struct Service {
    shared: Arc<Shared>,
}

impl Service {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }

    /// Serve a read request.
    pub async fn read(&self, stmt: stmt::Select) -> Result<Vec<stmt::ValueRecord>> {
        self.read_with_headers(stmt, Headers::new()).await
    }

    /// Serve a read request, carrying the inbound request's headers through
    /// to any remote calls it triggers.
    pub async fn read_with_headers(
        &self,
        stmt: stmt::Select,
        headers: Headers,
    ) -> Result<Vec<stmt::ValueRecord>> {
        let chain = self
            .shared
            .chains
            .get(stmt.source.0)
            .ok_or_else(|| Error::unknown_entity(format!("{:?}", stmt.source)))?;

        chain.run(Request { stmt, headers }).await
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("entities", &self.shared.schema.entities.len())
            .finish()
    }
}
