use crate::handler::{Handler, Next, Request};
use crate::service::ReadFilters;
use crate::Config;

use crosstitch_core::{
    async_trait, schema::Schema, stmt::ValueRecord, transport::Transport, Result,
};

use std::sync::Arc;
use tracing::debug;

/// Terminal stage for remote entities: forwards the read through the
/// [`Transport`], after adding the entity's mandatory read filter and the
/// API-key credential. The local store is never consulted.
#[derive(Debug)]
pub struct Forward {
    schema: Arc<Schema>,
    transport: Arc<dyn Transport>,
    config: Arc<Config>,
    filters: Arc<ReadFilters>,
}

impl Forward {
    pub(crate) fn new(
        schema: Arc<Schema>,
        transport: Arc<dyn Transport>,
        config: Arc<Config>,
        filters: Arc<ReadFilters>,
    ) -> Self {
        Self {
            schema,
            transport,
            config,
            filters,
        }
    }
}

#[async_trait]
impl Handler for Forward {
    async fn call(&self, mut req: Request, _next: Next<'_>) -> Result<Vec<ValueRecord>> {
        if let Some(filter) = self.filters.get(&req.stmt.source) {
            req.stmt.add_filter(filter.clone());
        }

        let mut headers = req.headers;
        headers.insert("apikey", &self.config.api_key[..]);

        debug!(
            entity = %self.schema.entity(req.stmt.source).name,
            "forwarding read to remote collection"
        );

        let response = self.transport.send(&self.schema, req.stmt, &headers).await?;
        Ok(response.rows.into_vec())
    }
}
