use crate::handler::{Handler, Next, Request};
use crate::rewrite::{self, StrippedExpand};
use crate::service::ReadFilters;
use crate::Config;

use crosstitch_core::{
    async_trait,
    schema::Schema,
    stmt::{self, Value, ValueRecord},
    transport::{Headers, Transport},
    Result,
};

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves cross-system expansions.
///
/// Request phase: strips the expansion from the outbound statement and keeps
/// the foreign-key column in the projection. Response phase: collects the
/// foreign keys from the primary rows, issues one batched lookup against the
/// remote collection, and attaches the matched record (or `Value::Null`)
/// onto each row under the requested relation name.
#[derive(Debug)]
pub struct ExpandRemote {
    schema: Arc<Schema>,
    transport: Arc<dyn Transport>,
    config: Arc<Config>,
    filters: Arc<ReadFilters>,
}

#[async_trait]
impl Handler for ExpandRemote {
    async fn call(&self, mut req: Request, next: Next<'_>) -> Result<Vec<ValueRecord>> {
        let Some(stripped) = rewrite::strip_remote_expand(&self.schema, &mut req.stmt) else {
            return next.run(req).await;
        };

        debug!(relation = %stripped.relation, "stripped cross-system expansion");

        let headers = req.headers.clone();
        let mut rows = next.run(req).await?;
        self.stitch(&stripped, &mut rows, &headers).await?;
        Ok(rows)
    }
}

impl ExpandRemote {
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

    async fn stitch(
        &self,
        stripped: &StrippedExpand,
        rows: &mut [ValueRecord],
        headers: &Headers,
    ) -> Result<()> {
        let keys = extract_keys(rows, &stripped.foreign_key);

        let table = if keys.is_empty() {
            // Never issue an `in {}` query; every row still gets the
            // explicit absent marker below.
            debug!("no foreign keys to resolve; skipping secondary fetch");
            IndexMap::new()
        } else {
            debug!(
                keys = keys.len(),
                rows = rows.len(),
                "fetching remote records for stitch"
            );
            let partners = self.fetch_partners(stripped, keys, headers).await?;
            build_lookup_table(partners, &stripped.references)
        };

        for row in rows.iter_mut() {
            let partner = row
                .get(&stripped.foreign_key)
                .filter(|key| !key.is_null())
                .and_then(|key| table.get(key))
                .cloned()
                .map(Value::Record)
                .unwrap_or(Value::Null);
            row.insert(&stripped.relation[..], partner);
        }

        Ok(())
    }

    /// Exactly one batched call per read, regardless of row count.
    async fn fetch_partners(
        &self,
        stripped: &StrippedExpand,
        keys: Vec<Value>,
        headers: &Headers,
    ) -> Result<Vec<ValueRecord>> {
        let mut select = stmt::Select::new(
            stripped.target,
            stmt::Expr::in_list(stmt::Expr::field(&stripped.references), keys),
        );

        if let Some(filter) = self.filters.get(&stripped.target) {
            select.add_filter(filter.clone());
        }

        let mut headers = headers.clone();
        headers.insert("apikey", &self.config.api_key[..]);

        let response = self.transport.send(&self.schema, select, &headers).await?;
        Ok(response.rows.into_vec())
    }
}

/// Distinct non-null foreign-key values, in first-seen order. Null or absent
/// keys are tolerated and skipped.
fn extract_keys(rows: &[ValueRecord], foreign_key: &str) -> Vec<Value> {
    let mut keys = Vec::new();
    for row in rows {
        match row.get(foreign_key) {
            None | Some(Value::Null) => {}
            Some(key) if keys.contains(key) => {}
            Some(key) => keys.push(key.clone()),
        }
    }
    keys
}

/// Indexes the remote rows by identifier. Duplicate identifiers should not
/// happen under a correct remote system; they resolve last-write-wins.
fn build_lookup_table(
    partners: Vec<ValueRecord>,
    references: &str,
) -> IndexMap<Value, ValueRecord> {
    let mut table = IndexMap::with_capacity(partners.len());
    for partner in partners {
        let Some(id) = partner.get(references).cloned() else {
            continue;
        };
        if table.insert(id, partner).is_some() {
            warn!(field = references, "remote result repeats an identifier");
        }
    }
    table
}
