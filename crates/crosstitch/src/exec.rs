use crate::handler::{Handler, Next, Request};

use crosstitch_core::{async_trait, driver::Driver, schema::Schema, stmt::ValueRecord, Result};

use std::sync::Arc;

/// Terminal stage for local entities: runs the statement on the injected
/// [`Driver`] and normalizes the result to a sequence.
#[derive(Debug)]
pub struct Execute {
    schema: Arc<Schema>,
    driver: Arc<dyn Driver>,
}

impl Execute {
    pub(crate) fn new(schema: Arc<Schema>, driver: Arc<dyn Driver>) -> Self {
        Self { schema, driver }
    }
}

#[async_trait]
impl Handler for Execute {
    async fn call(&self, req: Request, _next: Next<'_>) -> Result<Vec<ValueRecord>> {
        let response = self.driver.read(&self.schema, req.stmt).await?;
        Ok(response.rows.into_vec())
    }
}
