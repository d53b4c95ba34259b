mod response;
pub use response::{Response, Rows};

use crate::{async_trait, schema::Schema, stmt, Result};

use std::{fmt::Debug, sync::Arc};

/// The local entity store.
///
/// Accepts a declarative read statement and returns matching rows. Injected
/// into the service at construction; the read path never constructs one.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a read against the local store.
    async fn read(&self, schema: &Arc<Schema>, stmt: stmt::Select) -> Result<Response>;
}
