use crate::eval;

use crosstitch_core::{
    async_trait,
    driver::{Driver, Response},
    schema::{EntityId, Schema},
    stmt::{self, Value, ValueRecord},
    Error, Result,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// An in-memory local store with a read log.
///
/// Applies filters and projections honestly. A read matching exactly one
/// row answers with `Rows::One`, exercising the one-or-many normalization
/// at the driver boundary.
#[derive(Debug, Default)]
pub struct MemDriver {
    rows: Mutex<HashMap<EntityId, Vec<ValueRecord>>>,

    /// Log of all statements executed through this driver.
    /// Arc<Mutex> so tests keep a handle after the driver moves into the
    /// service.
    read_log: Arc<Mutex<Vec<stmt::Select>>>,
}

impl MemDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entity: EntityId, row: ValueRecord) {
        self.rows
            .lock()
            .expect("failed to acquire rows lock")
            .entry(entity)
            .or_default()
            .push(row);
    }

    /// Get a handle to the statements log.
    pub fn read_log_handle(&self) -> Arc<Mutex<Vec<stmt::Select>>> {
        self.read_log.clone()
    }
}

#[async_trait]
impl Driver for MemDriver {
    async fn read(&self, _schema: &Arc<Schema>, stmt: stmt::Select) -> Result<Response> {
        self.read_log
            .lock()
            .expect("failed to acquire read log lock")
            .push(stmt.clone());

        let rows = self
            .rows
            .lock()
            .expect("failed to acquire rows lock")
            .get(&stmt.source)
            .cloned()
            .unwrap_or_default();

        let mut out = Vec::new();
        for row in rows {
            if let Some(expr) = stmt.filter.expr() {
                if !eval::eval_bool(&row, expr)? {
                    continue;
                }
            }
            out.push(project(&row, &stmt.returning)?);
        }

        if out.len() == 1 {
            Ok(Response::record(out.pop().unwrap()))
        } else {
            Ok(Response::records(out))
        }
    }
}

fn project(row: &ValueRecord, returning: &stmt::Returning) -> Result<ValueRecord> {
    let Some(columns) = returning.as_columns() else {
        return Ok(row.clone());
    };

    let mut out = ValueRecord::new();
    for column in columns {
        match column {
            stmt::Column::Field(name) => {
                out.insert(&name[..], row.get(name).cloned().unwrap_or(Value::Null));
            }
            // The rewriter must have stripped cross-system expansions
            // before the statement reaches the store.
            stmt::Column::Expand(expand) => {
                return Err(Error::invalid_query(format!(
                    "local store cannot expand relation `{}`",
                    expand.relation
                )));
            }
        }
    }
    Ok(out)
}
