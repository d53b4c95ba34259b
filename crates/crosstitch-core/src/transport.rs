use crate::{async_trait, driver::Response, schema::Schema, stmt, Result};

use std::{fmt::Debug, sync::Arc};

/// The remote collection's transport client.
///
/// Performs one authenticated network call per `send`. Timeout and
/// connection policy live in the implementation; the read path treats a
/// failure here as fatal for the request.
#[async_trait]
pub trait Transport: Debug + Send + Sync + 'static {
    /// Send a read to the remote collection.
    async fn send(
        &self,
        schema: &Arc<Schema>,
        stmt: stmt::Select,
        headers: &Headers,
    ) -> Result<Response>;
}

/// Header bag attached to a remote call.
///
/// Insertion order is preserved; header names are matched case-insensitively
/// on lookup, as on the wire.
#[derive(Debug, Default, Clone)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.entries.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| &v[..])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (&n[..], &v[..]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
