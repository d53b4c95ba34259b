mod render;
mod value;

use crosstitch_core::{
    async_trait,
    bail,
    driver::Response,
    err,
    schema::Schema,
    stmt,
    transport::{Headers, Transport},
    Error, Result,
};

use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// A [`Transport`] speaking OData-style HTTP.
///
/// Renders a statement as a GET against the entity's collection path
/// (`$select` from the plain columns, `$filter` from the expression tree),
/// applies the header bag, and parses the JSON body (v4 `value` array or v2
/// `d.results`).
#[derive(Debug)]
pub struct Odata {
    client: Client,
    base_url: Url,
}

impl Odata {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Initializes an OData transport for the service rooted at `url`.
    pub fn connect(url: &str) -> Result<Self> {
        let base_url =
            Url::parse(url).map_err(|e| err!("invalid base URL; url={url}; error={e}"))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            bail!("base URL does not have an `http` or `https` scheme; url={url}");
        }

        Ok(Self::new(Client::new(), base_url))
    }

    fn collection_url(&self, collection: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| err!("base URL cannot carry a collection path; url={}", self.base_url))?
            .pop_if_empty()
            .push(collection);
        Ok(url)
    }
}

#[async_trait]
impl Transport for Odata {
    async fn send(
        &self,
        schema: &Arc<Schema>,
        stmt: stmt::Select,
        headers: &Headers,
    ) -> Result<Response> {
        let entity = schema.entity(stmt.source);
        let mut url = self.collection_url(entity.collection())?;

        for (name, value) in render::query_pairs(&stmt)? {
            url.query_pairs_mut().append_pair(&name, &value);
        }

        let mut request = self.client.get(url.clone());
        for (name, value) in headers.iter() {
            request = request.header(name, value);
        }

        debug!(collection = entity.collection(), %url, "remote GET");

        let response = request.send().await.map_err(Error::transport)?;
        let response = response.error_for_status().map_err(Error::transport)?;
        let body: serde_json::Value = response.json().await.map_err(Error::transport)?;

        let rows = value::rows_from_body(body)?;
        Ok(Response::records(rows))
    }
}
