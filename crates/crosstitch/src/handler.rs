use crosstitch_core::{async_trait, err, stmt, transport::Headers, Result};

use std::fmt::Debug;
use std::sync::Arc;

/// A read request traveling through a handler chain.
#[derive(Debug, Clone)]
pub struct Request {
    /// The read statement, possibly rewritten by earlier stages.
    pub stmt: stmt::Select,

    /// Transport headers carried from the inbound request.
    pub headers: Headers,
}

impl Request {
    pub fn new(stmt: stmt::Select) -> Self {
        Self {
            stmt,
            headers: Headers::new(),
        }
    }
}

/// One stage of a per-entity read pipeline.
///
/// A stage may transform the request, invoke the rest of the chain through
/// [`Next`], and transform the result on the way back out. Terminal stages
/// ignore `next`.
#[async_trait]
pub trait Handler: Debug + Send + Sync + 'static {
    async fn call(&self, req: Request, next: Next<'_>) -> Result<Vec<stmt::ValueRecord>>;
}

/// Continuation into the remaining stages of a chain.
#[derive(Debug)]
pub struct Next<'a> {
    rest: &'a [Arc<dyn Handler>],
}

impl Next<'_> {
    pub async fn run(self, req: Request) -> Result<Vec<stmt::ValueRecord>> {
        match self.rest.split_first() {
            Some((handler, rest)) => handler.call(req, Next { rest }).await,
            None => Err(err!("handler chain ended without a terminal stage")),
        }
    }
}

/// An ordered handler chain for one entity. The last stage must be terminal.
#[derive(Debug, Default)]
pub struct Chain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl Chain {
    pub fn push(&mut self, handler: impl Handler) {
        self.handlers.push(Arc::new(handler));
    }

    pub fn push_shared(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.push(handler);
    }

    pub async fn run(&self, req: Request) -> Result<Vec<stmt::ValueRecord>> {
        Next {
            rest: &self.handlers,
        }
        .run(req)
        .await
    }
}
