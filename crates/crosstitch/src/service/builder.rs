use super::{ReadFilters, Service, Shared};
use crate::handler::{Chain, Handler};
use crate::{Config, Execute, ExpandRemote, Forward};

use crosstitch_core::{
    driver::Driver, schema::Schema, stmt, transport::Transport, Error, Result,
};

use std::sync::Arc;

/// Assembles a [`Service`] from its schema and injected collaborators.
///
/// For every local entity with a cross-system relation, the remote-expand
/// resolver is installed automatically. Registered per-entity handlers run
/// outermost first, in registration order, ahead of the built-in stages.
#[derive(Default)]
pub struct Builder {
    schema: Option<Schema>,
    driver: Option<Arc<dyn Driver>>,
    transport: Option<Arc<dyn Transport>>,
    config: Option<Config>,
    handlers: Vec<(String, Arc<dyn Handler>)>,
    read_filters: Vec<(String, stmt::Expr)>,
}

impl Builder {
    pub fn schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.driver = Some(Arc::new(driver));
        self
    }

    pub fn transport(&mut self, transport: impl Transport) -> &mut Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = Some(config);
        self
    }

    /// Registers a handler on the named entity's chain.
    pub fn handler(&mut self, entity: impl Into<String>, handler: impl Handler) -> &mut Self {
        self.handlers.push((entity.into(), Arc::new(handler)));
        self
    }

    /// Declares a filter every read of the named entity must carry,
    /// including the stitcher's batched lookups against it.
    pub fn read_filter(&mut self, entity: impl Into<String>, filter: stmt::Expr) -> &mut Self {
        self.read_filters.push((entity.into(), filter));
        self
    }

    pub fn build(&mut self) -> Result<Service> {
        let schema = Arc::new(
            self.schema
                .take()
                .ok_or_else(|| Error::config("service requires a schema"))?,
        );
        let driver = self
            .driver
            .take()
            .ok_or_else(|| Error::config("service requires a driver"))?;
        let transport = self
            .transport
            .take()
            .ok_or_else(|| Error::config("service requires a transport"))?;
        let config = Arc::new(
            self.config
                .take()
                .ok_or_else(|| Error::config("service requires a config"))?,
        );

        let mut filters = ReadFilters::new();
        for (name, expr) in self.read_filters.drain(..) {
            let entity = schema
                .entity_by_name(&name)
                .ok_or_else(|| Error::unknown_entity(&name))?;
            match filters.entry(entity.id) {
                indexmap::map::Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    *existing = stmt::Expr::and(existing.clone(), expr);
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(expr);
                }
            }
        }
        let filters = Arc::new(filters);

        for (name, _) in &self.handlers {
            if schema.entity_by_name(name).is_none() {
                return Err(Error::unknown_entity(name));
            }
        }

        let mut chains = Vec::with_capacity(schema.entities.len());
        for entity in schema.entities() {
            let mut chain = Chain::default();

            for (name, handler) in &self.handlers {
                if *name == entity.name {
                    chain.push_shared(handler.clone());
                }
            }

            if entity.is_remote() {
                chain.push(Forward::new(
                    schema.clone(),
                    transport.clone(),
                    config.clone(),
                    filters.clone(),
                ));
            } else {
                if entity.has_cross_system_relation(&schema) {
                    chain.push(ExpandRemote::new(
                        schema.clone(),
                        transport.clone(),
                        config.clone(),
                        filters.clone(),
                    ));
                }
                chain.push(Execute::new(schema.clone(), driver.clone()));
            }

            chains.push(chain);
        }

        Ok(Service {
            shared: Arc::new(Shared { schema, chains }),
        })
    }
}
