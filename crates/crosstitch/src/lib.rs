mod config;
pub use config::Config;

mod derive;
pub use derive::Derive;

mod exec;
pub use exec::Execute;

pub mod handler;
pub use handler::{Chain, Handler, Next, Request};

mod remote;
pub use remote::Forward;

pub mod rewrite;

pub mod risk;

mod service;
pub use service::{Builder, Service};

pub mod stitch;
pub use stitch::ExpandRemote;

pub use crosstitch_core::{driver, schema, stmt, transport, Error, Result};
