mod error;
pub use error::{Error, IntoError};

pub mod driver;
pub use driver::Driver;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

pub mod transport;
pub use transport::{Headers, Transport};

/// A Result type alias that uses Crosstitch's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
