use crosstitch_core::{Error, Result};

use std::fmt;

/// Process configuration for the remote credential.
#[derive(Clone)]
pub struct Config {
    /// API key sent with every remote call.
    pub api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Reads the `apikey` process variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("apikey")
            .map_err(|_| Error::config("missing `apikey` environment variable"))?;
        Ok(Self::new(api_key))
    }
}

// The credential never appears in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
