pub mod eval;


mod mem_driver;
pub use mem_driver::MemDriver;

pub use stub_transport::{SentRequest, StubTransport};

use std::sync::Once;

/// Initializes tracing for a test run. Safe to call from every test;
/// only the first call installs the subscriber.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
