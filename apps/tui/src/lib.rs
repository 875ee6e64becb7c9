// Export the non-UI modules for use in the binary and tests
pub mod cli;
pub mod config;
pub mod logging;
pub mod transport;

pub use config::{AppConfig, ConfigError};
pub use transport::ReqwestTransport;
