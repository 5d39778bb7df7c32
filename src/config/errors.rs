use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("No value supplied for {0}")]
    Missing(&'static str),
    #[error("Request timeout must be at least one second")]
    ZeroTimeout
}
