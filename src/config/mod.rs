mod errors;
mod options;

pub use errors::ConfigError;
pub use options::{ImportOptions, LogLevel};
