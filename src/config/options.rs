use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::config::ConfigError;
use crate::transform::RecordTransformer;

/// Command-line options. Each falls back to an environment variable (a `.env`
/// file is loaded before parsing), and command-line values win.
#[derive(Debug, Clone, Args)]
pub struct ImportOptions {
    /// Base URL of the ledger service API
    #[arg(short = 'u', long, env = "LEDGER_BASE_URL", default_value = "")]
    pub base_url: String,

    /// API key sent with every request
    #[arg(short = 'k', long, env = "LEDGER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// CSV file to import
    #[arg(short = 'f', long, env = "LEDGER_CSV_FILE")]
    pub csv_file: Option<PathBuf>,

    /// Ask the ledger service to validate every account string against the chart of accounts
    #[arg(long, env = "LEDGER_VALIDATE_COA")]
    pub validate_coa: bool,

    /// Approve imported transactions without manual review
    #[arg(long, env = "LEDGER_AUTO_APPROVE")]
    pub auto_approve: bool,

    /// Seconds to wait for each ledger service request
    #[arg(long, env = "LEDGER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64
}

/// Options after the required values have been checked.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ImportSettings {
    pub base_url: String,
    pub api_key: String,
    pub csv_file: PathBuf,
    pub validate_coa: bool,
    pub auto_approve: bool,
    pub timeout: Duration
}

impl ImportOptions {
    /// # Errors
    /// Returns `ConfigError` naming the first option that is missing or blank.
    pub fn validate(&self) -> Result<ImportSettings, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Missing("ApiKey"));
        }

        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Missing("BaseUrl"));
        }

        let csv_file = self.csv_file.clone()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::Missing("CsvFile"))?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(ImportSettings {
            base_url: self.base_url.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
            csv_file,
            validate_coa: self.validate_coa,
            auto_approve: self.auto_approve,
            timeout: Duration::from_secs(self.timeout_secs)
        })
    }
}

impl ImportSettings {
    pub fn transformer(&self) -> RecordTransformer {
        RecordTransformer::new(self.validate_coa, self.auto_approve)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}
