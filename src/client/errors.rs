use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unable to build the HTTP client: {0}")]
    Build(reqwest::Error),
    #[error("Request to the ledger service failed: {0}")]
    Transport(reqwest::Error),
    #[error("Ledger service refused the API key (HTTP {status})")]
    Unauthorized {
        status: u16
    }
}
