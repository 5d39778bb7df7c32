use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ClientError, SubmissionClient, SubmissionResponse};
use crate::models::CreateTransactionRequest;

const TRANSACTIONS_PATH: &str = "Transactions";
const AUTH_HEADER: &str = "X-Auth-Token";
const MAX_MESSAGE_CHARS: usize = 500;

/// Submits transactions to the ledger service's REST API.
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String
}

#[derive(Debug, Deserialize)]
struct CreatedTransaction {
    #[serde(default)]
    id: Value
}

impl HttpSubmissionClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            endpoint: format!("{}/{TRANSACTIONS_PATH}", base_url.trim_end_matches('/')),
            api_key: api_key.into()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<SubmissionResponse, ClientError> {
        let response = self.http
            .post(&self.endpoint)
            .header(AUTH_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::Transport)?;

        debug!("Ledger service answered HTTP {status} with {} bytes", body.len());

        interpret_response(status, &body)
    }
}

/// Sorts a response into created, rejected, or a failure of the call itself.
fn interpret_response(status: StatusCode, body: &str) -> Result<SubmissionResponse, ClientError> {
    //NOTE: A bad API key fails every row the same way, so it is treated like a transport failure
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized { status: status.as_u16() });
    }

    if !status.is_success() {
        return Ok(SubmissionResponse::rejected(status.as_u16(), describe_body(status, body)));
    }

    let id = serde_json::from_str::<CreatedTransaction>(body).map(|created| created.id);

    match id {
        Ok(Value::String(id)) if !id.is_empty() => Ok(SubmissionResponse::created(id)),
        Ok(Value::Number(id)) => Ok(SubmissionResponse::created(id.to_string())),
        _ => Ok(SubmissionResponse::rejected(status.as_u16(), "Response did not contain a transaction id"))
    }
}

fn describe_body(status: StatusCode, body: &str) -> String {
    let body = body.trim();

    if body.is_empty() {
        return status.canonical_reason().unwrap_or("No response body").to_string();
    }

    body.chars().take(MAX_MESSAGE_CHARS).collect()
}
