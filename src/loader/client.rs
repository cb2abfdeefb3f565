use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::{request_headers, ApiConfig, CredentialStatus, Header};
use crate::country::CountryRecord;
use crate::loader::error::LoadError;

/// HTTP client for the country list endpoint.
///
/// Built once from [`ApiConfig`]; the credential is resolved at
/// construction and never read from the environment afterwards.
pub struct CountryClient {
    client: Client,
    endpoint: String,
    headers: Vec<Header>,
}

impl CountryClient {
    /// Build a client, resolving the API key from `api`.
    pub fn new(api: &ApiConfig) -> Result<Self, LoadError> {
        Self::with_credential(api, api.resolve_credential())
    }

    /// Build a client with an already resolved credential.
    pub fn with_credential(api: &ApiConfig, credential: CredentialStatus) -> Result<Self, LoadError> {
        if let CredentialStatus::Unconfigured { reason } = &credential {
            tracing::warn!("No API key configured ({}); sending unauthenticated request", reason);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds))
            .build()
            .map_err(|e| LoadError::Client { source: e })?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            headers: request_headers(&credential),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue the GET and decode the body.
    ///
    /// No retry and no overall deadline: the call resolves when the server
    /// answers or the connection fails.
    pub async fn fetch_all(&self) -> Result<Vec<CountryRecord>, LoadError> {
        tracing::info!("Loading countries from {}", self.endpoint);

        let mut builder = self.client.get(&self.endpoint);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| LoadError::Transport {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| LoadError::Transport {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;
        tracing::debug!("Response {} ({} bytes)", status, body.len());

        let result = decode_response(status.as_u16(), status.is_success(), &body);
        match &result {
            Ok(records) => tracing::info!("Loaded {} countries", records.len()),
            Err(err) => tracing::error!(kind = ?err.kind(), "Country load failed: {}", err),
        }
        result
    }
}

/// Turn a raw response into records.
///
/// The body is parsed as JSON before the status is looked at, so a failed
/// request with an unparseable body surfaces as a parse error. A failed
/// request with a JSON body reports the body's `message`.
pub fn decode_response(
    status: u16,
    success: bool,
    body: &[u8],
) -> Result<Vec<CountryRecord>, LoadError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| LoadError::Parse { source: e })?;

    if !success {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(LoadError::Api { status, message });
    }

    records_from_value(value)
}

/// Accepts an array of records, or an object whose values are records
/// (taken in document order).
fn records_from_value(value: Value) -> Result<Vec<CountryRecord>, LoadError> {
    let items: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
        Value::Null => return Err(LoadError::UnexpectedShape { found: "null" }),
        Value::Bool(_) => return Err(LoadError::UnexpectedShape { found: "boolean" }),
        Value::Number(_) => return Err(LoadError::UnexpectedShape { found: "number" }),
        Value::String(_) => return Err(LoadError::UnexpectedShape { found: "string" }),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| LoadError::Parse { source: e }))
        .collect()
}
