//! Authenticated JSON client for the GoBarber API

use std::sync::Arc;
use std::time::Duration;

use gobarber_domain::{ApiConfig, GoBarberError};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "http://localhost:3333")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Total attempts per request
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            max_attempts: config.max_attempts,
        }
    }
}

/// API client
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: Url,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is invalid or the
    /// HttpClient cannot be created
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            ApiError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .user_agent(concat!("gobarber/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client: Arc::new(http_client), auth, base_url, timeout: config.timeout })
    }

    /// Execute an authenticated GET request and decode the JSON body
    ///
    /// # Errors
    ///
    /// Non-2xx statuses map to [`ApiError`] by status class; a body that
    /// does not decode into `T` is [`ApiError::Payload`]
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.fetch_json(path, query).await.inspect_err(|err| {
            warn!(
                category = ?err.category(),
                retryable = err.should_retry(),
                error = %err,
                "API request failed"
            );
        })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, query)?;
        debug!(url = %url, "GET request");

        let token = self.auth.access_token().await?;
        let request = self
            .http_client
            .request(Method::GET, url.clone())
            .bearer_auth(token)
            .header("Accept", "application/json");

        // reqwest bounds each attempt; this bounds the whole retry sequence
        let budget = self.http_client.retry_policy().budget(self.timeout);
        let response = match tokio::time::timeout(budget, self.http_client.send(request)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(Self::map_domain_error(err)),
            Err(_) => return Err(ApiError::Timeout(budget)),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(Self::map_status_error(status, url.as_str(), body));
        }

        let result: T = serde_json::from_str(&body)
            .map_err(|e| ApiError::Payload(format!("Failed to parse response: {}", e)))?;

        debug!(path = %path, %status, "GET request successful");
        Ok(result)
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        let mut url =
            Url::parse(&raw).map_err(|e| ApiError::Config(format!("Invalid URL '{}': {}", raw, e)))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("{} returned status {}", url, status)
        } else {
            format!("{} returned status {}: {}", url, status, body)
        };
        let code = status.as_u16();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server { status: code, message }
        } else {
            ApiError::Client { status: code, message }
        }
    }

    fn map_domain_error(err: GoBarberError) -> ApiError {
        match err {
            GoBarberError::Network(message) => ApiError::Network(message),
            GoBarberError::Auth(message) => ApiError::Auth(message),
            GoBarberError::Status { status, message } if status >= 500 => {
                ApiError::Server { status, message }
            }
            GoBarberError::Status { status, message } => ApiError::Client { status, message },
            GoBarberError::MalformedPayload(message) => ApiError::Payload(message),
            GoBarberError::Config(message)
            | GoBarberError::InvalidInput(message)
            | GoBarberError::Internal(message) => ApiError::Config(message),
        }
    }
}
