use std::time::Duration;

use gobarber_domain::constants::{DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS};
use gobarber_domain::GoBarberError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};

use crate::errors::InfraError;

const DEFAULT_BASE_BACKOFF: Duration = Duration::from_millis(200);
const MAX_BACKOFF: Duration = Duration::from_secs(5);

/// When and how long to wait before re-sending a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Initial try plus retries, at least 1
    pub max_attempts: usize,
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_API_MAX_ATTEMPTS, base_backoff: DEFAULT_BASE_BACKOFF }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based): doubles each time,
    /// capped at five seconds.
    pub fn delay(&self, retry: usize) -> Duration {
        let shift = u32::try_from(retry.saturating_sub(1)).unwrap_or(u32::MAX).min(8);
        self.base_backoff.saturating_mul(1 << shift).min(MAX_BACKOFF)
    }

    /// Upper bound for a whole request sequence when each attempt may take
    /// `per_attempt`: every attempt plus every backoff in between.
    pub fn budget(&self, per_attempt: Duration) -> Duration {
        let attempts = self.max_attempts.max(1);
        let attempt_time = per_attempt.saturating_mul(u32::try_from(attempts).unwrap_or(u32::MAX));
        (1..attempts).map(|retry| self.delay(retry)).fold(attempt_time, Duration::saturating_add)
    }

    fn has_attempts_left(&self, attempt: usize) -> bool {
        attempt < self.max_attempts
    }

    fn retries_status(status: StatusCode) -> bool {
        status.is_server_error()
    }

    fn retries_error(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }
}

/// reqwest wrapper shared by the API adapters.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with the default timeout and a single attempt per request.
    ///
    /// # Errors
    /// Returns `GoBarberError::Config` when the TLS backend cannot start.
    pub fn new() -> Result<Self, GoBarberError> {
        Self::builder().build()
    }

    pub fn max_attempts(&self) -> usize {
        self.retry.max_attempts
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, re-sending on 5xx and connect/timeout failures while
    /// attempts remain. The last response or error is returned as is.
    ///
    /// # Errors
    /// Transport failures mapped through [`InfraError`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, GoBarberError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let request = builder
                .try_clone()
                .ok_or_else(|| GoBarberError::Internal("streaming request bodies cannot be sent".into()))?
                .build()
                .map_err(|err| GoBarberError::from(InfraError::from(err)))?;
            let (method, url) = (request.method().clone(), request.url().clone());
            debug!(attempt, %method, %url, "sending request");

            let retry = match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "response received");
                    if !RetryPolicy::retries_status(status) || !self.retry.has_attempts_left(attempt) {
                        return Ok(response);
                    }
                    status.to_string()
                }
                Err(err) => {
                    if !RetryPolicy::retries_error(&err) || !self.retry.has_attempts_left(attempt) {
                        return Err(InfraError::from(err).into());
                    }
                    err.to_string()
                }
            };

            let delay = self.retry.delay(attempt);
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            warn!(attempt, %url, reason = %retry, delay_ms, "retrying request");
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    retry: RetryPolicy,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.retry.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.retry.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// # Errors
    /// Returns `GoBarberError::Config` when reqwest rejects the settings.
    pub fn build(self) -> Result<HttpClient, GoBarberError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| GoBarberError::from(InfraError::from(err)))?;
        Ok(HttpClient { client, retry: self.retry })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;

    fn client_with_attempts(attempts: usize) -> HttpClient {
        HttpClient::builder()
            .base_backoff(Duration::from_millis(5))
            .max_attempts(attempts)
            .build()
            .unwrap()
    }

    #[test]
    fn backoff_doubles_and_is_capped() {
        let policy = RetryPolicy { max_attempts: 10, base_backoff: Duration::from_millis(200) };

        assert_eq!(policy.delay(1), Duration::from_millis(200));
        assert_eq!(policy.delay(2), Duration::from_millis(400));
        assert_eq!(policy.delay(3), Duration::from_millis(800));
        assert_eq!(policy.delay(9), MAX_BACKOFF);
    }

    #[test]
    fn budget_covers_attempts_and_backoff() {
        let policy = RetryPolicy { max_attempts: 3, base_backoff: Duration::from_millis(200) };
        assert_eq!(policy.budget(Duration::from_secs(1)), Duration::from_millis(3600));

        let single = RetryPolicy { max_attempts: 1, base_backoff: Duration::from_millis(200) };
        assert_eq!(single.budget(Duration::from_secs(1)), Duration::from_secs(1));
    }

    #[test]
    fn defaults_to_a_single_attempt() {
        assert_eq!(HttpClient::new().unwrap().max_attempts(), 1);
        assert_eq!(client_with_attempts(0).max_attempts(), 1);
    }

    #[tokio::test]
    async fn single_attempt_returns_server_error_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn server_errors_are_retried_until_success() {
        let server = MockServer::start().await;
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        Mock::given(method("GET"))
            .respond_with(move |_: &Request| {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    ResponseTemplate::new(502)
                } else {
                    ResponseTemplate::new(200)
                }
            })
            .expect(3)
            .mount(&server)
            .await;

        let client = client_with_attempts(3);
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_attempts(3);
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_with_attempts(2);
        let result = client.send(client.request(Method::GET, format!("http://{addr}"))).await;

        assert!(matches!(result, Err(GoBarberError::Network(_))), "got {result:?}");
    }
}
