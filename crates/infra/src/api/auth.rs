//! Bearer-token sources for the API client

use std::sync::Arc;

use async_trait::async_trait;
use gobarber_core::SessionStore;
use tracing::debug;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the bearer token for the next request
    async fn access_token(&self) -> Result<String, ApiError>;
}

/// Reads the token of the currently signed-in provider.
///
/// Fails with [`ApiError::Auth`] once the session has been cleared, so no
/// request leaves the process after logout.
pub struct SessionTokenProvider {
    sessions: Arc<dyn SessionStore>,
}

impl SessionTokenProvider {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> Result<String, ApiError> {
        match self.sessions.current() {
            Some(session) => Ok(session.token),
            None => {
                debug!("no active session for API request");
                Err(ApiError::Auth("no active session".into()))
            }
        }
    }
}
