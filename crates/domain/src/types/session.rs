//! Authenticated session context
//!
//! Passed explicitly to the dashboard instead of living in ambient global
//! state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signed-in provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider identifier used in `/providers/{id}/...`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Bearer token plus the user it belongs to
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self { token: token.into(), user }
    }

    /// Identifier of the provider whose schedule is displayed.
    pub fn provider_id(&self) -> &str {
        &self.user.id
    }
}

// Token stays out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").field("user", &self.user).finish()
    }
}
