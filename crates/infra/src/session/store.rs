use gobarber_core::SessionStore;
use gobarber_domain::{Result, Session};
use parking_lot::RwLock;
use tracing::{debug, info};

/// Session store living for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self { session: RwLock::new(Some(session)) }
    }

    /// Replace the active session.
    pub fn sign_in(&self, session: Session) {
        info!(provider_id = %session.provider_id(), "provider signed in");
        *self.session.write() = Some(session);
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }
}

impl SessionStore for InMemorySessionStore {
    fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    fn sign_out(&self) -> Result<()> {
        if self.session.write().take().is_none() {
            debug!("sign out without an active session");
        }
        Ok(())
    }
}
