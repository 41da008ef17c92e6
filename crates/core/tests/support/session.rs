use std::sync::Mutex;

use gobarber_core::{Navigator, SessionStore};
use gobarber_domain::{GoBarberError, Result as DomainResult, Session};

/// Session store holding one optional session; can be told to fail.
#[derive(Default)]
pub struct MockSessionStore {
    session: Mutex<Option<Session>>,
    fail_sign_out: bool,
}

impl MockSessionStore {
    pub fn signed_in(session: Session) -> Self {
        Self { session: Mutex::new(Some(session)), fail_sign_out: false }
    }

    pub fn failing(session: Session) -> Self {
        Self { session: Mutex::new(Some(session)), fail_sign_out: true }
    }
}

impl SessionStore for MockSessionStore {
    fn current(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn sign_out(&self) -> DomainResult<()> {
        if self.fail_sign_out {
            return Err(GoBarberError::Internal("session storage unavailable".into()));
        }
        self.session.lock().unwrap().take();
        Ok(())
    }
}

/// Navigator that records every visited path.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}
