//! Session and navigation ports
//!
//! Logout clears the session through [`SessionStore`] and moves the user
//! back to the root path through [`Navigator`].

use gobarber_domain::{Result, Session};

/// Storage for the authenticated session
pub trait SessionStore: Send + Sync {
    /// Current session, if signed in
    fn current(&self) -> Option<Session>;

    /// Clear the stored session
    fn sign_out(&self) -> Result<()>;
}

/// Moves the user between application routes
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
