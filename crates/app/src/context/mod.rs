//! Application context - dependency injection container

use std::sync::Arc;

use gobarber_core::{DashboardPorts, DashboardService, DashboardSettings, SystemClock};
use gobarber_domain::{Config, Result, Session};
use gobarber_infra::{
    ApiClient, ApiClientConfig, InMemorySessionStore, MemoryHistory, ScheduleApi,
    SessionTokenProvider,
};
use tracing::{debug, info};

/// Path the dashboard is served from
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Wired-up services for one signed-in provider
pub struct AppContext {
    pub config: Config,
    pub sessions: Arc<InMemorySessionStore>,
    pub history: Arc<MemoryHistory>,
    pub dashboard: DashboardService,
}

impl AppContext {
    /// Build the dashboard for `session` against the configured API.
    ///
    /// # Errors
    /// Returns `GoBarberError::Config` for an invalid base URL or timezone.
    pub fn new(config: Config, session: Session) -> Result<Self> {
        info!(
            provider_id = %session.provider_id(),
            base_url = %config.api.base_url,
            "initializing application context"
        );

        let sessions = Arc::new(InMemorySessionStore::with_session(session.clone()));
        let history = Arc::new(MemoryHistory::new(DASHBOARD_PATH));

        let auth = Arc::new(SessionTokenProvider::new(sessions.clone()));
        let client = ApiClient::new(ApiClientConfig::from(&config.api), auth)?;
        let api = Arc::new(ScheduleApi::new(Arc::new(client)));
        debug!("schedule API ready");

        let settings = DashboardSettings::from_config(&config.dashboard)?;
        let ports = DashboardPorts {
            availability: api.clone(),
            appointments: api,
            sessions: sessions.clone(),
            navigator: history.clone(),
        };
        let dashboard = DashboardService::new(session, ports, settings, Arc::new(SystemClock));

        Ok(Self { config, sessions, history, dashboard })
    }
}
