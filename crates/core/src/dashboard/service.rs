//! Dashboard service - core business logic
//!
//! Couples the selection state to the two fetchers. A day click re-runs the
//! appointment fetch, a month change re-runs the availability fetch, and
//! both run independently of each other.

use std::sync::Arc;

use chrono::NaiveDate;
use gobarber_domain::constants::ROOT_PATH;
use gobarber_domain::{CalendarMonth, Result, Session};
use parking_lot::Mutex;
use tracing::{info, instrument};

use super::ports::{AppointmentProvider, AvailabilityProvider};
use super::state::{ApplyOutcome, DashboardState, Notice, SelectionOutcome};
use super::view::{DashboardSettings, DashboardView};
use crate::clock::Clock;
use crate::session::{Navigator, SessionStore};

/// External collaborators of the dashboard
#[derive(Clone)]
pub struct DashboardPorts {
    pub availability: Arc<dyn AvailabilityProvider>,
    pub appointments: Arc<dyn AppointmentProvider>,
    pub sessions: Arc<dyn SessionStore>,
    pub navigator: Arc<dyn Navigator>,
}

/// Dashboard view-model
pub struct DashboardService {
    session: Session,
    ports: DashboardPorts,
    clock: Arc<dyn Clock>,
    settings: DashboardSettings,
    state: Mutex<DashboardState>,
}

impl DashboardService {
    /// Create a dashboard for `session`, selecting today in the configured
    /// timezone.
    pub fn new(
        session: Session,
        ports: DashboardPorts,
        settings: DashboardSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let today = settings.today(clock.now());
        Self { session, ports, clock, settings, state: Mutex::new(DashboardState::new(today)) }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.lock().selected_date()
    }

    pub fn current_month(&self) -> CalendarMonth {
        self.state.lock().current_month()
    }

    /// Initial load: both fetches run concurrently.
    pub async fn load(&self) -> (ApplyOutcome, ApplyOutcome) {
        tokio::join!(self.refresh_availability(), self.refresh_appointments())
    }

    /// Fetch availability for the displayed month.
    #[instrument(skip(self), fields(provider_id = %self.session.provider_id()))]
    pub async fn refresh_availability(&self) -> ApplyOutcome {
        let request = self.state.lock().begin_availability_fetch();
        let result = self
            .ports
            .availability
            .month_availability(self.session.provider_id(), request.month)
            .await;

        let now = self.clock.now();
        let (outcome, moved) = {
            let mut state = self.state.lock();
            let before = state.selected_date();
            let outcome = state.apply_availability(request, result, now);
            (outcome, state.selected_date() != before)
        };

        if moved {
            self.refresh_appointments().await;
        }
        outcome
    }

    /// Fetch appointments for the selected date.
    #[instrument(skip(self), fields(provider_id = %self.session.provider_id()))]
    pub async fn refresh_appointments(&self) -> ApplyOutcome {
        let request = self.state.lock().begin_appointments_fetch();
        let result = self.ports.appointments.day_appointments(request.date).await;

        let now = self.clock.now();
        self.state.lock().apply_appointments(request, result, now)
    }

    /// Handle a calendar day click. Accepted clicks reload appointments;
    /// rejected ones change nothing.
    #[instrument(skip(self))]
    pub async fn click_day(&self, date: NaiveDate) -> SelectionOutcome {
        let outcome = self.state.lock().select_day(date);
        if outcome.is_accepted() {
            self.refresh_appointments().await;
        }
        outcome
    }

    /// Display `month` and reload its availability. Returns `None` when the
    /// month is already displayed.
    #[instrument(skip(self), fields(month = %month))]
    pub async fn change_month(&self, month: CalendarMonth) -> Option<ApplyOutcome> {
        let changed = self.state.lock().change_month(month);
        if !changed {
            return None;
        }
        Some(self.refresh_availability().await)
    }

    pub async fn show_next_month(&self) -> Option<ApplyOutcome> {
        let next = self.current_month().next()?;
        self.change_month(next).await
    }

    pub async fn show_previous_month(&self) -> Option<ApplyOutcome> {
        let previous = self.current_month().previous()?;
        self.change_month(previous).await
    }

    /// Current display snapshot.
    pub fn view(&self) -> DashboardView {
        let now = self.clock.now();
        let state = self.state.lock();
        DashboardView::build(&state, &self.session, now, &self.settings)
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.state.lock().notices().to_vec()
    }

    pub fn dismiss_notice(&self, id: u64) -> bool {
        self.state.lock().dismiss_notice(id)
    }

    pub fn dismiss_notices(&self) {
        self.state.lock().dismiss_notices();
    }

    /// Clear the session and return to the root path.
    ///
    /// # Errors
    /// Returns the session store error; navigation is skipped in that case.
    #[instrument(skip(self), fields(provider_id = %self.session.provider_id()))]
    pub fn logout(&self) -> Result<()> {
        self.ports.sessions.sign_out()?;
        self.ports.navigator.navigate(ROOT_PATH);
        info!("provider signed out");
        Ok(())
    }
}
