//! Selection state and fetched data slots
//!
//! Selection (selected date, displayed month) is the only user-driven
//! state. The availability list and the appointment list are replaced
//! wholesale by successful fetches and are stored together with the month or
//! date they were fetched for, so derived values never mix data from a
//! different month or day.
//!
//! Each slot issues monotonically increasing [`FetchTicket`]s. Only the
//! response to the most recently issued ticket is applied; earlier responses
//! that arrive late are discarded.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use gobarber_domain::{
    Appointment, CalendarMonth, ErrorKind, GoBarberError, MonthAvailabilityItem, Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::calendar::{disabled_days, is_selectable, is_weekend};

/// Which fetch a ticket or notice belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchSlot {
    Availability,
    Appointments,
}

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    slot: FetchSlot,
    sequence: u64,
}

impl FetchTicket {
    pub fn slot(&self) -> FetchSlot {
        self.slot
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug)]
struct FetchSequence {
    slot: FetchSlot,
    issued: u64,
}

impl FetchSequence {
    fn new(slot: FetchSlot) -> Self {
        Self { slot, issued: 0 }
    }

    fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket { slot: self.slot, sequence: self.issued }
    }

    fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.slot == self.slot && ticket.sequence == self.issued
    }
}

/// Parameters of a pending availability fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub ticket: FetchTicket,
    pub month: CalendarMonth,
}

/// Parameters of a pending appointment fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentsRequest {
    pub ticket: FetchTicket,
    pub date: NaiveDate,
}

/// Why a day click was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    Weekend,
    Unavailable,
}

/// Result of a day click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl SelectionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Result of applying a fetch response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Data replaced
    Applied,
    /// A newer request was issued; response dropped
    Stale,
    /// Request failed; prior data kept and a notice raised
    Failed(ErrorKind),
}

/// Non-blocking inline notice for a failed fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub slot: FetchSlot,
    pub kind: ErrorKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Mutable dashboard state owned by the view
#[derive(Debug)]
pub struct DashboardState {
    selected_date: NaiveDate,
    /// False while the selection is the initial default
    selection_confirmed: bool,
    current_month: CalendarMonth,
    availability: Option<(CalendarMonth, Vec<MonthAvailabilityItem>)>,
    appointments: Option<(NaiveDate, Vec<Appointment>)>,
    availability_seq: FetchSequence,
    appointment_seq: FetchSequence,
    notices: Vec<Notice>,
    next_notice_id: u64,
}

impl DashboardState {
    /// Start on the first weekday on or after `today`, displaying its month.
    ///
    /// Until the user clicks a day, the default selection also moves past
    /// days that the displayed month's availability marks unavailable.
    pub fn new(today: NaiveDate) -> Self {
        let selected = next_weekday(today);
        Self {
            selected_date: selected,
            selection_confirmed: false,
            current_month: CalendarMonth::of(selected),
            availability: None,
            appointments: None,
            availability_seq: FetchSequence::new(FetchSlot::Availability),
            appointment_seq: FetchSequence::new(FetchSlot::Appointments),
            notices: Vec::new(),
            next_notice_id: 1,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_month(&self) -> CalendarMonth {
        self.current_month
    }

    /// Availability items for the displayed month; empty until fetched.
    pub fn availability(&self) -> &[MonthAvailabilityItem] {
        match &self.availability {
            Some((month, items)) if *month == self.current_month => items.as_slice(),
            _ => &[],
        }
    }

    /// Appointments for the selected date, or `None` until they are fetched.
    pub fn appointments(&self) -> Option<&[Appointment]> {
        match &self.appointments {
            Some((date, items)) if *date == self.selected_date => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Disabled dates of the displayed month.
    pub fn disabled_days(&self) -> BTreeSet<NaiveDate> {
        disabled_days(self.current_month, self.availability())
    }

    /// Day-click guard: accept only days carrying the "available" modifier.
    pub fn select_day(&mut self, date: NaiveDate) -> SelectionOutcome {
        if is_weekend(date) {
            debug!(%date, "day click rejected: weekend");
            return SelectionOutcome::Rejected(RejectReason::Weekend);
        }
        if !is_selectable(date, &self.disabled_days()) {
            debug!(%date, "day click rejected: unavailable");
            return SelectionOutcome::Rejected(RejectReason::Unavailable);
        }

        self.selected_date = date;
        self.selection_confirmed = true;
        SelectionOutcome::Accepted
    }

    /// Display another month. Returns false when it is already displayed.
    pub fn change_month(&mut self, month: CalendarMonth) -> bool {
        if month == self.current_month {
            return false;
        }
        self.current_month = month;
        true
    }

    /// Issue a ticket for the displayed month's availability.
    pub fn begin_availability_fetch(&mut self) -> AvailabilityRequest {
        AvailabilityRequest { ticket: self.availability_seq.issue(), month: self.current_month }
    }

    /// Issue a ticket for the selected date's appointments.
    pub fn begin_appointments_fetch(&mut self) -> AppointmentsRequest {
        AppointmentsRequest { ticket: self.appointment_seq.issue(), date: self.selected_date }
    }

    /// Apply an availability response.
    pub fn apply_availability(
        &mut self,
        request: AvailabilityRequest,
        result: Result<Vec<MonthAvailabilityItem>>,
        now: DateTime<Utc>,
    ) -> ApplyOutcome {
        if !self.availability_seq.is_latest(request.ticket) {
            debug!(
                sequence = request.ticket.sequence(),
                month = %request.month,
                "discarding stale availability response"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(items) => {
                debug!(month = %request.month, items = items.len(), "availability replaced");
                self.availability = Some((request.month, items));
                self.settle_default_selection();
                ApplyOutcome::Applied
            }
            Err(err) => {
                warn!(month = %request.month, error = %err, "availability fetch failed");
                self.raise_notice(FetchSlot::Availability, &err, now)
            }
        }
    }

    /// Apply an appointments response.
    pub fn apply_appointments(
        &mut self,
        request: AppointmentsRequest,
        result: Result<Vec<Appointment>>,
        now: DateTime<Utc>,
    ) -> ApplyOutcome {
        if !self.appointment_seq.is_latest(request.ticket) {
            debug!(
                sequence = request.ticket.sequence(),
                date = %request.date,
                "discarding stale appointments response"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(items) => {
                debug!(date = %request.date, items = items.len(), "appointments replaced");
                self.appointments = Some((request.date, items));
                ApplyOutcome::Applied
            }
            Err(err) => {
                warn!(date = %request.date, error = %err, "appointments fetch failed");
                self.raise_notice(FetchSlot::Appointments, &err, now)
            }
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Remove one notice. Returns false when no notice has that id.
    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }

    /// Move an unconfirmed default selection off a disabled day of the
    /// displayed month, onto the next selectable day of that month.
    fn settle_default_selection(&mut self) {
        if self.selection_confirmed || !self.current_month.contains(self.selected_date) {
            return;
        }
        let disabled = self.disabled_days();
        if is_selectable(self.selected_date, &disabled) {
            return;
        }
        let from = self.selected_date;
        let next = self.current_month.days().find(|date| *date > from && is_selectable(*date, &disabled));
        if let Some(next) = next {
            debug!(%from, to = %next, "default selection moved to an available day");
            self.selected_date = next;
        }
    }

    fn raise_notice(
        &mut self,
        slot: FetchSlot,
        err: &GoBarberError,
        now: DateTime<Utc>,
    ) -> ApplyOutcome {
        let kind = err.kind();
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice { id, slot, kind, message: err.to_string(), raised_at: now });
        ApplyOutcome::Failed(kind)
    }
}

/// `date` itself when it is a weekday, otherwise the following Monday.
fn next_weekday(date: NaiveDate) -> NaiveDate {
    date.iter_days().find(|day| !is_weekend(*day)).unwrap_or(date)
}
