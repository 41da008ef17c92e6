//! Appointment types returned by `GET /appointments/me`

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Customer attached to an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A booked appointment for the signed-in provider
///
/// Immutable once fetched; the list for a day is replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// RFC 3339 timestamp on the wire
    pub date: DateTime<Utc>,
    pub user: AppointmentUser,
}

impl Appointment {
    /// Start time converted into the given timezone.
    pub fn local_time<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.date.with_timezone(tz)
    }

    /// Hour of day (0-23) in the given timezone.
    pub fn local_hour<Tz: TimeZone>(&self, tz: &Tz) -> u32 {
        self.local_time(tz).hour()
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "id": "a1",
            "date": "2021-04-12T08:00:00Z",
            "user": {"name": "Eduardo Leal", "avatar_url": "https://cdn.example/eduardo.png"}
        }"#;

        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.id, "a1");
        assert_eq!(appointment.user.name, "Eduardo Leal");
        assert_eq!(appointment.local_hour(&Utc), 8);
    }

    #[test]
    fn avatar_is_optional() {
        let json = r#"{"id": "a2", "date": "2021-04-12T15:30:00Z", "user": {"name": "Ana"}}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(appointment.user.avatar_url.is_none());
    }

    #[test]
    fn local_hour_follows_timezone() {
        let json = r#"{"id": "a3", "date": "2021-04-12T13:00:00Z", "user": {"name": "Ana"}}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();

        assert_eq!(appointment.local_hour(&sao_paulo), 10);
    }
}
