//! Provider schedule endpoints

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use gobarber_core::{AppointmentProvider, AvailabilityProvider};
use gobarber_domain::{Appointment, CalendarMonth, MonthAvailabilityItem, Result};
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;

/// Remote availability and appointment fetchers
pub struct ScheduleApi {
    client: Arc<ApiClient>,
}

impl ScheduleApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AvailabilityProvider for ScheduleApi {
    /// `GET /providers/{id}/month-availability?year=&month=`
    #[instrument(skip(self, month), fields(year = month.year(), month = month.month()))]
    async fn month_availability(
        &self,
        provider_id: &str,
        month: CalendarMonth,
    ) -> Result<Vec<MonthAvailabilityItem>> {
        let path = format!("/providers/{}/month-availability", encode(provider_id));
        let query = [("year", month.year().to_string()), ("month", month.month().to_string())];

        let items: Vec<MonthAvailabilityItem> = self.client.get_json(&path, &query).await?;
        debug!(items = items.len(), "month availability fetched");
        Ok(items)
    }
}

#[async_trait]
impl AppointmentProvider for ScheduleApi {
    /// `GET /appointments/me?year=&month=&day=`
    #[instrument(skip(self))]
    async fn day_appointments(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let query = [
            ("year", date.year().to_string()),
            ("month", date.month().to_string()),
            ("day", date.day().to_string()),
        ];

        let appointments: Vec<Appointment> =
            self.client.get_json("/appointments/me", &query).await?;
        debug!(appointments = appointments.len(), "day appointments fetched");
        Ok(appointments)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use gobarber_domain::{ErrorKind, GoBarberError};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{AccessTokenProvider, ApiClientConfig, ApiError};

    struct FixedToken;

    #[async_trait]
    impl AccessTokenProvider for FixedToken {
        async fn access_token(&self) -> std::result::Result<String, ApiError> {
            Ok("token".into())
        }
    }

    fn schedule_api(server: &MockServer) -> ScheduleApi {
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        ScheduleApi::new(Arc::new(ApiClient::new(config, Arc::new(FixedToken)).unwrap()))
    }

    #[tokio::test]
    async fn fetches_month_availability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/providers/p-1/month-availability"))
            .and(query_param("year", "2021"))
            .and(query_param("month", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"day":5,"available":false},{"day":6,"available":true}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let items = schedule_api(&server)
            .month_availability("p-1", CalendarMonth::new(2021, 3).unwrap())
            .await
            .unwrap();

        assert_eq!(
            items,
            vec![
                MonthAvailabilityItem { day: 5, available: false },
                MonthAvailabilityItem { day: 6, available: true },
            ]
        );
    }

    #[tokio::test]
    async fn provider_id_is_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/providers/a%2Fb/month-availability"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let items = schedule_api(&server)
            .month_availability("a/b", CalendarMonth::new(2021, 4).unwrap())
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn fetches_day_appointments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appointments/me"))
            .and(query_param("year", "2021"))
            .and(query_param("month", "4"))
            .and(query_param("day", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id":"a1","date":"2021-04-12T08:00:00Z","user":{"name":"Ana","avatar_url":null}}]"#,
            ))
            .mount(&server)
            .await;

        let appointments = schedule_api(&server)
            .day_appointments(NaiveDate::from_ymd_opt(2021, 4, 12).unwrap())
            .await
            .unwrap();

        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].id, "a1");
        assert_eq!(appointments[0].user.name, "Ana");
    }

    #[tokio::test]
    async fn failures_surface_as_domain_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appointments/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error":"nope"}"#))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/providers/p-1/month-availability"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let api = schedule_api(&server);
        let appointments =
            api.day_appointments(NaiveDate::from_ymd_opt(2021, 4, 12).unwrap()).await;
        let availability =
            api.month_availability("p-1", CalendarMonth::new(2021, 4).unwrap()).await;

        assert_eq!(appointments.unwrap_err().kind(), ErrorKind::MalformedPayload);
        assert!(matches!(availability, Err(GoBarberError::Status { status: 503, .. })));
    }
}
