//! End-to-end dashboard flow against a mocked GoBarber API.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use gobarber_core::{
    DashboardPorts, DashboardService, DashboardSettings, FixedClock, SessionStore,
};
use gobarber_core::dashboard::ApplyOutcome;
use gobarber_domain::{ErrorKind, Locale, Session, SessionUser};
use gobarber_infra::{
    ApiClient, ApiClientConfig, InMemorySessionStore, MemoryHistory, ScheduleApi,
    SessionTokenProvider,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct App {
    service: DashboardService,
    sessions: Arc<InMemorySessionStore>,
    history: Arc<MemoryHistory>,
}

fn session() -> Session {
    Session::new(
        "jwt-token",
        SessionUser { id: "provider-7".into(), name: "Diego".into(), avatar_url: None },
    )
}

fn build_app(server: &MockServer) -> App {
    let sessions = Arc::new(InMemorySessionStore::with_session(session()));
    let history = Arc::new(MemoryHistory::new("/dashboard"));

    let auth = Arc::new(SessionTokenProvider::new(sessions.clone()));
    let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
    let api = Arc::new(ScheduleApi::new(Arc::new(ApiClient::new(config, auth).unwrap())));

    let ports = DashboardPorts {
        availability: api.clone(),
        appointments: api,
        sessions: sessions.clone(),
        navigator: history.clone(),
    };
    let now = DateTime::parse_from_rfc3339("2021-04-12T10:00:00Z").unwrap().with_timezone(&Utc);
    let settings = DashboardSettings { locale: Locale::EnUs, ..Default::default() };
    let service = DashboardService::new(session(), ports, settings, Arc::new(FixedClock(now)));

    App { service, sessions, history }
}

#[tokio::test]
async fn loads_dashboard_from_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/providers/provider-7/month-availability"))
        .and(query_param("year", "2021"))
        .and(query_param("month", "4"))
        .and(header("Authorization", "Bearer jwt-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"day":13,"available":false},{"day":14,"available":true}]"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments/me"))
        .and(query_param("day", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"id":"a1","date":"2021-04-12T08:00:00Z","user":{"name":"Ana","avatar_url":null}},
                {"id":"a2","date":"2021-04-12T14:30:00Z","user":{"name":"Bruno","avatar_url":"https://cdn/b.png"}}
            ]"#,
        ))
        .mount(&server)
        .await;

    let app = build_app(&server);
    let (availability, appointments) = app.service.load().await;

    assert_eq!(availability, ApplyOutcome::Applied);
    assert_eq!(appointments, ApplyOutcome::Applied);

    let view = app.service.view();
    assert!(view.disabled_days.contains(&NaiveDate::from_ymd_opt(2021, 4, 13).unwrap()));
    assert!(!view.disabled_days.contains(&NaiveDate::from_ymd_opt(2021, 4, 14).unwrap()));
    assert_eq!(view.schedule.morning[0].appointment.id, "a1");
    assert_eq!(view.schedule.afternoon[0].hour_label, "14:30");
    assert_eq!(view.next_appointment.unwrap().appointment.user.name, "Bruno");
}

#[tokio::test]
async fn server_errors_become_notices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/providers/provider-7/month-availability"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = build_app(&server);
    let (availability, appointments) = app.service.load().await;

    assert_eq!(availability, ApplyOutcome::Failed(ErrorKind::Status));
    assert_eq!(appointments, ApplyOutcome::Failed(ErrorKind::MalformedPayload));
    assert_eq!(app.service.view().notices.len(), 2);
}

#[tokio::test]
async fn logout_clears_session_and_stops_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(&server);
    app.service.logout().unwrap();

    assert!(app.sessions.current().is_none());
    assert_eq!(app.history.location(), "/");

    let outcome = app.service.refresh_appointments().await;
    assert_eq!(outcome, ApplyOutcome::Failed(ErrorKind::Session));
}
