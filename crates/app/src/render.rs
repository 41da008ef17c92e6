//! Plain-text rendering of a dashboard view

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use gobarber_core::dashboard::{CalendarDay, ScheduledAppointment};
use gobarber_core::DashboardView;
use gobarber_domain::Locale;

struct Headings {
    today: &'static str,
    next: &'static str,
    morning: &'static str,
    afternoon: &'static str,
    empty: &'static str,
    loading: &'static str,
    unavailable: &'static str,
    weekdays: [&'static str; 7],
}

fn headings(locale: Locale) -> Headings {
    match locale {
        Locale::PtBr => Headings {
            today: "Hoje",
            next: "Atendimento a seguir",
            morning: "Manhã",
            afternoon: "Tarde",
            empty: "Nenhum agendamento neste período",
            loading: "Agendamentos indisponíveis",
            unavailable: "Dias indisponíveis",
            weekdays: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
        },
        Locale::EnUs => Headings {
            today: "Today",
            next: "Next appointment",
            morning: "Morning",
            afternoon: "Afternoon",
            empty: "No appointments in this period",
            loading: "Appointments unavailable",
            unavailable: "Unavailable days",
            weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        },
    }
}

/// Render `view` for a terminal.
pub fn render_text(view: &DashboardView, locale: Locale) -> String {
    let h = headings(locale);
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.provider.name);
    let today = if view.is_today { format!("{} | ", h.today) } else { String::new() };
    let _ = writeln!(out, "{}{} | {}", today, view.selected_date_label, view.selected_weekday_label);

    if let Some(next) = &view.next_appointment {
        let _ = writeln!(out, "\n{}", h.next);
        write_appointment(&mut out, next);
    }

    if view.schedule_loaded {
        write_bucket(&mut out, h.morning, &view.schedule.morning, h.empty);
        write_bucket(&mut out, h.afternoon, &view.schedule.afternoon, h.empty);
    } else {
        let _ = writeln!(out, "\n{}", h.loading);
    }

    let _ = writeln!(
        out,
        "\n{} {}",
        locale.month_name(view.current_month.month()),
        view.current_month.year()
    );
    write_calendar(&mut out, &view.days, &h.weekdays);

    if !view.disabled_days.is_empty() {
        let days: Vec<String> = view
            .disabled_days
            .iter()
            .filter(|date| view.current_month.contains(**date))
            .map(|date| date.day().to_string())
            .collect();
        let _ = writeln!(out, "{}: {}", h.unavailable, days.join(", "));
    }

    for notice in &view.notices {
        let _ = writeln!(out, "! [{}] {}", notice.kind, notice.message);
    }

    out
}

fn write_bucket(out: &mut String, title: &str, items: &[ScheduledAppointment], empty: &str) {
    let _ = writeln!(out, "\n{title}");
    if items.is_empty() {
        let _ = writeln!(out, "  {empty}");
    }
    for item in items {
        write_appointment(out, item);
    }
}

fn write_appointment(out: &mut String, item: &ScheduledAppointment) {
    let _ = writeln!(out, "  {}  {}", item.hour_label, item.appointment.user.name);
}

/// Sunday-first month grid; `[dd]` is the selected day, `(dd)` today.
fn write_calendar(out: &mut String, days: &[CalendarDay], weekdays: &[&str; 7]) {
    for name in weekdays {
        let _ = write!(out, "{name:>5}");
    }
    out.push('\n');

    let offset = days.first().map(|d| leading_blanks(d.date)).unwrap_or(0);
    out.push_str(&" ".repeat(offset * 5));

    for (index, day) in days.iter().enumerate() {
        let label = if day.modifiers.selected {
            format!("[{:02}]", day.date.day())
        } else if day.modifiers.today {
            format!("({:02})", day.date.day())
        } else {
            format!("{:02}", day.date.day())
        };
        let _ = write!(out, "{label:>5}");

        if (offset + index + 1) % 7 == 0 {
            out.push('\n');
        }
    }
    if (offset + days.len()) % 7 != 0 {
        out.push('\n');
    }
}

fn leading_blanks(first: NaiveDate) -> usize {
    first.weekday().num_days_from_sunday() as usize
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use gobarber_core::dashboard::DashboardState;
    use gobarber_core::DashboardSettings;
    use gobarber_domain::{Appointment, AppointmentUser, Session, SessionUser};

    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    fn view(locale: Locale) -> DashboardView {
        let now = at("2021-04-12T10:00:00Z");
        let mut state = DashboardState::new(NaiveDate::from_ymd_opt(2021, 4, 12).unwrap());
        let request = state.begin_appointments_fetch();
        state.apply_appointments(
            request,
            Ok(vec![Appointment {
                id: "a1".into(),
                date: at("2021-04-12T15:00:00Z"),
                user: AppointmentUser { name: "Ana".into(), avatar_url: None },
            }]),
            now,
        );
        let session = Session::new(
            "t",
            SessionUser { id: "p-1".into(), name: "Diego".into(), avatar_url: None },
        );
        let settings = DashboardSettings { locale, ..Default::default() };
        DashboardView::build(&state, &session, now, &settings)
    }

    #[test]
    fn renders_portuguese_dashboard() {
        let text = render_text(&view(Locale::PtBr), Locale::PtBr);

        assert!(text.starts_with("Diego\nHoje | Dia 12 de abril | segunda-feira\n"));
        assert!(text.contains("Atendimento a seguir\n  15:00  Ana"));
        assert!(text.contains("Manhã\n  Nenhum agendamento neste período"));
        assert!(text.contains("abril 2021"));
        assert!(text.contains("[12]"));
    }

    #[test]
    fn april_2021_grid_starts_on_thursday() {
        let text = render_text(&view(Locale::EnUs), Locale::EnUs);
        let first_week = text
            .lines()
            .skip_while(|line| !line.contains("Sun"))
            .nth(1)
            .unwrap();

        assert_eq!(first_week, format!("{}{:>5}{:>5}{:>5}", " ".repeat(20), "01", "02", "03"));
        assert!(text.contains("Unavailable days: 3, 4, 10, 11"));
    }
}
