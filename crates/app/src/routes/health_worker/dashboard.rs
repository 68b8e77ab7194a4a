use crate::hooks::{fetched, use_api};
use carelink_client::api;
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{coverage_percent, DoseStatus, Schedule, ScheduleStatus, Vaccination};
use shared_ui::{PageHeader, StatCard};

#[derive(Debug, Clone, PartialEq)]
struct Caseload {
    parents: usize,
    infants: usize,
    coverage: Option<u32>,
    overdue_doses: usize,
    upcoming_schedules: usize,
}

fn caseload(
    parents: usize,
    infants: usize,
    vaccinations: &[Vaccination],
    schedules: &[Schedule],
    today: NaiveDate,
) -> Caseload {
    Caseload {
        parents,
        infants,
        coverage: coverage_percent(vaccinations),
        overdue_doses: vaccinations
            .iter()
            .filter(|v| v.status_on(today) == DoseStatus::Overdue)
            .count(),
        upcoming_schedules: schedules
            .iter()
            .filter(|s| s.status == ScheduleStatus::Pending && s.scheduled_date >= today)
            .count(),
    }
}

#[component]
pub fn HealthWorkerDashboard() -> Element {
    let summary = use_api(|client| async move {
        let (parents, infants, vaccinations, schedules) = futures::try_join!(
            api::list_parents(&client),
            api::list_infants(&client),
            api::list_vaccinations(&client),
            api::list_schedules(&client),
        )?;
        let today = Local::now().date_naive();
        Ok(caseload(
            parents.len(),
            infants.len(),
            &vaccinations,
            &schedules,
            today,
        ))
    });

    rsx! {
        PageHeader { title: "Dashboard", subtitle: "Your caseload at a glance" }
        {fetched(summary, |s| rsx! {
            div { class: "page-grid",
                StatCard { label: "Parents", value: s.parents.to_string() }
                StatCard { label: "Infants", value: s.infants.to_string() }
                StatCard {
                    label: "Vaccination coverage",
                    value: s.coverage.map(|p| format!("{p}%")).unwrap_or_else(|| "—".to_string()),
                }
                StatCard { label: "Overdue doses", value: s.overdue_doses.to_string() }
                StatCard { label: "Upcoming appointments", value: s.upcoming_schedules.to_string() }
            }
        })}
    }
}
