use crate::hooks::{fetched, use_api};
use carelink_client::api;
use dioxus::prelude::*;
use shared_types::coverage_percent;
use shared_ui::{PageHeader, StatCard};

#[derive(Debug, Clone, PartialEq)]
struct Totals {
    parents: usize,
    infants: usize,
    visits: usize,
    facilities: usize,
    coverage: Option<u32>,
}

#[component]
pub fn AnalystDashboard() -> Element {
    let totals = use_api(|client| async move {
        let (parents, infants, visits, vaccinations, facilities) = futures::try_join!(
            api::list_parents(&client),
            api::list_infants(&client),
            api::list_visits(&client),
            api::list_vaccinations(&client),
            api::list_facilities(&client),
        )?;
        Ok(Totals {
            parents: parents.len(),
            infants: infants.len(),
            visits: visits.len(),
            facilities: facilities.len(),
            coverage: coverage_percent(&vaccinations),
        })
    });

    rsx! {
        PageHeader { title: "Dashboard", subtitle: "Programme-wide figures" }
        {fetched(totals, |t| rsx! {
            div { class: "page-grid",
                StatCard { label: "Registered parents", value: t.parents.to_string() }
                StatCard { label: "Registered infants", value: t.infants.to_string() }
                StatCard { label: "Visits logged", value: t.visits.to_string() }
                StatCard { label: "Facilities", value: t.facilities.to_string() }
                StatCard {
                    label: "Vaccination coverage",
                    value: t.coverage.map(|p| format!("{p}%")).unwrap_or_else(|| "—".to_string()),
                    hint: "Doses given out of all recorded",
                }
            }
        })}
    }
}
