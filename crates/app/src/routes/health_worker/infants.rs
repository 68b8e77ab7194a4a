use crate::format_helpers::{format_date, format_optional_date, or_dash, pluralize};
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, dose_badge, DetailItem, SearchBox};
use super::vaccinations::RecordDose;
use crate::routes::Route;
use carelink_client::api;
use chrono::Local;
use dioxus::prelude::*;
use shared_types::{coverage_percent, Infant, Vaccination};
use shared_ui::{
    Badge, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableEmpty, DataTableRow,
    PageHeader,
};

fn infant_matches(infant: &Infant, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty() || infant.full_name().to_lowercase().contains(&q)
}

#[component]
pub fn InfantList() -> Element {
    let infants = use_api(|client| async move { api::list_infants(&client).await });
    let query = use_signal(String::new);

    rsx! {
        PageHeader { title: "Infants", subtitle: "Children under care" }
        SearchBox { query, placeholder: "Search by name" }
        {fetched(infants, |infants| {
            let q = query();
            let today = Local::now().date_naive();
            let visible: Vec<&Infant> = infants.iter().filter(|i| infant_matches(i, &q)).collect();
            rsx! {
                DataTable { columns: columns(&["Name", "Gender", "Born", "Age"]),
                    if visible.is_empty() {
                        DataTableEmpty { colspan: 4, message: "No infants match your search." }
                    }
                    for infant in visible {
                        DataTableRow {
                            key: "{infant.id}",
                            onclick: {
                                let id = infant.id;
                                move |_| {
                                    navigator().push(Route::InfantDetail { id });
                                }
                            },
                            DataTableCell { "{infant.full_name()}" }
                            DataTableCell { {or_dash(infant.gender.as_ref().map(|g| g.as_str()))} }
                            DataTableCell { {format_date(infant.date_of_birth)} }
                            DataTableCell { {pluralize(infant.age_in_months(today) as usize, "month")} }
                        }
                    }
                }
            }
        })}
    }
}

/// Keyed by id so navigating between infants starts a fresh fetch.
#[component]
pub fn InfantDetail(id: i64) -> Element {
    rsx! {
        InfantRecord { key: "{id}", id }
    }
}

#[component]
fn InfantRecord(id: i64) -> Element {
    let mut record = use_api(move |client| async move {
        let (infant, doses) = futures::try_join!(
            api::get_infant(&client, id),
            api::list_vaccinations(&client),
        )?;
        let doses: Vec<Vaccination> = doses.into_iter().filter(|v| v.infant_id == id).collect();
        Ok((infant, doses))
    });

    rsx! {
        {fetched(record, |(infant, doses)| {
            let today = Local::now().date_naive();
            let coverage = coverage_percent(doses)
                .map(|p| format!("{p}% of doses given"))
                .unwrap_or_else(|| "No doses scheduled".to_string());
            rsx! {
                PageHeader { title: infant.full_name(), subtitle: coverage }
                div { class: "page-grid",
                    Card {
                        CardHeader { title: "Profile" }
                        CardContent {
                            dl { class: "detail-list",
                                DetailItem { label: "Born", value: format_date(infant.date_of_birth) }
                                DetailItem {
                                    label: "Age",
                                    value: pluralize(infant.age_in_months(today) as usize, "month"),
                                }
                                DetailItem {
                                    label: "Gender",
                                    value: or_dash(infant.gender.as_ref().map(|g| g.as_str())),
                                }
                                DetailItem {
                                    label: "Birth weight",
                                    value: infant.birth_weight.map(|kg| format!("{kg:.2} kg")).unwrap_or_else(|| "—".to_string()),
                                }
                            }
                            if let Some(parent_id) = infant.parent_id {
                                Link { class: "detail-link", to: Route::ParentDetail { id: parent_id }, "View parent" }
                            }
                        }
                    }
                    Card {
                        CardHeader { title: "Immunisation record" }
                        CardContent {
                            DataTable { columns: columns(&["Vaccine", "Dose", "Given", "Next due", "Status"]),
                                if doses.is_empty() {
                                    DataTableEmpty { colspan: 5, message: "No vaccinations recorded." }
                                }
                                for dose in doses.iter() {
                                    DoseRow { key: "{dose.id}", dose: dose.clone() }
                                }
                            }
                        }
                    }
                }
                RecordDose { infant_id: infant.id, on_recorded: move |_| record.restart() }
            }
        })}
    }
}

#[component]
fn DoseRow(dose: Vaccination) -> Element {
    let (tone, label) = dose_badge(dose.status_on(Local::now().date_naive()));
    rsx! {
        DataTableRow {
            DataTableCell { "{dose.vaccine_name}" }
            DataTableCell { "{dose.dose_number}" }
            DataTableCell { {format_optional_date(dose.date_administered)} }
            DataTableCell { {format_optional_date(dose.next_due_date)} }
            DataTableCell {
                Badge { tone, "{label}" }
            }
        }
    }
}
