use crate::hooks::{fetched, use_api};
use crate::routes::common::columns;
use carelink_client::api;
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{coverage_percent, DoseStatus, Vaccination};
use shared_ui::{
    Badge, BadgeTone, DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader, StatCard,
};
use std::collections::BTreeMap;

/// Dose counts for one vaccine.
#[derive(Debug, Clone, Default, PartialEq)]
struct VaccineCoverage {
    name: String,
    administered: usize,
    due: usize,
    overdue: usize,
}

impl VaccineCoverage {
    fn total(&self) -> usize {
        self.administered + self.due + self.overdue
    }

    fn percent(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => (self.administered * 100 / total) as u32,
        }
    }
}

/// Group doses by vaccine name, alphabetically. Names are compared
/// case-insensitively and displayed as first seen.
fn coverage_by_vaccine(doses: &[Vaccination], today: NaiveDate) -> Vec<VaccineCoverage> {
    let mut groups: BTreeMap<String, VaccineCoverage> = BTreeMap::new();
    for dose in doses {
        let entry = groups
            .entry(dose.vaccine_name.trim().to_lowercase())
            .or_insert_with(|| VaccineCoverage {
                name: dose.vaccine_name.trim().to_string(),
                ..Default::default()
            });
        match dose.status_on(today) {
            DoseStatus::Administered => entry.administered += 1,
            DoseStatus::Due => entry.due += 1,
            DoseStatus::Overdue => entry.overdue += 1,
        }
    }
    groups.into_values().collect()
}

fn coverage_tone(percent: u32) -> BadgeTone {
    match percent {
        90.. => BadgeTone::Success,
        70..=89 => BadgeTone::Warning,
        _ => BadgeTone::Danger,
    }
}

#[component]
pub fn CoverageReport() -> Element {
    let doses = use_api(|client| async move { api::list_vaccinations(&client).await });

    rsx! {
        PageHeader { title: "Vaccination coverage", subtitle: "Share of scheduled doses given, by vaccine" }
        {fetched(doses, |doses| {
            let today = Local::now().date_naive();
            let rows = coverage_by_vaccine(doses, today);
            let overall = coverage_percent(doses)
                .map(|p| format!("{p}%"))
                .unwrap_or_else(|| "—".to_string());
            rsx! {
                div { class: "page-grid",
                    StatCard { label: "Overall coverage", value: overall }
                    StatCard { label: "Vaccines tracked", value: rows.len().to_string() }
                }
                DataTable { columns: columns(&["Vaccine", "Given", "Due", "Overdue", "Coverage"]),
                    if rows.is_empty() {
                        DataTableEmpty { colspan: 5, message: "No vaccination data yet." }
                    }
                    for row in rows {
                        DataTableRow { key: "{row.name}",
                            DataTableCell { "{row.name}" }
                            DataTableCell { "{row.administered}" }
                            DataTableCell { "{row.due}" }
                            DataTableCell { "{row.overdue}" }
                            DataTableCell {
                                Badge { tone: coverage_tone(row.percent()), "{row.percent()}%" }
                            }
                        }
                    }
                }
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn dose(name: &str, given: Option<NaiveDate>, due: Option<NaiveDate>) -> Vaccination {
        Vaccination {
            id: 1,
            infant_id: 1,
            vaccine_name: name.to_string(),
            dose_number: 1,
            date_administered: given,
            next_due_date: due,
            administered_by: None,
        }
    }

    #[test]
    fn groups_doses_by_vaccine() {
        let doses = [
            dose("OPV", Some(day(1)), None),
            dose("BCG", Some(day(1)), None),
            dose("opv ", None, Some(day(2))),
            dose("OPV", None, Some(day(20))),
        ];
        let rows = coverage_by_vaccine(&doses, day(10));
        assert_eq!(
            rows,
            vec![
                VaccineCoverage { name: "BCG".to_string(), administered: 1, due: 0, overdue: 0 },
                VaccineCoverage { name: "OPV".to_string(), administered: 1, due: 1, overdue: 1 },
            ]
        );
        assert_eq!(rows[1].percent(), 33);
    }

    #[test]
    fn tone_follows_coverage_thresholds() {
        assert_eq!(coverage_tone(95), BadgeTone::Success);
        assert_eq!(coverage_tone(70), BadgeTone::Warning);
        assert_eq!(coverage_tone(10), BadgeTone::Danger);
    }
}
