use crate::format_helpers::format_optional_date;
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, dose_badge, optional, parse_date};
use carelink_client::{api, ApiClient};
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{DoseStatus, NewVaccination, Vaccination};
use shared_ui::{
    Badge, Button, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, Form, FormAlert, PageHeader, SelectField, TextField,
};
use std::collections::HashMap;

/// Status filter above the vaccination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoseFilter {
    All,
    Only(DoseStatus),
}

impl DoseFilter {
    fn parse(value: &str) -> Self {
        match value {
            "administered" => Self::Only(DoseStatus::Administered),
            "due" => Self::Only(DoseStatus::Due),
            "overdue" => Self::Only(DoseStatus::Overdue),
            _ => Self::All,
        }
    }

    fn keeps(self, dose: &Vaccination, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => dose.status_on(today) == status,
        }
    }
}

fn filter_options() -> Vec<(String, String)> {
    [
        ("all", "All doses"),
        ("due", "Due"),
        ("overdue", "Overdue"),
        ("administered", "Administered"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[component]
pub fn VaccinationList() -> Element {
    let data = use_api(|client| async move {
        futures::try_join!(api::list_vaccinations(&client), api::list_infants(&client))
    });
    let mut filter = use_signal(|| "all".to_string());

    rsx! {
        PageHeader { title: "Vaccinations", subtitle: "Doses given and due" }
        div { class: "page-toolbar",
            SelectField {
                label: "Show",
                value: filter(),
                options: filter_options(),
                on_change: move |v| filter.set(v),
            }
        }
        {fetched(data, |(doses, infants)| {
            let today = Local::now().date_naive();
            let names: HashMap<i64, String> = infants.iter().map(|i| (i.id, i.full_name())).collect();
            let mode = DoseFilter::parse(&filter());
            let visible: Vec<&Vaccination> = doses.iter().filter(|d| mode.keeps(d, today)).collect();
            rsx! {
                DataTable { columns: columns(&["Infant", "Vaccine", "Dose", "Given", "Next due", "Status"]),
                    if visible.is_empty() {
                        DataTableEmpty { colspan: 6, message: "No doses to show." }
                    }
                    for dose in visible {
                        VaccinationRow {
                            key: "{dose.id}",
                            infant: names
                                .get(&dose.infant_id)
                                .cloned()
                                .unwrap_or_else(|| format!("Infant #{}", dose.infant_id)),
                            dose: dose.clone(),
                        }
                    }
                }
            }
        })}
    }
}

#[component]
fn VaccinationRow(infant: String, dose: Vaccination) -> Element {
    let (tone, label) = dose_badge(dose.status_on(Local::now().date_naive()));
    rsx! {
        DataTableRow {
            DataTableCell { "{infant}" }
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

#[derive(Debug, Clone, PartialEq)]
struct DoseDraft {
    vaccine_name: String,
    dose_number: String,
    date_administered: String,
    next_due_date: String,
}

impl DoseDraft {
    fn today() -> Self {
        Self {
            vaccine_name: String::new(),
            dose_number: "1".to_string(),
            date_administered: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            next_due_date: String::new(),
        }
    }

    fn validate(&self, infant_id: i64) -> Result<NewVaccination, String> {
        let vaccine_name = optional(&self.vaccine_name).ok_or("Vaccine name is required.")?;
        let dose_number = self
            .dose_number
            .trim()
            .parse::<u32>()
            .map_err(|_| "Dose number must be a whole number.")?;
        let date_administered =
            parse_date(&self.date_administered).ok_or("Date given is required.")?;
        let next_due_date = match optional(&self.next_due_date) {
            Some(raw) => Some(parse_date(&raw).ok_or("Next due date must be a valid date.")?),
            None => None,
        };
        Ok(NewVaccination {
            infant_id,
            vaccine_name,
            dose_number,
            date_administered,
            next_due_date,
        })
    }
}

/// Form for recording a dose against one infant.
#[component]
pub fn RecordDose(infant_id: i64, on_recorded: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(DoseDraft::today);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let body = match draft.read().validate(infant_id) {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match api::record_vaccination(&client, &body).await {
                Ok(dose) => {
                    tracing::info!(infant_id, vaccine = %dose.vaccine_name, "dose recorded");
                    draft.set(DoseDraft::today());
                    on_recorded.call(());
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader { title: "Record dose" }
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Vaccine",
                            value: draft.read().vaccine_name.clone(),
                            placeholder: "e.g. BCG, OPV, Penta",
                            required: true,
                            on_input: move |v| draft.write().vaccine_name = v,
                        }
                        TextField {
                            label: "Dose",
                            value: draft.read().dose_number.clone(),
                            input_type: "number",
                            on_input: move |v| draft.write().dose_number = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Date given",
                            value: draft.read().date_administered.clone(),
                            input_type: "date",
                            required: true,
                            on_input: move |v| draft.write().date_administered = v,
                        }
                        TextField {
                            label: "Next due",
                            value: draft.read().next_due_date.clone(),
                            input_type: "date",
                            on_input: move |v| draft.write().next_due_date = v,
                        }
                    }
                    div { class: "form-actions",
                        Button { button_type: "submit", loading: submitting(), "Record dose" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> DoseDraft {
        DoseDraft {
            vaccine_name: "Penta".to_string(),
            dose_number: "2".to_string(),
            date_administered: "2025-03-01".to_string(),
            next_due_date: "2025-04-01".to_string(),
        }
    }

    #[test]
    fn dose_draft_builds_payload() {
        let body = draft().validate(5).unwrap();
        assert_eq!(body.infant_id, 5);
        assert_eq!(body.dose_number, 2);
        assert_eq!(body.next_due_date, NaiveDate::from_ymd_opt(2025, 4, 1));
    }

    #[test]
    fn blank_next_due_is_omitted() {
        let mut d = draft();
        d.next_due_date = " ".to_string();
        assert_eq!(d.validate(5).unwrap().next_due_date, None);
    }

    #[test]
    fn dose_number_must_be_numeric() {
        let mut d = draft();
        d.dose_number = "second".to_string();
        assert_eq!(d.validate(5), Err("Dose number must be a whole number.".to_string()));
    }

    #[test]
    fn filter_keeps_matching_status() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let overdue = Vaccination {
            id: 1,
            infant_id: 1,
            vaccine_name: "OPV".to_string(),
            dose_number: 1,
            date_administered: None,
            next_due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            administered_by: None,
        };
        assert!(DoseFilter::parse("overdue").keeps(&overdue, today));
        assert!(!DoseFilter::parse("due").keeps(&overdue, today));
        assert!(DoseFilter::parse("anything").keeps(&overdue, today));
    }
}
