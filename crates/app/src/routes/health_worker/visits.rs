use crate::format_helpers::{format_date, or_dash};
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, optional, parse_date, parse_id};
use carelink_client::{api, ApiClient};
use chrono::Local;
use dioxus::prelude::*;
use shared_types::{NewVisit, Parent, Visit};
use shared_ui::{
    Button, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableEmpty, DataTableRow,
    Form, FormAlert, PageHeader, SelectField, TextField,
};
use std::collections::HashMap;

/// Newest first.
fn by_date_desc(visits: &[Visit]) -> Vec<&Visit> {
    let mut sorted: Vec<&Visit> = visits.iter().collect();
    sorted.sort_by(|a, b| b.visit_date.cmp(&a.visit_date).then(b.id.cmp(&a.id)));
    sorted
}

#[component]
pub fn VisitList() -> Element {
    let mut data = use_api(|client| async move {
        futures::try_join!(api::list_visits(&client), api::list_parents(&client))
    });

    rsx! {
        PageHeader { title: "Visits", subtitle: "Home and clinic visits" }
        {fetched(data, |(visits, parents)| {
            let names: HashMap<i64, String> = parents.iter().map(|p| (p.id, p.full_name())).collect();
            rsx! {
                div { class: "page-grid",
                    Card {
                        CardHeader { title: "Recent visits" }
                        CardContent {
                            DataTable { columns: columns(&["Date", "Parent", "Purpose", "Notes"]),
                                if visits.is_empty() {
                                    DataTableEmpty { colspan: 4, message: "No visits logged yet." }
                                }
                                for visit in by_date_desc(visits) {
                                    DataTableRow { key: "{visit.id}",
                                        DataTableCell { {format_date(visit.visit_date)} }
                                        DataTableCell {
                                            {names.get(&visit.parent_id).cloned().unwrap_or_else(|| format!("Parent #{}", visit.parent_id))}
                                        }
                                        DataTableCell { {or_dash(visit.purpose.as_deref())} }
                                        DataTableCell { {or_dash(visit.notes.as_deref())} }
                                    }
                                }
                            }
                        }
                    }
                    LogVisit { parents: parents.clone(), on_logged: move |_| data.restart() }
                }
            }
        })}
    }
}

#[derive(Debug, Clone, PartialEq)]
struct VisitDraft {
    parent_id: String,
    visit_date: String,
    purpose: String,
    notes: String,
}

impl VisitDraft {
    fn today() -> Self {
        Self {
            parent_id: String::new(),
            visit_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            purpose: String::new(),
            notes: String::new(),
        }
    }

    fn validate(&self) -> Result<NewVisit, String> {
        let parent_id = parse_id(&self.parent_id).ok_or("Choose a parent.")?;
        let visit_date = parse_date(&self.visit_date).ok_or("Visit date is required.")?;
        Ok(NewVisit {
            parent_id,
            infant_id: None,
            visit_date,
            purpose: optional(&self.purpose),
            notes: optional(&self.notes),
        })
    }
}

#[component]
fn LogVisit(parents: Vec<Parent>, on_logged: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(VisitDraft::today);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let body = match draft.read().validate() {
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
            match api::create_visit(&client, &body).await {
                Ok(visit) => {
                    tracing::info!(visit_id = visit.id, parent_id = visit.parent_id, "visit logged");
                    draft.set(VisitDraft::today());
                    on_logged.call(());
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    let mut options = vec![(String::new(), "Select a parent".to_string())];
    options.extend(parents.iter().map(|p| (p.id.to_string(), p.full_name())));

    rsx! {
        Card {
            CardHeader { title: "Log a visit" }
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    SelectField {
                        label: "Parent",
                        value: draft.read().parent_id.clone(),
                        options,
                        on_change: move |v| draft.write().parent_id = v,
                    }
                    TextField {
                        label: "Date",
                        value: draft.read().visit_date.clone(),
                        input_type: "date",
                        required: true,
                        on_input: move |v| draft.write().visit_date = v,
                    }
                    TextField {
                        label: "Purpose",
                        value: draft.read().purpose.clone(),
                        placeholder: "Postnatal check, growth monitoring…",
                        on_input: move |v| draft.write().purpose = v,
                    }
                    TextField {
                        label: "Notes",
                        value: draft.read().notes.clone(),
                        on_input: move |v| draft.write().notes = v,
                    }
                    div { class: "form-actions",
                        Button { button_type: "submit", loading: submitting(), "Log visit" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn visit(id: i64, day: u32) -> Visit {
        Visit {
            id,
            parent_id: 1,
            infant_id: None,
            visit_date: NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            purpose: None,
            notes: None,
        }
    }

    #[test]
    fn visits_sort_newest_first() {
        let visits = [visit(1, 3), visit(2, 9), visit(3, 9), visit(4, 1)];
        let order: Vec<i64> = by_date_desc(&visits).iter().map(|v| v.id).collect();
        assert_eq!(order, vec![3, 2, 1, 4]);
    }

    #[test]
    fn visit_needs_a_parent() {
        let draft = VisitDraft::today();
        assert_eq!(draft.validate(), Err("Choose a parent.".to_string()));
    }

    #[test]
    fn visit_needs_a_date() {
        let draft = VisitDraft {
            parent_id: "3".to_string(),
            visit_date: String::new(),
            purpose: String::new(),
            notes: String::new(),
        };
        assert_eq!(draft.validate(), Err("Visit date is required.".to_string()));
    }

    #[test]
    fn visit_draft_builds_payload() {
        let draft = VisitDraft {
            parent_id: "3".to_string(),
            visit_date: "2025-05-02".to_string(),
            purpose: " Weigh-in ".to_string(),
            notes: String::new(),
        };
        let body = draft.validate().unwrap();
        assert_eq!(body.parent_id, 3);
        assert_eq!(body.purpose.as_deref(), Some("Weigh-in"));
        assert_eq!(body.notes, None);
    }
}
