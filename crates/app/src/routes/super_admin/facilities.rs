use crate::format_helpers::or_dash;
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, optional, SearchBox};
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::{Facility, NewFacility};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, Form, FormAlert, PageHeader, TextField,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct FacilityDraft {
    name: String,
    code: String,
    facility_type: String,
    district: String,
    phone_number: String,
}

impl FacilityDraft {
    fn from_facility(f: &Facility) -> Self {
        Self {
            name: f.name.clone(),
            code: f.code.clone().unwrap_or_default(),
            facility_type: f.facility_type.clone().unwrap_or_default(),
            district: f.district.clone().unwrap_or_default(),
            phone_number: f.phone_number.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<NewFacility, String> {
        Ok(NewFacility {
            name: optional(&self.name).ok_or("Facility name is required.")?,
            code: optional(&self.code).map(|c| c.to_uppercase()),
            facility_type: optional(&self.facility_type),
            district: optional(&self.district),
            phone_number: optional(&self.phone_number),
        })
    }
}

#[component]
pub fn FacilityAdmin() -> Element {
    let mut facilities = use_api(|client| async move { api::list_facilities(&client).await });
    let query = use_signal(String::new);
    // Facility being edited; `None` means the form creates a new one.
    let mut editing = use_signal(|| None::<Facility>);
    let form_key = editing.read().as_ref().map(|f| f.id).unwrap_or_default();

    rsx! {
        PageHeader { title: "Facilities", subtitle: "Add, edit and retire facilities" }
        div { class: "page-grid",
            div {
                SearchBox { query, placeholder: "Name, code or district" }
                {fetched(facilities, |list| {
                    let q = query();
                    let visible: Vec<&Facility> = list.iter().filter(|f| f.matches(&q)).collect();
                    rsx! {
                        DataTable { columns: columns(&["Name", "Code", "District", ""]),
                            if visible.is_empty() {
                                DataTableEmpty { colspan: 4, message: "No facilities match your search." }
                            }
                            for facility in visible {
                                FacilityRow {
                                    key: "{facility.id}",
                                    facility: facility.clone(),
                                    on_edit: move |f| editing.set(Some(f)),
                                    on_deleted: move |_| facilities.restart(),
                                }
                            }
                        }
                    }
                })}
            }
            FacilityForm {
                key: "{form_key}",
                editing: editing(),
                on_saved: move |_| {
                    editing.set(None);
                    facilities.restart();
                },
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}

#[component]
fn FacilityRow(facility: Facility, on_edit: EventHandler<Facility>, on_deleted: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut deleting = use_signal(|| false);
    let id = facility.id;
    let edit_target = facility.clone();

    let delete = move |_: MouseEvent| {
        let client = client.clone();
        deleting.set(true);
        spawn(async move {
            match api::delete_facility(&client, id).await {
                Ok(()) => {
                    tracing::info!(facility_id = id, "facility deleted");
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::warn!(facility_id = id, error = %e, "could not delete facility");
                    deleting.set(false);
                }
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{facility.name}" }
            DataTableCell { {or_dash(facility.code.as_deref())} }
            DataTableCell { {or_dash(facility.district.as_deref())} }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    loading: deleting(),
                    onclick: delete,
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn FacilityForm(
    editing: Option<Facility>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let client = use_context::<ApiClient>();
    let editing_id = editing.as_ref().map(|f| f.id);
    let mut draft = use_signal(|| editing.as_ref().map(FacilityDraft::from_facility).unwrap_or_default());
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
            let saved = match editing_id {
                Some(id) => api::update_facility(&client, id, &body).await,
                None => api::create_facility(&client, &body).await,
            };
            match saved {
                Ok(facility) => {
                    tracing::info!(facility_id = facility.id, updated = editing_id.is_some(), "facility saved");
                    draft.set(FacilityDraft::default());
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    let title = if editing_id.is_some() { "Edit facility" } else { "New facility" };

    rsx! {
        Card {
            CardHeader { title }
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    TextField {
                        label: "Name",
                        value: draft.read().name.clone(),
                        required: true,
                        on_input: move |v| draft.write().name = v,
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Code",
                            value: draft.read().code.clone(),
                            on_input: move |v| draft.write().code = v,
                        }
                        TextField {
                            label: "Type",
                            value: draft.read().facility_type.clone(),
                            placeholder: "Clinic, hospital, CHPS…",
                            on_input: move |v| draft.write().facility_type = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "District",
                            value: draft.read().district.clone(),
                            on_input: move |v| draft.write().district = v,
                        }
                        TextField {
                            label: "Phone",
                            value: draft.read().phone_number.clone(),
                            input_type: "tel",
                            on_input: move |v| draft.write().phone_number = v,
                        }
                    }
                    div { class: "form-actions",
                        if editing_id.is_some() {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| on_cancel.call(()),
                                "Cancel"
                            }
                        }
                        Button { button_type: "submit", loading: submitting(), "Save facility" }
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

    #[test]
    fn facility_draft_normalises_code() {
        let draft = FacilityDraft {
            name: "Tema General".to_string(),
            code: " tg-02 ".to_string(),
            ..Default::default()
        };
        let body = draft.validate().unwrap();
        assert_eq!(body.code.as_deref(), Some("TG-02"));
        assert_eq!(body.district, None);
    }

    #[test]
    fn facility_needs_a_name() {
        assert_eq!(
            FacilityDraft::default().validate(),
            Err("Facility name is required.".to_string())
        );
    }

    #[test]
    fn editing_prefills_the_draft() {
        let facility = Facility {
            id: 2,
            name: "Tema General".to_string(),
            code: Some("TG-02".to_string()),
            facility_type: None,
            district: Some("Tema".to_string()),
            phone_number: None,
        };
        let draft = FacilityDraft::from_facility(&facility);
        assert_eq!(draft.code, "TG-02");
        assert_eq!(draft.facility_type, "");
        assert_eq!(draft.validate().unwrap().district.as_deref(), Some("Tema"));
    }
}
