use crate::format_helpers::{format_date, format_optional_date, or_dash, pluralize};
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, optional, parse_date, DetailItem, SearchBox};
use crate::routes::Route;
use carelink_client::{api, ApiClient};
use chrono::Local;
use dioxus::prelude::*;
use shared_types::{Gender, NewInfant, NewParent, Parent};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, Form, FormAlert, PageHeader, SelectField, TextField,
};

#[component]
pub fn ParentList() -> Element {
    let parents = use_api(|client| async move { api::list_parents(&client).await });
    let query = use_signal(String::new);

    rsx! {
        PageHeader {
            title: "Parents",
            subtitle: "Registered mothers and guardians",
            actions: rsx! {
                Button {
                    onclick: move |_| {
                        navigator().push(Route::ParentCreate {});
                    },
                    "New parent"
                }
            },
        }
        SearchBox { query, placeholder: "Name, phone or national ID" }
        {fetched(parents, |parents| {
            let q = query();
            let visible: Vec<&Parent> = parents.iter().filter(|p| p.matches(&q)).collect();
            rsx! {
                DataTable { columns: columns(&["Name", "Phone", "National ID", "Date of birth"]),
                    if visible.is_empty() {
                        DataTableEmpty { colspan: 4, message: "No parents match your search." }
                    }
                    for parent in visible {
                        ParentRow { key: "{parent.id}", parent: parent.clone() }
                    }
                }
            }
        })}
    }
}

#[component]
fn ParentRow(parent: Parent) -> Element {
    let id = parent.id;
    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::ParentDetail { id });
            },
            DataTableCell { "{parent.full_name()}" }
            DataTableCell { {or_dash(parent.phone_number.as_deref())} }
            DataTableCell { {or_dash(parent.national_id.as_deref())} }
            DataTableCell { {format_optional_date(parent.date_of_birth)} }
        }
    }
}

/// Raw text of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
struct ParentDraft {
    first_name: String,
    last_name: String,
    phone_number: String,
    email: String,
    national_id: String,
    date_of_birth: String,
    address: String,
}

impl ParentDraft {
    fn validate(&self) -> Result<NewParent, String> {
        let first_name = optional(&self.first_name).ok_or("First name is required.")?;
        let last_name = optional(&self.last_name).ok_or("Last name is required.")?;
        let date_of_birth = match optional(&self.date_of_birth) {
            Some(raw) => Some(parse_date(&raw).ok_or("Date of birth must be a valid date.")?),
            None => None,
        };
        Ok(NewParent {
            first_name,
            last_name,
            phone_number: optional(&self.phone_number),
            email: optional(&self.email),
            national_id: optional(&self.national_id),
            date_of_birth,
            address: optional(&self.address),
            facility_id: None,
        })
    }
}

#[component]
pub fn ParentCreate() -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(ParentDraft::default);
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
            match api::create_parent(&client, &body).await {
                Ok(parent) => {
                    tracing::info!(parent_id = parent.id, "parent registered");
                    navigator().replace(Route::ParentDetail { id: parent.id });
                }
                Err(e) => {
                    error.set(Some(e.friendly_message()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        PageHeader { title: "New parent", subtitle: "Register a mother or guardian" }
        Card {
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "First name",
                            value: draft.read().first_name.clone(),
                            required: true,
                            on_input: move |v| draft.write().first_name = v,
                        }
                        TextField {
                            label: "Last name",
                            value: draft.read().last_name.clone(),
                            required: true,
                            on_input: move |v| draft.write().last_name = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Phone number",
                            value: draft.read().phone_number.clone(),
                            input_type: "tel",
                            on_input: move |v| draft.write().phone_number = v,
                        }
                        TextField {
                            label: "Email",
                            value: draft.read().email.clone(),
                            input_type: "email",
                            on_input: move |v| draft.write().email = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "National ID",
                            value: draft.read().national_id.clone(),
                            on_input: move |v| draft.write().national_id = v,
                        }
                        TextField {
                            label: "Date of birth",
                            value: draft.read().date_of_birth.clone(),
                            input_type: "date",
                            on_input: move |v| draft.write().date_of_birth = v,
                        }
                    }
                    TextField {
                        label: "Address",
                        value: draft.read().address.clone(),
                        on_input: move |v| draft.write().address = v,
                    }
                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                navigator().push(Route::ParentList {});
                            },
                            "Cancel"
                        }
                        Button { button_type: "submit", loading: submitting(), "Register parent" }
                    }
                }
            }
        }
    }
}

/// Keyed by id so navigating between parents starts a fresh fetch.
#[component]
pub fn ParentDetail(id: i64) -> Element {
    rsx! {
        ParentProfile { key: "{id}", id }
    }
}

#[component]
fn ParentProfile(id: i64) -> Element {
    let mut profile = use_api(move |client| async move {
        futures::try_join!(
            api::get_parent(&client, id),
            api::infants_for_parent(&client, id),
        )
    });

    rsx! {
        {fetched(profile, |(parent, infants)| {
            let today = Local::now().date_naive();
            rsx! {
                PageHeader {
                    title: parent.full_name(),
                    subtitle: pluralize(infants.len(), "infant"),
                }
                div { class: "page-grid",
                    Card {
                        CardHeader { title: "Profile" }
                        CardContent {
                            dl { class: "detail-list",
                                DetailItem { label: "Phone", value: or_dash(parent.phone_number.as_deref()) }
                                DetailItem { label: "Email", value: or_dash(parent.email.as_deref()) }
                                DetailItem { label: "National ID", value: or_dash(parent.national_id.as_deref()) }
                                DetailItem { label: "Date of birth", value: format_optional_date(parent.date_of_birth) }
                                DetailItem { label: "Address", value: or_dash(parent.address.as_deref()) }
                            }
                        }
                    }
                    Card {
                        CardHeader { title: "Infants" }
                        CardContent {
                            DataTable { columns: columns(&["Name", "Born", "Age"]),
                                if infants.is_empty() {
                                    DataTableEmpty { colspan: 3, message: "No infants registered yet." }
                                }
                                for infant in infants.iter() {
                                    DataTableRow {
                                        key: "{infant.id}",
                                        onclick: {
                                            let infant_id = infant.id;
                                            move |_| {
                                                navigator().push(Route::InfantDetail { id: infant_id });
                                            }
                                        },
                                        DataTableCell { "{infant.full_name()}" }
                                        DataTableCell { {format_date(infant.date_of_birth)} }
                                        DataTableCell { {pluralize(infant.age_in_months(today) as usize, "month")} }
                                    }
                                }
                            }
                        }
                    }
                }
                RegisterInfant {
                    parent_id: parent.id,
                    last_name: parent.last_name.clone(),
                    on_registered: move |_| profile.restart(),
                }
            }
        })}
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct InfantDraft {
    first_name: String,
    last_name: String,
    date_of_birth: String,
    gender: String,
    birth_weight: String,
}

impl InfantDraft {
    fn validate(&self, parent_id: i64) -> Result<NewInfant, String> {
        let first_name = optional(&self.first_name).ok_or("First name is required.")?;
        let last_name = optional(&self.last_name).ok_or("Last name is required.")?;
        let date_of_birth = parse_date(&self.date_of_birth).ok_or("Date of birth is required.")?;
        let gender = match self.gender.as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        };
        let birth_weight = match optional(&self.birth_weight) {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|_| "Birth weight must be a number of kilograms.")?,
            ),
            None => None,
        };
        Ok(NewInfant {
            first_name,
            last_name,
            date_of_birth,
            gender,
            birth_weight,
            parent_id,
        })
    }
}

#[component]
fn RegisterInfant(parent_id: i64, last_name: String, on_registered: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(|| InfantDraft {
        last_name: last_name.clone(),
        ..Default::default()
    });
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: FormEvent| {
        let body = match draft.read().validate(parent_id) {
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
            match api::create_infant(&client, &body).await {
                Ok(infant) => {
                    tracing::info!(infant_id = infant.id, parent_id, "infant registered");
                    draft.set(InfantDraft {
                        last_name: infant.last_name,
                        ..Default::default()
                    });
                    on_registered.call(());
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    let genders = vec![
        (String::new(), "Not recorded".to_string()),
        ("FEMALE".to_string(), Gender::Female.as_str().to_string()),
        ("MALE".to_string(), Gender::Male.as_str().to_string()),
    ];

    rsx! {
        Card {
            CardHeader { title: "Register infant" }
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "First name",
                            value: draft.read().first_name.clone(),
                            required: true,
                            on_input: move |v| draft.write().first_name = v,
                        }
                        TextField {
                            label: "Last name",
                            value: draft.read().last_name.clone(),
                            required: true,
                            on_input: move |v| draft.write().last_name = v,
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            label: "Date of birth",
                            value: draft.read().date_of_birth.clone(),
                            input_type: "date",
                            required: true,
                            on_input: move |v| draft.write().date_of_birth = v,
                        }
                        SelectField {
                            label: "Gender",
                            value: draft.read().gender.clone(),
                            options: genders,
                            on_change: move |v| draft.write().gender = v,
                        }
                        TextField {
                            label: "Birth weight (kg)",
                            value: draft.read().birth_weight.clone(),
                            input_type: "number",
                            on_input: move |v| draft.write().birth_weight = v,
                        }
                    }
                    div { class: "form-actions",
                        Button { button_type: "submit", loading: submitting(), "Register infant" }
                    }
                }
            }
        }
    }
}
