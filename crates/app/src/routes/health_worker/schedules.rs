use crate::format_helpers::format_date;
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, optional, parse_date, parse_id, schedule_tone};
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::{Infant, NewSchedule, Parent, Schedule};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, Form, FormAlert, PageHeader, SelectField, TextField,
};
use std::collections::HashMap;

/// Soonest first.
fn by_date(schedules: &[Schedule]) -> Vec<&Schedule> {
    let mut sorted: Vec<&Schedule> = schedules.iter().collect();
    sorted.sort_by_key(|s| (s.scheduled_date, s.id));
    sorted
}

/// Who an appointment is for: the infant when set, otherwise the parent.
fn subject(schedule: &Schedule, parents: &HashMap<i64, String>, infants: &HashMap<i64, String>) -> String {
    schedule
        .infant_id
        .and_then(|id| infants.get(&id).cloned())
        .or_else(|| schedule.parent_id.and_then(|id| parents.get(&id).cloned()))
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn ScheduleList() -> Element {
    let mut data = use_api(|client| async move {
        futures::try_join!(
            api::list_schedules(&client),
            api::list_parents(&client),
            api::list_infants(&client),
        )
    });

    rsx! {
        PageHeader { title: "Schedules", subtitle: "Upcoming appointments and follow-ups" }
        {fetched(data, |(schedules, parents, infants)| {
            let parent_names: HashMap<i64, String> = parents.iter().map(|p| (p.id, p.full_name())).collect();
            let infant_names: HashMap<i64, String> = infants.iter().map(|i| (i.id, i.full_name())).collect();
            rsx! {
                div { class: "page-grid",
                    Card {
                        CardHeader { title: "Appointments" }
                        CardContent {
                            DataTable { columns: columns(&["Date", "Title", "For", "Status", ""]),
                                if schedules.is_empty() {
                                    DataTableEmpty { colspan: 5, message: "Nothing scheduled." }
                                }
                                for schedule in by_date(schedules) {
                                    ScheduleRow {
                                        key: "{schedule.id}",
                                        subject: subject(schedule, &parent_names, &infant_names),
                                        schedule: schedule.clone(),
                                        on_deleted: move |_| data.restart(),
                                    }
                                }
                            }
                        }
                    }
                    NewAppointment {
                        parents: parents.clone(),
                        infants: infants.clone(),
                        on_created: move |_| data.restart(),
                    }
                }
            }
        })}
    }
}

#[component]
fn ScheduleRow(subject: String, schedule: Schedule, on_deleted: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut deleting = use_signal(|| false);
    let id = schedule.id;

    let delete = move |_: MouseEvent| {
        let client = client.clone();
        deleting.set(true);
        spawn(async move {
            match api::delete_schedule(&client, id).await {
                Ok(()) => {
                    tracing::info!(schedule_id = id, "appointment deleted");
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::warn!(schedule_id = id, error = %e, "could not delete appointment");
                    deleting.set(false);
                }
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { {format_date(schedule.scheduled_date)} }
            DataTableCell { "{schedule.title}" }
            DataTableCell { "{subject}" }
            DataTableCell {
                Badge { tone: schedule_tone(schedule.status), "{schedule.status.as_str()}" }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Ghost,
                    loading: deleting(),
                    onclick: delete,
                    "Delete"
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ScheduleDraft {
    title: String,
    scheduled_date: String,
    parent_id: String,
    infant_id: String,
}

impl ScheduleDraft {
    fn validate(&self) -> Result<NewSchedule, String> {
        let title = optional(&self.title).ok_or("Title is required.")?;
        let scheduled_date = parse_date(&self.scheduled_date).ok_or("Date is required.")?;
        Ok(NewSchedule {
            title,
            scheduled_date,
            parent_id: parse_id(&self.parent_id),
            infant_id: parse_id(&self.infant_id),
        })
    }
}

#[component]
fn NewAppointment(parents: Vec<Parent>, infants: Vec<Infant>, on_created: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut draft = use_signal(ScheduleDraft::default);
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
            match api::create_schedule(&client, &body).await {
                Ok(schedule) => {
                    tracing::info!(schedule_id = schedule.id, "appointment scheduled");
                    draft.set(ScheduleDraft::default());
                    on_created.call(());
                }
                Err(e) => error.set(Some(e.friendly_message())),
            }
            submitting.set(false);
        });
    };

    let mut parent_options = vec![(String::new(), "None".to_string())];
    parent_options.extend(parents.iter().map(|p| (p.id.to_string(), p.full_name())));
    let mut infant_options = vec![(String::new(), "None".to_string())];
    infant_options.extend(infants.iter().map(|i| (i.id.to_string(), i.full_name())));

    rsx! {
        Card {
            CardHeader { title: "New appointment" }
            CardContent {
                Form { onsubmit: submit,
                    if let Some(message) = error() {
                        FormAlert { message }
                    }
                    TextField {
                        label: "Title",
                        value: draft.read().title.clone(),
                        required: true,
                        on_input: move |v| draft.write().title = v,
                    }
                    TextField {
                        label: "Date",
                        value: draft.read().scheduled_date.clone(),
                        input_type: "date",
                        required: true,
                        on_input: move |v| draft.write().scheduled_date = v,
                    }
                    SelectField {
                        label: "Parent",
                        value: draft.read().parent_id.clone(),
                        options: parent_options,
                        on_change: move |v| draft.write().parent_id = v,
                    }
                    SelectField {
                        label: "Infant",
                        value: draft.read().infant_id.clone(),
                        options: infant_options,
                        on_change: move |v| draft.write().infant_id = v,
                    }
                    div { class: "form-actions",
                        Button { button_type: "submit", loading: submitting(), "Schedule" }
                    }
                }
            }
        }
    }
}
