//! Small pieces shared by the portal pages.

use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{DoseStatus, ScheduleStatus};
use shared_ui::{BadgeTone, TextField};

pub fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Trimmed text, or `None` when blank.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Value of an `<input type="date">`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok().filter(|id: &i64| *id > 0)
}

pub fn dose_badge(status: DoseStatus) -> (BadgeTone, &'static str) {
    match status {
        DoseStatus::Administered => (BadgeTone::Success, "Administered"),
        DoseStatus::Due => (BadgeTone::Info, "Due"),
        DoseStatus::Overdue => (BadgeTone::Danger, "Overdue"),
    }
}

pub fn schedule_tone(status: ScheduleStatus) -> BadgeTone {
    match status {
        ScheduleStatus::Pending => BadgeTone::Info,
        ScheduleStatus::Completed => BadgeTone::Success,
        ScheduleStatus::Missed => BadgeTone::Danger,
        ScheduleStatus::Cancelled => BadgeTone::Neutral,
    }
}

/// Client-side filter box above a list.
#[component]
pub fn SearchBox(query: Signal<String>, placeholder: String) -> Element {
    let mut query = query;
    rsx! {
        div { class: "page-toolbar",
            TextField {
                label: "Search",
                value: query(),
                placeholder,
                input_type: "search",
                on_input: move |value| query.set(value),
            }
        }
    }
}

#[component]
pub fn DetailItem(label: String, value: String) -> Element {
    rsx! {
        dt { "{label}" }
        dd { "{value}" }
    }
}
