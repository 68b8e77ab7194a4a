use crate::hooks::{fetched, use_api};
use carelink_client::api;
use dioxus::prelude::*;
use shared_types::{format_bytes, User};
use shared_ui::{Badge, BadgeTone, PageHeader, StatCard};

fn active_users(users: &[User]) -> usize {
    users.iter().filter(|u| u.active).count()
}

#[component]
pub fn AdminDashboard() -> Element {
    let overview = use_api(|client| async move {
        futures::try_join!(
            api::list_facilities(&client),
            api::list_users(&client),
            api::health(&client),
            api::memory_usage(&client),
        )
    });

    rsx! {
        PageHeader { title: "Dashboard", subtitle: "System overview" }
        {fetched(overview, |(facilities, users, health, memory)| rsx! {
            div { class: "page-grid",
                StatCard { label: "Facilities", value: facilities.len().to_string() }
                StatCard {
                    label: "Users",
                    value: users.len().to_string(),
                    hint: format!("{} active", active_users(users)),
                }
                StatCard { label: "Heap in use", value: format_bytes(memory.heap_bytes) }
                StatCard { label: "Non-heap in use", value: format_bytes(memory.non_heap_bytes) }
            }
            div { class: "page-toolbar",
                span { "API status " }
                Badge {
                    tone: if health.is_up() { BadgeTone::Success } else { BadgeTone::Danger },
                    "{health.status}"
                }
            }
        })}
    }
}
