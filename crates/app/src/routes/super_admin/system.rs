use crate::hooks::{fetched, use_api, use_section_highlight};
use crate::routes::common::columns;
use carelink_client::api;
use carelink_client::config::config;
use dioxus::prelude::*;
use shared_types::{format_bytes, ComponentHealth, HealthStatus, MemoryUsage};
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, PageHeader, StatCard,
};

/// In-page sections, in document order, with their table-of-contents labels.
const SECTIONS: &[(&str, &str)] = &[
    ("status", "Status"),
    ("memory", "Memory"),
    ("components", "Components"),
];
const SECTION_IDS: &[&str] = &["status", "memory", "components"];

fn status_tone(status: &str) -> BadgeTone {
    match status.to_ascii_uppercase().as_str() {
        "UP" => BadgeTone::Success,
        "DOWN" | "OUT_OF_SERVICE" => BadgeTone::Danger,
        "UNKNOWN" => BadgeTone::Warning,
        _ => BadgeTone::Neutral,
    }
}

/// Share of tracked memory that is heap, as a whole percentage.
fn heap_share(memory: &MemoryUsage) -> Option<u32> {
    let total = memory.heap_bytes + memory.non_heap_bytes;
    (total > 0.0).then(|| (memory.heap_bytes / total * 100.0).round() as u32)
}

#[component]
pub fn SystemStatus() -> Element {
    let active = use_section_highlight(SECTION_IDS, config().ui.section_offset);
    let data = use_api(|client| async move {
        futures::try_join!(api::health(&client), api::memory_usage(&client))
    });

    rsx! {
        PageHeader { title: "System", subtitle: "API health and resource usage" }
        div { class: "system-layout",
            nav { class: "system-toc", "aria-label": "On this page",
                for (id, label) in SECTIONS.iter().copied() {
                    a {
                        key: "{id}",
                        href: "#{id}",
                        "data-active": if active.read().as_deref() == Some(id) { "true" } else { "false" },
                        "{label}"
                    }
                }
            }
            div { class: "system-sections",
                {fetched(data, |(health, memory)| rsx! {
                    StatusSection { health: health.clone() }
                    MemorySection { memory: *memory }
                    ComponentsSection { health: health.clone() }
                })}
            }
        }
    }
}

#[component]
fn StatusSection(health: HealthStatus) -> Element {
    rsx! {
        section { id: "status",
            Card {
                CardHeader { title: "Status" }
                CardContent {
                    Badge { tone: status_tone(&health.status), "{health.status}" }
                    if !health.is_up() {
                        p { class: "system-note", "Some parts of the API are not responding normally." }
                    }
                }
            }
        }
    }
}

#[component]
fn MemorySection(memory: MemoryUsage) -> Element {
    let share = heap_share(&memory)
        .map(|p| format!("{p}% of tracked memory"))
        .unwrap_or_default();
    rsx! {
        section { id: "memory",
            div { class: "page-grid",
                StatCard { label: "Heap", value: format_bytes(memory.heap_bytes), hint: share }
                StatCard { label: "Non-heap", value: format_bytes(memory.non_heap_bytes) }
            }
        }
    }
}

#[component]
fn ComponentsSection(health: HealthStatus) -> Element {
    rsx! {
        section { id: "components",
            Card {
                CardHeader { title: "Components" }
                CardContent {
                    DataTable { columns: columns(&["Component", "Status"]),
                        if health.components.is_empty() {
                            DataTableEmpty { colspan: 2, message: "The API did not report any components." }
                        }
                        for (name, component) in health.components.iter() {
                            ComponentRow { key: "{name}", name: name.clone(), component: component.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComponentRow(name: String, component: ComponentHealth) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{name}" }
            DataTableCell {
                Badge { tone: status_tone(&component.status), "{component.status}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_ids_follow_the_table_of_contents() {
        let ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SECTION_IDS);
    }

    #[test]
    fn status_tones() {
        assert_eq!(status_tone("up"), BadgeTone::Success);
        assert_eq!(status_tone("DOWN"), BadgeTone::Danger);
        assert_eq!(status_tone("UNKNOWN"), BadgeTone::Warning);
        assert_eq!(status_tone("DEGRADED"), BadgeTone::Neutral);
    }

    #[test]
    fn heap_share_of_total() {
        let memory = MemoryUsage { heap_bytes: 300.0, non_heap_bytes: 100.0 };
        assert_eq!(heap_share(&memory), Some(75));
        assert_eq!(heap_share(&MemoryUsage::default()), None);
    }
}
