use crate::format_helpers::{format_timestamp, or_dash};
use crate::hooks::{fetched, use_api};
use crate::routes::common::{columns, SearchBox};
use carelink_client::api;
use dioxus::prelude::*;
use shared_types::LogEntry;
use shared_ui::{
    Badge, BadgeTone, Button, ButtonVariant, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, PageHeader, SelectField,
};

fn level_tone(level: &str) -> BadgeTone {
    match level.to_ascii_uppercase().as_str() {
        "ERROR" | "FATAL" => BadgeTone::Danger,
        "WARN" | "WARNING" => BadgeTone::Warning,
        "INFO" => BadgeTone::Info,
        _ => BadgeTone::Neutral,
    }
}

/// Entries at `level` or any level, whose message or logger contains `query`.
fn keep(entry: &LogEntry, level: &str, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    (level.is_empty() || entry.level.eq_ignore_ascii_case(level))
        && (q.is_empty()
            || entry.message.to_lowercase().contains(&q)
            || entry
                .logger
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&q)))
}

fn level_options() -> Vec<(String, String)> {
    [("", "All levels"), ("ERROR", "Error"), ("WARN", "Warning"), ("INFO", "Info"), ("DEBUG", "Debug")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[component]
pub fn SystemLogs() -> Element {
    let mut entries = use_api(|client| async move { api::recent_logs(&client).await });
    let query = use_signal(String::new);
    let mut level = use_signal(String::new);

    rsx! {
        PageHeader {
            title: "Logs",
            subtitle: "Recent API log entries",
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| entries.restart(),
                    "Refresh"
                }
            },
        }
        div { class: "page-toolbar",
            SelectField {
                label: "Level",
                value: level(),
                options: level_options(),
                on_change: move |v| level.set(v),
            }
        }
        SearchBox { query, placeholder: "Message or logger" }
        {fetched(entries, |entries| {
            let (lvl, q) = (level(), query());
            let visible: Vec<&LogEntry> = entries.iter().filter(|e| keep(e, &lvl, &q)).collect();
            rsx! {
                DataTable { columns: columns(&["Time", "Level", "Logger", "Message"]),
                    if visible.is_empty() {
                        DataTableEmpty { colspan: 4, message: "No log entries to show." }
                    }
                    for (i, entry) in visible.into_iter().enumerate() {
                        DataTableRow { key: "{i}",
                            DataTableCell { {format_timestamp(&entry.timestamp)} }
                            DataTableCell {
                                Badge { tone: level_tone(&entry.level), "{entry.level}" }
                            }
                            DataTableCell { {or_dash(entry.logger.as_deref())} }
                            DataTableCell { "{entry.message}" }
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

    fn entry(level: &str, logger: Option<&str>, message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2025-06-01T21:35:00Z".to_string(),
            level: level.to_string(),
            logger: logger.map(str::to_string),
            message: message.to_string(),
        }
    }

    #[test]
    fn filters_by_level_and_text() {
        let e = entry("WARN", Some("com.carelink.VisitService"), "Slow query");
        assert!(keep(&e, "", ""));
        assert!(keep(&e, "warn", "slow"));
        assert!(keep(&e, "", "visitservice"));
        assert!(!keep(&e, "ERROR", ""));
        assert!(!keep(&e, "", "timeout"));
    }

    #[test]
    fn level_tones() {
        assert_eq!(level_tone("error"), BadgeTone::Danger);
        assert_eq!(level_tone("WARN"), BadgeTone::Warning);
        assert_eq!(level_tone("TRACE"), BadgeTone::Neutral);
    }
}
