use dioxus::prelude::*;

/// Scrollable table with a header row built from `columns`.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// Body row. Rows with a handler get a pointer cursor.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Single full-width row shown when the table has nothing to list.
#[component]
pub fn DataTableEmpty(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_built_from_columns() {
        fn app() -> Element {
            rsx! {
                DataTable { columns: vec!["Name".to_string(), "Phone".to_string()],
                    DataTableEmpty { colspan: 2, message: "No parents yet" }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains("<th>Phone</th>"));
        assert!(html.contains(r#"colspan="2""#));
        assert!(html.contains("No parents yet"));
    }
}
