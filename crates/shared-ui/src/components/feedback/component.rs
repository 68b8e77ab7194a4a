use dioxus::prelude::*;

#[component]
pub fn LoadingPanel(#[props(default = "Loading…".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "feedback-panel", "data-kind": "loading", "aria-busy": "true",
            span { class: "feedback-spinner" }
            p { "{message}" }
        }
    }
}

/// Failed request. Shows a retry button when `on_retry` is given.
#[component]
pub fn ErrorPanel(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "feedback-panel", "data-kind": "error", role: "alert",
            p { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "feedback-retry",
                    r#type: "button",
                    onclick: move |_| retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn error_panel_offers_retry_only_with_handler() {
        fn with_retry() -> Element {
            rsx! { ErrorPanel { message: "Network down", on_retry: |_| {} } }
        }
        fn without_retry() -> Element {
            rsx! { ErrorPanel { message: "Network down" } }
        }
        assert!(render(with_retry).contains("Try again"));
        let html = render(without_retry);
        assert!(html.contains("Network down"));
        assert!(!html.contains("Try again"));
    }
}
