use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(title: String, #[props(default)] description: String) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if !description.is_empty() {
                p { class: "card-description", "{description}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Dashboard tile: a headline figure with a caption.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        Card { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            strong { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}
