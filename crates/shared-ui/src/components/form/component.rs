use dioxus::prelude::*;

/// Form wrapper that suppresses the browser's own submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Labelled input bound to a string value.
#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt.value()),
            }
            if let Some(ref error) = error {
                span { class: "form-error", "{error}" }
            }
        }
    }
}

/// Native select over `(value, label)` pairs.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            select {
                class: "form-input",
                value: value.clone(),
                onchange: move |evt| on_change.call(evt.value()),
                for (key, text) in options.iter() {
                    option { key: "{key}", value: "{key}", selected: *key == value, "{text}" }
                }
            }
        }
    }
}

/// Banner shown above a form when submission failed.
#[component]
pub fn FormAlert(message: String) -> Element {
    rsx! {
        div { class: "form-alert", role: "alert", "{message}" }
    }
}
