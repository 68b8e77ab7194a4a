use dioxus::prelude::*;
use serde::Deserialize;
use shared_ui::{active_section, elevation, Elevation, SectionBounds};

/// Vertical scroll offset of the window.
#[derive(Clone, Copy)]
struct ScrollSignal(Signal<f64>);

const SCROLL_LISTENER: &str = r#"
const report = () => dioxus.send(window.scrollY);
window.addEventListener("scroll", report, { passive: true });
report();
"#;

/// Install the single passive scroll listener. Call once, at the root.
pub fn use_scroll_provider() -> Signal<f64> {
    let ScrollSignal(mut scroll_y) = use_context_provider(|| ScrollSignal(Signal::new(0.0)));

    use_future(move || async move {
        let mut eval = document::eval(SCROLL_LISTENER);
        while let Ok(y) = eval.recv::<f64>().await {
            scroll_y.set(y);
        }
    });

    scroll_y
}

fn use_scroll_y() -> Signal<f64> {
    use_context::<ScrollSignal>().0
}

/// Top bar elevation for the current scroll offset.
pub fn use_scroll_elevation(threshold: f64) -> Elevation {
    let scroll_y = use_scroll_y();
    elevation(scroll_y(), threshold)
}

#[derive(Debug, Deserialize)]
struct MeasuredSection {
    id: String,
    top: f64,
    bottom: f64,
}

fn measure_script(ids: &[&str]) -> String {
    let ids = serde_json::Value::from(ids.to_vec()).to_string();
    format!(
        r#"
const ids = {ids};
const out = [];
for (const id of ids) {{
    const el = document.getElementById(id);
    if (!el) continue;
    const rect = el.getBoundingClientRect();
    out.push({{ id, top: rect.top + window.scrollY, bottom: rect.bottom + window.scrollY }});
}}
dioxus.send(out);
"#
    )
}

/// Id of the section currently in view, re-measured on mount and on every
/// scroll. When the probe falls in a gap the previous value is kept.
pub fn use_section_highlight(ids: &'static [&'static str], offset: f64) -> Signal<Option<String>> {
    let mut active = use_signal(|| None::<String>);
    let scroll_y = use_scroll_y();

    use_effect(move || {
        if ids.is_empty() {
            return;
        }
        let y = scroll_y();
        spawn(async move {
            let mut eval = document::eval(&measure_script(ids));
            let Ok(measured) = eval.recv::<Vec<MeasuredSection>>().await else {
                return;
            };
            let sections: Vec<SectionBounds> = measured
                .into_iter()
                .map(|m| SectionBounds::new(m.id, m.top, m.bottom))
                .collect();
            if let Some(id) = active_section(&sections, y, offset) {
                if active.peek().as_deref() != Some(id) {
                    active.set(Some(id.to_string()));
                }
            }
        });
    });

    active
}
