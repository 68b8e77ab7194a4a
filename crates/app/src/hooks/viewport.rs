use dioxus::prelude::*;
use serde::Deserialize;
use shared_ui::responsive::{MediaQuery, MOBILE_QUERY};
use shared_ui::{Breakpoint, Viewport};

/// App-wide viewport, `None` outside a browser.
#[derive(Clone, Copy)]
struct ViewportSignal(Signal<Option<Viewport>>);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportReport {
    width: f64,
    height: f64,
    prefers_dark: bool,
}

impl From<ViewportReport> for Viewport {
    fn from(r: ViewportReport) -> Self {
        Viewport {
            width: r.width,
            height: r.height,
            prefers_dark: r.prefers_dark,
        }
    }
}

const VIEWPORT_LISTENER: &str = r#"
const dark = window.matchMedia("(prefers-color-scheme: dark)");
const report = () => dioxus.send({
    width: window.innerWidth,
    height: window.innerHeight,
    prefersDark: dark.matches,
});
window.addEventListener("resize", report, { passive: true });
dark.addEventListener("change", report);
report();
"#;

/// Viewport as the browser reports it right now. `None` outside a browser.
#[cfg(target_arch = "wasm32")]
fn current_viewport() -> Option<Viewport> {
    use shared_ui::DARK_MODE_QUERY;

    let window = web_sys::window()?;
    let prefers_dark = window
        .match_media(DARK_MODE_QUERY)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches());
    seed_viewport(
        window.inner_width().ok()?.as_f64(),
        window.inner_height().ok()?.as_f64(),
        prefers_dark,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn current_viewport() -> Option<Viewport> {
    None
}

fn seed_viewport(width: Option<f64>, height: Option<f64>, prefers_dark: bool) -> Option<Viewport> {
    Some(Viewport {
        width: width?,
        height: height?,
        prefers_dark,
    })
}

/// Provide the viewport context, starting from `initial`.
fn use_viewport_context(initial: impl FnOnce() -> Option<Viewport>) -> Signal<Option<Viewport>> {
    use_context_provider(|| ViewportSignal(Signal::new(initial()))).0
}

/// Install the single resize / colour-scheme listener and provide the
/// viewport to the whole tree. Call once, at the root. In a browser the
/// first render already sees the real viewport.
pub fn use_viewport_provider() -> Signal<Option<Viewport>> {
    let mut viewport = use_viewport_context(current_viewport);

    use_future(move || async move {
        let mut eval = document::eval(VIEWPORT_LISTENER);
        loop {
            match eval.recv::<ViewportReport>().await {
                Ok(report) => viewport.set(Some(report.into())),
                Err(e) => {
                    tracing::debug!(error = ?e, "viewport listener closed");
                    break;
                }
            }
        }
    });

    viewport
}

fn use_viewport() -> Signal<Option<Viewport>> {
    use_context::<ViewportSignal>().0
}

fn evaluate(query: Option<&MediaQuery>, viewport: Option<&Viewport>) -> bool {
    match (query, viewport) {
        (Some(q), Some(v)) => q.matches(v),
        _ => false,
    }
}

/// Whether `query` currently matches. False outside a browser and for
/// queries that cannot be parsed.
pub fn use_media_query(query: &str) -> bool {
    let parsed = use_hook(|| match MediaQuery::parse(query) {
        Ok(q) => Some(q),
        Err(e) => {
            tracing::warn!(error = %e, "media query ignored");
            None
        }
    });
    let viewport = use_viewport();
    let current = viewport.read();
    evaluate(parsed.as_ref(), current.as_ref())
}

pub fn use_is_mobile() -> bool {
    use_media_query(MOBILE_QUERY)
}

pub fn use_breakpoint() -> Option<Breakpoint> {
    let viewport = use_viewport();
    let current = viewport.read();
    current.as_ref().map(Viewport::breakpoint)
}
