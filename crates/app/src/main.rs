use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod hooks;
mod routes;

use auth::{AuthState, LocalStorageStore};
use carelink_client::config::load_config;
use carelink_client::{ApiClient, Session};
use hooks::{use_media_query, use_scroll_provider, use_viewport_provider};
use routes::Route;
use shared_ui::DARK_MODE_QUERY;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Must run after `launch` has installed the logger.
    let config = use_hook(|| {
        load_config(
            include_str!("../../../config.toml"),
            option_env!("CARELINK_API_BASE_URL"),
        )
    });
    let store = use_hook(|| LocalStorageStore::new(&config.session.storage_key));
    let client = use_context_provider(|| {
        ApiClient::from_config(config, Session::new(store.clone()))
    });
    let mut auth = use_context_provider(AuthState::new);

    use_viewport_provider();
    use_scroll_provider();
    let dark = use_media_query(DARK_MODE_QUERY);

    // Storage is only readable asynchronously; the shells wait on `ready`.
    use_future(move || {
        let store = store.clone();
        let client = client.clone();
        async move {
            store.hydrate().await;
            auth.refresh(client.session());
            auth.ready.set(true);
            tracing::debug!(signed_in = auth.is_authenticated(), "session restored");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        div { class: "app-root", "data-theme": if dark { "dark" } else { "light" },
            ErrorBoundary {
                handle_error: |_: ErrorContext| {
                    tracing::warn!("render failed, showing reload prompt");
                    rsx! {
                        div { class: "app-error",
                            h1 { "Something went wrong" }
                            p { "The page could not be displayed." }
                            button {
                                r#type: "button",
                                onclick: |_| {
                                    document::eval("window.location.reload();");
                                },
                                "Reload"
                            }
                        }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
