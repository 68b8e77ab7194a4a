use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;

/// Where the "go back" link should lead for the current session.
fn way_back(role: Option<shared_types::Role>) -> (Route, &'static str) {
    match role {
        Some(role) => (Route::home(role), "Back to your dashboard"),
        None => (Route::SignIn {}, "Go to sign in"),
    }
}

/// Catch-all for paths no portal claims.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let role = auth.claims.read().as_ref().map(|c| c.role);
    let (target, label) = way_back(role);

    tracing::debug!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not a page in CareLink."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Role;

    #[test]
    fn signed_in_users_go_home() {
        let (target, _) = way_back(Some(Role::DataAnalyst));
        assert_eq!(target, Route::AnalystDashboard {});
    }

    #[test]
    fn visitors_go_to_sign_in() {
        let (target, label) = way_back(None);
        assert_eq!(target, Route::SignIn {});
        assert_eq!(label, "Go to sign in");
    }
}
