use crate::auth::use_auth;
use crate::hooks::{use_breakpoint, use_clock, use_is_mobile, use_scroll_elevation};
use crate::routes::menu::{menu, menu_icon};
use crate::routes::table::title_for;
use crate::routes::Route;
use carelink_client::config::config;
use carelink_client::{api, ApiClient};
use dioxus::prelude::*;
use shared_types::{Claims, Role};
use shared_ui::{
    Breakpoint, LoadingPanel, Navbar, NavbarClock, NavbarSection, NotificationsButton, Sidebar,
    SidebarCollapseButton, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSection, SidebarTrigger, UserMenu,
};

/// Whether the portal for `role` has to send the visitor to sign-in. Nothing
/// is decided until storage has been read.
fn must_leave(role: Role, ready: bool, claims: Option<&Claims>) -> bool {
    ready && !claims.is_some_and(|c| c.role == role)
}

/// Layout for every signed-in portal: sidebar, top bar and the page outlet.
///
/// Doubles as the auth guard. Until storage has been read it shows a
/// placeholder; a missing, expired or foreign-role session is sent to sign-in.
#[component]
pub fn RoleShell(role: Role) -> Element {
    let mut auth = use_auth();
    let client = use_context::<ApiClient>();
    let route: Route = use_route();
    let is_mobile = use_is_mobile();
    let tablet = use_breakpoint() == Some(Breakpoint::Tablet);
    let ui = &config().ui;
    let elevation = use_scroll_elevation(ui.scroll_shadow_threshold);
    let time = use_clock(ui.clock_interval_secs);

    use_effect(move || {
        if must_leave(role, (auth.ready)(), auth.claims.read().as_ref()) {
            tracing::debug!(portal = %role, "no session for portal, redirecting to sign-in");
            navigator().replace(Route::SignIn {});
        }
    });

    if !(auth.ready)() {
        return rsx! {
            div { class: "shell-pending",
                LoadingPanel { message: "Checking your session…" }
            }
        };
    }

    let claims = auth.claims.read().clone();
    let Some(claims) = claims.filter(|c| c.role == role) else {
        return rsx! {
            div { class: "shell-pending",
                p { "Redirecting to sign in…" }
            }
        };
    };

    let location = route.to_string();
    let title = title_for(Some(role), &location).unwrap_or(role.display_name());
    let sections = menu(role);

    let sign_out = move |_: ()| {
        api::sign_out(&client);
        auth.clear();
        navigator().replace(Route::SignIn {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { mobile: is_mobile, default_collapsed: tablet,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-mark", "CL" }
                        span { class: "sidebar-brand-name", "CareLink" }
                    }
                }
                SidebarContent {
                    for section in sections {
                        SidebarSection { key: "{section.title}", title: section.title.to_string(),
                            for item in section.items {
                                SidebarMenuItem { key: "{item.label}",
                                    Link { to: item.target.clone(),
                                        SidebarMenuButton {
                                            label: item.label.to_string(),
                                            icon: menu_icon(item.icon),
                                            active: item.is_active(&location),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    span { class: "sidebar-role", "{role.display_name()}" }
                }
            }

            SidebarInset {
                Navbar { elevation,
                    NavbarSection {
                        SidebarTrigger {}
                        SidebarCollapseButton {}
                        h2 { class: "navbar-title", "{title}" }
                    }
                    NavbarSection { class: "navbar-end",
                        NavbarClock { time: time() }
                        NotificationsButton {}
                        UserMenu {
                            name: claims.display_name().to_string(),
                            initials: claims.initials(),
                            subtitle: role.display_name().to_string(),
                            on_sign_out: sign_out,
                        }
                    }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Centered card for the unauthenticated pages.
#[component]
pub fn AuthLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-brand",
                    span { class: "sidebar-brand-mark", "CL" }
                    span { class: "auth-brand-name", "CareLink" }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Role) -> Claims {
        Claims {
            subject: "4".to_string(),
            role,
            issued_at: None,
            expires_at: None,
            username: None,
            email: None,
        }
    }

    #[test]
    fn nothing_is_decided_before_storage_is_read() {
        assert!(!must_leave(Role::HealthWorker, false, None));
    }

    #[test]
    fn missing_or_foreign_session_leaves_the_portal() {
        assert!(must_leave(Role::HealthWorker, true, None));
        let analyst = claims(Role::DataAnalyst);
        assert!(must_leave(Role::HealthWorker, true, Some(&analyst)));
        assert!(!must_leave(Role::DataAnalyst, true, Some(&analyst)));
    }
}
