use crate::scroll::Elevation;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLogOut};
use dioxus_free_icons::Icon;

/// Sticky top bar. Casts a shadow while `elevation` is `Elevated`.
#[component]
pub fn Navbar(
    #[props(default)] elevation: Elevation,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "navbar", None, false),
        Attribute::new("data-elevation", elevation.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

/// Horizontal cluster inside the bar. Use `class: "navbar-end"` for the
/// right-hand group.
#[component]
pub fn NavbarSection(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "navbar-section", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn NavbarClock(time: String) -> Element {
    rsx! {
        time { class: "navbar-clock", "{time}" }
    }
}

fn unread_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=99 => Some(unread.to_string()),
        _ => Some("99+".to_string()),
    }
}

#[component]
pub fn NotificationsButton(
    #[props(default)] unread: usize,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        button {
            class: "navbar-icon-button",
            r#type: "button",
            "aria-label": "Notifications",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
            if let Some(label) = unread_label(unread) {
                span { class: "navbar-unread", "{label}" }
            }
        }
    }
}

/// Avatar button with a drop-down holding the signed-in identity and a
/// sign-out action.
#[component]
pub fn UserMenu(
    name: String,
    initials: String,
    #[props(default)] subtitle: String,
    on_sign_out: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "user-menu",
            button {
                class: "user-menu-trigger",
                r#type: "button",
                "aria-haspopup": "menu",
                "aria-expanded": if open() { "true" } else { "false" },
                onclick: move |_| open.toggle(),
                span { class: "user-menu-avatar", "{initials}" }
                span { class: "user-menu-name", "{name}" }
            }
            if open() {
                div { class: "user-menu-panel", role: "menu",
                    div { class: "user-menu-identity",
                        strong { "{name}" }
                        if !subtitle.is_empty() {
                            span { class: "user-menu-subtitle", "{subtitle}" }
                        }
                    }
                    button {
                        class: "user-menu-item",
                        r#type: "button",
                        role: "menuitem",
                        onclick: move |_| {
                            open.set(false);
                            on_sign_out.call(());
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn unread_count_is_capped() {
        assert_eq!(unread_label(0), None);
        assert_eq!(unread_label(7).as_deref(), Some("7"));
        assert_eq!(unread_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn elevation_is_exposed_as_data_attribute() {
        fn app() -> Element {
            rsx! {
                Navbar { elevation: Elevation::Elevated,
                    NavbarClock { time: "9:05 AM" }
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"data-elevation="elevated""#));
        assert!(html.contains("9:05 AM"));
    }

    #[test]
    fn user_menu_starts_closed() {
        fn app() -> Element {
            rsx! {
                UserMenu { name: "Abena Owusu", initials: "AO", on_sign_out: |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("AO"));
        assert!(!html.contains("Sign out"));
    }
}
