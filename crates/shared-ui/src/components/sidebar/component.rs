use crate::shell::{section_render, ShellEvent, ShellState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronDown, LdChevronRight, LdChevronsLeft, LdChevronsRight, LdMenu,
};
use dioxus_free_icons::Icon;

// ─── Context ───────────────────────────────────────────────────────────

/// Shell state shared by every sidebar part and the top bar.
pub fn use_shell() -> Signal<ShellState> {
    use_context::<Signal<ShellState>>()
}

/// Feed an event into the shell. No-op transitions don't write the signal.
pub fn send_shell_event(mut shell: Signal<ShellState>, event: ShellEvent) {
    let current = *shell.peek();
    let next = current.apply(event);
    if next != current {
        tracing::debug!(?event, from = ?current, to = ?next, "shell transition");
        shell.set(next);
    }
}

/// Owns the shell state for its subtree. `mobile` is re-read on every render
/// so crossing the breakpoint resets the shell.
#[component]
pub fn SidebarProvider(
    #[props(default)] mobile: bool,
    #[props(default)] default_collapsed: bool,
    children: Element,
) -> Element {
    let shell = use_signal(|| match ShellState::initial(mobile) {
        ShellState::DesktopExpanded if default_collapsed => ShellState::DesktopCollapsed,
        state => state,
    });
    use_context_provider(|| shell);

    use_effect(use_reactive((&mobile,), move |(mobile,)| {
        send_shell_event(shell, ShellEvent::ViewportChanged { mobile });
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-shell": shell().width_class(),
            {children}
        }
    }
}

// ─── Layout components ─────────────────────────────────────────────────

/// The navigation panel. Its width follows the shell state; on mobile it is
/// a drawer with a backdrop that dismisses it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let shell = use_shell();
    let state = shell();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", state.width_class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if state.is_drawer_open() {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| send_shell_event(shell, ShellEvent::DismissDrawer),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

// ─── Sections ──────────────────────────────────────────────────────────

/// A titled, collapsible group of menu items. While the shell is collapsed
/// the header disappears and items are always shown icon-only.
#[component]
pub fn SidebarSection(
    title: String,
    #[props(default = true)] default_expanded: bool,
    children: Element,
) -> Element {
    let shell = use_shell();
    let mut expanded = use_signal(|| default_expanded);
    let render = section_render(shell().is_collapsed(), expanded());

    rsx! {
        div {
            class: "sidebar-section",
            "data-expanded": if expanded() { "true" } else { "false" },
            if render.show_header {
                button {
                    class: "sidebar-section-header",
                    r#type: "button",
                    "aria-expanded": if expanded() { "true" } else { "false" },
                    onclick: move |_| expanded.toggle(),
                    span { class: "sidebar-section-title", "{title}" }
                    if expanded() {
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
                    } else {
                        Icon::<LdChevronRight> { icon: LdChevronRight, width: 14, height: 14 }
                    }
                }
            }
            if render.show_items {
                ul {
                    class: "sidebar-menu",
                    "data-icon-only": if render.icon_only { "true" } else { "false" },
                    {children}
                }
            }
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Body of one navigation entry, meant to sit inside a router `Link`.
/// Rendered as a plain element so the link stays the only interactive
/// control. Activating it closes the mobile drawer. When the shell is
/// collapsed only the icon is drawn and the label becomes a tooltip.
#[component]
pub fn SidebarMenuButton(
    label: String,
    icon: Element,
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let shell = use_shell();
    let icon_only = shell().is_collapsed();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            title: if icon_only { label.clone() } else { String::new() },
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| send_shell_event(shell, ShellEvent::Navigated),
            ..merged,
            span { class: "sidebar-menu-icon", {icon} }
            if !icon_only {
                span { class: "sidebar-menu-label", "{label}" }
            }
        }
    }
}

// ─── Controls ──────────────────────────────────────────────────────────

/// Top-bar menu button. Only rendered on mobile, where it opens the drawer.
#[component]
pub fn SidebarTrigger() -> Element {
    let shell = use_shell();
    if !shell().is_mobile() {
        return rsx! {};
    }

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Open navigation",
            onclick: move |_| send_shell_event(shell, ShellEvent::OpenDrawer),
            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
        }
    }
}

/// Desktop-only button that switches between full and icon-only width.
#[component]
pub fn SidebarCollapseButton() -> Element {
    let shell = use_shell();
    let state = shell();
    if state.is_mobile() {
        return rsx! {};
    }

    rsx! {
        button {
            class: "sidebar-collapse",
            r#type: "button",
            "aria-label": if state.is_collapsed() { "Expand sidebar" } else { "Collapse sidebar" },
            onclick: move |_| send_shell_event(shell, ShellEvent::ToggleCollapse),
            if state.is_collapsed() {
                Icon::<LdChevronsRight> { icon: LdChevronsRight, width: 18, height: 18 }
            } else {
                Icon::<LdChevronsLeft> { icon: LdChevronsLeft, width: 18, height: 18 }
            }
        }
    }
}

/// Content column beside the sidebar. Its left margin tracks the shell width.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    let shell = use_shell();

    rsx! {
        main {
            class: "sidebar-inset",
            "data-shell": shell().width_class(),
            {children}
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
    fn desktop_sidebar_starts_expanded_with_labels() {
        fn app() -> Element {
            rsx! {
                SidebarProvider {
                    Sidebar {
                        SidebarSection { title: "Records",
                            SidebarMenuItem {
                                SidebarMenuButton { label: "Infants", icon: rsx! { "i" }, active: true }
                            }
                        }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"data-state="expanded""#));
        assert!(html.contains("Records"));
        assert!(html.contains("sidebar-menu-label"));
        assert!(html.contains(r#"data-active="true""#));
    }

    #[test]
    fn menu_button_is_not_an_interactive_element() {
        fn app() -> Element {
            rsx! {
                SidebarProvider {
                    SidebarMenuItem {
                        SidebarMenuButton { label: "Visits", icon: rsx! { "v" } }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"class="sidebar-menu-button""#));
        assert!(html.contains("<span"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn collapsed_sidebar_hides_section_headers_and_labels() {
        fn app() -> Element {
            rsx! {
                SidebarProvider { default_collapsed: true,
                    Sidebar {
                        SidebarSection { title: "Records", default_expanded: false,
                            SidebarMenuItem {
                                SidebarMenuButton { label: "Infants", icon: rsx! { "i" } }
                            }
                        }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"data-state="collapsed""#));
        assert!(!html.contains("sidebar-section-header"));
        assert!(!html.contains("sidebar-menu-label"));
        assert!(html.contains(r#"title="Infants""#));
    }

    #[test]
    fn mobile_shell_shows_trigger_not_collapse_button() {
        fn app() -> Element {
            rsx! {
                SidebarProvider { mobile: true,
                    SidebarTrigger {}
                    SidebarCollapseButton {}
                    Sidebar {}
                }
            }
        }
        let html = render(app);
        assert!(html.contains("sidebar-trigger"));
        assert!(!html.contains("sidebar-collapse"));
        assert!(html.contains(r#"data-state="drawer-closed""#));
        assert!(!html.contains("sidebar-backdrop"));
    }

    #[test]
    fn collapsed_section_hides_items_when_shell_expanded() {
        fn app() -> Element {
            rsx! {
                SidebarProvider {
                    SidebarSection { title: "Admin", default_expanded: false,
                        SidebarMenuItem {
                            SidebarMenuButton { label: "Users", icon: rsx! { "u" } }
                        }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Admin"));
        assert!(!html.contains("Users"));
    }
}
