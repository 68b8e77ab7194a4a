//! Sidebar shell state.
//!
//! Desktop width mode and mobile drawer visibility are one enumerated state
//! so impossible combinations (a collapsed drawer, an open drawer on desktop)
//! cannot be represented.

/// Current sidebar presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    DesktopExpanded,
    DesktopCollapsed,
    MobileClosed,
    MobileOpen,
}

/// Inputs that can move the shell between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Collapse button. Desktop only.
    ToggleCollapse,
    /// Menu button in the top bar. Mobile only.
    OpenDrawer,
    /// Tap on the overlay behind the drawer.
    DismissDrawer,
    /// A navigation item was activated.
    Navigated,
    /// The viewport crossed the mobile breakpoint.
    ViewportChanged { mobile: bool },
}

impl ShellState {
    pub fn initial(mobile: bool) -> Self {
        if mobile {
            ShellState::MobileClosed
        } else {
            ShellState::DesktopExpanded
        }
    }

    /// Next state for `event`. Pairs without a transition leave the state as is.
    #[must_use]
    pub fn apply(self, event: ShellEvent) -> Self {
        use ShellEvent::*;
        use ShellState::*;
        match (self, event) {
            (DesktopExpanded, ToggleCollapse) => DesktopCollapsed,
            (DesktopCollapsed, ToggleCollapse) => DesktopExpanded,
            (MobileClosed, OpenDrawer) => MobileOpen,
            (MobileOpen, DismissDrawer | Navigated) => MobileClosed,
            (DesktopExpanded | DesktopCollapsed, ViewportChanged { mobile: true }) => MobileClosed,
            (MobileClosed | MobileOpen, ViewportChanged { mobile: false }) => DesktopExpanded,
            (state, _) => state,
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ShellState::MobileClosed | ShellState::MobileOpen)
    }

    /// Icon-only sidebar.
    pub fn is_collapsed(self) -> bool {
        self == ShellState::DesktopCollapsed
    }

    pub fn is_drawer_open(self) -> bool {
        self == ShellState::MobileOpen
    }

    /// Value for the sidebar's `data-state` attribute, which drives its width.
    pub fn width_class(self) -> &'static str {
        match self {
            ShellState::DesktopExpanded => "expanded",
            ShellState::DesktopCollapsed => "collapsed",
            ShellState::MobileClosed => "drawer-closed",
            ShellState::MobileOpen => "drawer-open",
        }
    }
}

/// What a collapsible menu section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRender {
    pub show_header: bool,
    pub show_items: bool,
    pub icon_only: bool,
}

/// A collapsed shell overrides the section's own `expanded` flag: the header
/// is suppressed and every item renders icon-only.
pub fn section_render(shell_collapsed: bool, section_expanded: bool) -> SectionRender {
    if shell_collapsed {
        SectionRender {
            show_header: false,
            show_items: true,
            icon_only: true,
        }
    } else {
        SectionRender {
            show_header: true,
            show_items: section_expanded,
            icon_only: false,
        }
    }
}
