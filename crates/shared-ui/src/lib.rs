//! Shared layout building blocks for the CareLink portal: the sidebar shell,
//! top bar, tables, forms, plus the pure state that drives them.

mod components;

pub mod clock;
pub mod nav;
pub mod responsive;
pub mod scroll;
pub mod shell;

pub use clock::format_clock;
pub use components::*;
pub use nav::{is_active, MatchMode};
pub use responsive::{Breakpoint, MediaQuery, Viewport, DARK_MODE_QUERY};
pub use scroll::{active_section, elevation, Elevation, SectionBounds};
pub use shell::{section_render, SectionRender, ShellEvent, ShellState};
