//! Hooks bridging browser events and API calls into signals.

mod api;
mod clock;
mod scroll;
mod viewport;

pub use api::{fetched, use_api};
pub use clock::use_clock;
pub use scroll::{use_scroll_elevation, use_scroll_provider, use_section_highlight};
pub use viewport::{use_breakpoint, use_is_mobile, use_media_query, use_viewport_provider};
