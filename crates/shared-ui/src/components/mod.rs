pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod feedback;
pub mod form;
pub mod navbar;
pub mod page_header;

// Depends on shell state
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use feedback::*;
pub use form::*;
pub use navbar::*;
pub use page_header::*;
pub use sidebar::*;
