//! Typed wrappers around each REST endpoint the portals use.

pub mod auth;
pub mod care;
pub mod facilities;
pub mod infants;
pub mod parents;
pub mod system;
pub mod users;

pub use auth::*;
pub use care::*;
pub use facilities::*;
pub use infants::*;
pub use parents::*;
pub use system::*;
pub use users::*;
