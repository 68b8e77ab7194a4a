pub mod auth;
pub mod care;
pub mod claims;
pub mod config;
pub mod error;
pub mod facility;
pub mod people;
pub mod role;
pub mod system;

pub use auth::*;
pub use care::*;
pub use claims::*;
pub use config::*;
pub use error::*;
pub use facility::*;
pub use people::*;
pub use role::*;
pub use system::*;
