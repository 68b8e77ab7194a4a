//! HTTP access to the CareLink REST API: the session context, the
//! authenticated client and typed endpoint wrappers.

pub mod api;
pub mod cancel;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod token;

pub use cancel::{guarded, RequestGuard};
pub use error::ApiError;
pub use http::ApiClient;
pub use session::{CredentialStore, MemoryCredentialStore, Session};
pub use token::{decode_claims, DecodeError};
