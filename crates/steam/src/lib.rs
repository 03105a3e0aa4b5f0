//! Steam Web API and Steam OpenID client library.
//!
//! Provides the authenticated HTTP transport, typed wrappers for the
//! endpoints the tracker reads, payload decoding into domain types, and the
//! OpenID 2.0 assertion check used for login.

pub mod api;
pub mod config;
pub mod error;
pub mod openid;
pub mod payloads;
pub mod transport;

pub use api::SteamApi;
pub use config::{SteamConfig, SteamConfigError};
pub use error::SteamApiError;
pub use transport::{Endpoint, SteamHttpClient, SteamTransport};
