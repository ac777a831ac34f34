//! Medical Portal Client
//!
//! Async client for the clinic portal API: session persistence, auth,
//! the typed endpoint surface, route gating, and one controller per
//! screen. Pure domain logic lives in the `domain` crate.

/// Login, register, logout
pub mod auth;

/// Typed endpoint surface
pub mod endpoints;

/// Client errors
pub mod errors;

/// reqwest transport and the typed API wrapper
pub mod http;

/// The portal handle
pub mod portal;

/// Route table and navigation
pub mod routes;

/// Screen controllers
pub mod screens;

/// Session store
pub mod session;

/// Wire seam
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::Error;
pub use portal::Portal;
pub use routes::Route;
pub use session::SessionStore;
