//! routegate - client-side routing core for a multi-view dashboard client.
//!
//! This crate maps URL paths to view handles and gates the dashboard area
//! behind session validity:
//!
//! - [`RouteTable`]: nested path → view mapping with legacy alias redirects
//! - [`Guard`]: synchronous pre-navigation decision procedure over the
//!   stored session token's expiry claim
//! - [`TokenStore`]: injected persistence for the token (file, keychain,
//!   or in-memory)
//! - [`Router`]: resolves a path and runs the guard, yielding a
//!   [`Decision`] the embedding view layer applies
//!
//! The guard never verifies the token's signature; expiry checking is
//! zero-latency client-side UX, and real authorization belongs to the
//! backend.

pub mod auth;
pub mod config;
pub mod guard;
pub mod router;
pub mod routes;

pub use auth::{
    decode_claims, Claims, FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenError,
    TokenStore,
};
pub use config::Config;
pub use guard::{Decision, Guard, Notice, DASHBOARD_PATH, LOGIN_PATH, SIGNUP_PATH};
pub use router::Router;
pub use routes::{requires_auth, Resolution, Route, RouteTable, ViewId};
