//! Session credential handling.
//!
//! This module provides:
//! - `TokenStore`: injected persistence for the session token, with file,
//!   keychain, and in-memory implementations
//! - `decode_claims`: payload decoding for the compact token format
//!
//! Tokens are written by the external login flow and read on every
//! navigation; the guard clears them when they turn out expired or
//! malformed.

pub mod store;
pub mod token;

pub use store::{FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenStore};
pub use token::{decode_claims, Claims, TokenError};
