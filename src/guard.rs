//! Navigation guard: the pre-transition decision procedure.
//!
//! The guard runs synchronously before every navigation, reads the session
//! token from the injected store, checks its expiry claim, and produces a
//! [`Decision`] the router applies before rendering anything. Expiry is
//! checked locally on every navigation instead of asking the backend, so
//! gating costs nothing and works offline; it is advisory only, and real
//! authorization stays server-side.

use std::fmt;

use chrono::Utc;
use tracing::{debug, warn};

use crate::auth::token::decode_claims;
use crate::auth::TokenStore;
use crate::routes::{self, Route};

/// Login page, also the landing page for signed-out users
pub const LOGIN_PATH: &str = "/";

/// Signup page
pub const SIGNUP_PATH: &str = "/signup";

/// Post-login landing page
pub const DASHBOARD_PATH: &str = "/dashboard";

/// User-facing notice accompanying a blocked navigation.
///
/// The wording is part of the observable contract; the embedding UI shows
/// it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SessionExpired,
    InvalidSession,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SessionExpired => write!(f, "Session expired. Please log in again."),
            Notice::InvalidSession => write!(f, "Invalid session. Please log in again."),
        }
    }
}

/// Outcome of a guard pass, consumed once by the calling router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested destination.
    Proceed,
    /// Navigate to the given path instead.
    Redirect(String),
    /// Abort: navigate to the given path and show the notice.
    Block { to: String, notice: Notice },
}

impl Decision {
    fn block(notice: Notice) -> Self {
        Decision::Block {
            to: LOGIN_PATH.to_string(),
            notice,
        }
    }
}

/// Pre-navigation guard over a token store.
pub struct Guard<S> {
    store: S,
}

impl<S: TokenStore> Guard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for embedders whose login flow writes the
    /// token through the same capability the guard reads.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decide whether the navigation to `path` may proceed.
    ///
    /// `chain` is the matched descriptor chain for `path`, ancestors first
    /// (empty for unmatched paths).
    pub fn decide(&self, path: &str, chain: &[&Route]) -> Decision {
        self.decide_at(path, chain, Utc::now().timestamp())
    }

    /// Same as [`Guard::decide`] with the current time injected.
    pub fn decide_at(&self, path: &str, chain: &[&Route], now: i64) -> Decision {
        let token = self.store.read();

        // Signed-in users heading for a public entry page go straight to
        // the dashboard.
        if let Some(ref token) = token {
            if path == LOGIN_PATH || path == SIGNUP_PATH {
                if let Ok(claims) = decode_claims(token) {
                    if !claims.is_expired(now) {
                        debug!(path, "valid session on public entry page");
                        return Decision::Redirect(DASHBOARD_PATH.to_string());
                    }
                }
                // Expired or undecodable: let the entry page load. Note the
                // asymmetry with the protected branch below: the stored
                // token is NOT cleared here.
            }
        }

        if !routes::requires_auth(chain) {
            return Decision::Proceed;
        }

        let Some(token) = token else {
            debug!(path, "no session token for protected route");
            return Decision::block(Notice::SessionExpired);
        };

        match decode_claims(&token) {
            Err(err) => {
                warn!(path, error = %err, "clearing undecodable session token");
                self.store.clear();
                Decision::block(Notice::InvalidSession)
            }
            Ok(claims) if claims.is_expired(now) => {
                debug!(path, exp = claims.exp, now, "session token expired");
                self.store.clear();
                Decision::block(Notice::SessionExpired)
            }
            Ok(_) => Decision::Proceed,
        }
    }
}
