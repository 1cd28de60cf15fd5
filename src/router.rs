//! Router front door: resolve a path against the table, then run the guard.
//!
//! One navigation intent is processed at a time; each call is a complete
//! guard pass and the caller applies the returned decision before rendering
//! the new location. Legacy alias redirects are resolved before the guard
//! runs, so they work regardless of session state.

use chrono::Utc;

use crate::auth::TokenStore;
use crate::guard::{Decision, Guard};
use crate::routes::{Resolution, RouteTable};

pub struct Router<S> {
    table: RouteTable,
    guard: Guard<S>,
}

impl<S: TokenStore> Router<S> {
    pub fn new(table: RouteTable, store: S) -> Self {
        Self {
            table,
            guard: Guard::new(store),
        }
    }

    pub fn guard(&self) -> &Guard<S> {
        &self.guard
    }

    /// Decide the outcome of navigating to `path`.
    ///
    /// A returned [`Decision::Redirect`] means the caller should navigate
    /// again with the new path; redirect targets go through a fresh guard
    /// pass of their own.
    pub fn navigate(&self, path: &str) -> Decision {
        self.navigate_at(path, Utc::now().timestamp())
    }

    /// Same as [`Router::navigate`] with the current time injected.
    pub fn navigate_at(&self, path: &str, now: i64) -> Decision {
        match self.table.resolve(path) {
            Resolution::Redirect(to) => Decision::Redirect(to.to_string()),
            Resolution::Match(chain) => self.guard.decide_at(path, &chain, now),
            // Unmatched paths carry no protected ancestors; the guard still
            // runs for the public entry page check.
            Resolution::NotFound => self.guard.decide_at(path, &[], now),
        }
    }
}
