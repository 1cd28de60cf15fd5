//! Session token persistence.
//!
//! The store holds at most one token under a single well-known key. Presence
//! of a token says nothing about its validity; that is the guard's job.
//! Stores are deliberately infallible at the trait level: persistence
//! failures are logged and surface as a missing token.

use std::path::PathBuf;
use std::sync::Mutex;

use keyring::Entry;
use tracing::{debug, warn};

/// Token file name inside the data directory
const TOKEN_FILE: &str = "session.token";

/// Injected persistence capability for the session token.
///
/// Implementations must be side-effect free on `read` and idempotent on
/// `clear` (clearing an absent token is a no-op).
pub trait TokenStore {
    /// The stored token, if any.
    fn read(&self) -> Option<String>;

    /// Store a token, replacing any previous one.
    fn write(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

/// Token store backed by a single file under a data directory.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }
}

impl TokenStore for FileTokenStore {
    fn read(&self) -> Option<String> {
        let path = self.token_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read token file");
                None
            }
        }
    }

    fn write(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "Failed to create data directory");
            return;
        }
        let path = self.token_path();
        if let Err(e) = std::fs::write(&path, token) {
            warn!(path = %path.display(), error = %e, "Failed to write token file");
        }
    }

    fn clear(&self) {
        let path = self.token_path();
        match std::fs::remove_file(&path) {
            Ok(()) => debug!("Cleared session token"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove token file"),
        }
    }
}

/// Token store backed by the OS keychain.
pub struct KeyringTokenStore {
    service: String,
    user: String,
}

impl KeyringTokenStore {
    pub fn new(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Option<Entry> {
        match Entry::new(&self.service, &self.user) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Failed to create keyring entry");
                None
            }
        }
    }
}

impl TokenStore for KeyringTokenStore {
    fn read(&self) -> Option<String> {
        self.entry()?.get_password().ok()
    }

    fn write(&self, token: &str) {
        if let Some(entry) = self.entry() {
            if let Err(e) = entry.set_password(token) {
                warn!(error = %e, "Failed to store token in keychain");
            }
        }
    }

    fn clear(&self) {
        if let Some(entry) = self.entry() {
            match entry.delete_credential() {
                Ok(()) => debug!("Cleared session token from keychain"),
                Err(keyring::Error::NoEntry) => {}
                Err(e) => warn!(error = %e, "Failed to delete token from keychain"),
            }
        }
    }
}

/// In-process token store.
///
/// Used as a test double for the guard, and by embedders that manage
/// persistence themselves.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn write(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.read(), None);

        store.write("abc.def.ghi");
        assert_eq!(store.read().as_deref(), Some("abc.def.ghi"));

        store.clear();
        assert_eq!(store.read(), None);
        // Clearing again is a no-op
        store.clear();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().to_path_buf());
        assert_eq!(store.read(), None);

        store.write("abc.def.ghi");
        assert_eq!(store.read().as_deref(), Some("abc.def.ghi"));

        store.write("new.token.value");
        assert_eq!(store.read().as_deref(), Some("new.token.value"));

        store.clear();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().to_path_buf());
        store.clear();
        store.clear();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_file_store_ignores_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.token"), "abc.def.ghi\n").unwrap();
        let store = FileTokenStore::new(dir.path().to_path_buf());
        assert_eq!(store.read().as_deref(), Some("abc.def.ghi"));
    }
}
