//! File-backed session store.
//!
//! A terminal has no browsing session, so the launching shell stands in
//! for one: the store lives in the temp directory under the shell's process
//! id. `termintro reset` (or a new shell) starts a fresh session.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{SessionError, SessionStore};

/// Environment variable that overrides the session id.
pub const SESSION_ENV: &str = "TERMINTRO_SESSION";

/// Resolve the session id: explicit value, then `TERMINTRO_SESSION`, then
/// the parent process id.
///
/// The id ends up in a file name. ASCII letters, digits and `-` are kept;
/// every other byte becomes `_` plus two hex digits, so distinct ids never
/// share a file.
pub fn session_id(explicit: Option<&str>) -> String {
    let raw = explicit
        .map(str::to_string)
        .or_else(|| std::env::var(SESSION_ENV).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(parent_pid);

    let mut id = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            id.push(char::from(byte));
        } else {
            id.push_str(&format!("_{:02x}", byte));
        }
    }
    id
}

#[cfg(unix)]
fn parent_pid() -> String {
    std::os::unix::process::parent_id().to_string()
}

#[cfg(not(unix))]
fn parent_pid() -> String {
    "default".to_string()
}

/// Session values persisted as a JSON object.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Default location of the session file for `id`.
    pub fn default_path(id: &str) -> PathBuf {
        std::env::temp_dir()
            .join("termintro")
            .join(format!("session-{}.json", id))
    }

    /// Open the session file, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                SessionError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SessionError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "opened session store");
        Ok(Self { path, values })
    }

    /// Open the session file, starting an empty session if it cannot be used.
    ///
    /// A corrupt file is removed. Any other failure leaves the file alone;
    /// the session then lives in memory and writes only warn.
    pub fn open_or_fresh(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e @ SessionError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "discarding corrupt session file");
                if let Err(e) = Self::end(&path) {
                    tracing::warn!(error = %e, "could not remove corrupt session file");
                }
                Self::empty(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "session file unavailable, starting a fresh session");
                Self::empty(path)
            }
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    /// End the session by removing its file. Returns whether one existed.
    pub fn end(path: &Path) -> Result<bool, SessionError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SessionError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }
}
