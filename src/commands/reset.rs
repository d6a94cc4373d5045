//! `termintro reset`

use anyhow::Result;

use crate::session::{session_id, FileSessionStore};

/// End the session by deleting its file.
pub fn handle_reset(session: Option<&str>) -> Result<()> {
    let id = session_id(session);
    let path = FileSessionStore::default_path(&id);
    if FileSessionStore::end(&path)? {
        tracing::info!(path = %path.display(), "session ended");
        println!("Session {} ended", id);
    } else {
        println!("No active session {}", id);
    }
    Ok(())
}
