//! Session persistence
//!
//! The CLI runs one command per process, so the session the client works
//! with is loaded from disk at startup and written back afterwards. Tokens
//! refreshed during the command, or a forced logout, survive that way.

use anyhow::{Context, Result};
use skillhire_client::SessionContext;
use skillhire_core::domain::user::Session;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads the saved session, or an empty context when none exists
pub fn load(path: &Path) -> Result<SessionContext> {
    if !path.exists() {
        return Ok(SessionContext::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    let session: Session = serde_json::from_str(&raw)
        .with_context(|| format!("Corrupt session file {}", path.display()))?;

    debug!("Restored session for {}", session.user.email);
    Ok(SessionContext::from_session(session))
}

/// Writes the session back, removing the file once logged out
pub fn save(path: &Path, session: Option<&Session>) -> Result<()> {
    match session {
        Some(session) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let raw = serde_json::to_string_pretty(session)?;
            debug!("Saving session to {}", path.display());
            fs::write(path, raw)
                .with_context(|| format!("Failed to write session file {}", path.display()))
        }
        None => {
            if path.exists() {
                fs::remove_file(path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
            Ok(())
        }
    }
}
