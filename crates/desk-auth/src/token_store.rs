use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::AuthSession;

const DEFAULT_KEYRING_SERVICE: &str = "studydesk";
const KEYRING_USER: &str = "supabase-session";
const SESSION_FILE_NAME: &str = "session.json";
const TOKEN_ENV: &str = "STUDYDESK_AUTH__TOKEN";

/// Where a loaded session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Override with `STUDYDESK_KEYRING_SERVICE` to keep tests away from real
/// credentials.
fn keyring_service() -> String {
    std::env::var("STUDYDESK_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

fn keyring_entry() -> Option<keyring::Entry> {
    keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()
}

/// Store a session in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if both keyring and file storage fail.
pub fn store(session: &AuthSession) -> Result<(), AuthError> {
    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::TokenStore(format!("serialize session: {e}")))?;

    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&json) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(&session_path()?, &json)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(&session_path()?, &json)
        }
    }
}

/// Load a session. Priority: keyring, then `STUDYDESK_AUTH__TOKEN`, then
/// `~/.studydesk/session.json`.
#[must_use]
pub fn load() -> Option<AuthSession> {
    load_with_source().map(|(session, _)| session)
}

#[must_use]
pub fn load_with_source() -> Option<(AuthSession, TokenSource)> {
    if let Some(entry) = keyring_entry()
        && let Ok(json) = entry.get_password()
        && let Some(session) = parse_session(&json)
    {
        return Some((session, TokenSource::Keyring));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        match AuthSession::from_access_token(&token) {
            Ok(session) => return Some((session, TokenSource::Env)),
            Err(error) => tracing::warn!(%error, "ignoring unreadable {TOKEN_ENV}"),
        }
    }

    let path = session_path().ok()?;
    load_file(&path).map(|session| (session, TokenSource::File))
}

/// Delete stored sessions from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if the session file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry()
        && let Err(error) = entry.delete_credential()
    {
        tracing::debug!(%error, "no keyring session to delete");
    }
    delete_file(&session_path()?)
}

// --- File helpers ---

fn session_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".studydesk").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStore("home directory not found, cannot store session".into())
        })
}

fn parse_session(json: &str) -> Option<AuthSession> {
    if json.trim().is_empty() {
        return None;
    }
    serde_json::from_str(json)
        .inspect_err(|error| tracing::warn!(%error, "ignoring corrupt stored session"))
        .ok()
}

pub(crate) fn store_file(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

pub(crate) fn load_file(path: &Path) -> Option<AuthSession> {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| parse_session(&json))
}

pub(crate) fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn session() -> AuthSession {
        AuthSession {
            access_token: "a.b.c".into(),
            refresh_token: Some("r-1".into()),
            user_id: "u-1".into(),
            email: None,
            expires_at: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn session_path_is_under_home() {
        let path = session_path().expect("should resolve");
        assert!(path.ends_with(".studydesk/session.json"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join(SESSION_FILE_NAME);
        let json = serde_json::to_string(&session()).unwrap();

        store_file(&path, &json).expect("store");
        assert_eq!(load_file(&path), Some(session()));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        delete_file(&path).expect("delete");
        assert!(!path.exists());
        delete_file(&path).expect("deleting twice is fine");
    }

    #[test]
    fn blank_or_corrupt_files_load_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join(SESSION_FILE_NAME);

        std::fs::write(&path, "   \n  ").expect("write");
        assert!(load_file(&path).is_none());

        std::fs::write(&path, "{not json").expect("write");
        assert!(load_file(&path).is_none());
    }

    #[test]
    fn token_source_labels() {
        assert_eq!(TokenSource::Keyring.to_string(), "keyring");
        assert_eq!(TokenSource::Env.as_str(), "env");
    }
}
