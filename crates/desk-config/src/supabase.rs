//! Backend connection settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anon key. Sent as `apikey` on every request; row-level security
    /// on the backend does the actual scoping.
    #[serde(default)]
    pub anon_key: String,
}

impl SupabaseConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Project URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!SupabaseConfig::default().is_configured());
    }

    #[test]
    fn configured_when_url_and_key_set() {
        let config = SupabaseConfig {
            url: "https://abcd.supabase.co/".into(),
            anon_key: "anon".into(),
        };
        assert!(config.is_configured());
        assert_eq!(config.base_url(), "https://abcd.supabase.co");
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = SupabaseConfig {
            url: "https://abcd.supabase.co".into(),
            anon_key: "  ".into(),
        };
        assert!(!config.is_configured());
    }
}
