//! # desk-config
//!
//! Layered configuration loading for studydesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STUDYDESK_*` prefix, `__` as separator)
//! 2. Project-level `.studydesk/config.toml`
//! 3. User-level `~/.config/studydesk/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `STUDYDESK_SUPABASE__URL` -> `supabase.url`,
//! `STUDYDESK_GENERAL__DEFAULT_SORT` -> `general.default_sort`, etc.
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! if config.supabase.is_configured() {
//!     println!("backend: {}", config.supabase.url);
//! }
//! ```

mod error;
mod general;
mod supabase;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use supabase::SupabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "STUDYDESK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeskConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`DeskConfig::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then all other sources.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            tracing::debug!(%error, "no .env loaded");
        }
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".studydesk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// The backend settings, or an error naming what is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when url or anon key is empty.
    pub fn require_supabase(&self) -> Result<&SupabaseConfig, ConfigError> {
        if self.supabase.is_configured() {
            Ok(&self.supabase)
        } else {
            Err(ConfigError::NotConfigured {
                section: "supabase".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("studydesk").join("config.toml"))
    }
}
