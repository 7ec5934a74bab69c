//! Environment variables take precedence over TOML files.

use desk_config::DeskConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("STUDYDESK_SUPABASE__URL", "https://env.supabase.co");
        jail.set_env("STUDYDESK_SUPABASE__ANON_KEY", "env-key");
        jail.set_env("STUDYDESK_GENERAL__DEFAULT_SORT", "created");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.supabase.url, "https://env.supabase.co");
        assert_eq!(config.supabase.anon_key, "env-key");
        assert_eq!(config.general.default_sort, "created");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".studydesk")?;
        jail.create_file(
            ".studydesk/config.toml",
            r#"
[supabase]
url = "https://toml.supabase.co"
anon_key = "toml-key"
"#,
        )?;
        jail.set_env("STUDYDESK_SUPABASE__ANON_KEY", "env-key");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.supabase.url, "https://toml.supabase.co");
        assert_eq!(config.supabase.anon_key, "env-key");
        Ok(())
    });
}
