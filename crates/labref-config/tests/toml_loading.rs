//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use std::path::Path;

use figment::Jail;
use labref_config::{ConfigError, LabrefConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_project_file_from_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "labref.toml",
            r#"
[database]
url = "./reference.db"

[sources]
cas_url = "https://example.org/cas.csv"
timeout_secs = 45
"#,
        )?;

        let config = LabrefConfig::load(None).expect("config loads");
        assert_eq!(config.database.url, "./reference.db");
        assert_eq!(config.sources.cas_url, "https://example.org/cas.csv");
        assert_eq!(config.sources.timeout_secs, 45);
        assert_eq!(config.sources.hp_url, labref_core::DEFAULT_HP_URL);
        assert!(config.sources.pictograms_url.is_empty());
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("labref.toml", "[database]\nurl = \"project.db\"\n")?;
        jail.create_file("other.toml", "[database]\nurl = \"explicit.db\"\n")?;

        let config = LabrefConfig::load(Some(Path::new("other.toml"))).expect("config loads");
        assert_eq!(config.database.url, "explicit.db");
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = LabrefConfig::load(Some(Path::new("nope.toml")));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_reported() {
    Jail::expect_with(|jail| {
        jail.create_file("labref.toml", "[sources]\ntimeout_secs = \"soon\"\n")?;

        let result = LabrefConfig::load(None);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn no_files_gives_defaults() {
    Jail::expect_with(|_jail| {
        let config = LabrefConfig::load(None).expect("config loads");
        assert!(!config.database.is_configured());
        assert_eq!(config.sources.timeout_secs, 30);
        Ok(())
    });
}
