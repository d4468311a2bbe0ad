use figment::Jail;
use labref_config::{ConfigOverrides, LabrefConfig};

#[test]
fn env_fills_connection_string() {
    Jail::expect_with(|jail| {
        jail.set_env("LABREF_DATABASE__URL", "env.db");
        jail.set_env("LABREF_SOURCES__PICTOGRAMS_URL", "https://example.org/ghs.json");

        let config = LabrefConfig::load(None).expect("config loads");
        assert_eq!(config.database.url, "env.db");
        assert_eq!(
            config.sources.pictograms_location(),
            Some("https://example.org/ghs.json")
        );
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("labref.toml", "[database]\nurl = \"file.db\"\n")?;
        jail.set_env("LABREF_DATABASE__URL", "env.db");

        let config = LabrefConfig::load(None).expect("config loads");
        assert_eq!(config.database.url, "env.db");
        Ok(())
    });
}

#[test]
fn command_line_beats_env() {
    Jail::expect_with(|jail| {
        jail.set_env("LABREF_DATABASE__URL", "env.db");
        jail.set_env("LABREF_SOURCES__TIMEOUT_SECS", "5");

        let config = LabrefConfig::load(None)
            .expect("config loads")
            .with_overrides(ConfigOverrides {
                database_url: Some("flag.db".into()),
                ..Default::default()
            });
        assert_eq!(config.database.url, "flag.db");
        assert_eq!(config.sources.timeout_secs, 5);
        Ok(())
    });
}
