use anyhow::Context;
use labref_config::LabrefConfig;

use crate::cli::Cli;

/// Resolve the effective configuration: `.env`, TOML layers, environment,
/// then command-line flags. Fails before any network or database activity
/// when a mandatory value is missing.
pub fn load_config(cli: &Cli) -> anyhow::Result<LabrefConfig> {
    let config = LabrefConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.overrides());

    config.validate()?;
    tracing::debug!(
        remote = config.database.is_remote(),
        hp_url = %config.sources.hp_url,
        "configuration resolved"
    );
    Ok(config)
}
