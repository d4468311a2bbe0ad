//! The one-shot load run: fetch, normalize, then reconcile.
//!
//! Every dataset is fetched and normalized before the store is opened, so a
//! fetch or decode failure never touches the database.

use anyhow::Context;
use labref_config::LabrefConfig;
use labref_core::LoadSummary;
use labref_db::RefDb;
use labref_sources::SourceClient;

use crate::progress::Progress;

pub async fn run(config: &LabrefConfig, init_schema: bool) -> anyhow::Result<LoadSummary> {
    let client =
        SourceClient::from_config(&config.sources).context("failed to build HTTP client")?;

    let spinner = Progress::spinner("Fetching reference data");
    let set = match client.load_all(&config.sources).await {
        Ok(set) => {
            spinner.finish_clear();
            set
        }
        Err(error) => {
            spinner.finish_err("Fetch failed");
            return Err(error).context("failed to fetch reference data");
        }
    };
    let fetched = set.summary();
    tracing::info!(
        hazard_codes = fetched.hazard_codes,
        precaution_codes = fetched.precaution_codes,
        pictograms = fetched.pictograms,
        cas_entries = fetched.cas_entries,
        "reference data normalized"
    );

    let db = RefDb::open(&config.database.url, config.database.auth_token())
        .await
        .context("failed to open reference store")?;
    if init_schema {
        db.ensure_schema()
            .await
            .context("failed to create reference tables")?;
    }

    let summary = db
        .reconcile(&set)
        .await
        .context("failed to write reference data")?;

    match db.table_counts().await {
        Ok(stored) => tracing::info!(
            h_codes = stored.hazard_codes,
            p_codes = stored.precaution_codes,
            ghs_pictogramas = stored.pictograms,
            cas_catalogo = stored.cas_entries,
            "table row counts"
        ),
        Err(error) => tracing::warn!(%error, "could not read table row counts"),
    }

    Ok(summary)
}
