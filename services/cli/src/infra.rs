use mietspiegel::config::AppConfig;
use mietspiegel::error::AppError;
use mietspiegel::tables::{ReferenceTables, YearBand};
use mietspiegel::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Loads configuration, installs tracing and reads the reference tables.
///
/// A table that cannot be read is fatal: the caller reports the error and exits.
pub(crate) fn bootstrap(data_dir: Option<PathBuf>) -> Result<Arc<ReferenceTables>, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = data_dir {
        config.tables.data_dir = dir;
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, data_dir = %config.tables.data_dir.display(), "loading rent index");

    let tables = ReferenceTables::load_dir(&config.tables.data_dir)?;
    Ok(Arc::new(tables))
}

pub(crate) fn parse_year_band(raw: &str) -> Result<YearBand, String> {
    raw.parse::<YearBand>().map_err(|err| err.to_string())
}
