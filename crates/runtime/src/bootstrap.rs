//! Environment bootstrap from content files.

use std::path::{Path, PathBuf};

use growth_content::loaders::{ConfigLoader, RosterLoader};

use crate::runtime::GrowthRuntime;

/// A content file failed to load or validate.
#[derive(Debug, thiserror::Error)]
#[error("failed to load environment data from {path}: {source}")]
pub struct BootstrapError {
    path: PathBuf,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl BootstrapError {
    fn new(path: &Path, source: anyhow::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

/// Stands up a [`GrowthRuntime`] from a config file and a roster/party
/// fixture file.
pub fn load_runtime(
    config_path: &Path,
    roster_path: &Path,
) -> Result<GrowthRuntime, BootstrapError> {
    let config =
        ConfigLoader::load(config_path).map_err(|e| BootstrapError::new(config_path, e))?;
    let (roster, party) =
        RosterLoader::load(roster_path).map_err(|e| BootstrapError::new(roster_path, e))?;
    Ok(GrowthRuntime::new(config, roster, party))
}
