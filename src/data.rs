use cardapio_menu::YearlyMenuDataset;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The menu data file could not be turned into a dataset.
#[derive(Error, Debug)]
pub enum DataUnavailable {
    #[error("failed to read menu data {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<YearlyMenuDataset, DataUnavailable> {
    let path = path.as_ref();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DataUnavailable::Read {
            path: path.to_owned(),
            source,
        })?;

    let dataset =
        YearlyMenuDataset::from_json_slice(&bytes).map_err(|source| DataUnavailable::Parse {
            path: path.to_owned(),
            source,
        })?;

    tracing::debug!(bytes = bytes.len(), "menu data loaded");

    Ok(dataset)
}
