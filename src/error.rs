use thiserror::Error;

use std::path::PathBuf;

use crate::api::DashboardError;

#[derive(Debug, Error)]
pub enum DashfwError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "no API key configured: set `api_key` in the config file or the DASHFW_API_KEY environment variable"
    )]
    MissingApiKey,

    #[error("failed to read table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("table {path} is missing required column `{column}`")]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to enumerate the remote catalog: {source}")]
    Bootstrap {
        #[source]
        source: DashboardError,
    },
}
