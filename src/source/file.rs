use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{TicketSource, decode_dataset};
use crate::error::{BoardError, Result};
use crate::types::Dataset;

/// Reads the endpoint payload from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TicketSource for FileSource {
    async fn fetch(&self) -> Result<Dataset> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            BoardError::FetchFailure(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let dataset = decode_dataset(&body)?;
        tracing::debug!(
            path = %self.path.display(),
            tickets = dataset.tickets.len(),
            users = dataset.users.len(),
            "loaded dataset from file"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
