//! Ticket sources.
//!
//! A source produces one [`Dataset`] per call. The board fetches once at
//! startup and again only when the user asks for a reload.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::types::Dataset;

/// Anything that can deliver the `{tickets, users}` payload
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetch and decode the full dataset.
    ///
    /// Any network, status or decode problem is reported as
    /// [`BoardError::FetchFailure`].
    async fn fetch(&self) -> Result<Dataset>;

    /// Short human description used in logs and the header
    fn describe(&self) -> String;
}

/// Decode a response body, mapping decode errors to `FetchFailure`
pub(crate) fn decode_dataset(body: &[u8]) -> Result<Dataset> {
    serde_json::from_slice(body)
        .map_err(|e| BoardError::FetchFailure(format!("malformed payload: {e}")))
}

/// Pick a source: a local file when given, otherwise the configured endpoint
pub fn source_from_config(
    config: &Config,
    file_override: Option<&Path>,
) -> Result<Arc<dyn TicketSource>> {
    if let Some(path) = file_override {
        return Ok(Arc::new(FileSource::new(path)));
    }

    let endpoint = config.endpoint().ok_or_else(|| {
        BoardError::Config(
            "no endpoint configured. Run 'ticketboard config set endpoint <url>', \
             set TICKETBOARD_ENDPOINT, or pass --file <path>"
                .to_string(),
        )
    })?;

    Ok(Arc::new(HttpSource::new(&endpoint, config)?))
}
