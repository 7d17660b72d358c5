use async_trait::async_trait;
use reqwest::{Client, header};
use url::Url;

use super::{TicketSource, decode_dataset};
use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::types::Dataset;

/// Fetches the dataset with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    /// Create a source for `endpoint` using the timeouts from `config`
    pub fn new(endpoint: &str, config: &Config) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| BoardError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

        let client = Client::builder()
            .user_agent(concat!("ticketboard/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout_duration())
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TicketSource for HttpSource {
    async fn fetch(&self) -> Result<Dataset> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(
                header::ACCEPT,
                header::HeaderValue::from_static("application/json"),
            )
            .send()
            .await
            .map_err(|e| BoardError::FetchFailure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::FetchFailure(format!(
                "{} returned HTTP {}",
                self.endpoint, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BoardError::FetchFailure(format!("reading response failed: {e}")))?;

        let dataset = decode_dataset(&body)?;
        tracing::info!(
            endpoint = %self.endpoint,
            tickets = dataset.tickets.len(),
            users = dataset.users.len(),
            "fetched dataset"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
