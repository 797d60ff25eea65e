//! Page sources

use crate::config::{SearchConfig, SEARCH_ENDPOINT};
use crate::decode::{classify_http_error, decode_page, PageResponse};
use crate::error::Result;
use crate::http::HttpClient;
use crate::request::PageRequestParams;
use async_trait::async_trait;
use tracing::debug;

/// Fetches one page of search results
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page described by `params`
    async fn fetch_page(&self, params: &PageRequestParams) -> Result<PageResponse>;
}

/// Page source backed by the StackExchange HTTP API
#[derive(Debug)]
pub struct StackExchangeSource {
    client: HttpClient,
    endpoint: String,
}

impl StackExchangeSource {
    /// Create a source that requests [`SEARCH_ENDPOINT`] on the client's base URL
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }

    /// Create a source from a config
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl PageSource for StackExchangeSource {
    async fn fetch_page(&self, params: &PageRequestParams) -> Result<PageResponse> {
        debug!("Fetching page {}", params.page());

        let response = self
            .client
            .get_with_config(&self.endpoint, params.to_request_config())
            .await
            .map_err(classify_http_error)?;
        let body = response.text().await?;

        decode_page(&body)
    }
}
