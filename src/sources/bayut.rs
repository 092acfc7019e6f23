use crate::config::Config;
use crate::error::{Result, WatchError};
use crate::models::{Listing, Purpose, SearchResponse};
use crate::sources::traits::ListingSource;
use crate::sources::types::SearchRequest;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Bayut search client, reached through RapidAPI
pub struct BayutClient {
    client: Client,
    search_url: String,
}

impl BayutClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, &format!("https://{}", config.rapidapi_host))
    }

    /// Client against an explicit base URL instead of the configured host
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-key", header_value("BAYUT_RAPIDAPI_KEY", &config.rapidapi_key)?);
        headers.insert("x-rapidapi-host", header_value("BAYUT_RAPIDAPI_HOST", &config.rapidapi_host)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            search_url: search_url(base_url),
        })
    }
}

fn search_url(base_url: &str) -> String {
    format!("{}/properties_search", base_url.trim_end_matches('/'))
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| WatchError::Config(vec![name]))
}

#[async_trait]
impl ListingSource for BayutClient {
    async fn fetch(&self, purpose: Purpose, location_ids: &[u32]) -> Result<Vec<Listing>> {
        let body = SearchRequest::latest(purpose, location_ids);
        let provider_error = |reason: String| WatchError::Provider { purpose, reason };

        debug!("Fetching {} listings from {}", purpose, self.search_url);

        let response = self
            .client
            .post(&self.search_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| provider_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Bayut returned status {} for {}", status, purpose);
            return Err(provider_error(format!("HTTP {}: {}", status, text)));
        }

        let listings = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| provider_error(format!("invalid response body: {e}")))?
            .into_listings();

        info!("Fetched {} {} listings", listings.len(), purpose);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Bayut"
    }
}
