//! Analytics API Client
//!
//! A JSON-over-HTTP client for the `/oldata` endpoints of the analytics backend.

use crate::api::TokenomicsApi;
use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::consts::cli_consts::endpoints;
use crate::model::{AccountTypeBalance, LiquidityBucket, TokenomicsSummary};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("tokenomics-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct TokenomicsClient {
    client: Client,
    config: ApiConfig,
}

impl TokenomicsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(config.timeout)
                .timeout(config.timeout)
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        debug!("GET {} returned {} bytes", url, response_bytes.len());
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl TokenomicsApi for TokenomicsClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_balances_by_type(&self) -> Result<Vec<AccountTypeBalance>, ApiError> {
        self.get_request(endpoints::BALANCE_BY_TYPE).await
    }

    async fn get_supply_liquidity(&self) -> Result<Vec<LiquidityBucket>, ApiError> {
        self.get_request(endpoints::SUPPLY_LIQUIDITY).await
    }

    async fn get_tokenomics(&self) -> Result<TokenomicsSummary, ApiError> {
        self.get_request(endpoints::TOKENOMICS).await
    }
}
