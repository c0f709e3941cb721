use crate::api::error::ApiError;
use crate::model::{AccountTypeBalance, LiquidityBucket, TokenomicsSummary};

pub(crate) mod client;
pub use client::TokenomicsClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Read-only view of the analytics backend.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TokenomicsApi: Send + Sync {
    /// Base URL every endpoint is resolved against.
    fn base_url(&self) -> &str;

    /// Balance and address count per account type.
    async fn get_balances_by_type(&self) -> Result<Vec<AccountTypeBalance>, ApiError>;

    /// Balance per liquidity classification.
    async fn get_supply_liquidity(&self) -> Result<Vec<LiquidityBucket>, ApiError>;

    /// Headline tokenomics figures.
    async fn get_tokenomics(&self) -> Result<TokenomicsSummary, ApiError>;
}
