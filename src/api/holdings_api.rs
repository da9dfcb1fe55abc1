use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header::ACCEPT};
use serde_json::Value;

use super::{HoldingsSource, dto::{HoldingsResponseDto, UserHoldingDto}};
use crate::error::RemoteError;

pub const DEFAULT_BASE_URL: &str = "https://35dee773a9ec441e9f38d5fc249406ce.api.mockbin.io/";

#[derive(Clone, Debug)]
pub struct HoldingsApi {
    client: Client,
    base_url: Url,
}

impl HoldingsApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let base_url =
            Url::parse(base_url).map_err(|_| RemoteError::InvalidConfig(base_url.to_string()))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::InvalidConfig(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    async fn make_request(&self) -> Result<String, RemoteError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

pub fn parse_holdings(text: &str) -> Result<Vec<UserHoldingDto>, RemoteError> {
    let value = serde_json::from_str::<Value>(text).map_err(|_| RemoteError::InvalidResponse)?;
    let response = serde_json::from_value::<HoldingsResponseDto>(value)
        .map_err(|e| RemoteError::Decode(e.to_string()))?;

    Ok(response.into_records())
}

#[async_trait]
impl HoldingsSource for HoldingsApi {
    async fn fetch_holdings(&self) -> Result<Vec<UserHoldingDto>, RemoteError> {
        let text = self.make_request().await?;
        parse_holdings(&text)
    }
}
