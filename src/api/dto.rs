use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Getters, new, Serialize)]
pub struct HoldingsResponseDto {
    data: HoldingsDataDto,
}

impl HoldingsResponseDto {
    pub fn into_records(self) -> Vec<UserHoldingDto> {
        self.data.user_holding
    }
}

#[derive(Debug, Deserialize, Getters, new, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsDataDto {
    user_holding: Vec<UserHoldingDto>,
}

/// Raw transport record. Values are untrusted until mapped.
#[derive(Clone, Debug, Deserialize, Getters, new, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHoldingDto {
    symbol: String,
    quantity: i64,
    ltp: f64,
    avg_price: f64,
    close: f64,
}
