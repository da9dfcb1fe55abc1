use derive_getters::Getters;

use crate::error::DomainError;

/// One validated position. Fields can only be set through [`Holding::new`].
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Holding {
    symbol: String,
    quantity: u64,
    ltp: f64,
    avg_price: f64,
    close: f64,
    pnl: f64,
}

impl Holding {
    pub fn new(
        symbol: &str,
        quantity: i64,
        ltp: f64,
        avg_price: f64,
        close: f64,
        pnl: f64,
    ) -> Result<Self, DomainError> {
        let quantity = u64::try_from(quantity).map_err(|_| DomainError::InvalidQuantity(quantity))?;

        for (field, value) in [("ltp", ltp), ("avg_price", avg_price), ("close", close)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::InvalidPrice { field, value });
            }
        }

        if !pnl.is_finite() {
            return Err(DomainError::InvalidPrice {
                field: "pnl",
                value: pnl,
            });
        }

        Ok(Self {
            symbol: symbol.to_uppercase(),
            quantity,
            ltp,
            avg_price,
            close,
            pnl,
        })
    }

    /// Identity key; equal ids denote the same logical position.
    pub fn id(&self) -> &str {
        &self.symbol
    }
}
