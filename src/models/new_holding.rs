use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Largest quantity accepted for a single holding.
pub const MAX_LOTS: Decimal = dec!(1000000000);
/// Largest purchase price per share accepted, in rupiah.
pub const MAX_PRICE: Decimal = dec!(1000000000);

/// User-entered part of a holding. Id, current price and daily gain are
/// assigned by the store.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct NewHolding {
    ticker: String,
    name: String,
    lots: Decimal,
    purchase_price: Decimal,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidHolding {
    #[error("Ticker is required")]
    EmptyTicker,
    #[error("Quantity must be positive, got {0} lots")]
    NonPositiveLots(Decimal),
    #[error("Purchase price must be positive, got {0}")]
    NonPositivePrice(Decimal),
    #[error("Quantity must be at most 1000000000 lots, got {0}")]
    TooManyLots(Decimal),
    #[error("Purchase price must be at most 1000000000, got {0}")]
    PriceTooHigh(Decimal),
}

impl NewHolding {
    pub fn normalized_ticker(&self) -> String {
        self.ticker.trim().to_uppercase()
    }

    pub fn validate(&self) -> Result<(), InvalidHolding> {
        if self.ticker.trim().is_empty() {
            return Err(InvalidHolding::EmptyTicker);
        }
        if self.lots <= Decimal::ZERO {
            return Err(InvalidHolding::NonPositiveLots(self.lots));
        }
        if self.purchase_price <= Decimal::ZERO {
            return Err(InvalidHolding::NonPositivePrice(self.purchase_price));
        }
        if self.lots > MAX_LOTS {
            return Err(InvalidHolding::TooManyLots(self.lots));
        }
        if self.purchase_price > MAX_PRICE {
            return Err(InvalidHolding::PriceTooHigh(self.purchase_price));
        }

        Ok(())
    }
}
