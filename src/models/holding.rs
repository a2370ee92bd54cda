use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{
    NewHolding,
    new_holding::{MAX_LOTS, MAX_PRICE},
};

/// Shares per lot on the Indonesia Stock Exchange.
pub const SHARES_PER_LOT: Decimal = dec!(100);

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    id: String,
    ticker: String,
    name: String,
    lots: Decimal,
    shares: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    daily_gain_percentage: Decimal,
}

impl Holding {
    /// Builds a holding from validated input. `daily_gain_percentage` is fixed
    /// here and never recomputed.
    pub fn purchase(id: String, input: &NewHolding, current_price: Decimal) -> Self {
        let ticker = input.normalized_ticker();
        let name = if input.name().trim().is_empty() {
            format!("{} Corporation", ticker)
        } else {
            input.name().trim().to_string()
        };

        Self {
            id,
            ticker,
            name,
            lots: *input.lots(),
            shares: *input.lots() * SHARES_PER_LOT,
            purchase_price: *input.purchase_price(),
            current_price,
            daily_gain_percentage: gain_percentage(*input.purchase_price(), current_price),
        }
    }

    /// Whether the figures stay inside the bounds `add` enforces, so that
    /// aggregating any realistic number of holdings cannot overflow.
    pub fn within_limits(&self) -> bool {
        let max_price = MAX_PRICE * dec!(2);

        self.lots.abs() <= MAX_LOTS
            && self.shares.abs() <= MAX_LOTS * SHARES_PER_LOT
            && self.purchase_price.abs() <= max_price
            && self.current_price.abs() <= max_price
    }

    pub fn market_value(&self) -> Decimal {
        self.shares * self.current_price
    }

    pub fn cost_basis(&self) -> Decimal {
        self.shares * self.purchase_price
    }
}

pub fn gain_percentage(purchase_price: Decimal, current_price: Decimal) -> Decimal {
    if purchase_price.is_zero() {
        return Decimal::ZERO;
    }

    ((current_price - purchase_price) / purchase_price * dec!(100))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
