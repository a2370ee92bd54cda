use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Holding, PortfolioSummary};

pub fn total_value(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .fold(Decimal::ZERO, |sum, holding| sum + holding.market_value())
}

pub fn total_cost(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .fold(Decimal::ZERO, |sum, holding| sum + holding.cost_basis())
}

pub fn total_gain(holdings: &[Holding]) -> Decimal {
    total_value(holdings) - total_cost(holdings)
}

/// Percentage gain relative to cost basis, 0 when there is no cost basis.
pub fn gain_percent(holdings: &[Holding]) -> Decimal {
    percent_of(total_gain(holdings), total_cost(holdings))
}

pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let value = total_value(holdings);
    let cost = total_cost(holdings);
    let gain = value - cost;

    PortfolioSummary::new(value, cost, gain, percent_of(gain, cost))
}

fn percent_of(gain: Decimal, cost: Decimal) -> Decimal {
    if cost.is_zero() {
        return Decimal::ZERO;
    }

    gain / cost * dec!(100)
}
