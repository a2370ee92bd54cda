use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PortfolioSummary {
    total_value: Decimal,
    total_cost: Decimal,
    total_gain: Decimal,
    gain_percent: Decimal,
}
