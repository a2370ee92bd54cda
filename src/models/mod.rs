pub mod chart_point;
pub mod holding;
pub mod market_index;
pub mod new_holding;
pub mod portfolio_summary;

pub use chart_point::ChartPoint;
pub use holding::Holding;
pub use market_index::MarketIndex;
pub use new_holding::{InvalidHolding, NewHolding};
pub use portfolio_summary::PortfolioSummary;
