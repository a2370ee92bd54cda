pub mod app;
pub mod calc;
pub mod chart_range;
pub mod form;
pub mod format;
pub mod holdings_store;
pub mod seed;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use app::App;
pub use holdings_store::{HoldingsStore, STORAGE_KEY, load_holdings, persist_holdings};
pub use simulator::{FixedDrift, PriceSimulator, RandomDrift};
