use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::{
    app::{
        calc,
        seed::initial_holdings,
        simulator::PriceSimulator,
        utils::IdGenerator,
    },
    models::{Holding, NewHolding, PortfolioSummary},
    storage::KeyValueStore,
};

pub const STORAGE_KEY: &str = "investoport_holdings";

/// Ordered holdings, most recent first, mirrored to `storage` after every add.
///
/// A store only exists once the saved snapshot has been read, so a write can
/// never clobber a snapshot that was not loaded yet.
#[derive(Debug)]
pub struct HoldingsStore<S: KeyValueStore, P: PriceSimulator> {
    storage: S,
    simulator: P,
    holdings: Vec<Holding>,
    ids: IdGenerator,
}

impl<S: KeyValueStore, P: PriceSimulator> HoldingsStore<S, P> {
    pub fn open(storage: S, simulator: P) -> Result<Self> {
        let holdings = load_holdings(&storage)?;
        info!(count = holdings.len(), "Loaded holdings");

        Ok(Self {
            storage,
            simulator,
            ids: IdGenerator::after(&holdings),
            holdings,
        })
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn summary(&self) -> PortfolioSummary {
        calc::summarize(&self.holdings)
    }

    /// Prepends a holding built from `input` and persists the list.
    ///
    /// Invalid input is ignored and yields `Ok(None)`.
    pub fn add(&mut self, input: NewHolding) -> Result<Option<&Holding>> {
        if let Err(reason) = input.validate() {
            debug!(%reason, ticker = input.ticker().as_str(), "Ignoring holding");
            return Ok(None);
        }

        let current_price = self.simulator.simulate_price(*input.purchase_price());
        let holding = Holding::purchase(self.ids.next_id(), &input, current_price);
        info!(
            id = holding.id().as_str(),
            ticker = holding.ticker().as_str(),
            shares = %holding.shares(),
            current_price = %holding.current_price(),
            "Added holding"
        );

        self.holdings.insert(0, holding);
        self.persist()?;

        Ok(self.holdings.first())
    }

    fn persist(&mut self) -> Result<()> {
        persist_holdings(&mut self.storage, &self.holdings)
    }
}

/// Reads the saved snapshot, falling back to the seed list when it is missing
/// or unreadable as holdings.
pub fn load_holdings<S: KeyValueStore>(storage: &S) -> Result<Vec<Holding>> {
    let Some(saved) = storage
        .load(STORAGE_KEY)
        .with_context(|| format!("Failed to load '{}'", STORAGE_KEY))?
    else {
        debug!("No saved holdings, using seed list");
        return Ok(initial_holdings());
    };

    match serde_json::from_str::<Vec<Holding>>(&saved) {
        Ok(holdings) if holdings.iter().all(Holding::within_limits) => Ok(holdings),
        Ok(_) => {
            error!("Saved holdings exceed supported quantities or prices, using seed list");
            Ok(initial_holdings())
        }
        Err(err) => {
            error!(%err, "Failed to parse holdings, using seed list");
            Ok(initial_holdings())
        }
    }
}

pub fn persist_holdings<S: KeyValueStore>(storage: &mut S, holdings: &[Holding]) -> Result<()> {
    let serialized = serde_json::to_string(holdings).context("Failed to serialize holdings")?;
    storage
        .save(STORAGE_KEY, &serialized)
        .with_context(|| format!("Failed to save '{}'", STORAGE_KEY))?;
    debug!(count = holdings.len(), "Persisted holdings");

    Ok(())
}
