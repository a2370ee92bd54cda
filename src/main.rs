use anyhow::Result;
use clap::Parser;
use tracing::info;

use investoport_tui::{
    app::{App, HoldingsStore, RandomDrift},
    config::Config,
    logging::init_logging,
    storage::FileStore,
};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = Config::parse();

    init_logging(&config.log_path())?;

    let storage = FileStore::new(config.store_dir());
    info!(dir = %storage.dir().display(), "Opening portfolio");

    let store = HoldingsStore::open(storage, RandomDrift::from_thread_rng())?;

    let mut app = App::new(store);
    app.run()?;

    Ok(())
}
