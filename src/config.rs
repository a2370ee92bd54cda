use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "investoport", about = "Track a simulated IDX stock portfolio")]
pub struct Config {
    /// Directory holding the saved portfolio
    #[arg(long, default_value = "~/.investoport")]
    store: String,

    /// Log file, defaults to investoport.log inside the store directory
    #[arg(long)]
    log_file: Option<String>,
}

impl Config {
    pub fn store_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.store).into_owned())
    }

    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => PathBuf::from(shellexpand::tilde(path).into_owned()),
            None => self.store_dir().join("investoport.log"),
        }
    }
}
