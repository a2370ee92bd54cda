pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// String key-value persistence, the only state that survives a restart.
pub trait KeyValueStore {
    /// Returns `None` when nothing has been saved under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}
