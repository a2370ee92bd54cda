pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod storage;

#[cfg(test)]
mod test;
