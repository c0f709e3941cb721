pub mod core;
pub mod fetcher;

pub use fetcher::{DataFetcher, spawn_fetches};
