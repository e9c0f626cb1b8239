pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use crate::core::{etl::EtlEngine, pipeline::WatchlistPipeline};
pub use domain::model::{Record, RunSummary};
pub use utils::error::{EtlError, ExtractError, Result};
