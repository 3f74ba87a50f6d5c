pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{osc::DryRunSink, DatamuseClient, UdpOscSender};
pub use config::{Settings, TomlConfig};
pub use core::{engine::SonifyEngine, fetcher::fetch_word_lists, mapper::compute_params};
pub use domain::model::{AudioParams, OscArg, OscMessage, RunSummary, WordLists};
pub use utils::error::{Result, WordtoneError};
