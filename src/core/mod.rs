pub mod engine;
pub mod fetcher;
pub mod mapper;

pub use crate::domain::model::{AudioParams, RunSummary, WordLists};
pub use crate::domain::ports::{ConfigProvider, MessageSink, WordSource};
pub use crate::utils::error::Result;
