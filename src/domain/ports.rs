use crate::domain::model::{OscMessage, Relation};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Word-association lookup, e.g. the Datamuse API.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn lookup(&self, keyword: &str, relation: Relation, max: usize) -> Result<Vec<String>>;
}

/// Fire-and-forget outbound message channel.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, message: &OscMessage) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn max_results(&self) -> usize;
    fn request_timeout(&self) -> Duration;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn clear_delay(&self) -> Duration;
}
