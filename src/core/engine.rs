use crate::core::fetcher::fetch_word_lists;
use crate::core::mapper::compute_params;
use crate::domain::model::{OscMessage, Relation, RunSummary};
use crate::domain::ports::{ConfigProvider, MessageSink, WordSource};
use crate::utils::error::Result;
use std::time::Duration;

/// Runs fetch → clear → words → params against one word source and one sink.
pub struct SonifyEngine<W: WordSource, S: MessageSink> {
    source: W,
    sink: S,
    max_results: usize,
    clear_delay: Duration,
}

impl<W: WordSource, S: MessageSink> SonifyEngine<W, S> {
    pub fn new<C: ConfigProvider>(source: W, sink: S, config: &C) -> Self {
        Self {
            source,
            sink,
            max_results: config.max_results(),
            clear_delay: config.clear_delay(),
        }
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn run(&self, keyword: &str) -> Result<RunSummary> {
        // 先取完兩份清單，任何失敗都不會送出訊息
        let lists = fetch_word_lists(&self.source, keyword, self.max_results).await?;

        self.sink.send(&OscMessage::clear()).await?;
        // 接收端沒有回應機制，只能稍等讓它處理 /clear
        tokio::time::sleep(self.clear_delay).await;

        for word in &lists.synonyms {
            self.sink
                .send(&OscMessage::word(Relation::Synonym, word))
                .await?;
        }
        for word in &lists.antonyms {
            self.sink
                .send(&OscMessage::word(Relation::Antonym, word))
                .await?;
        }

        let params = compute_params(lists.synonyms.len(), lists.antonyms.len());
        self.sink.send(&OscMessage::params(&params)).await?;

        Ok(RunSummary {
            synonyms_sent: lists.synonyms.len(),
            antonyms_sent: lists.antonyms.len(),
            messages_sent: lists.synonyms.len() + lists.antonyms.len() + 2,
            params,
        })
    }
}
