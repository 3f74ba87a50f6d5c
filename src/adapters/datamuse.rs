use crate::domain::model::{Relation, WordRecord};
use crate::domain::ports::WordSource;
use crate::utils::error::{Result, WordtoneError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";

/// Word-association lookups against a Datamuse-compatible `/words` endpoint.
pub struct DatamuseClient {
    client: Client,
    endpoint: String,
}

impl DatamuseClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

/// 解析回應：必須是含有 `word` 字串欄位的物件陣列
fn parse_words(body: &str, relation: Relation) -> Result<Vec<String>> {
    let records: Vec<WordRecord> =
        serde_json::from_str(body).map_err(|e| WordtoneError::MalformedResponseError {
            message: format!("{} lookup: {}", relation, e),
        })?;

    Ok(records.into_iter().map(|r| r.word).collect())
}

#[async_trait]
impl WordSource for DatamuseClient {
    async fn lookup(&self, keyword: &str, relation: Relation, max: usize) -> Result<Vec<String>> {
        tracing::debug!(
            "Requesting {} words for '{}' from {}",
            relation,
            keyword,
            self.endpoint
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                (relation.query_param(), keyword.to_string()),
                ("max", max.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Word service response status: {}", status);

        if !status.is_success() {
            return Err(WordtoneError::HttpStatusError {
                relation: relation.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let mut words = parse_words(&body, relation)?;

        if words.len() > max {
            tracing::warn!(
                "Word service returned {} {} records, keeping the first {}",
                words.len(),
                relation,
                max
            );
            words.truncate(max);
        }

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> DatamuseClient {
        DatamuseClient::new(server.url("/words"), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_parse_words_ignores_extra_fields() {
        let body = r#"[{"word":"glad","score":1200},{"word":"felicitous","score":900,"tags":["adj"]}]"#;
        let words = parse_words(body, Relation::Synonym).unwrap();
        assert_eq!(words, vec!["glad", "felicitous"]);
    }

    #[test]
    fn test_parse_words_rejects_missing_word_field() {
        let body = r#"[{"word":"glad"},{"score":12}]"#;
        let err = parse_words(body, Relation::Synonym).unwrap_err();
        assert!(matches!(err, WordtoneError::MalformedResponseError { .. }));
    }

    #[test]
    fn test_parse_words_rejects_non_array() {
        let err = parse_words(r#"{"word":"glad"}"#, Relation::Antonym).unwrap_err();
        assert!(matches!(err, WordtoneError::MalformedResponseError { .. }));
    }

    #[tokio::test]
    async fn test_lookup_sends_relation_and_max() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/words")
                .query_param("rel_syn", "happy")
                .query_param("max", "8");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"word": "glad", "score": 1},
                    {"word": "felicitous", "score": 2},
                    {"word": "well-chosen", "score": 3}
                ]));
        });

        let words = client_for(&server)
            .lookup("happy", Relation::Synonym, 8)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(words, vec!["glad", "felicitous", "well-chosen"]);
    }

    #[tokio::test]
    async fn test_lookup_truncates_to_max() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/words").query_param("rel_ant", "hot");
            then.status(200).json_body(serde_json::json!([
                {"word": "cold"},
                {"word": "cool"},
                {"word": "frigid"}
            ]));
        });

        let words = client_for(&server)
            .lookup("hot", Relation::Antonym, 2)
            .await
            .unwrap();

        assert_eq!(words, vec!["cold", "cool"]);
    }

    #[tokio::test]
    async fn test_lookup_non_success_status_is_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(503);
        });

        let err = client_for(&server)
            .lookup("happy", Relation::Antonym, 8)
            .await
            .unwrap_err();

        api_mock.assert();
        match err {
            WordtoneError::HttpStatusError { relation, status } => {
                assert_eq!(relation, "antonym");
                assert_eq!(status, 503);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_timeout_is_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(serde_json::json!([]));
        });

        let client = DatamuseClient::new(server.url("/words"), Duration::from_millis(50)).unwrap();
        let err = client
            .lookup("happy", Relation::Synonym, 8)
            .await
            .unwrap_err();

        match err {
            WordtoneError::ApiError(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
