use crate::domain::model::{Relation, WordLists};
use crate::domain::ports::WordSource;
use crate::utils::error::Result;

/// Look up synonyms then antonyms for `keyword`, at most `max` of each.
///
/// Lookups run one after the other; either failure aborts the whole fetch.
pub async fn fetch_word_lists<W>(source: &W, keyword: &str, max: usize) -> Result<WordLists>
where
    W: WordSource + ?Sized,
{
    let synonyms = source.lookup(keyword, Relation::Synonym, max).await?;
    let antonyms = source.lookup(keyword, Relation::Antonym, max).await?;

    tracing::debug!(
        "Fetched {} synonyms and {} antonyms for '{}'",
        synonyms.len(),
        antonyms.len(),
        keyword
    );

    Ok(WordLists { synonyms, antonyms })
}
