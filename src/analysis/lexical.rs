//! Word frequencies over subsets of replies

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::text::normalizer::strip_links_and_mentions;

/// Word cloud alphabet: lowercase Latin, French accents, hyphen, apostrophe
static CLOUD_DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zàâçéèêëîïôûùüÿñæœ\s\-']").expect("valid word cloud charset regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// A weighted word cloud entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudTerm {
    pub word: String,
    pub count: usize,
    /// `count / max count`, in (0, 1]
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct LexicalSummarizer {
    top_n: usize,
    cloud_words: usize,
}

impl LexicalSummarizer {
    pub fn new(top_n: usize, cloud_words: usize) -> Self {
        Self { top_n, cloud_words }
    }

    /// Top-N words across `texts`, most frequent first, ties by first occurrence
    pub fn top_words<'a, I>(&self, texts: I) -> Vec<WordFrequency>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = texts.into_iter().collect::<Vec<_>>().join(" ");
        rank_words(joined.split_whitespace(), self.top_n)
    }

    /// Weighted terms for a word cloud over `texts`
    pub fn cloud_terms<'a, I>(&self, texts: I) -> Vec<CloudTerm>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = texts.into_iter().collect::<Vec<_>>().join(" ");
        let stripped = strip_links_and_mentions(&joined).to_lowercase();
        let cleaned = CLOUD_DISALLOWED.replace_all(&stripped, " ");

        let words = cleaned
            .split_whitespace()
            .map(|w| w.trim_matches(|c| c == '-' || c == '\''))
            .filter(|w| !w.is_empty());
        let ranked = rank_words(words, self.cloud_words);

        let max = ranked.first().map(|f| f.count).unwrap_or(0);
        ranked
            .into_iter()
            .map(|f| CloudTerm {
                weight: f.count as f64 / max as f64,
                word: f.word,
                count: f.count,
            })
            .collect()
    }
}

impl Default for LexicalSummarizer {
    fn default() -> Self {
        Self::new(15, 100)
    }
}

/// Count words and keep the `limit` most frequent, stable on first occurrence
fn rank_words<'a, I>(words: I, limit: usize) -> Vec<WordFrequency>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in words.enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect()
}
