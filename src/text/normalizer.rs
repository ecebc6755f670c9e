//! Text cleaning and normalization
//!
//! Cleaning (URLs, mentions, punctuation, whitespace) keeps the original
//! casing and is what gets displayed. Normalization lowercases the cleaned
//! text, drops stopwords and short tokens, and lemmatizes what is left.

use once_cell::sync::Lazy;
use regex::Regex;

use super::lemmatizer::{self, Lemmatizer};
use crate::config::NormalizerConfig;
use crate::resources::{self, LinguisticResources};

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").expect("valid URL regex"));

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("valid mention regex"));

/// Latin letters, the Latin-1 accented range and whitespace survive cleaning
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-zÀ-ÿ\s]").expect("valid charset regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Output of [`TextNormalizer::normalize`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    pub cleaned: String,
    pub normalized: String,
}

pub struct TextNormalizer {
    resources: &'static LinguisticResources,
    lemmatizer: Box<dyn Lemmatizer>,
    max_short_token_len: usize,
}

impl TextNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            resources: resources::init(),
            lemmatizer: lemmatizer::from_kind(config.lemmatizer),
            max_short_token_len: config.max_short_token_len,
        }
    }

    /// Use a custom lemmatizer with default settings otherwise
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            lemmatizer,
            ..Self::new(&NormalizerConfig::default())
        }
    }

    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }

    /// Strip URLs, mentions and disallowed characters, collapse whitespace
    pub fn clean(&self, raw: &str) -> String {
        clean_text(raw)
    }

    /// Lowercase, tokenize, filter and lemmatize already cleaned text
    pub fn preprocess(&self, cleaned: &str) -> String {
        cleaned
            .to_lowercase()
            .split_whitespace()
            .filter(|token| {
                token.chars().count() > self.max_short_token_len
                    && !self.resources.is_stopword(token)
            })
            .map(|token| self.lemmatizer.lemmatize(token))
            .filter(|lemma| !lemma.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn normalize(&self, raw: &str) -> NormalizedText {
        let cleaned = self.clean(raw);
        let normalized = self.preprocess(&cleaned);
        NormalizedText {
            cleaned,
            normalized,
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

/// Cleaning steps 1 to 4, shared with word cloud preparation
pub fn clean_text(raw: &str) -> String {
    let text = URL.replace_all(raw, "");
    let text = MENTION.replace_all(&text, "");
    let text = DISALLOWED.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Removes URLs and mentions only
pub fn strip_links_and_mentions(raw: &str) -> String {
    let text = URL.replace_all(raw, "");
    MENTION.replace_all(&text, "").into_owned()
}

/// Whether a character survives cleaning
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c) || c.is_whitespace()
}
