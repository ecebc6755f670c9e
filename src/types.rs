//! Core data types shared across the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete sentiment class of a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Display order used by charts and summaries
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// French display name, matching the language of the analysed replies
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positif",
            SentimentLabel::Negative => "negatif",
            SentimentLabel::Neutral => "neutre",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A source post (tweet) the replies refer to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePost {
    pub post_id: Option<String>,
    pub author: String,
    pub content: String,
}

/// A reply as read from the input table, after coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReply {
    pub author: String,
    pub content: String,
    /// Identifier of the post this reply answers, if the table carries one
    pub post_id: Option<String>,
}

/// A fully processed reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRecord {
    /// Original row order in the replies table (0-based)
    pub row: usize,
    pub author: String,
    pub raw_content: String,
    pub cleaned_content: String,
    pub normalized_content: String,
    /// Polarity in [-1.0, 1.0]
    pub polarity: f64,
    pub sentiment_label: SentimentLabel,
}

impl ReplyRecord {
    pub fn is(&self, label: SentimentLabel) -> bool {
        self.sentiment_label == label
    }
}
