//! Descriptive analysis of scored replies
//!
//! - Label counts and percentages
//! - Most extreme examples per label
//! - Frequent vocabulary and word cloud terms

pub mod aggregator;
pub mod lexical;


pub use aggregator::{Aggregator, SentimentSummary};
pub use lexical::{CloudTerm, LexicalSummarizer, WordFrequency};
