//! Sentiment scoring of normalized replies
//!
//! - Polarity lexicon (French-first, extensible from CSV)
//! - Booster and negation handling
//! - Threshold-based labeling

pub mod lexicon;
pub mod scorer;

pub use lexicon::Lexicon;
pub use scorer::{SentimentScore, SentimentScorer, Thresholds};

use crate::config::{expand_path, ScorerConfig};
use crate::error::Result;
use crate::resources;
use crate::text::Lemmatizer;

/// Build a scorer from configuration
///
/// The lexicon is re-keyed through `lemmatizer` so that entries line up with
/// the normalizer's output.
pub fn build_scorer(config: &ScorerConfig, lemmatizer: &dyn Lemmatizer) -> Result<SentimentScorer> {
    let mut lexicon = resources::init().lexicon.clone();
    if let Some(path) = &config.lexicon_path {
        lexicon.merge(Lexicon::load_csv(expand_path(path)?)?);
    }
    Ok(SentimentScorer::new(
        lexicon.lemmatized(lemmatizer),
        Thresholds::from(config),
    ))
}
