//! Lexicon-based polarity scoring
//!
//! Each token found in the lexicon contributes its score, scaled by a
//! booster directly in front of it and flipped by a negation in the three
//! preceding tokens. Polarity is the mean contribution.

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;
use crate::config::ScorerConfig;
use crate::types::SentimentLabel;

/// Tokens looked back for a negation
const NEGATION_WINDOW: usize = 3;

/// Factor applied to a negated score
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity cut-offs between labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Polarity strictly above this is positive
    pub positive: f64,
    /// Polarity strictly below this is negative
    pub negative: f64,
}

impl Thresholds {
    pub fn label(&self, polarity: f64) -> SentimentLabel {
        if polarity > self.positive {
            SentimentLabel::Positive
        } else if polarity < self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

impl From<&ScorerConfig> for Thresholds {
    fn from(config: &ScorerConfig) -> Self {
        Self {
            positive: config.positive_threshold,
            negative: config.negative_threshold,
        }
    }
}

/// Result of scoring one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    /// Polarity in [-1.0, 1.0]
    pub polarity: f64,
    pub label: SentimentLabel,
    /// Number of tokens that carried a lexicon score
    pub matched: usize,
}

pub struct SentimentScorer {
    lexicon: Lexicon,
    thresholds: Thresholds,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon, thresholds: Thresholds) -> Self {
        Self {
            lexicon,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Score normalized text
    pub fn score(&self, text: &str) -> SentimentScore {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let contributions: Vec<f64> = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                self.lexicon
                    .score(token)
                    .map(|score| self.apply_modifiers(&tokens, i, score))
            })
            .collect();

        let polarity = if contributions.is_empty() {
            0.0
        } else {
            let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
            mean.clamp(-1.0, 1.0)
        };

        SentimentScore {
            polarity,
            label: self.thresholds.label(polarity),
            matched: contributions.len(),
        }
    }

    pub fn polarity(&self, text: &str) -> f64 {
        self.score(text).polarity
    }

    pub fn label(&self, polarity: f64) -> SentimentLabel {
        self.thresholds.label(polarity)
    }

    /// Apply a preceding booster and any negation in the window
    fn apply_modifiers(&self, tokens: &[&str], index: usize, mut score: f64) -> f64 {
        if index > 0 {
            if let Some(factor) = self.lexicon.booster(tokens[index - 1]) {
                score *= factor;
            }
        }

        let start = index.saturating_sub(NEGATION_WINDOW);
        if tokens[start..index]
            .iter()
            .any(|prev| self.lexicon.is_negation(prev))
        {
            score *= NEGATION_FACTOR;
        }

        score.clamp(-1.0, 1.0)
    }

    /// Batch score multiple texts
    pub fn score_batch(&self, texts: &[&str]) -> Vec<SentimentScore> {
        texts.iter().map(|t| self.score(t)).collect()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), Thresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentiment() {
        let scorer = SentimentScorer::default();
        let result = scorer.score("super service très rapide");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.matched, 2);
        assert!(result.polarity > 0.4);
    }

    #[test]
    fn test_negative_sentiment() {
        let scorer = SentimentScorer::default();
        let result = scorer.score("application pleine bug");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.polarity < -0.1);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let scorer = SentimentScorer::default();
        let result = scorer.score("");
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.matched, 0);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let scorer = SentimentScorer::default();
        assert_eq!(scorer.polarity("compte orange abidjan"), 0.0);
    }

    #[test]
    fn test_booster_words() {
        let scorer = SentimentScorer::default();
        let normal = scorer.polarity("service lent");
        let boosted = scorer.polarity("service trop lent");
        assert!(boosted < normal);
    }

    #[test]
    fn test_negation() {
        let scorer = SentimentScorer::default();
        let positive = scorer.polarity("service efficace");
        let negated = scorer.polarity("jamais service efficace");
        assert!(positive > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_negation_window() {
        let scorer = SentimentScorer::default();
        let far = scorer.polarity("jamais compte orange abidjan efficace");
        assert!(far > 0.0);
    }

    #[test]
    fn test_polarity_in_range() {
        let scorer = SentimentScorer::default();
        for text in [
            "extrêmement excellent parfait génial",
            "extrêmement arnaque arnaque",
            "jamais extrêmement arnaque",
        ] {
            let p = scorer.polarity(text);
            assert!((-1.0..=1.0).contains(&p), "{text}: {p}");
        }
    }

    #[test]
    fn test_deterministic() {
        let scorer = SentimentScorer::default();
        let a = scorer.score("bon service mais frais cher");
        let b = scorer.score("bon service mais frais cher");
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_is_function_of_polarity() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.label(0.5), SentimentLabel::Positive);
        assert_eq!(thresholds.label(0.1), SentimentLabel::Neutral);
        assert_eq!(thresholds.label(0.0), SentimentLabel::Neutral);
        assert_eq!(thresholds.label(-0.1), SentimentLabel::Neutral);
        assert_eq!(thresholds.label(-0.11), SentimentLabel::Negative);

        let scorer = SentimentScorer::default();
        for text in ["super", "bug", "compte", "jamais bon", "trop cher"] {
            let score = scorer.score(text);
            assert_eq!(score.label, thresholds.label(score.polarity));
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = SentimentScorer::new(
            Lexicon::builtin(),
            Thresholds {
                positive: 0.6,
                negative: -0.6,
            },
        );
        assert_eq!(scorer.score("super").label, SentimentLabel::Neutral);
        assert_eq!(scorer.score("excellent").label, SentimentLabel::Positive);
    }

    #[test]
    fn test_batch_score() {
        let scorer = SentimentScorer::default();
        let results = scorer.score_batch(&["super", "arnaque", "compte"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[1].label, SentimentLabel::Negative);
    }
}
