//! Rule-based recommendations
//!
//! An ordered table of keyword sets. A rule fires when any of its keywords is
//! among the most frequent words of the negative replies. Output follows the
//! table order; when nothing fires a single "no strong trend" notice is
//! emitted instead.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::analysis::WordFrequency;
use crate::config::RecommendationConfig;
use crate::text::Lemmatizer;

pub const NO_TREND_NOTICE: &str =
    "Aucune recommandation particulière : les commentaires négatifs ne révèlent pas de tendance forte.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub keywords: Vec<String>,
    pub advisory: String,
}

impl RecommendationRule {
    pub fn new(keywords: &[&str], advisory: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            advisory: advisory.to_string(),
        }
    }

    fn matches(&self, frequent: &HashSet<&str>) -> bool {
        self.keywords.iter().any(|k| frequent.contains(k.as_str()))
    }
}

/// Built-in rule table, in priority order
pub fn default_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule::new(
            &["carte", "visa"],
            "💳 Améliorer la disponibilité et la compatibilité des cartes Wave Visa.",
        ),
        RecommendationRule::new(
            &["application", "bug", "connexion", "erreur"],
            "📱 Optimiser la stabilité et corriger les bugs de l'application mobile.",
        ),
        RecommendationRule::new(
            &["service", "client", "support", "assistance"],
            "🤝 Renforcer le service client et la réactivité du support.",
        ),
        RecommendationRule::new(
            &["retrait", "argent", "transfert", "paiement"],
            "💰 Améliorer la rapidité et la fiabilité des transactions financières.",
        ),
        RecommendationRule::new(
            &["frais", "tarif", "prix"],
            "💸 Revoir la politique tarifaire, surtout pour les petites transactions.",
        ),
    ]
}

/// Ordered advisories derived from one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Advisories in rule order, or the single notice when `no_trend`
    pub items: Vec<String>,
    pub no_trend: bool,
}

impl RecommendationSet {
    pub fn advisories(&self) -> &[String] {
        if self.no_trend {
            &[]
        } else {
            &self.items
        }
    }
}

pub struct RecommendationEngine {
    rules: Vec<RecommendationRule>,
    notice: String,
}

impl RecommendationEngine {
    pub fn new(rules: Vec<RecommendationRule>, notice: impl Into<String>) -> Self {
        Self {
            rules,
            notice: notice.into(),
        }
    }

    pub fn from_config(config: &RecommendationConfig) -> Self {
        Self::new(
            config.rules.clone().unwrap_or_else(default_rules),
            config
                .no_trend_notice
                .clone()
                .unwrap_or_else(|| NO_TREND_NOTICE.to_string()),
        )
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Re-key rule keywords so they match tokens produced by `lemmatizer`
    pub fn lemmatized(self, lemmatizer: &dyn Lemmatizer) -> Self {
        let rules = self
            .rules
            .into_iter()
            .map(|rule| RecommendationRule {
                keywords: rule
                    .keywords
                    .iter()
                    .map(|k| lemmatizer.lemmatize(&k.to_lowercase()))
                    .collect(),
                advisory: rule.advisory,
            })
            .collect();

        Self {
            rules,
            notice: self.notice,
        }
    }

    /// Match rules against the frequent negative vocabulary
    pub fn recommend(&self, frequent: &[WordFrequency]) -> RecommendationSet {
        self.recommend_words(frequent.iter().map(|f| f.word.as_str()))
    }

    pub fn recommend_words<'a, I>(&self, words: I) -> RecommendationSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        let frequent: HashSet<&str> = words.into_iter().collect();

        let items: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&frequent))
            .map(|rule| rule.advisory.clone())
            .collect();

        if items.is_empty() {
            tracing::debug!("No recommendation rule fired");
            RecommendationSet {
                items: vec![self.notice.clone()],
                no_trend: true,
            }
        } else {
            tracing::debug!(fired = items.len(), "Recommendation rules fired");
            RecommendationSet {
                items,
                no_trend: false,
            }
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::from_config(&RecommendationConfig::default())
    }
}
