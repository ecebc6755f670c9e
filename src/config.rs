//! Configuration management

use crate::error::{DashboardError, Result};
use crate::recommend::RecommendationRule;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub normalizer: NormalizerConfig,
    pub scorer: ScorerConfig,
    pub analysis: AnalysisConfig,
    pub recommendations: RecommendationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Field delimiter of both tables
    pub delimiter: char,
    /// Preferred author column name (case-insensitive)
    pub author_column: String,
    /// Preferred content column name (case-insensitive)
    pub content_column: String,
    /// Preferred post id column name (case-insensitive, optional in data)
    pub post_id_column: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    /// Plural folding with an irregular-form table
    #[default]
    Plural,
    /// French Snowball stemmer
    Snowball,
    /// Leave tokens untouched
    None,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub lemmatizer: LemmatizerKind,
    /// Tokens with this many characters or fewer are dropped
    pub max_short_token_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Polarity strictly above this is positive
    pub positive_threshold: f64,
    /// Polarity strictly below this is negative
    pub negative_threshold: f64,
    /// Extra `word,score` CSV merged over the built-in lexicon
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of extreme examples shown per label
    pub top_k: usize,
    /// Number of frequent negative words fed to the recommendation rules
    pub top_words: usize,
    /// Maximum number of words in a word cloud
    pub cloud_words: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Replaces the built-in rule table when set
    pub rules: Option<Vec<RecommendationRule>>,
    /// Replaces the built-in "no strong trend" notice when set
    pub no_trend_notice: Option<String>,
}

impl Config {
    /// Load configuration from file (optional) and `REPLY_SENTIMENT__*` env vars
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let expanded = expand_path(path.as_ref())?;

        let settings = config::Config::builder()
            .add_source(config::File::from(expanded).required(false))
            .add_source(
                config::Environment::with_prefix("REPLY_SENTIMENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints the types cannot express
    pub fn validate(&self) -> Result<()> {
        if self.scorer.negative_threshold > self.scorer.positive_threshold {
            return Err(DashboardError::Config(format!(
                "negative_threshold ({}) is above positive_threshold ({})",
                self.scorer.negative_threshold, self.scorer.positive_threshold
            )));
        }
        if !(-1.0..=1.0).contains(&self.scorer.positive_threshold)
            || !(-1.0..=1.0).contains(&self.scorer.negative_threshold)
        {
            return Err(DashboardError::Config(
                "thresholds must lie within [-1, 1]".into(),
            ));
        }
        if let Some(rules) = &self.recommendations.rules {
            if let Some(rule) = rules.iter().find(|r| r.keywords.is_empty()) {
                return Err(DashboardError::Config(format!(
                    "recommendation rule '{}' has no keywords",
                    rule.advisory
                )));
            }
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            author_column: "auteur".to_string(),
            content_column: "contenu".to_string(),
            post_id_column: "tweet_id".to_string(),
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lemmatizer: LemmatizerKind::Plural,
            max_short_token_len: 2,
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            lexicon_path: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            top_words: 15,
            cloud_words: 100,
        }
    }
}

/// Expand a leading `~` in a configured path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path
        .to_str()
        .ok_or_else(|| DashboardError::Config(format!("path {} is not UTF-8", path.display())))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).into_owned()))
}
