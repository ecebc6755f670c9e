//! End-to-end analysis of one session's inputs
//!
//! raw replies → normalization → scoring → aggregation / word frequencies →
//! recommendations. Everything is recomputed from the inputs on each call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::analysis::{Aggregator, CloudTerm, LexicalSummarizer, SentimentSummary, WordFrequency};
use crate::config::Config;
use crate::error::Result;
use crate::recommend::{RecommendationEngine, RecommendationSet};
use crate::sentiment::{self, SentimentScorer};
use crate::text::TextNormalizer;
use crate::types::{RawReply, ReplyRecord, SentimentLabel, SourcePost};

/// Everything the presentation layer shows for one run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub post_count: usize,
    pub reply_count: usize,
    /// Replies whose post id matches a loaded post
    pub linked_replies: usize,
    pub summary: SentimentSummary,
    pub top_positive: Vec<ReplyRecord>,
    pub top_negative: Vec<ReplyRecord>,
    pub frequent_negative_words: Vec<WordFrequency>,
    pub positive_cloud: Vec<CloudTerm>,
    pub negative_cloud: Vec<CloudTerm>,
    pub recommendations: RecommendationSet,
    pub records: Vec<ReplyRecord>,
}

pub struct Pipeline {
    normalizer: TextNormalizer,
    scorer: SentimentScorer,
    aggregator: Aggregator,
    summarizer: LexicalSummarizer,
    engine: RecommendationEngine,
}

impl Pipeline {
    pub fn new(
        normalizer: TextNormalizer,
        scorer: SentimentScorer,
        aggregator: Aggregator,
        summarizer: LexicalSummarizer,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            normalizer,
            scorer,
            aggregator,
            summarizer,
            engine,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let normalizer = TextNormalizer::new(&config.normalizer);
        let scorer = sentiment::build_scorer(&config.scorer, normalizer.lemmatizer())?;
        let engine = RecommendationEngine::from_config(&config.recommendations)
            .lemmatized(normalizer.lemmatizer());

        Ok(Self::new(
            normalizer,
            scorer,
            Aggregator::new(config.analysis.top_k),
            LexicalSummarizer::new(config.analysis.top_words, config.analysis.cloud_words),
            engine,
        ))
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    /// Normalize and score one reply
    pub fn process_one(&self, row: usize, reply: &RawReply) -> ReplyRecord {
        let text = self.normalizer.normalize(&reply.content);
        let score = self.scorer.score(&text.normalized);

        ReplyRecord {
            row,
            author: reply.author.clone(),
            raw_content: reply.content.clone(),
            cleaned_content: text.cleaned,
            normalized_content: text.normalized,
            polarity: score.polarity,
            sentiment_label: score.label,
        }
    }

    pub fn process(&self, replies: &[RawReply]) -> Vec<ReplyRecord> {
        replies
            .iter()
            .enumerate()
            .map(|(row, reply)| self.process_one(row, reply))
            .collect()
    }

    pub fn analyze(&self, posts: &[SourcePost], replies: &[RawReply]) -> Report {
        let session_id = Uuid::new_v4();
        let _span = tracing::info_span!("session", id = %session_id).entered();

        let records = self.process(replies);
        let summary = self.aggregator.summarize(&records);

        let top_positive = self
            .aggregator
            .top_examples(&records, SentimentLabel::Positive)
            .into_iter()
            .cloned()
            .collect();
        let top_negative = self
            .aggregator
            .top_examples(&records, SentimentLabel::Negative)
            .into_iter()
            .cloned()
            .collect();

        let frequent_negative_words = self
            .summarizer
            .top_words(normalized_of(&records, SentimentLabel::Negative));
        let positive_cloud = self
            .summarizer
            .cloud_terms(normalized_of(&records, SentimentLabel::Positive));
        let negative_cloud = self
            .summarizer
            .cloud_terms(normalized_of(&records, SentimentLabel::Negative));

        let recommendations = self.engine.recommend(&frequent_negative_words);

        let known_posts: HashSet<&str> = posts.iter().filter_map(|p| p.post_id.as_deref()).collect();
        let linked_replies = replies
            .iter()
            .filter(|r| {
                r.post_id
                    .as_deref()
                    .is_some_and(|id| known_posts.contains(id))
            })
            .count();

        tracing::info!(
            replies = records.len(),
            positive = summary.count(SentimentLabel::Positive),
            negative = summary.count(SentimentLabel::Negative),
            neutral = summary.count(SentimentLabel::Neutral),
            advisories = recommendations.advisories().len(),
            "Analysis complete"
        );

        Report {
            session_id,
            generated_at: Utc::now(),
            post_count: posts.len(),
            reply_count: replies.len(),
            linked_replies,
            summary,
            top_positive,
            top_negative,
            frequent_negative_words,
            positive_cloud,
            negative_cloud,
            recommendations,
            records,
        }
    }
}

fn normalized_of(records: &[ReplyRecord], label: SentimentLabel) -> impl Iterator<Item = &str> {
    records
        .iter()
        .filter(move |r| r.is(label))
        .map(|r| r.normalized_content.as_str())
}
