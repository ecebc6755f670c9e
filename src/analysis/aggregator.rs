//! Per-label aggregation of scored replies

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{ReplyRecord, SentimentLabel};

/// Label counts and percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub counts: BTreeMap<SentimentLabel, usize>,
    /// Share of `total`, rounded to one decimal place
    pub percentages: BTreeMap<SentimentLabel, Decimal>,
}

impl SentimentSummary {
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn percentage(&self, label: SentimentLabel) -> Decimal {
        self.percentages
            .get(&label)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Labels with at least one record, most frequent first
    pub fn ranked(&self) -> Vec<(SentimentLabel, usize)> {
        let mut ranked: Vec<_> = SentimentLabel::ALL
            .iter()
            .map(|label| (*label, self.count(*label)))
            .filter(|(_, count)| *count > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Groups records by label and picks the most extreme examples
#[derive(Debug, Clone)]
pub struct Aggregator {
    top_k: usize,
}

impl Aggregator {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn summarize(&self, records: &[ReplyRecord]) -> SentimentSummary {
        let total = records.len();
        let mut counts: BTreeMap<SentimentLabel, usize> =
            SentimentLabel::ALL.iter().map(|label| (*label, 0)).collect();

        for record in records {
            *counts.entry(record.sentiment_label).or_insert(0) += 1;
        }

        let percentages = counts
            .iter()
            .map(|(label, count)| (*label, percentage(*count, total)))
            .collect();

        SentimentSummary {
            total,
            counts,
            percentages,
        }
    }

    /// Top-K records of one label
    ///
    /// Positive: polarity descending. Negative: ascending. Neutral: row
    /// order. Ties keep row order.
    pub fn top_examples<'a>(
        &self,
        records: &'a [ReplyRecord],
        label: SentimentLabel,
    ) -> Vec<&'a ReplyRecord> {
        let mut selected: Vec<&ReplyRecord> = records.iter().filter(|r| r.is(label)).collect();
        selected.sort_by_key(|r| r.row);

        match label {
            SentimentLabel::Positive => selected.sort_by(|a, b| b.polarity.total_cmp(&a.polarity)),
            SentimentLabel::Negative => selected.sort_by(|a, b| a.polarity.total_cmp(&b.polarity)),
            SentimentLabel::Neutral => {}
        }

        selected.truncate(self.top_k);
        selected
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(10)
    }
}

/// `count / total * 100` to one decimal, zero when `total` is zero
fn percentage(count: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(count as u64) * Decimal::ONE_HUNDRED / Decimal::from(total as u64))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
