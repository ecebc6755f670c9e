//! Presentation layer
//!
//! The [`Renderer`] trait is the seam to whatever displays results. It only
//! knows how to show tables, charts, images and messages; all analysis
//! happens before anything reaches it.

pub mod html;
pub mod svg;
pub mod terminal;

pub use html::HtmlRenderer;
pub use terminal::TerminalRenderer;

use serde::Serialize;

use crate::analysis::CloudTerm;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    /// CSS color name or hex code
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

/// Color ramp used for a word cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Palette {
    Greens,
    Reds,
}

impl Palette {
    /// Color for a term of the given weight (0..=1), darker when heavier
    pub fn color(&self, weight: f64) -> &'static str {
        let ramp: [&str; 4] = match self {
            Palette::Greens => ["#a1d99b", "#74c476", "#31a354", "#006d2c"],
            Palette::Reds => ["#fc9272", "#fb6a4a", "#de2d26", "#a50f15"],
        };
        let index = ((weight.clamp(0.0, 1.0) * 3.0).round()) as usize;
        ramp[index.min(3)]
    }
}

/// Word frequency image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub title: String,
    pub terms: Vec<CloudTerm>,
    pub palette: Palette,
}

#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    fn heading(&mut self, text: &str) -> Result<()>;

    fn text(&mut self, text: &str) -> Result<()>;

    fn info(&mut self, text: &str) -> Result<()>;

    /// Blocking warning shown to the user
    fn warning(&mut self, text: &str) -> Result<()>;

    fn render_table(&mut self, table: &Table) -> Result<()>;

    fn render_chart(&mut self, chart: &BarChart) -> Result<()>;

    fn render_image(&mut self, cloud: &WordCloud) -> Result<()>;

    fn render_list(&mut self, items: &[String]) -> Result<()>;

    /// Flush whatever has been rendered
    fn finish(&mut self) -> Result<()>;
}

/// Truncate to `max` characters, appending an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("court", 10), "court");
        assert_eq!(truncate("très très très long", 10), "très tr...");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }

    #[test]
    fn test_palette_ramp() {
        assert_eq!(Palette::Greens.color(1.0), "#006d2c");
        assert_eq!(Palette::Reds.color(0.0), "#fc9272");
        assert_eq!(Palette::Reds.color(7.0), "#a50f15");
    }

    #[test]
    fn test_chart_max_value() {
        let chart = BarChart {
            title: "x".to_string(),
            bars: vec![
                Bar {
                    label: "a".to_string(),
                    value: 3,
                    color: "green".to_string(),
                },
                Bar {
                    label: "b".to_string(),
                    value: 9,
                    color: "red".to_string(),
                },
            ],
        };
        assert_eq!(chart.max_value(), 9);
    }
}
