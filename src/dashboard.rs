//! Single-session dashboard
//!
//! Validates that both tables were provided, runs the pipeline and lays the
//! report out on a [`Renderer`]. Missing inputs block the run with a warning
//! and nothing else is rendered.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::ingest::TableLoader;
use crate::pipeline::{Pipeline, Report};
use crate::render::{Bar, BarChart, Palette, Renderer, Table, WordCloud};
use crate::types::{ReplyRecord, SentimentLabel};

pub const MISSING_INPUT_WARNING: &str = "Veuillez importer les deux fichiers CSV.";

/// The two uploaded tables; either may be absent
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub posts: Option<PathBuf>,
    pub replies: Option<PathBuf>,
}

impl DashboardInputs {
    /// Both paths, or the names of what is missing
    fn require(&self) -> std::result::Result<(&PathBuf, &PathBuf), String> {
        match (&self.posts, &self.replies) {
            (Some(posts), Some(replies)) => Ok((posts, replies)),
            (None, None) => Err("posts and replies files".to_string()),
            (None, Some(_)) => Err("posts file".to_string()),
            (Some(_), None) => Err("replies file".to_string()),
        }
    }
}

pub struct Dashboard {
    loader: TableLoader,
    pipeline: Pipeline,
}

impl Dashboard {
    pub fn new(loader: TableLoader, pipeline: Pipeline) -> Self {
        Self { loader, pipeline }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            TableLoader::new(config.input.clone()),
            Pipeline::from_config(config)?,
        ))
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Run one render pass
    pub fn run(&self, inputs: &DashboardInputs, renderer: &mut dyn Renderer) -> Result<Report> {
        let (posts_path, replies_path) = match inputs.require() {
            Ok(paths) => paths,
            Err(missing) => {
                tracing::warn!(missing = %missing, "Input missing, halting");
                renderer.warning(MISSING_INPUT_WARNING)?;
                renderer.finish()?;
                return Err(DashboardError::MissingInput(missing));
            }
        };

        let posts = self.loader.load_posts(posts_path)?;
        let replies = self.loader.load_replies(replies_path)?;

        let report = self.pipeline.analyze(&posts, &replies);
        render_report(&report, renderer)?;
        renderer.finish()?;
        Ok(report)
    }
}

/// Lay a report out on a renderer
pub fn render_report(report: &Report, renderer: &mut dyn Renderer) -> Result<()> {
    renderer.info(&format!(
        "{} tweets et {} réponses chargés avec succès.",
        report.post_count, report.reply_count
    ))?;

    renderer.heading("Répartition des sentiments")?;
    renderer.render_chart(&sentiment_chart(report))?;
    renderer.text(&format!("Total réponses : {}", report.summary.total))?;
    for (label, count) in report.summary.ranked() {
        renderer.text(&format!(
            "{} : {} ({:.1}%)",
            capitalize(label.display_name()),
            count,
            report.summary.percentage(label)
        ))?;
    }

    renderer.heading("Exemples de réponses")?;
    renderer.render_table(&examples_table("Positifs", &report.top_positive))?;
    renderer.render_table(&examples_table("Négatifs", &report.top_negative))?;

    renderer.heading("Nuages de mots")?;
    renderer.render_image(&WordCloud {
        title: "Nuage de mots POSITIFS".to_string(),
        terms: report.positive_cloud.clone(),
        palette: Palette::Greens,
    })?;
    renderer.render_image(&WordCloud {
        title: "Nuage de mots NÉGATIFS".to_string(),
        terms: report.negative_cloud.clone(),
        palette: Palette::Reds,
    })?;

    renderer.heading("Recommandations automatiques")?;
    if report.recommendations.no_trend {
        for notice in &report.recommendations.items {
            renderer.info(notice)?;
        }
    } else {
        renderer.render_list(&report.recommendations.items)?;
    }

    Ok(())
}

fn sentiment_chart(report: &Report) -> BarChart {
    let bars = SentimentLabel::ALL
        .iter()
        .map(|label| Bar {
            label: label.display_name().to_string(),
            value: report.summary.count(*label) as u64,
            color: label_color(*label).to_string(),
        })
        .collect();

    BarChart {
        title: "Répartition des sentiments".to_string(),
        bars,
    }
}

fn label_color(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "green",
        SentimentLabel::Negative => "red",
        SentimentLabel::Neutral => "gray",
    }
}

fn examples_table(title: &str, records: &[ReplyRecord]) -> Table {
    let mut table = Table::new(title, &["auteur", "contenu", "polarite"]);
    for record in records {
        table.push_row(vec![
            record.author.clone(),
            record.raw_content.clone(),
            format!("{:.3}", record.polarity),
        ]);
    }
    table
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
