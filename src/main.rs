//! Reply sentiment dashboard
//!
//! Loads the posts and replies tables, scores every reply and renders the
//! dashboard to the terminal or to an HTML report.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reply_sentiment::{
    config::Config,
    dashboard::{Dashboard, DashboardInputs},
    pipeline::Pipeline,
    render::{HtmlRenderer, Renderer, TerminalRenderer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "reply-sentiment")]
#[command(about = "Sentiment analysis and recommendations for social media replies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a posts table and its replies
    Analyze {
        /// CSV of source posts
        #[arg(long)]
        posts: Option<PathBuf>,
        /// CSV of replies
        #[arg(long)]
        replies: Option<PathBuf>,
        /// Write an HTML report instead of printing to the terminal
        #[arg(long)]
        html: Option<PathBuf>,
        /// Export the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Number of example replies per label
        #[arg(long)]
        top_k: Option<usize>,
        /// Number of frequent negative words used for recommendations
        #[arg(long)]
        top_words: Option<usize>,
    },
    /// Score free text
    Score {
        /// Texts to score
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Load configuration
    let mut config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            posts,
            replies,
            html,
            json,
            top_k,
            top_words,
        } => {
            if let Some(k) = top_k {
                config.analysis.top_k = k;
            }
            if let Some(n) = top_words {
                config.analysis.top_words = n;
            }
            analyze(&config, DashboardInputs { posts, replies }, html, json)
        }
        Commands::Score { texts } => score(&config, &texts),
    }
}

fn analyze(
    config: &Config,
    inputs: DashboardInputs,
    html: Option<PathBuf>,
    json: Option<PathBuf>,
) -> anyhow::Result<()> {
    let dashboard = Dashboard::from_config(config)?;

    let mut renderer: Box<dyn Renderer> = match &html {
        Some(path) => Box::new(HtmlRenderer::new(path, "Analyse des réponses")),
        None => Box::new(TerminalRenderer::stdout()),
    };

    let report = dashboard.run(&inputs, renderer.as_mut())?;

    if let Some(path) = json {
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, &report)?;
        tracing::info!(path = %path.display(), "JSON report written");
    }

    Ok(())
}

fn score(config: &Config, texts: &[String]) -> anyhow::Result<()> {
    let pipeline = Pipeline::from_config(config)?;

    println!("{:<8} {:>9}  {}", "label", "polarite", "texte normalise");
    println!("{}", "-".repeat(60));
    for text in texts {
        let normalized = pipeline.normalizer().normalize(text);
        let score = pipeline.scorer().score(&normalized.normalized);
        println!(
            "{:<8} {:>9.3}  {}",
            score.label.display_name(),
            score.polarity,
            normalized.normalized
        );
        println!("{:<8} {:>9}  [{}]", "", "", normalized.cleaned);
    }

    Ok(())
}
