//! Reply sentiment dashboard
//!
//! Scores the French replies posted under a brand's social media posts,
//! summarizes the sentiment split and the vocabulary of each side, and derives
//! business recommendations from the most frequent complaints.

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod recommend;
pub mod render;
pub mod resources;
pub mod sentiment;
pub mod text;
pub mod types;


pub use config::Config;
pub use dashboard::{Dashboard, DashboardInputs};
pub use error::{DashboardError, Result};
pub use pipeline::{Pipeline, Report};
pub use types::{RawReply, ReplyRecord, SentimentLabel, SourcePost};
