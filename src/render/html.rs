//! Self-contained HTML report

use std::fmt::Write as _;
use std::path::PathBuf;

use super::svg::{self, escape};
use super::{BarChart, Renderer, Table, WordCloud};
use crate::error::{DashboardError, Result};

const STYLE: &str = "body{font-family:sans-serif;max-width:1100px;margin:2em auto;color:#222}\
table{border-collapse:collapse;margin:1em 0}\
td,th{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#f2f2f2}\
.info{background:#e8f1fb;padding:8px;border-left:4px solid #3b82f6}\
.warning{background:#fff4e5;padding:8px;border-left:4px solid #f59e0b}\
figure{display:inline-block;margin:1em}";

/// Collects rendered sections and writes them to one file on [`Renderer::finish`]
pub struct HtmlRenderer {
    path: Option<PathBuf>,
    title: String,
    body: String,
}

impl HtmlRenderer {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            title: title.into(),
            body: String::new(),
        }
    }

    /// Renderer that only keeps the document in memory
    pub fn in_memory(title: impl Into<String>) -> Self {
        Self {
            path: None,
            title: title.into(),
            body: String::new(),
        }
    }

    pub fn document(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"fr\"><head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head>\n<body><h1>{title}</h1>\n{body}</body></html>\n",
            title = escape(&self.title),
            body = self.body
        )
    }

    fn push(&mut self, fragment: &str) {
        self.body.push_str(fragment);
        self.body.push('\n');
    }
}

impl Renderer for HtmlRenderer {
    fn heading(&mut self, text: &str) -> Result<()> {
        self.push(&format!("<h2>{}</h2>", escape(text)));
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.push(&format!("<p>{}</p>", escape(text)));
        Ok(())
    }

    fn info(&mut self, text: &str) -> Result<()> {
        self.push(&format!("<p class=\"info\">{}</p>", escape(text)));
        Ok(())
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        self.push(&format!("<p class=\"warning\">{}</p>", escape(text)));
        Ok(())
    }

    fn render_table(&mut self, table: &Table) -> Result<()> {
        let mut html = format!("<h3>{}</h3><table><thead><tr>", escape(&table.title));
        for column in &table.columns {
            let _ = write!(html, "<th>{}</th>", escape(column));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &table.rows {
            html.push_str("<tr>");
            for cell in row {
                let _ = write!(html, "<td>{}</td>", escape(cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        self.push(&html);
        Ok(())
    }

    fn render_chart(&mut self, chart: &BarChart) -> Result<()> {
        self.push(&format!("<figure>{}</figure>", svg::bar_chart(chart)));
        Ok(())
    }

    fn render_image(&mut self, cloud: &WordCloud) -> Result<()> {
        self.push(&format!(
            "<figure><figcaption>{}</figcaption>{}</figure>",
            escape(&cloud.title),
            svg::word_cloud(cloud)
        ));
        Ok(())
    }

    fn render_list(&mut self, items: &[String]) -> Result<()> {
        let mut html = String::from("<ul>");
        for item in items {
            let _ = write!(html, "<li>{}</li>", escape(item));
        }
        html.push_str("</ul>");
        self.push(&html);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(path) = &self.path {
            std::fs::write(path, self.document()).map_err(|e| {
                DashboardError::Render(format!("cannot write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), "HTML report written");
        }
        Ok(())
    }
}
