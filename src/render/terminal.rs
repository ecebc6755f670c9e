//! Plain text renderer for terminals

use std::io::{self, Write};

use super::{truncate, BarChart, Renderer, Table, WordCloud};
use crate::error::Result;

/// Widest cell shown in a table column
const MAX_CELL_WIDTH: usize = 60;
/// Width of the longest bar
const BAR_WIDTH: usize = 40;
/// Terms shown per word cloud
const CLOUD_TERMS: usize = 30;

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn heading(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "\n{}", text)?;
        writeln!(self.out, "{}", "=".repeat(text.chars().count()))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn info(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "ℹ️  {}", text)?;
        Ok(())
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "⚠️  {}", text)?;
        Ok(())
    }

    fn render_table(&mut self, table: &Table) -> Result<()> {
        writeln!(self.out, "\n{}", table.title)?;
        if table.is_empty() {
            writeln!(self.out, "  (aucune donnée)")?;
            return Ok(());
        }

        let cells: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(|c| truncate(c, MAX_CELL_WIDTH)).collect())
            .collect();

        let widths: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header = format_row(&table.columns, &widths);
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "{}", "-".repeat(header.chars().count()))?;
        for row in &cells {
            writeln!(self.out, "{}", format_row(row, &widths))?;
        }
        Ok(())
    }

    fn render_chart(&mut self, chart: &BarChart) -> Result<()> {
        writeln!(self.out, "\n{}", chart.title)?;
        let max = chart.max_value();
        let label_width = chart
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        for bar in &chart.bars {
            let len = if max == 0 {
                0
            } else {
                (bar.value as usize * BAR_WIDTH).div_ceil(max as usize)
            };
            writeln!(
                self.out,
                "{:<width$} | {} {}",
                bar.label,
                "#".repeat(len),
                bar.value,
                width = label_width
            )?;
        }
        Ok(())
    }

    fn render_image(&mut self, cloud: &WordCloud) -> Result<()> {
        writeln!(self.out, "\n{}", cloud.title)?;
        if cloud.terms.is_empty() {
            writeln!(self.out, "  (aucun mot)")?;
            return Ok(());
        }

        let line = cloud
            .terms
            .iter()
            .take(CLOUD_TERMS)
            .map(|t| {
                if t.weight >= 0.5 {
                    format!("{}({})", t.word.to_uppercase(), t.count)
                } else {
                    format!("{}({})", t.word, t.count)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "  {}", line)?;
        Ok(())
    }

    fn render_list(&mut self, items: &[String]) -> Result<()> {
        for item in items {
            writeln!(self.out, "- {}", item)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{:<width$}", cell, width = *width)
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
