//! Tabular input loading
//!
//! Reads the posts and replies tables (delimited text with a header row)
//! into typed records. Column presence is checked up front; cell content is
//! coerced, so a short or malformed row yields empty strings rather than an
//! error.

#[cfg(test)]
mod tests;

use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::InputConfig;
use crate::error::{DashboardError, Result};
use crate::types::{RawReply, SourcePost};

const AUTHOR_ALIASES: &[&str] = &["auteur", "author", "username", "user", "screen_name"];
const CONTENT_ALIASES: &[&str] = &["contenu", "content", "text", "texte", "tweet"];
const POST_ID_ALIASES: &[&str] = &["tweet_id", "post_id", "id_tweet", "id"];

/// Resolved column positions of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub author: usize,
    pub content: usize,
    pub post_id: Option<usize>,
}

/// Loads posts and replies tables
#[derive(Debug, Clone)]
pub struct TableLoader {
    config: InputConfig,
}

impl TableLoader {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    pub fn load_posts<P: AsRef<Path>>(&self, path: P) -> Result<Vec<SourcePost>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let posts = self.read_posts(file, &path.display().to_string())?;
        tracing::info!(path = %path.display(), count = posts.len(), "Loaded posts");
        Ok(posts)
    }

    pub fn load_replies<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawReply>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let replies = self.read_replies(file, &path.display().to_string())?;
        tracing::info!(path = %path.display(), count = replies.len(), "Loaded replies");
        Ok(replies)
    }

    pub fn read_posts<R: Read>(&self, reader: R, name: &str) -> Result<Vec<SourcePost>> {
        self.read_rows(reader, name, |fields, columns| SourcePost {
            post_id: columns.post_id.and_then(|i| non_empty(field(fields, i))),
            author: field(fields, columns.author),
            content: field(fields, columns.content),
        })
    }

    pub fn read_replies<R: Read>(&self, reader: R, name: &str) -> Result<Vec<RawReply>> {
        self.read_rows(reader, name, |fields, columns| RawReply {
            author: field(fields, columns.author),
            content: field(fields, columns.content),
            post_id: columns.post_id.and_then(|i| non_empty(field(fields, i))),
        })
    }

    fn read_rows<R, T, F>(&self, reader: R, name: &str, build: F) -> Result<Vec<T>>
    where
        R: Read,
        F: Fn(&ByteRecord, &Columns) -> T,
    {
        let delimiter = u8::try_from(self.config.delimiter)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| {
                DashboardError::Config(format!(
                    "delimiter {:?} is not a single ASCII character",
                    self.config.delimiter
                ))
            })?;

        let mut csv = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();
        let columns = self.resolve_columns(&headers, name)?;
        tracing::debug!(table = name, ?columns, "Resolved columns");

        let mut rows = Vec::new();
        let mut record = ByteRecord::new();
        while csv.read_byte_record(&mut record)? {
            rows.push(build(&record, &columns));
        }
        Ok(rows)
    }

    /// Locate required and optional columns by configured name, then aliases
    pub fn resolve_columns(&self, headers: &[String], name: &str) -> Result<Columns> {
        let author = find_column(headers, &self.config.author_column, AUTHOR_ALIASES)
            .ok_or_else(|| DashboardError::MissingColumn {
                file: name.to_string(),
                column: self.config.author_column.clone(),
            })?;
        let content = find_column(headers, &self.config.content_column, CONTENT_ALIASES)
            .ok_or_else(|| DashboardError::MissingColumn {
                file: name.to_string(),
                column: self.config.content_column.clone(),
            })?;
        let post_id = find_column(headers, &self.config.post_id_column, POST_ID_ALIASES);

        Ok(Columns {
            author,
            content,
            post_id,
        })
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn find_column(headers: &[String], preferred: &str, aliases: &[&str]) -> Option<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let preferred = preferred.trim().to_lowercase();

    std::iter::once(preferred.as_str())
        .chain(aliases.iter().copied())
        .find_map(|candidate| normalized.iter().position(|h| h == candidate))
}

/// Cell as text; missing cells and invalid UTF-8 degrade gracefully
fn field(record: &ByteRecord, index: usize) -> String {
    record
        .get(index)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
