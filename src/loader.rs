//! Reading the phone book directory and the query list

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::Record;

/// Parse `"<phone> <name...>"`; everything after the first space is the name.
///
/// `line` is 1-based and only used for the error.
pub fn parse_record(content: &str, line: usize) -> Result<Record> {
    let content = content.trim_end_matches('\r');
    let (phone, name) = content.split_once(' ').unwrap_or((content, ""));
    let phone = phone.parse::<u64>().map_err(|_| Error::MalformedRecord {
        line,
        content: content.to_string(),
    })?;
    Ok(Record::new(name, phone))
}

/// Parse a whole directory, skipping blank lines
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_record(line, idx + 1))
        .collect()
}

/// One query per line. Surrounding blank lines are dropped, duplicates kept.
pub fn parse_queries(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.lines().map(str::to_string).collect()
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let records = parse_records(&read(path)?)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

pub fn load_queries(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let queries = parse_queries(&read(path)?);
    debug!(path = %path.display(), count = queries.len(), "loaded queries");
    Ok(queries)
}
