//! Header inspection for passenger files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use explorer_model::columns::RAW_COLUMNS;

use crate::error::{IngestError, Result};

/// Columns that differ from the expected raw passenger layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDrift {
    /// Expected raw columns absent from the file.
    pub missing: Vec<String>,
    /// File columns that are not raw passenger columns.
    pub unexpected: Vec<String>,
}

impl ColumnDrift {
    /// Compares `columns` against the raw passenger columns.
    pub fn detect<S: AsRef<str>>(columns: &[S]) -> Self {
        let missing = RAW_COLUMNS
            .iter()
            .filter(|expected| !columns.iter().any(|c| c.as_ref() == **expected))
            .map(|expected| (*expected).to_string())
            .collect();
        let unexpected = columns
            .iter()
            .map(AsRef::as_ref)
            .filter(|column| !RAW_COLUMNS.contains(column))
            .map(str::to_string)
            .collect();
        Self {
            missing,
            unexpected,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Reads the column names from the first line of a CSV file.
///
/// A UTF-8 byte order mark is stripped and names are trimmed. The table
/// itself is not loaded.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| IngestError::from_io(path, e))?;

    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "missing header row".to_string(),
        });
    }
    Ok(parse_header_line(line))
}

/// Splits a CSV header line into trimmed fields, honouring double quotes.
fn parse_header_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => in_quotes = true,
            '"' => {
                // "" inside quotes is a literal quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
