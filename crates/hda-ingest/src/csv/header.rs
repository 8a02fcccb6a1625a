//! CSV header parsing.

use hda_model::schema::unnamed_column;

/// Column names read from the first line of a file.
#[derive(Debug, Clone)]
pub struct CsvHeaders {
    /// Raw names, trimmed. Blank cells stay empty here.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if every header cell is blank.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    /// Final column names: blank cells become `Unnamed: <position>`.
    pub fn resolved_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                if name.is_empty() {
                    unnamed_column(idx)
                } else {
                    name.clone()
                }
            })
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace.
fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}
