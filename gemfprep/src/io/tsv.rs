use std::io::{BufRead, BufReader, Read};

use crate::error::{Result, TranslateError};

/// One non-blank, non-comment input row with its fields trimmed.
#[derive(Debug, Clone)]
pub struct TsvRecord {
    pub line: u64,
    pub fields: Vec<String>,
}

impl TsvRecord {
    /// Fields rejoined with tabs, for error messages.
    pub fn raw(&self) -> String {
        self.fields.join("\t")
    }

    pub fn malformed(&self, expected: &'static str) -> TranslateError {
        TranslateError::MalformedRecord { line: self.line, expected, record: self.raw() }
    }

    /// Borrow exactly `N` fields, or fail with `MalformedRecord`.
    pub fn exact<const N: usize>(&self, expected: &'static str) -> Result<[&str; N]> {
        if self.fields.len() != N {
            return Err(self.malformed(expected));
        }
        Ok(std::array::from_fn(|i| self.fields[i].as_str()))
    }
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim_end_matches('\r');
    line.is_empty() || line.starts_with('#')
}

/// Tab-separated rows; `#` lines and empty lines are skipped, quotes are literal.
///
/// Skipped lines are dropped before the csv reader sees the input, so the n-th csv record
/// is the n-th kept line and carries that line's 1-based number.
pub fn read_records<R: Read>(input: R) -> Result<Vec<TsvRecord>> {
    let mut data = String::new();
    let mut line_numbers = Vec::new();
    for (i, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        if is_skipped(&line) {
            continue;
        }
        data.push_str(&line);
        data.push('\n');
        line_numbers.push(i as u64 + 1);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data.as_bytes());

    rdr.records()
        .zip(line_numbers)
        .map(|(result, line)| -> Result<TsvRecord> {
            let record = result?;
            let fields = record.iter().map(|f| f.trim().to_string()).collect();
            Ok(TsvRecord { line, fields })
        })
        .collect()
}
