//! Host list input: a tab-delimited table with a header row.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input table: {0}")]
    Csv(#[from] csv::Error),

    #[error("column \"{column}\" is not found in the input header")]
    MissingColumn { column: String },
}

/// Streams shop hosts from the input table, one per data row.
///
/// Rows that cannot be parsed, lack the host column, or have an empty host
/// are logged and skipped.
pub struct HostReader<R> {
    records: csv::StringRecordsIntoIter<R>,
    column_index: usize,
}

impl<R: io::Read> HostReader<R> {
    /// Reads the header row and locates `column` (case-sensitive).
    ///
    /// # Errors
    ///
    /// - [`InputError::MissingColumn`] if no header cell equals `column`,
    ///   including when the input is empty.
    /// - [`InputError::Csv`] if the header row cannot be read.
    pub fn new(reader: R, column: &str) -> Result<Self, InputError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);
        let column_index = csv_reader
            .headers()?
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| InputError::MissingColumn {
                column: column.to_owned(),
            })?;
        Ok(Self {
            records: csv_reader.into_records(),
            column_index,
        })
    }
}

impl<R: io::Read> Iterator for HostReader<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable input row");
                    continue;
                }
            };
            match record.get(self.column_index).map(str::trim) {
                Some(host) if !host.is_empty() => return Some(host.to_owned()),
                _ => {
                    let line = record.position().map(csv::Position::line);
                    tracing::warn!(?line, "skipping input row without a shop host");
                }
            }
        }
    }
}
