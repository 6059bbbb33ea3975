//! Result table output: comma-delimited, one row per shop.

use std::io;

use shopmedia_core::{output_columns, ShopResult};

/// Writes the header on creation and flushes after every row, so the file
/// on disk always reflects every shop finished so far.
pub struct RowWriter<W: io::Write> {
    writer: csv::Writer<W>,
}

impl<W: io::Write> RowWriter<W> {
    /// # Errors
    ///
    /// Returns a [`csv::Error`] if the header cannot be written.
    pub fn new(inner: W, sample_size: usize) -> Result<Self, csv::Error> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(output_columns(sample_size))?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// # Errors
    ///
    /// Returns a [`csv::Error`] if the row cannot be written or flushed.
    pub fn write(&mut self, result: &ShopResult) -> Result<(), csv::Error> {
        self.writer.write_record(result.to_row())?;
        self.writer.flush()?;
        Ok(())
    }
}
