//! A [RowStore] backed by a CSV file on disk.

use std::{
    fs::{File, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::{
    Error,
    store::backend::{Row, RowStore, Table},
};

/// A CSV file where the first line is the header.
///
/// Rows may have a different number of fields from the header. Reading does
/// not fail on them, it is up to the caller to decide what missing or extra
/// fields mean.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    /// Create a store for the CSV file at `path`.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn into_row(record: &StringRecord) -> Row {
    record.iter().map(str::to_owned).collect()
}

impl RowStore for CsvFile {
    fn initialize(&self, header: &[&str]) -> Result<(), Error> {
        if self.path.exists() {
            tracing::debug!("Using existing file {}", self.path.display());
            return Ok(());
        }

        tracing::info!("Creating {} with header {header:?}", self.path.display());

        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(header)?;
        writer.flush()?;

        Ok(())
    }

    fn read(&self) -> Result<Option<Table>, Error> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} does not exist", self.path.display());
                return Ok(None);
            }
            Err(error) => return Err(error.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => into_row(&record?),
            None => return Ok(None),
        };

        let rows = records
            .map(|record| record.map(|record| into_row(&record)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Table { header, rows }))
    }

    fn append(&self, row: &[String]) -> Result<(), Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().flexible(true).from_writer(file);
        writer.write_record(row)?;
        writer.flush()?;

        Ok(())
    }

    fn write(&self, table: &Table) -> Result<(), Error> {
        let mut writer = WriterBuilder::new().flexible(true).from_path(&self.path)?;

        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}
