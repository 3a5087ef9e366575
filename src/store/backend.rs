//! The storage backend trait shared by the file and in-memory stores.

use std::fmt::Debug;

use crate::Error;

/// A row of text fields, in column order.
pub type Row = Vec<String>;

/// The full contents of a collection: the header row followed by the data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// The column names.
    pub header: Row,
    /// The data rows in storage order.
    pub rows: Vec<Row>,
}

/// A tabular collection with a mandatory header row.
///
/// Implementations do no caching and no locking across calls. Two callers
/// that interleave [RowStore::read] and [RowStore::write] can lose each
/// other's updates.
pub trait RowStore: Debug + Send + Sync {
    /// Create the collection containing only `header` if it does not exist yet.
    ///
    /// An existing collection is left untouched, even if its header differs.
    fn initialize(&self, header: &[&str]) -> Result<(), Error>;

    /// Read the whole collection.
    ///
    /// Returns `Ok(None)` if the collection does not exist or does not even
    /// have a header row.
    fn read(&self) -> Result<Option<Table>, Error>;

    /// Add `row` to the end of the collection.
    fn append(&self, row: &[String]) -> Result<(), Error>;

    /// Replace the contents of the collection with `table`.
    fn write(&self, table: &Table) -> Result<(), Error>;
}
