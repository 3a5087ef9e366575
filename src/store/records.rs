//! Typed, positional access to the rows of a [RowStore].

use std::{fmt, marker::PhantomData, sync::Arc};

use crate::{
    Error,
    store::{
        MemoryRows,
        backend::{Row, RowStore},
    },
};

/// A record that is stored as one row under a fixed header.
pub trait Record: Sized {
    /// The column names written as the first row of a new collection.
    const HEADER: &'static [&'static str];

    /// Build a record from the fields of a stored row.
    ///
    /// Rows may be shorter than [Record::HEADER], missing fields should be
    /// treated as empty strings.
    fn from_row(row: &[String]) -> Self;

    /// The fields of this record in [Record::HEADER] order.
    fn to_row(&self) -> Row;
}

/// A record paired with its position in the collection when it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positioned<R> {
    /// The zero-based row index below the header.
    ///
    /// Only valid until the next write to the collection.
    pub id: usize,
    /// The record at that position.
    pub record: R,
}

/// The outcome of a positional update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Mutation {
    /// The row existed and the collection was rewritten.
    Applied,
    /// There was no row at the given position, nothing was written.
    OutOfRange,
}

/// Lists, appends, updates and deletes records of type `R`.
///
/// Cloning is cheap, clones share the same backend.
pub struct RecordStore<R> {
    rows: Arc<dyn RowStore>,
    record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            record: PhantomData,
        }
    }
}

impl<R> fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("rows", &self.rows)
            .finish()
    }
}

impl<R: Record> RecordStore<R> {
    /// Create a store for `R` on top of the backend `rows`.
    pub fn new(rows: Arc<dyn RowStore>) -> Self {
        Self {
            rows,
            record: PhantomData,
        }
    }

    /// Create a store backed by a fresh [MemoryRows] that already has the header.
    pub fn in_memory() -> Result<Self, Error> {
        let store = Self::new(Arc::new(MemoryRows::new()));
        store.initialize()?;
        Ok(store)
    }

    /// Create the backing collection with just the header if it does not exist.
    pub fn initialize(&self) -> Result<(), Error> {
        self.rows.initialize(R::HEADER)
    }

    /// Get every record in storage order, each tagged with its position.
    ///
    /// A missing collection is treated as an empty one.
    pub fn list(&self) -> Result<Vec<Positioned<R>>, Error> {
        let Some(table) = self.rows.read()? else {
            return Ok(Vec::new());
        };

        Ok(table
            .rows
            .iter()
            .enumerate()
            .map(|(id, row)| Positioned {
                id,
                record: R::from_row(row),
            })
            .collect())
    }

    /// Get every record in storage order without positions.
    pub fn records(&self) -> Result<Vec<R>, Error> {
        Ok(self
            .list()?
            .into_iter()
            .map(|positioned| positioned.record)
            .collect())
    }

    /// Get the record at position `id`, if there is one.
    pub fn get(&self, id: usize) -> Result<Option<R>, Error> {
        let Some(table) = self.rows.read()? else {
            return Ok(None);
        };

        Ok(table.rows.get(id).map(|row| R::from_row(row)))
    }

    /// Add `record` to the end of the collection.
    pub fn append(&self, record: &R) -> Result<(), Error> {
        self.rows.append(&record.to_row())
    }

    /// Replace the record at position `id` with `record`.
    ///
    /// The collection is only rewritten if `id` refers to an existing row.
    pub fn update(&self, id: usize, record: &R) -> Result<Mutation, Error> {
        let Some(mut table) = self.rows.read()? else {
            return Ok(Mutation::OutOfRange);
        };

        let Some(row) = table.rows.get_mut(id) else {
            return Ok(Mutation::OutOfRange);
        };

        *row = record.to_row();
        self.rows.write(&table)?;

        Ok(Mutation::Applied)
    }

    /// Remove the record at position `id`, later records move up by one.
    ///
    /// The collection is only rewritten if `id` refers to an existing row.
    pub fn delete(&self, id: usize) -> Result<Mutation, Error> {
        let Some(mut table) = self.rows.read()? else {
            return Ok(Mutation::OutOfRange);
        };

        if id >= table.rows.len() {
            return Ok(Mutation::OutOfRange);
        }

        table.rows.remove(id);
        self.rows.write(&table)?;

        Ok(Mutation::Applied)
    }
}
