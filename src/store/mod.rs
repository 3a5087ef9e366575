//! Flat-file storage for expense and income records.
//!
//! Storage is split in two layers:
//! - [RowStore] is the backend seam. It knows about a header row and rows of
//!   text fields, nothing else. [CsvFile] keeps them in a CSV file on disk and
//!   [MemoryRows] keeps them in memory.
//! - [RecordStore] maps rows to typed [Record]s and implements listing,
//!   appending and positional updates and deletes on top of a [RowStore].
//!
//! A record's ID is its zero-based position below the header at the time the
//! collection was read. Every operation reads or rewrites the whole collection.

mod backend;
mod csv_file;
mod memory;
mod records;

pub use backend::{Row, RowStore, Table};
pub use csv_file::CsvFile;
pub use memory::MemoryRows;
pub use records::{Mutation, Positioned, Record, RecordStore};
