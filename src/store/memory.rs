//! An in-memory [RowStore] for tests and throwaway sessions.

use std::sync::{Mutex, MutexGuard};

use crate::{
    Error,
    store::backend::{RowStore, Table},
};

/// Rows kept in memory behind a mutex.
///
/// Mirrors the file semantics of [CsvFile](crate::store::CsvFile): appending
/// to a collection that does not exist yet makes that row the header.
#[derive(Debug, Default)]
pub struct MemoryRows {
    table: Mutex<Option<Table>>,
}

impl MemoryRows {
    /// Create an empty store where the collection does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that starts out holding `table`.
    pub fn with_table(table: Table) -> Self {
        Self {
            table: Mutex::new(Some(table)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Table>>, Error> {
        self.table
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLock)
    }
}

impl RowStore for MemoryRows {
    fn initialize(&self, header: &[&str]) -> Result<(), Error> {
        let mut table = self.lock()?;

        if table.is_none() {
            *table = Some(Table {
                header: header.iter().map(|&column| column.to_owned()).collect(),
                rows: Vec::new(),
            });
        }

        Ok(())
    }

    fn read(&self) -> Result<Option<Table>, Error> {
        Ok(self.lock()?.clone())
    }

    fn append(&self, row: &[String]) -> Result<(), Error> {
        let mut table = self.lock()?;

        match table.as_mut() {
            Some(table) => table.rows.push(row.to_vec()),
            None => {
                *table = Some(Table {
                    header: row.to_vec(),
                    rows: Vec::new(),
                })
            }
        }

        Ok(())
    }

    fn write(&self, table: &Table) -> Result<(), Error> {
        *self.lock()? = Some(table.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::store::{MemoryRows, RowStore, Table};

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn starts_empty() {
        assert_eq!(MemoryRows::new().read(), Ok(None));
    }

    #[test]
    fn initialize_does_not_overwrite() {
        let table = Table {
            header: row(&["Amount", "Source", "Date"]),
            rows: vec![row(&["1", "Gift", "2024-01-01"])],
        };
        let store = MemoryRows::with_table(table.clone());

        store.initialize(&["Something", "Else"]).unwrap();

        assert_eq!(store.read(), Ok(Some(table)));
    }

    #[test]
    fn append_without_header_creates_header_row() {
        let store = MemoryRows::new();

        store.append(&row(&["1", "Gift", "2024-01-01"])).unwrap();

        let table = store.read().unwrap().unwrap();
        assert_eq!(table.header, row(&["1", "Gift", "2024-01-01"]));
        assert!(table.rows.is_empty());
    }
}
