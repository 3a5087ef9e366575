//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    Error,
    expense::Expense,
    income::Income,
    store::{RecordStore, RowStore},
    timezone::get_local_offset,
};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The expense records.
    pub expenses: RecordStore<Expense>,

    /// The income records.
    pub incomes: RecordStore<Income>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to fill in today's date when a form leaves the date empty.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] on top of the given storage backends.
    ///
    /// Both collections are created with just their header if they do not
    /// exist yet.
    ///
    /// # Errors
    /// Returns an error if `local_timezone` is not a valid, canonical timezone
    /// name or if a collection cannot be initialized.
    pub fn new(
        expense_rows: Arc<dyn RowStore>,
        income_rows: Arc<dyn RowStore>,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        let expenses = RecordStore::new(expense_rows);
        expenses.initialize()?;

        let incomes = RecordStore::new(income_rows);
        incomes.initialize()?;

        Ok(Self {
            expenses,
            incomes,
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl FromRef<AppState> for RecordStore<Expense> {
    fn from_ref(state: &AppState) -> Self {
        state.expenses.clone()
    }
}

impl FromRef<AppState> for RecordStore<Income> {
    fn from_ref(state: &AppState) -> Self {
        state.incomes.clone()
    }
}
