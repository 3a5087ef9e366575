//! Defines the endpoint for deleting an expense by position.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    Error, endpoints,
    expense::Expense,
    store::{Mutation, RecordStore},
};

/// A route handler for deleting the expense at position `expense_id`.
///
/// Always redirects to the expenses view, even when there is nothing at that
/// position.
pub async fn delete_expense_endpoint(
    State(expenses): State<RecordStore<Expense>>,
    Path(expense_id): Path<usize>,
) -> Result<Redirect, Error> {
    let outcome = expenses
        .delete(expense_id)
        .inspect_err(|error| tracing::error!("could not delete expense {expense_id}: {error}"))?;

    if outcome == Mutation::OutOfRange {
        tracing::warn!("Tried to delete expense {expense_id}, but it does not exist");
    }

    Ok(Redirect::to(endpoints::EXPENSES_VIEW))
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::Arc};

    use axum::{
        extract::{Path, State},
        response::IntoResponse,
    };
    use tempfile::TempDir;

    use crate::{
        endpoints,
        expense::{Expense, delete_expense_endpoint},
        store::{CsvFile, RecordStore},
        test_utils::assert_redirect,
    };

    fn expense(amount: &str, category: &str) -> Expense {
        Expense {
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: "2024-01-01".to_owned(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn deletes_expense_and_redirects() {
        let store = RecordStore::in_memory().unwrap();
        store.append(&expense("10", "Food")).unwrap();
        store.append(&expense("5", "Transport")).unwrap();
        store.append(&expense("3", "Food")).unwrap();

        let response = delete_expense_endpoint(State(store.clone()), Path(1))
            .await
            .unwrap()
            .into_response();

        assert_redirect(&response, endpoints::EXPENSES_VIEW);
        assert_eq!(
            store.records().unwrap(),
            vec![expense("10", "Food"), expense("3", "Food")]
        );
    }

    #[tokio::test]
    async fn out_of_range_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        let contents = "Amount,Category,Date,Notes\n10,Food,2024-01-01,\n";
        fs::write(&path, contents).unwrap();
        let store = RecordStore::new(Arc::new(CsvFile::new(&path)));

        let response = delete_expense_endpoint(State(store), Path(1))
            .await
            .unwrap()
            .into_response();

        assert_redirect(&response, endpoints::EXPENSES_VIEW);
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[tokio::test]
    async fn missing_file_redirects() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(Arc::new(CsvFile::new(dir.path().join("missing.csv"))));

        let response = delete_expense_endpoint(State(store), Path(0))
            .await
            .unwrap()
            .into_response();

        assert_redirect(&response, endpoints::EXPENSES_VIEW);
    }
}
