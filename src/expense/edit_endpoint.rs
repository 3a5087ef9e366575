//! Defines the endpoint for updating an expense by position.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use axum_extra::extract::Form;

use crate::{
    Error, endpoints,
    expense::{Expense, ExpenseForm},
    store::{Mutation, RecordStore},
};

/// A route handler for replacing the expense at position `expense_id`.
///
/// The fields are stored as submitted, so clearing the date leaves it empty.
/// Always redirects to the expenses view. If there is no expense at that
/// position nothing is written and the client is not told.
pub async fn edit_expense_endpoint(
    State(expenses): State<RecordStore<Expense>>,
    Path(expense_id): Path<usize>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, Error> {
    let expense = form.into_submitted_expense();

    let outcome = expenses
        .update(expense_id, &expense)
        .inspect_err(|error| tracing::error!("could not update expense {expense_id}: {error}"))?;

    match outcome {
        Mutation::Applied => tracing::debug!("Updated expense {expense_id} to {expense:?}"),
        Mutation::OutOfRange => {
            tracing::warn!("Tried to update expense {expense_id}, but it does not exist")
        }
    }

    Ok(Redirect::to(endpoints::EXPENSES_VIEW))
}
