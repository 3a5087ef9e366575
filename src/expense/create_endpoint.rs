//! Defines the endpoint for adding an expense.

use axum::{
    extract::{FromRef, State},
    response::Redirect,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;

use crate::{
    AppState, Error, endpoints,
    expense::{Expense, ExpenseForm},
    store::RecordStore,
    timezone::local_today,
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The store holding the expenses.
    pub expenses: RecordStore<Expense>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses: state.expenses.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for adding an expense, redirects to the expenses view on success.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, Error> {
    let today = local_today(&state.local_timezone)?;
    let expense = form.into_expense(today);

    state
        .expenses
        .append(&expense)
        .inspect_err(|error| tracing::error!("could not add expense: {error}"))?;

    tracing::debug!("Added expense {expense:?}");

    Ok(Redirect::to(endpoints::EXPENSES_VIEW))
}
