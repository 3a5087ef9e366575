//! Defines the route handler for the page for editing an expense.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    expense::{
        Expense,
        form::{ExpenseFormDefaults, expense_form},
    },
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    store::RecordStore,
};

fn edit_expense_view(expense_id: usize, expense: &Expense) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_EXPENSE).into_html();
    let edit_endpoint = format_endpoint(endpoints::EDIT_EXPENSE, expense_id);
    let form = expense_form(
        "Edit Expense",
        &edit_endpoint,
        "Save Changes",
        &ExpenseFormDefaults {
            amount: &expense.amount,
            category: &expense.category,
            date: &expense.date,
            notes: &expense.notes,
        },
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (form)
        }
    };

    base("Edit Expense", &[dollar_input_styles()], &content)
}

/// Renders the form for editing the expense at position `expense_id`.
///
/// Redirects to the expenses view if there is no expense at that position.
pub async fn get_edit_expense_page(
    State(expenses): State<RecordStore<Expense>>,
    Path(expense_id): Path<usize>,
) -> Result<Response, Error> {
    let expense = expenses
        .get(expense_id)
        .inspect_err(|error| tracing::error!("could not get expense {expense_id}: {error}"))?;

    match expense {
        Some(expense) => Ok(edit_expense_view(expense_id, &expense).into_response()),
        None => {
            tracing::warn!("Tried to edit expense {expense_id}, but it does not exist");
            Ok(Redirect::to(endpoints::EXPENSES_VIEW).into_response())
        }
    }
}
