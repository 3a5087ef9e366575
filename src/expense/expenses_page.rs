//! Defines the route handler for the page that lists every expense.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    expense::Expense,
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, link,
    },
    navigation::NavBar,
    store::{Positioned, RecordStore},
};

fn expense_row(expense: &Positioned<Expense>) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_EXPENSE, expense.id);
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);
    let Positioned { id, record } = expense;

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (id) }
            td class=(TABLE_CELL_STYLE) { (record.amount) }
            td class=(TABLE_CELL_STYLE) { (record.category) }
            td class=(TABLE_CELL_STYLE) { (record.date) }
            td class=(TABLE_CELL_STYLE) { (record.notes) }
            td class={(TABLE_CELL_STYLE) " space-x-4"}
            {
                a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                a href=(delete_url) class=(BUTTON_DELETE_STYLE) { "Delete" }
            }
        }
    }
}

fn expenses_view(expenses: &[Positioned<Expense>]) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex justify-between w-full max-w-screen-lg mb-4"
            {
                h2 class="text-xl font-bold" { "Expenses" }
                (link(endpoints::ADD_EXPENSE, "Add Expense"))
            }

            @if expenses.is_empty() {
                p
                {
                    "No expenses yet. Start by "
                    (link(endpoints::ADD_EXPENSE, "adding an expense"))
                    "."
                }
            } @else {
                div class="overflow-x-auto rounded-lg shadow w-full max-w-screen-lg"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Notes" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for expense in expenses {
                                (expense_row(expense))
                            }
                        }
                    }
                }
            }
        }
    };

    base("Expenses", &[], &content)
}

/// Display every expense in file order along with its positional ID.
pub async fn get_expenses_page(
    State(expenses): State<RecordStore<Expense>>,
) -> Result<Response, Error> {
    let expenses = expenses
        .list()
        .inspect_err(|error| tracing::error!("could not list expenses: {error}"))?;

    Ok(expenses_view(&expenses).into_response())
}
