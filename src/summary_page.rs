//! The home page, which shows how much has been spent and earned in total.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    aggregation::Summary,
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
};

fn summary_card(id: &str, title: &str, amount: &str) -> Markup {
    html! {
        div class="p-4 rounded-lg shadow-md bg-white dark:bg-gray-800"
        {
            h2 class="text-sm text-gray-600 dark:text-gray-400" { (title) }
            p id=(id) class="text-3xl font-bold" { (amount) }
        }
    }
}

fn summary_view(summary: &Summary) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-screen-lg"
            {
                (summary_card("total-spent", "Total Spent", &format_currency(summary.total_spent)))
                (summary_card("total-earned", "Total Earned", &format_currency(summary.total_earned)))
                (summary_card("balance", "Balance", &format_currency(summary.balance)))
            }
        }
    };

    base("Home", &[], &content)
}

/// Display the total spent, the total earned and the balance.
pub async fn get_summary_page(State(state): State<AppState>) -> Result<Response, Error> {
    let expenses = state
        .expenses
        .records()
        .inspect_err(|error| tracing::error!("could not read expenses: {error}"))?;
    let incomes = state
        .incomes
        .records()
        .inspect_err(|error| tracing::error!("could not read income: {error}"))?;

    let summary = Summary::compute(&expenses, &incomes)?;

    Ok(summary_view(&summary).into_response())
}
