//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    aggregation::{group_by_category, total_amount},
    dashboard::charts::{
        DashboardChart, ECHARTS_SCRIPT, charts_script, charts_view, spending_breakdown_chart,
    },
    endpoints,
    expense::Expense,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, format_currency, link},
    navigation::NavBar,
    store::RecordStore,
};

/// Display the total amount spent and a pie chart of spending per category.
pub async fn get_dashboard_page(
    State(expenses): State<RecordStore<Expense>>,
) -> Result<Response, Error> {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);
    let expenses = expenses
        .records()
        .inspect_err(|error| tracing::error!("could not read expenses: {error}"))?;

    if expenses.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let total_spent = total_amount(&expenses)
        .inspect_err(|error| tracing::error!("could not total expenses: {error}"))?;
    let category_totals = group_by_category(&expenses)
        .inspect_err(|error| tracing::error!("could not group expenses: {error}"))?;

    let charts = [DashboardChart {
        id: "spending-breakdown-chart",
        options: spending_breakdown_chart(&category_totals).to_string(),
    }];

    Ok(dashboard_view(nav_bar, &format_currency(total_spent), &charts).into_response())
}

fn dashboard_view(nav_bar: NavBar, total_spent: &str, charts: &[DashboardChart]) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                div class="mb-8 p-4 rounded-lg shadow-md bg-white dark:bg-gray-800"
                {
                    h2 class="text-sm text-gray-600 dark:text-gray-400" { "Total Spent" }
                    p id="total-spent" class="text-3xl font-bold" { (total_spent) }
                }

                (charts_view(charts))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}

fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold" { "Nothing here yet..." }

            p
            {
                "Charts will show up here once you "
                (link(endpoints::ADD_EXPENSE, "add an expense"))
                "."
            }
        }
    );

    base("Dashboard", &[], &content)
}
