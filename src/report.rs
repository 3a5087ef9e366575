//! The report page: a table of the total spent in each category.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    aggregation::{CategoryTotal, group_by_category},
    endpoints,
    expense::Expense,
    html::{
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency,
    },
    navigation::NavBar,
    store::RecordStore,
};

fn report_view(category_totals: &[CategoryTotal]) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORT_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Spending by Category" }

            div class="overflow-x-auto rounded-lg shadow w-full max-w-screen-md"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for total in category_totals {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (total.category) }
                                td class={(TABLE_CELL_STYLE) " text-right"}
                                {
                                    (format_currency(total.total))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Report", &[], &content)
}

/// Display the summed amount per category, in the order each category first appears.
pub async fn get_report_page(
    State(expenses): State<RecordStore<Expense>>,
) -> Result<Response, Error> {
    let expenses = expenses
        .records()
        .inspect_err(|error| tracing::error!("could not read expenses: {error}"))?;
    let category_totals = group_by_category(&expenses)?;

    Ok(report_view(&category_totals).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};

    use crate::{
        expense::Expense,
        report::get_report_page,
        store::RecordStore,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document, table_rows},
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
    async fn shows_total_per_category() {
        let store = RecordStore::in_memory().unwrap();
        store.append(&expense("10", "Food")).unwrap();
        store.append(&expense("5", "Transport")).unwrap();
        store.append(&expense("3", "Food")).unwrap();

        let response = get_report_page(State(store)).await.unwrap();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(
            table_rows(&document),
            vec![vec!["Food", "$13.00"], vec!["Transport", "$5.00"]]
        );
    }

    #[tokio::test]
    async fn empty_report_has_no_rows() {
        let store = RecordStore::in_memory().unwrap();

        let response = get_report_page(State(store)).await.unwrap();

        let document = parse_html_document(response).await;
        assert!(table_rows(&document).is_empty());
    }

    #[tokio::test]
    async fn malformed_amount_renders_error_page() {
        let store = RecordStore::in_memory().unwrap();
        store.append(&expense("abc", "Food")).unwrap();

        let response = get_report_page(State(store)).await.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
