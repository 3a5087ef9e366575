//! Defines the route handler for the page for adding an expense.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    expense::form::{ExpenseFormDefaults, expense_form},
    html::{FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    timezone::local_today,
};

fn create_expense_view(today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_EXPENSE).into_html();
    let today = today.to_string();
    let form = expense_form(
        "Add Expense",
        endpoints::ADD_EXPENSE,
        "Add Expense",
        &ExpenseFormDefaults {
            amount: "",
            category: "",
            date: &today,
            notes: "",
        },
    );

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            (form)
        }
    };

    base("Add Expense", &[dollar_input_styles()], &content)
}

/// The state needed for the add expense page.
#[derive(Debug, Clone)]
pub struct CreateExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for adding an expense, with the date set to today.
pub async fn get_create_expense_page(
    State(state): State<CreateExpensePageState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    Ok(create_expense_view(today).into_response())
}

#[cfg(test)]
mod view_tests {
    use axum::extract::State;
    use time::OffsetDateTime;

    use crate::{
        endpoints,
        expense::{create_page::CreateExpensePageState, get_create_expense_page},
        test_utils::{
            assert_content_type, assert_form_action, assert_form_input,
            assert_form_input_with_value, assert_form_submit_button, assert_status_ok,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn create_expense_page_returns_form() {
        let state = CreateExpensePageState {
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response = get_create_expense_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_form_action(&form, endpoints::ADD_EXPENSE);
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "category", "text");
        assert_form_input_with_value(
            &form,
            "date",
            "date",
            &OffsetDateTime::now_utc().date().to_string(),
        );
        assert_form_input_with_value(&form, "notes", "text", "");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = CreateExpensePageState {
            local_timezone: "Nowhere/Special".to_owned(),
        };

        let result = get_create_expense_page(State(state)).await;

        assert!(result.is_err());
    }
}
